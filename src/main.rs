//! BR Spawn Map.
//!
//! Interaktiver Spawn-Karten-Viewer und -Editor für Battle-Royale-Maps
//! mit egui. Viewer-Modus zeigt den gebündelten Datensatz, Editor-Modus
//! persistiert manuell gesetzte Marker in einen lokalen Slot.

use br_spawn_map::app::use_cases;
use br_spawn_map::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("BR Spawn Map v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("BR Spawn Map"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "BR Spawn Map",
            options,
            Box::new(|_cc| Ok(Box::new(SpawnMapApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SpawnMapApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    /// GPU-Textur des aktiven Map-Hintergrunds
    background_texture: Option<egui::TextureHandle>,
}

impl SpawnMapApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        // Initialen Bestand und Hintergrund der Start-Map laden
        use_cases::session::populate_markers(&mut state);
        use_cases::session::load_map_image(&mut state);

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
            background_texture: None,
        }
    }
}

impl eframe::App for SpawnMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.sync_background_texture(ctx);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl SpawnMapApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_sidebar(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_clear_map_dialog(ctx, &self.state.ui.clear_dialog));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    &self.state.session,
                    &self.state.options,
                ));

                let scene = self
                    .controller
                    .build_render_scene(&self.state, viewport_size);

                render::draw_scene(
                    ui.painter(),
                    rect.min,
                    &scene,
                    self.background_texture.as_ref(),
                );
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Lädt das Hintergrundbild bei Bedarf als Textur hoch.
    fn sync_background_texture(&mut self, ctx: &egui::Context) {
        if !self.state.view.background_dirty {
            return;
        }
        self.state.view.background_dirty = false;

        match self.state.view.map_image.as_deref() {
            Some(image) => {
                let color_image =
                    egui::ColorImage::from_rgba_unmultiplied(image.size(), image.pixels());
                self.background_texture = Some(ctx.load_texture(
                    "map_background",
                    color_image,
                    egui::TextureOptions::LINEAR,
                ));
                log::info!("Map-Hintergrund als Textur hochgeladen");
            }
            None => {
                self.background_texture = None;
                log::info!("Map-Hintergrund entfernt, Platzhalter aktiv");
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.ui.clear_dialog.visible
            || self.state.ui.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
