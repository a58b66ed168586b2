//! UI-Komponenten: Menü, Toolbar, Sidebar, Input-Handling, Dialoge.

pub mod dialogs;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menü, Panels, Dialoge).
/// Keyboard-Shortcuts und Viewport-Input sind in eigene Dateien extrahiert.
pub mod menu;
pub mod sidebar;
pub mod status;
pub mod toolbar;

pub use dialogs::{handle_file_dialogs, show_clear_map_dialog, show_options_dialog};
pub use input::InputState;
pub use menu::render_menu;
pub use sidebar::render_sidebar;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
