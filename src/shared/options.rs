//! Zentrale Konfiguration für den Spawn-Karten-Viewer/-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Maximaler Zoom-Faktor (Screen-Pixel pro Bild-Pixel).
pub const CAMERA_ZOOM_MAX: f32 = 4.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Pin-Geometrie (Screen-Pixel, zoom-unabhängig) ───────────────────

/// Pin-Breite in Screen-Pixeln bei Skalierung 1.0.
pub const PIN_WIDTH_PX: f32 = 24.0;
/// Pin-Höhe in Screen-Pixeln bei Skalierung 1.0 (Spitze bis Kopf-Oberkante).
pub const PIN_HEIGHT_PX: f32 = 32.0;
/// Radius des Pin-Kopfs in Screen-Pixeln bei Skalierung 1.0.
pub const PIN_HEAD_RADIUS_PX: f32 = 10.0;
/// Abstand Pin-Spitze → Kopf-Zentrum in Screen-Pixeln bei Skalierung 1.0.
pub const PIN_HEAD_OFFSET_PX: f32 = 20.0;

// ── Hintergrund ─────────────────────────────────────────────────────

/// Standard-Deckungs-Niveau des Map-Hintergrundbilds.
pub const BACKGROUND_OPACITY_DEFAULT: f32 = 1.0;

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `br_spawn_map.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Marker ──────────────────────────────────────────────────
    /// Skalierungsfaktor der Pin-Icons (1.0 = Standardgröße)
    pub marker_scale: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,

    // ── Hintergrund ─────────────────────────────────────────────
    /// Deckungs-Niveau des Hintergrundbilds (0.0 = transparent, 1.0 = opak)
    pub background_opacity: f32,
    /// Kilometer-Raster über der Map einblenden
    #[serde(default)]
    pub show_grid: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            marker_scale: 1.0,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
            background_opacity: BACKGROUND_OPACITY_DEFAULT,
            show_grid: false,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("br_spawn_map"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("br_spawn_map.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let opts = EditorOptions::default();
        assert_eq!(opts.camera_zoom_max, CAMERA_ZOOM_MAX);
        assert_eq!(opts.camera_zoom_step, CAMERA_ZOOM_STEP);
        assert_eq!(opts.marker_scale, 1.0);
        assert!(!opts.show_grid);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut opts = EditorOptions::default();
        opts.marker_scale = 1.5;
        opts.show_grid = true;

        let toml_str = toml::to_string_pretty(&opts).expect("Serialisierung erwartet");
        let back: EditorOptions = toml::from_str(&toml_str).expect("Deserialisierung erwartet");

        assert_eq!(back, opts);
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let opts =
            EditorOptions::load_from_file(std::path::Path::new("nicht_vorhanden_options.toml"));
        assert_eq!(opts, EditorOptions::default());
    }
}
