//! Hintergrundbild-Loader für die Map-Darstellung.

use anyhow::{Context, Result};
use image::GenericImageView;

/// Dekodiertes Hintergrundbild einer Map.
///
/// Hält RGBA-Pixeldaten CPU-seitig; der Upload als Textur passiert im
/// Render-Host, sobald `background_dirty` gesetzt ist. Ein Ladefehler ist
/// nicht fatal — der Viewport bleibt über einem Platzhalter interaktiv.
#[derive(Debug)]
pub struct MapImage {
    /// RGBA8-Pixel, zeilenweise
    pixels: Vec<u8>,
    /// Breite und Höhe in Pixeln
    size: [usize; 2],
    /// Quelle für Log- und Statusanzeigen
    source_label: String,
}

impl MapImage {
    /// Lädt ein Map-Bild aus einer Datei (PNG/JPEG).
    pub fn load_from_file(path: &str) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("Map-Bild nicht ladbar: {}", path))?;

        let (width, height) = image.dimensions();
        log::info!("Map-Bild geladen: {}x{} Pixel von '{}'", width, height, path);

        Ok(Self {
            pixels: image.to_rgba8().into_raw(),
            size: [width as usize, height as usize],
            source_label: path.to_string(),
        })
    }

    /// RGBA8-Pixeldaten.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Bildgröße [Breite, Höhe] in Pixeln.
    pub fn size(&self) -> [usize; 2] {
        self.size
    }

    /// Quelle des Bildes (Pfad).
    pub fn source_label(&self) -> &str {
        &self.source_label
    }
}
