//! Durabler Marker-Slot: JSON-Datei neben der Binary.

use super::marker::Marker;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Persistenter Key-Value-Slot für die Marker-Sammlung des Editors.
///
/// Der Slot ist eine einzelne JSON-Datei; geschrieben wird immer die
/// vollständige Sammlung. Konfliktbehandlung über Sessions hinweg gibt es
/// nicht (Last-Write-Wins).
#[derive(Debug, Clone)]
pub struct MarkerSlot {
    path: PathBuf,
}

impl MarkerSlot {
    /// Slot am Standardpfad neben der Binary.
    pub fn at_default_path() -> Self {
        Self {
            path: default_slot_path(),
        }
    }

    /// Slot an einem expliziten Pfad (Tests).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Pfad der Slot-Datei.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Liest die gespeicherte Marker-Sammlung.
    ///
    /// `Ok(None)` wenn noch kein Slot existiert (frische Installation).
    /// Eine korrupte Datei ist ein Fehler und wird nicht stillschweigend
    /// als leer interpretiert.
    pub fn read(&self) -> Result<Option<Vec<Marker>>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Marker-Slot nicht lesbar: {}", self.path.display())
                })
            }
        };

        let markers: Vec<Marker> = serde_json::from_str(&content)
            .with_context(|| format!("Marker-Slot korrupt: {}", self.path.display()))?;

        log::info!(
            "Marker-Slot gelesen: {} Marker aus {}",
            markers.len(),
            self.path.display()
        );
        Ok(Some(markers))
    }

    /// Schreibt die vollständige Marker-Sammlung in den Slot.
    pub fn write(&self, markers: &[Marker]) -> Result<()> {
        let content = serde_json::to_string_pretty(markers)
            .context("Marker-Sammlung nicht serialisierbar")?;
        std::fs::write(&self.path, content).with_context(|| {
            format!("Marker-Slot nicht schreibbar: {}", self.path.display())
        })?;

        log::debug!(
            "Marker-Slot geschrieben: {} Marker nach {}",
            markers.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Ermittelt den Standardpfad der Slot-Datei neben der Binary.
fn default_slot_path() -> PathBuf {
    std::env::current_exe()
        .unwrap_or_else(|_| PathBuf::from("br_spawn_map"))
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("br_spawn_map_markers.json")
}
