//! BR Spawn Map Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppMode, AppState, UiState, ViewState};
pub use core::{
    Camera2D, FilterState, MapDescriptor, MapId, Marker, MarkerCategory, MarkerIcon, MarkerSlot,
    MarkerStore, MAP_EXTENT,
};
pub use shared::{EditorOptions, RenderScene};
