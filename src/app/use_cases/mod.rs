//! Use-Case-Funktionen: die eigentliche Mutationslogik auf dem AppState.

pub mod camera;
pub mod editing;
pub mod export;
pub mod persistence;
pub mod session;
pub mod viewport;
