//! Client-side render state.
//!
//! DESIGN
//! ======
//! `ScreenState` is a plain struct owned by the controller. The component
//! mirrors it into a single `RwSignal` so every view closure reads one
//! consistent snapshot.

pub mod screen;

pub use screen::{ScreenState, Viewport, font_size_px};
