//! UI components.

pub mod quote_screen;
