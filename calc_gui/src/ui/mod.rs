//! UI module for Abacus GUI
//!
//! # Layout (top to bottom)
//! - `toolbar` - Title and theme toggle
//! - `display` - Pending expression line and the display field
//! - `keypad` - Button grid, one [`calc_core::Key`] per button
//! - `status_bar` - Keyboard hint / error hint

pub mod display;
pub mod keypad;
pub mod status_bar;
pub mod toolbar;
