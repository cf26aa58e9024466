//! Status Bar (Bottom)
//!
//! Shows the keyboard shortcuts, or how to leave the error state.

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use calc_core::Calculator;

use crate::Message;

const KEYBOARD_HINT: &str = "Keys: 0-9 . + - * / Enter Esc Backspace";
const ERROR_HINT: &str = "Press AC or C to clear";

/// Render the status bar
pub fn view_status_bar(calc: &Calculator) -> Element<'static, Message> {
    let status = if calc.is_error() {
        text(ERROR_HINT).size(10).color([0.6, 0.3, 0.0])
    } else {
        text(KEYBOARD_HINT).size(10)
    };

    row![status, Space::new().width(Length::Fill)]
        .padding(Padding::from([4, 0]))
        .into()
}
