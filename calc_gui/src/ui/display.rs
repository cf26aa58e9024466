//! Display field
//!
//! Right-aligned text field with the pending expression (e.g. `12 ×`) in
//! small type above the current value. The value is rendered verbatim from
//! [`Calculator::display`].

use iced::alignment::Horizontal;
use iced::widget::{column, container, text};
use iced::{Element, Length};

use calc_core::Calculator;

use crate::Message;

/// Render the display
pub fn view_display(calc: &Calculator) -> Element<'_, Message> {
    let value = if calc.is_error() {
        text(calc.display()).size(40).color([0.8, 0.2, 0.2])
    } else {
        text(calc.display()).size(40)
    };

    let content = column![
        text(calc.expression()).size(14).color([0.5, 0.5, 0.5]),
        value,
    ]
    .spacing(4)
    .align_x(Horizontal::Right)
    .width(Length::Fill);

    container(content)
        .padding(10)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}
