//! Keypad
//!
//! Button grid built from [`calc_core::keypad_layout`]. Each button sends a
//! single key. Rows shorter than four buttons share the spare columns
//! evenly, so the bottom row is `0` and `.` at two columns each.

use iced::widget::{button, text, Column, Row};
use iced::{Element, Length, Theme};

use calc_core::Key;

use crate::{App, Message};

/// Buttons per full keypad row
const COLUMNS: usize = 4;

const BUTTON_HEIGHT: f32 = 56.0;

/// Render the keypad grid
pub fn view_keypad(app: &App) -> Element<'_, Message> {
    let highlighted = app.highlighted();

    let rows = app.keypad.iter().map(|keys| {
        let portions = column_portions(keys.len());

        let buttons = keys
            .iter()
            .zip(portions)
            .map(|(key, portion)| view_key(*key, highlighted == Some(*key), portion));

        Element::from(Row::with_children(buttons).spacing(6))
    });

    Column::with_children(rows).spacing(6).into()
}

/// Width of each button in a row of `count`, in keypad columns.
///
/// Full rows get one column per button. Shorter rows split the four columns
/// evenly, with any remainder going to the leading buttons.
fn column_portions(count: usize) -> Vec<u16> {
    if count == 0 {
        return Vec::new();
    }
    let width = COLUMNS.max(count);
    let base = width / count;
    let extra = width % count;
    (0..count)
        .map(|i| (base + usize::from(i < extra)) as u16)
        .collect()
}

fn view_key(key: Key, highlighted: bool, portion: u16) -> Element<'static, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if highlighted {
        button::success
    } else {
        match key {
            Key::Operator(_) | Key::Calculate => button::primary,
            Key::AllClear | Key::ClearEntry => button::danger,
            Key::Digit(_) | Key::Decimal => button::secondary,
        }
    };

    button(text(key.label()).size(20).center())
        .on_press(Message::ButtonPressed(key))
        .width(Length::FillPortion(portion))
        .height(Length::Fixed(BUTTON_HEIGHT))
        .style(style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_row_one_column_each() {
        assert_eq!(column_portions(4), vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_short_rows_split_evenly() {
        assert_eq!(column_portions(2), vec![2, 2]);
        assert_eq!(column_portions(3), vec![2, 1, 1]);
        assert_eq!(column_portions(1), vec![4]);
        assert!(column_portions(0).is_empty());
    }

    #[test]
    fn test_portions_cover_every_row() {
        for row in calc_core::keypad_layout() {
            let portions = column_portions(row.len());
            assert_eq!(portions.len(), row.len());
            assert_eq!(portions.iter().sum::<u16>(), COLUMNS as u16);
        }
    }
}
