//! # Abacus GUI Application
//!
//! Desktop calculator built with the Iced framework. The window shows a
//! single display field above a button keypad; buttons and the keyboard both
//! feed [`calc_core::Key`]s into one [`Calculator`].
//!
//! Keyboard: `0`-`9`, `.`, `+ - * /`, `Enter`/`=`, `Escape` (AC),
//! `Backspace`/`c` (C). A key typed on the keyboard briefly highlights its
//! button.

mod ui;

use iced::keyboard::{self, key::Named};
use iced::time::{self, Duration, Instant};
use iced::widget::{column, container, rule, Space};
use iced::{event, window, Element, Event, Length, Subscription, Theme};
use tracing_subscriber::EnvFilter;

use calc_core::{keypad_layout, Calculator, Key};

/// How long a keyboard-activated button stays highlighted
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(100);

/// Tick rate while a highlight is showing
const TICK_INTERVAL: Duration = Duration::from_millis(25);

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    iced::application(App::new, App::update, App::view)
        .title("Abacus")
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size((320.0, 520.0))
        .run()
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A keypad button was clicked
    ButtonPressed(Key),
    /// A mapped key was typed on the keyboard
    KeyboardPressed(Key),
    /// Periodic tick used to expire the key highlight
    Tick(Instant),
    ToggleDarkMode,
}

pub struct App {
    pub calc: Calculator,
    pub keypad: Vec<Vec<Key>>,
    /// Button lit by the last keyboard press, and when it was lit
    pub highlight: Option<(Key, Instant)>,
    pub dark_mode: bool,
}

impl App {
    fn new() -> Self {
        App {
            calc: Calculator::new(),
            keypad: keypad_layout(),
            highlight: None,
            dark_mode: false,
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::ButtonPressed(key) => {
                self.calc.press(key);
            }
            Message::KeyboardPressed(key) => {
                self.calc.press(key);
                self.highlight = Some((key, Instant::now()));
            }
            Message::Tick(now) => {
                if let Some((_, since)) = self.highlight {
                    if now.saturating_duration_since(since) >= HIGHLIGHT_DURATION {
                        self.highlight = None;
                    }
                }
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                tracing::debug!(dark_mode = self.dark_mode, "theme toggled");
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let content = column![
            ui::toolbar::view_header(self.dark_mode),
            Space::new().height(8),
            ui::display::view_display(&self.calc),
            Space::new().height(12),
            ui::keypad::view_keypad(self),
            Space::new().height(8),
            rule::horizontal(1),
            ui::status_bar::view_status_bar(&self.calc),
        ];

        container(content)
            .padding(12)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let keyboard = event::listen_with(handle_event);

        if self.highlight.is_some() {
            Subscription::batch([keyboard, time::every(TICK_INTERVAL).map(Message::Tick)])
        } else {
            keyboard
        }
    }

    /// Key currently highlighted by keyboard feedback
    pub fn highlighted(&self) -> Option<Key> {
        self.highlight.map(|(key, _)| key)
    }
}

/// Turn window events into calculator keys; unmapped keys are dropped.
fn handle_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }

    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { modified_key, .. }) => {
            key_name(&modified_key)
                .and_then(Key::from_keyboard)
                .map(Message::KeyboardPressed)
        }
        _ => None,
    }
}

/// Name of a keyboard key in the form [`Key::from_keyboard`] expects.
fn key_name(key: &keyboard::Key) -> Option<&str> {
    match key.as_ref() {
        keyboard::Key::Named(Named::Enter) => Some("Enter"),
        keyboard::Key::Named(Named::Escape) => Some("Escape"),
        keyboard::Key::Named(Named::Backspace) => Some("Backspace"),
        keyboard::Key::Character(c) => Some(c),
        _ => None,
    }
}
