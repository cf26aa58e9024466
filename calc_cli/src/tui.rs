//! Interactive keypad
//!
//! Draws the display and keypad with Ratatui and feeds crossterm key events
//! to the engine. The key that was just pressed is highlighted briefly.

use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::{DefaultTerminal, Frame};

use calc_core::{keypad_layout, Calculator, Key};

/// How long a pressed key stays highlighted
const HIGHLIGHT_DURATION: Duration = Duration::from_millis(100);

/// Event poll interval; bounds how late a highlight is cleared
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// What a terminal key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Press(Key),
    Quit,
    Ignore,
}

struct App {
    calc: Calculator,
    keypad: Vec<Vec<Key>>,
    highlight: Option<(Key, Instant)>,
}

impl App {
    fn new() -> Self {
        App {
            calc: Calculator::new(),
            keypad: keypad_layout(),
            highlight: None,
        }
    }

    fn press(&mut self, key: Key) {
        self.calc.press(key);
        self.highlight = Some((key, Instant::now()));
    }

    fn expire_highlight(&mut self) {
        if let Some((_, since)) = self.highlight {
            if since.elapsed() >= HIGHLIGHT_DURATION {
                self.highlight = None;
            }
        }
    }

    fn highlighted(&self) -> Option<Key> {
        self.highlight.map(|(key, _)| key)
    }
}

/// Run the keypad until the user quits.
pub fn run() -> anyhow::Result<()> {
    let mut terminal = ratatui::try_init().context("cannot initialize terminal")?;
    let result = event_loop(&mut terminal);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
    let mut app = App::new();
    tracing::info!("keypad started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;

        if !event::poll(POLL_INTERVAL)? {
            app.expire_highlight();
            continue;
        }

        if let Event::Key(key_event) = event::read()? {
            match map_key_event(key_event) {
                Action::Press(key) => app.press(key),
                Action::Quit => break,
                Action::Ignore => {}
            }
        }
        app.expire_highlight();
    }

    tracing::info!("keypad closed");
    Ok(())
}

/// Translate a crossterm key event into a calculator action.
fn map_key_event(event: KeyEvent) -> Action {
    if event.kind != KeyEventKind::Press {
        return Action::Ignore;
    }

    match event.code {
        // Checked before the mapping: plain `c` is clear-entry
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        KeyCode::Char(c) => Key::from_char(c).map_or(Action::Ignore, Action::Press),
        KeyCode::Enter => press_named("Enter"),
        KeyCode::Esc => press_named("Escape"),
        KeyCode::Backspace => press_named("Backspace"),
        _ => Action::Ignore,
    }
}

fn press_named(name: &str) -> Action {
    Key::from_keyboard(name).map_or(Action::Ignore, Action::Press)
}

fn draw(frame: &mut Frame, app: &App) {
    let [display_area, keypad_area, help_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(7),
        Constraint::Length(1),
    ])
    .areas(centered(frame.area(), 30));

    draw_display(frame, display_area, &app.calc);
    draw_keypad(frame, keypad_area, app);

    let help = Line::from("q quit · Esc AC · Backspace/c C").dim().centered();
    frame.render_widget(help, help_area);
}

fn draw_display(frame: &mut Frame, area: Rect, calc: &Calculator) {
    let value_style = if calc.is_error() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(calc.expression()).dim().right_aligned(),
        Line::from(Span::styled(calc.display().to_string(), value_style)).right_aligned(),
    ];

    let display = Paragraph::new(lines).block(Block::bordered().title(" Abacus "));
    frame.render_widget(display, area);
}

fn draw_keypad(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .keypad
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|key| key_span(*key, app.highlighted() == Some(*key)))
                .collect();
            Line::from(spans)
        })
        .collect();

    let keypad = Paragraph::new(lines).block(Block::bordered());
    frame.render_widget(keypad, area);
}

fn key_span(key: Key, highlighted: bool) -> Span<'static> {
    let base = match key {
        Key::Operator(_) | Key::Calculate => Style::default().fg(Color::Cyan),
        Key::AllClear | Key::ClearEntry => Style::default().fg(Color::Yellow),
        _ => Style::default(),
    };
    let style = if highlighted {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    };
    Span::styled(format!(" {:^4} ", key.label()), style)
}

/// A horizontally centered column `width` cells wide.
fn centered(area: Rect, width: u16) -> Rect {
    let [_, middle, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(area);
    middle
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::Operator;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_character_keys_map_to_tokens() {
        assert_eq!(
            map_key_event(press(KeyCode::Char('/'))),
            Action::Press(Key::Operator(Operator::Divide))
        );
        assert_eq!(map_key_event(press(KeyCode::Char('.'))), Action::Press(Key::Decimal));
        assert_eq!(map_key_event(press(KeyCode::Char('c'))), Action::Press(Key::ClearEntry));
        assert_eq!(map_key_event(press(KeyCode::Char('x'))), Action::Ignore);
    }

    #[test]
    fn test_named_keys_map_to_tokens() {
        assert_eq!(map_key_event(press(KeyCode::Enter)), Action::Press(Key::Calculate));
        assert_eq!(map_key_event(press(KeyCode::Esc)), Action::Press(Key::AllClear));
        assert_eq!(map_key_event(press(KeyCode::Backspace)), Action::Press(Key::ClearEntry));
        assert_eq!(map_key_event(press(KeyCode::Tab)), Action::Ignore);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key_event(press(KeyCode::Char('q'))), Action::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key_event(ctrl_c), Action::Quit);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut event = press(KeyCode::Char('5'));
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key_event(event), Action::Ignore);
    }

    #[test]
    fn test_highlight_expires() {
        let mut app = App::new();
        app.press(Key::Calculate);
        assert_eq!(app.highlighted(), Some(Key::Calculate));
        app.highlight = Some((Key::Calculate, Instant::now() - HIGHLIGHT_DURATION));
        app.expire_highlight();
        assert_eq!(app.highlighted(), None);
    }

    #[test]
    fn test_keypad_drives_engine() {
        let mut app = App::new();
        for c in "7*6=".chars() {
            if let Action::Press(key) = map_key_event(press(KeyCode::Char(c))) {
                app.press(key);
            }
        }
        assert_eq!(app.calc.display(), "42");
    }
}
