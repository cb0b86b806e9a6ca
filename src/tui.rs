//! TUI (Terminal User Interface) module for Spotlight Words
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Modes
//! The instructions line and key handling follow the snapshot:
//! - `Guessing`: letters type into the guess, ENTER submits, TAB asks for a hint
//! - `RoundWon`: the completed word is shown for the configured delay
//! - `GameOver`: N starts a new game

use crate::cli::capitalize;
use crate::game::{MAX_ROUNDS, MaskedLetter, MessageKind, Snapshot};
use crate::game_state::{GameInterface, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::{Duration, Instant};

const MAX_INPUT_LENGTH: usize = 24;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const LIFE_GLYPH: &str = "♥ ";
const HINT_GLYPH: &str = "✦ ";

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow);
const REVEALED_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Yellow)
    .add_modifier(Modifier::BOLD);
const HIDDEN_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Guessing,
    RoundWon,
    GameOver,
}

impl Mode {
    fn from_snapshot(snapshot: &Snapshot) -> Self {
        if snapshot.game_over {
            Self::GameOver
        } else if snapshot.awaiting_advance {
            Self::RoundWon
        } else {
            Self::Guessing
        }
    }
}

fn message_style(kind: MessageKind) -> Style {
    match kind {
        MessageKind::Info => INFO_STYLE,
        MessageKind::Success => SUCCESS_STYLE,
        MessageKind::Error => ERROR_STYLE,
    }
}

fn tile_spans(masked: &[MaskedLetter]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(masked.len() * 2);
    for letter in masked {
        let (text, style) = match letter.letter {
            Some(c) => (format!(" {c} "), REVEALED_STYLE),
            None => (" ? ".to_string(), HIDDEN_STYLE),
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }
    spans
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    snapshot: Option<&'a Snapshot>,
    input: &'a str,
    mode: Mode,
}

/// Main TUI interface component.
///
/// Owns the terminal while alive and restores it on drop.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    snapshot: Option<Snapshot>,
    input: String,
    mode: Mode,
    delay: Duration,
}

impl TuiInterface {
    pub fn new(delay: Duration) -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            snapshot: None,
            input: String::new(),
            mode: Mode::Guessing,
            delay,
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            snapshot: self.snapshot.as_ref(),
            input: &self.input,
            mode: self.mode,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(5), // Word
                Constraint::Length(4), // Stats
                Constraint::Min(3),    // Message
                Constraint::Length(3), // Guess input
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        if let Some(snapshot) = ctx.snapshot {
            Self::render_word(f, chunks[1], snapshot);
            Self::render_stats(f, chunks[2], snapshot);
            Self::render_message(f, chunks[3], snapshot);
        }
        Self::render_input(f, chunks[4], ctx.input, ctx.mode);
        Self::render_instructions(f, chunks[5], ctx.mode);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("SPOTLIGHT WORDS")
            .style(HEADER_STYLE)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_word(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
        let lines = vec![
            Line::from(""),
            Line::from(tile_spans(&snapshot.masked)),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(format!("Category: {}", capitalize(&snapshot.category)))
                .borders(Borders::ALL),
        );
        f.render_widget(paragraph, area);
    }

    fn render_stats(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
        let lines = vec![
            Line::from(vec![
                Span::styled("Score: ", HEADER_STYLE),
                Span::raw(snapshot.score.to_string()),
                Span::raw("    "),
                Span::styled("Round: ", HEADER_STYLE),
                Span::raw(format!("{}/{}", snapshot.round.min(MAX_ROUNDS), MAX_ROUNDS)),
            ]),
            Line::from(vec![
                Span::styled("Lives: ", HEADER_STYLE),
                Span::styled(LIFE_GLYPH.repeat(snapshot.lives as usize), ERROR_STYLE),
                Span::raw("    "),
                Span::styled("Hints: ", HEADER_STYLE),
                Span::styled(HINT_GLYPH.repeat(snapshot.hints as usize), INFO_STYLE),
            ]),
        ];
        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Stats").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_message(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            snapshot.message.as_str(),
            message_style(snapshot.message_kind),
        )))
        .block(Block::default().title("Message").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_input(f: &mut Frame, area: Rect, input: &str, mode: Mode) {
        let text = match mode {
            Mode::Guessing => format!("> {input}_"),
            Mode::RoundWon | Mode::GameOver => String::new(),
        };
        let paragraph =
            Paragraph::new(text).block(Block::default().title("Guess").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, mode: Mode) {
        let text = match mode {
            Mode::Guessing => "Type your guess | ENTER: Submit | TAB: Hint | F2: New Game | ESC: Quit",
            Mode::RoundWon => "Get ready for the next word...",
            Mode::GameOver => "N: New Game | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                debug_log!(
                    "handle_input() - Key event: code={:?}, modifiers={:?}",
                    key.code,
                    key.modifiers
                );
                let mode = self.mode;
                Ok(match mode {
                    Mode::Guessing => self.handle_guess_input(key),
                    Mode::GameOver => Self::handle_game_over_input(key),
                    Mode::RoundWon => None,
                })
            }
            Event::Resize(_, _) => {
                self.draw_or_log();
                Ok(None)
            }
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => Some(UserAction::Exit),
            KeyCode::F(2) => Some(UserAction::NewGame),
            KeyCode::Char('n' | 'N') if has_ctrl => Some(UserAction::NewGame),
            KeyCode::Tab => Some(UserAction::Hint),
            KeyCode::Enter => {
                let guess = std::mem::take(&mut self.input);
                info_log!("handle_guess_input() - Submitting guess '{}'", guess);
                Some(UserAction::Guess(guess))
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.draw_or_log();
                None
            }
            KeyCode::Char(c)
                if c.is_ascii_alphabetic()
                    && !has_ctrl
                    && !key.modifiers.contains(KeyModifiers::ALT)
                    && self.input.len() < MAX_INPUT_LENGTH =>
            {
                self.input.push(c.to_ascii_uppercase());
                self.draw_or_log();
                None
            }
            _ => None,
        }
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') | KeyCode::F(2) => Some(UserAction::NewGame),
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }
}

impl GameInterface for TuiInterface {
    fn render(&mut self, snapshot: &Snapshot) {
        self.mode = Mode::from_snapshot(snapshot);
        self.snapshot = Some(snapshot.clone());
        if self.mode != Mode::Guessing {
            self.input.clear();
        }
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        match self.handle_input() {
            Ok(action) => action,
            Err(e) => {
                debug_log!("read_action() - Input error: {}", e);
                Some(UserAction::Exit)
            }
        }
    }

    fn present_round_won(&mut self, snapshot: &Snapshot) {
        self.render(snapshot);
        let deadline = Instant::now() + self.delay;
        // Swallow key presses while the completed word is on screen.
        while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
            match event::poll(remaining) {
                Ok(true) => {
                    if let Err(e) = event::read() {
                        debug_log!("present_round_won() - Input error: {}", e);
                        break;
                    }
                }
                Ok(false) => break,
                Err(e) => {
                    debug_log!("present_round_won() - Poll error: {}", e);
                    break;
                }
            }
        }
    }

    fn display_exit_message(&mut self) {
        info_log!("TuiInterface - exiting");
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
