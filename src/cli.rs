use crate::debug_log;
use crate::game::{MAX_ROUNDS, MaskedLetter, MessageKind, Snapshot};
use crate::game_state::{GameInterface, UserAction};
use clap::Parser;
use std::io::BufRead;
use std::thread;
use std::time::Duration;

pub const DEFAULT_DELAY_MS: u64 = 2000;
const LIFE_GLYPH: &str = "♥";
const HINT_GLYPH: &str = "*";
const HIDDEN_GLYPH: char = '?';

/// Spotlight Words options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a word bank file (`category: WORD WORD ...` per line)
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Seed for the random word and hint picks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use the line-based interface instead of the full-screen one
    #[arg(long)]
    pub plain: bool,

    /// How long a guessed word stays on screen before the next round, in milliseconds
    #[arg(long = "delay-ms", default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Write log output to this file
    #[arg(long = "log-file")]
    pub log_file: Option<String>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map one line of input to an action. Anything that is not a command is a
/// guess, including blank lines (the game answers those with a prompt).
pub fn parse_action(input: &str) -> UserAction {
    let trimmed = input.trim();
    match trimmed.to_uppercase().as_str() {
        "EXIT" | "QUIT" => UserAction::Exit,
        "HINT" | "?" => UserAction::Hint,
        "NEW" => UserAction::NewGame,
        _ => UserAction::Guess(trimmed.to_string()),
    }
}

pub fn format_masked_word(masked: &[MaskedLetter]) -> String {
    masked
        .iter()
        .map(|l| l.letter.unwrap_or(HIDDEN_GLYPH).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_glyphs(count: u32, glyph: &str) -> String {
    glyph.repeat(count as usize)
}

pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn message_prefix(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "",
        MessageKind::Success => "[+] ",
        MessageKind::Error => "[!] ",
    }
}

pub fn display_snapshot(snapshot: &Snapshot) {
    println!();
    println!("Category: {}", capitalize(&snapshot.category));
    println!("    {}", format_masked_word(&snapshot.masked));
    println!(
        "Score: {} | Round: {}/{} | Lives: {} | Hints: {}",
        snapshot.score,
        snapshot.round.min(MAX_ROUNDS),
        MAX_ROUNDS,
        format_glyphs(snapshot.lives, LIFE_GLYPH),
        format_glyphs(snapshot.hints, HINT_GLYPH),
    );
    if !snapshot.message.is_empty() {
        println!(
            "{}{}",
            message_prefix(snapshot.message_kind),
            snapshot.message
        );
    }
}

pub fn display_exit_message() {
    println!("Thanks for playing!");
}

/// Line-oriented front end over any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
    delay: Duration,
    game_over: bool,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R, delay: Duration) -> Self {
        Self {
            reader,
            delay,
            game_over: false,
        }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn render(&mut self, snapshot: &Snapshot) {
        self.game_over = snapshot.game_over;
        display_snapshot(snapshot);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        if self.game_over {
            println!("\nType 'new' to play again or 'exit' to quit:");
        } else {
            println!("\nEnter your guess ('hint' for a letter, 'new' to restart, 'exit' to quit):");
        }
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => Some(UserAction::Exit),
            Ok(_) => Some(parse_action(&input)),
            Err(e) => {
                debug_log!("read_action() - Failed to read input: {}", e);
                Some(UserAction::Exit)
            }
        }
    }

    fn present_round_won(&mut self, snapshot: &Snapshot) {
        println!("The word was {}.", format_masked_word(&snapshot.masked).replace(' ', ""));
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
