use std::io;

use thiserror::Error;

/// Defects in a word bank. These are configuration errors: they are reported
/// once at start up and the game refuses to run with a broken bank.
#[derive(Debug, Error)]
pub enum WordBankError {
    #[error("The category '{0}' does not exist in the word bank.")]
    UnknownCategory(String),
    #[error("The category '{0}' has no words.")]
    EmptyWordList(String),
    #[error("The word bank has no categories.")]
    NoCategories,
    #[error("The category '{0}' is defined more than once.")]
    DuplicateCategory(String),
    #[error("Invalid word '{word}' in category '{category}'. Words must contain only letters.")]
    InvalidWord { category: String, word: String },
    #[error("Malformed word bank line {line}: '{content}'. Expected 'category: WORD WORD ...'.")]
    MalformedLine { line: usize, content: String },
    #[error("Failed to read word bank: {0}")]
    Io(#[from] io::Error),
}

impl WordBankError {
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            WordBankError::MalformedLine { .. } | WordBankError::InvalidWord { .. }
        )
    }
}
