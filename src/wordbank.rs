use crate::error::WordBankError;
use crate::info_log;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// A named group of candidate words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub words: Vec<String>,
}

/// Read-only mapping from category name to its ordered word list.
///
/// A `WordBank` can only be built through [`WordBank::new`] (or the loaders
/// below), which guarantees at least one category and no empty word lists.
#[derive(Debug, Clone)]
pub struct WordBank {
    categories: Vec<Category>,
}

impl WordBank {
    pub fn new(categories: Vec<Category>) -> Result<Self, WordBankError> {
        if categories.is_empty() {
            return Err(WordBankError::NoCategories);
        }

        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(categories.len());
        for category in categories {
            if !seen.insert(category.name.clone()) {
                return Err(WordBankError::DuplicateCategory(category.name));
            }
            if category.words.is_empty() {
                return Err(WordBankError::EmptyWordList(category.name));
            }
            let mut words = Vec::with_capacity(category.words.len());
            for word in &category.words {
                let word = word.trim().to_uppercase();
                if !is_valid_word(&word) {
                    return Err(WordBankError::InvalidWord {
                        category: category.name,
                        word,
                    });
                }
                if words.contains(&word) {
                    log::warn!("Duplicate word '{}' in category '{}'", word, category.name);
                }
                words.push(word);
            }
            normalized.push(Category {
                name: category.name,
                words,
            });
        }

        Ok(Self {
            categories: normalized,
        })
    }

    /// The built-in bank shipped with the game.
    pub fn embedded() -> Result<Self, WordBankError> {
        load_wordbank_from_str(EMBEDDED_WORDBANK)
    }

    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn words(&self, category: &str) -> Result<&[String], WordBankError> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.words.as_slice())
            .ok_or_else(|| WordBankError::UnknownCategory(category.to_string()))
    }

    pub(crate) fn category_at(&self, index: usize) -> &Category {
        &self.categories[index]
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.categories.iter().map(|c| c.words.len()).sum()
    }
}

fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Parse a word bank from text: one `name: WORD WORD ...` line per category.
/// Words may be separated by whitespace or commas. Blank lines and lines
/// starting with `#` are skipped.
pub fn load_wordbank_from_str(data: &str) -> Result<WordBank, WordBankError> {
    let mut categories = Vec::new();
    for (index, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((name, words)) = line.split_once(':') else {
            return Err(WordBankError::MalformedLine {
                line: index + 1,
                content: line.to_string(),
            });
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(WordBankError::MalformedLine {
                line: index + 1,
                content: line.to_string(),
            });
        }
        let words = words
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        categories.push(Category {
            name: name.to_lowercase(),
            words,
        });
    }

    let bank = WordBank::new(categories)?;
    info_log!(
        "Loaded word bank: {} categories, {} words",
        bank.len(),
        bank.word_count()
    );
    Ok(bank)
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<WordBank, WordBankError> {
    let data = fs::read_to_string(path)?;
    load_wordbank_from_str(&data)
}
