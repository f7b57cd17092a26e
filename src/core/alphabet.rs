//! # Alphabet
//!
//! The ordered set of symbols the jump strip cycles through. Symbols are
//! stored in their canonical (uppercase) form; index lookups always use the
//! canonical form, display casing is the navigator's business.

use log::warn;

/// The 26 Latin letters used for `en` / `gb`.
pub const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Alphabet for a language tag. Unknown tags fall back to Latin.
    pub fn for_language(language: &str) -> Self {
        match language {
            "en" | "gb" => Self::latin(),
            other => {
                warn!("No alphabet for language '{}', falling back to Latin", other);
                Self::latin()
            }
        }
    }

    pub fn latin() -> Self {
        Self {
            symbols: LATIN.chars().collect(),
        }
    }

    /// Builds a custom alphabet. Whitespace is ignored, symbols are
    /// uppercased, and duplicates after the first are dropped.
    /// Returns `None` if nothing is left.
    pub fn from_symbols(symbols: &str) -> Option<Self> {
        let mut out: Vec<char> = Vec::new();
        for c in symbols.chars().filter(|c| !c.is_whitespace()) {
            let c = canonical(c);
            if !out.contains(&c) {
                out.push(c);
            }
        }
        if out.is_empty() {
            None
        } else {
            Some(Self { symbols: out })
        }
    }

    pub fn ordered(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Last symbol in iteration order; the index builder stops once its
    /// cursor passes this.
    pub fn last(&self) -> char {
        self.symbols[self.symbols.len() - 1]
    }

    pub fn successor(&self, index: usize) -> usize {
        (index + 1) % self.len()
    }

    pub fn predecessor(&self, index: usize) -> usize {
        (index + self.len() - 1) % self.len()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::latin()
    }
}

/// Canonical (index) form of a character: its first uppercase mapping.
pub fn canonical(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}
