//! Lossless word/whitespace tokenization for short-form text.

use serde::{Deserialize, Serialize};

/// Character class used to group characters into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    /// Whitespace characters
    Whitespace,
    /// Alphanumeric characters (word characters)
    WordChar,
    /// Punctuation and symbols
    Punctuation,
}

fn char_class(ch: char) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Whitespace
    } else if ch.is_alphanumeric() || ch == '_' {
        CharClass::WordChar
    } else {
        CharClass::Punctuation
    }
}

/// Atomic unit of the diff: a run of word characters, a run of whitespace,
/// or a single punctuation character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The exact slice of the source text this token covers
    pub text: String,
    /// Whether this token is a whitespace run
    pub is_whitespace: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, is_whitespace: bool) -> Self {
        Self {
            text: text.into(),
            is_whitespace,
        }
    }

    /// True for tokens the diff cleanup may fold into a neighboring edit:
    /// a whitespace run or a lone punctuation character.
    pub(crate) fn is_trivial(&self) -> bool {
        self.is_whitespace || self.text.chars().all(|ch| char_class(ch) == CharClass::Punctuation)
    }
}

/// Split `input` into an ordered token list.
///
/// Consecutive word characters form one token, consecutive whitespace forms
/// one token, and each punctuation character stands alone. Concatenating the
/// `text` of every token reproduces `input` exactly, for any input.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut current_class: Option<CharClass> = None;

    for ch in input.chars() {
        let class = char_class(ch);
        let breaks_run = match current_class {
            // Punctuation never accumulates into a run
            Some(prev) => prev != class || class == CharClass::Punctuation,
            None => false,
        };
        if breaks_run {
            tokens.push(Token::new(
                std::mem::take(&mut current),
                current_class == Some(CharClass::Whitespace),
            ));
        }
        current.push(ch);
        current_class = Some(class);
    }

    if !current.is_empty() {
        tokens.push(Token::new(current, current_class == Some(CharClass::Whitespace)));
    }

    tokens
}

/// Concatenate the text of a token slice back into a string.
pub fn concat(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trips(input: &str) {
        assert_eq!(concat(&tokenize(input)), input);
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_words_and_spaces_alternate() {
        let tokens = tokenize("I love cats");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["I", " ", "love", " ", "cats"]);
        assert!(tokens[1].is_whitespace);
        assert!(!tokens[2].is_whitespace);
    }

    #[test]
    fn test_whitespace_runs_group() {
        let tokens = tokenize("a  \t b");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "  \t ", "b"]);
    }

    #[test]
    fn test_punctuation_stands_alone() {
        let tokens = tokenize("wow!!");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["wow", "!", "!"]);
    }

    #[test]
    fn test_round_trip_assorted_inputs() {
        round_trips("");
        round_trips("   ");
        round_trips("hello world");
        round_trips("multi\nline\ttext");
        round_trips("émojis 🎉 and ünïcode!");
        round_trips("@user check https://example.com, it's #1");
    }

    #[test]
    fn test_trivial_tokens() {
        assert!(Token::new(" ", true).is_trivial());
        assert!(Token::new(",", false).is_trivial());
        assert!(!Token::new("cats", false).is_trivial());
    }
}
