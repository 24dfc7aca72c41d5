//! Regex-based tokenizer implementation.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, TextBayesError};

/// Separator pattern of the locale-agnostic word splitter: runs of
/// punctuation used in mail and plain text, or whitespace.
pub const SEPARATOR_PATTERN: &str = r"([.,;:@+&<>?\n(){}/]|\s)+";

/// The compiled separator pattern, shared by every separator tokenizer.
static SEPARATORS: LazyLock<Arc<Regex>> = LazyLock::new(|| {
    Arc::new(Regex::new(SEPARATOR_PATTERN).expect("SEPARATOR_PATTERN is a valid regex"))
});

/// A regex-based tokenizer.
///
/// In match mode every match of the pattern is a token. In gap mode the
/// pattern describes separators and the text between them becomes tokens;
/// pieces that are blank are dropped.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens or separators
    pattern: Arc<Regex>,
    /// Whether to extract gaps (text between matches) instead of matches
    gaps: bool,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern `\w+`.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(RegexTokenizer {
            pattern: Arc::new(Self::compile(pattern)?),
            gaps: false,
        })
    }

    /// Create a tokenizer that extracts gaps (text between matches) instead of matches.
    pub fn with_gaps(pattern: &str) -> Result<Self> {
        Ok(RegexTokenizer {
            pattern: Arc::new(Self::compile(pattern)?),
            gaps: true,
        })
    }

    /// The locale-agnostic splitter: gap mode over [`SEPARATOR_PATTERN`].
    pub fn separators() -> Self {
        RegexTokenizer {
            pattern: Arc::clone(&SEPARATORS),
            gaps: true,
        }
    }

    fn compile(pattern: &str) -> Result<Regex> {
        Regex::new(pattern)
            .map_err(|e| TextBayesError::analysis(format!("Invalid regex pattern: {e}")))
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check if this tokenizer extracts gaps.
    pub fn gaps(&self) -> bool {
        self.gaps
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::separators()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = if self.gaps {
            let mut tokens = Vec::new();
            let mut last_end = 0;
            let push_gap = |start: usize, end: usize, tokens: &mut Vec<Token>| {
                let gap = &text[start..end];
                if !gap.trim().is_empty() {
                    let position = tokens.len();
                    tokens.push(Token::with_offsets(gap, position, start, end));
                }
            };

            for mat in self.pattern.find_iter(text) {
                if mat.start() > last_end {
                    push_gap(last_end, mat.start(), &mut tokens);
                }
                last_end = mat.end();
            }
            if last_end < text.len() {
                push_gap(last_end, text.len(), &mut tokens);
            }

            tokens
        } else {
            self.pattern
                .find_iter(text)
                .enumerate()
                .map(|(position, mat)| {
                    Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
                })
                .collect()
        };

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &RegexTokenizer, text: &str) -> Vec<String> {
        tokenizer
            .tokenize(text)
            .unwrap()
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
    }

    #[test]
    fn test_separator_tokenizer() {
        let tokenizer = RegexTokenizer::separators();
        assert_eq!(
            texts(&tokenizer, "Subject: cheap meds (buy now!)\nvisit www.example.com/offer"),
            vec!["Subject", "cheap", "meds", "buy", "now!", "visit", "www", "example", "com", "offer"]
        );
    }

    #[test]
    fn test_separator_tokenizers_share_one_pattern() {
        let first = RegexTokenizer::separators();
        let second = RegexTokenizer::default();
        assert!(Arc::ptr_eq(&first.pattern, &second.pattern));
        assert_eq!(first.pattern(), SEPARATOR_PATTERN);
        assert!(first.gaps());
        assert_eq!(
            RegexTokenizer::with_gaps(SEPARATOR_PATTERN).unwrap().pattern(),
            first.pattern()
        );
    }

    #[test]
    fn test_separator_tokenizer_drops_blank_pieces() {
        let tokenizer = RegexTokenizer::separators();
        assert!(texts(&tokenizer, "").is_empty());
        assert!(texts(&tokenizer, " ,.;\n ").is_empty());
        assert_eq!(texts(&tokenizer, "  lead and trail  "), vec!["lead", "and", "trail"]);
    }

    #[test]
    fn test_gap_positions_are_contiguous() {
        let tokenizer = RegexTokenizer::separators();
        let tokens: Vec<Token> = tokenizer.tokenize("a, b; c").unwrap().collect();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_invalid_pattern() {
        let result = RegexTokenizer::with_pattern("(unclosed");
        assert!(matches!(result, Err(TextBayesError::Analysis(_))));
    }
}
