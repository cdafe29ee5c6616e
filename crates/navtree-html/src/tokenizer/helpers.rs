//! Helper functions for the HTML tokenizer.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! This module contains utility functions used throughout the tokenizer:
//! - State transitions ("Switch to", "Reconsume in")
//! - Input/character handling ("Consume the next input character")
//! - Token emission, including coalescing character data into text tokens

use navtree_common::warning::warn_once;

use super::machine::{LineTokenizer, TokenizerState};
use super::token::Token;

/// Characters of context kept on each side of a parse error.
const EXCERPT_CHARS: usize = 20;

// =============================================================================
// State Transition Helpers
// =============================================================================

impl LineTokenizer {
    /// "Switch to the X state"
    ///
    /// The next character will be consumed on the next iteration of the main loop.
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// "Reconsume in the X state"
    ///
    /// The same character will be processed again in the new state.
    pub(super) const fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.reconsume = true;
        self.state = new_state;
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl LineTokenizer {
    /// "Consume the next input character"
    ///
    /// Returns None once the input is exhausted.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next()?;
        self.current_pos += c.len_utf8();
        Some(c)
    }

    /// Peek at a codepoint at the given offset from the current position without
    /// consuming it.
    #[must_use]
    pub fn peek_codepoint(&self, offset: usize) -> Option<char> {
        self.input[self.current_pos..].chars().nth(offset)
    }

    /// "If the next few characters are..."
    #[must_use]
    pub fn next_few_characters_are(&self, target: &str) -> bool {
        self.input[self.current_pos..].starts_with(target)
    }

    /// Consume the given string from the input.
    /// Caller must have already verified the characters are present.
    pub(super) const fn consume_string(&mut self, target: &str) {
        self.current_pos += target.len();
    }

    /// [ASCII whitespace](https://infra.spec.whatwg.org/#ascii-whitespace)
    ///
    /// CR is included: a whole fragment with CRLF line endings reaches the
    /// tokenizer without input stream preprocessing.
    pub(super) const fn is_whitespace_char(input_char: char) -> bool {
        matches!(input_char, ' ' | '\t' | '\n' | '\r' | '\x0C')
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl LineTokenizer {
    /// Emit any buffered character data as a single text token.
    pub(super) fn flush_text(&mut self) {
        if !self.pending_text.is_empty() {
            let data = std::mem::take(&mut self.pending_text);
            self.token_stream.push(Token::Text { data });
        }
    }

    /// Add a token to the output stream, after any text that preceded it.
    pub(super) fn emit_token(&mut self, token: Token) {
        self.flush_text();
        self.token_stream.push(token);
    }

    /// "Emit the current tag token"
    pub(super) fn emit_current_tag(&mut self) {
        if let Some(tag) = self.current_tag.take() {
            self.emit_token(tag.into_token());
        }
    }

    /// "Append ... to the current attribute's value."
    pub(super) fn append_to_attribute_value(&mut self, s: &str) {
        if let Some(ref mut tag) = self.current_tag {
            tag.append_to_attribute_value(s);
        }
    }

    /// "This is an eof-in-tag parse error."
    ///
    /// The half-read tag is dropped instead of emitted.
    pub(super) fn eof_in_tag(&mut self) {
        self.log_parse_error(&format!("eof-in-tag ({})", self.state));
        self.current_tag = None;
        self.at_eof = true;
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl LineTokenizer {
    /// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
    ///
    /// Parse errors are never fatal; they are reported once through the
    /// warning system and the tokenizer carries on.
    pub(super) fn log_parse_error(&self, kind: &str) {
        let pos = self.current_pos;
        warn_once(
            "HTML Tokenizer",
            &format!("{kind} at position {pos} near {:?}", self.excerpt()),
        );
    }

    /// Up to [`EXCERPT_CHARS`] characters on each side of the current
    /// position, so a warning stays short however large the input is.
    pub(super) fn excerpt(&self) -> &str {
        let pos = self.current_pos.min(self.input.len());
        let start = self.input[..pos]
            .char_indices()
            .rev()
            .nth(EXCERPT_CHARS - 1)
            .map_or(0, |(index, _)| index);
        let end = self.input[pos..]
            .char_indices()
            .nth(EXCERPT_CHARS)
            .map_or(self.input.len(), |(index, _)| pos + index);
        &self.input[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn excerpt_at(input: &str, pos: usize) -> String {
        let mut tokenizer = LineTokenizer::new(input);
        tokenizer.current_pos = pos;
        tokenizer.excerpt().to_string()
    }

    #[test]
    fn test_excerpt_is_bounded() {
        let input = "x".repeat(10_000);
        let excerpt = excerpt_at(&input, 5_000);
        assert_eq!(excerpt.len(), 2 * EXCERPT_CHARS);
    }

    #[test]
    fn test_excerpt_near_edges() {
        assert_eq!(excerpt_at("a</>b", 3), "a</>b");
        assert_eq!(excerpt_at("", 0), "");
        let input = format!("{}</>", "y".repeat(100));
        assert_eq!(excerpt_at(&input, input.len()), format!("{}</>", "y".repeat(17)));
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        let input = "é".repeat(50);
        let excerpt = excerpt_at(&input, 50);
        assert_eq!(excerpt.chars().count(), 2 * EXCERPT_CHARS);
        assert!(excerpt.chars().all(|c| c == 'é'));
    }
}
