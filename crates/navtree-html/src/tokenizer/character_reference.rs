//! Character reference states for the HTML tokenizer.
//!
//! [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
//!
//! In character data a reference is NOT decoded. `&#38;` and `&amp;` come out
//! as [`Token::CharacterReference`] and [`Token::EntityReference`] so the
//! consumer sees exactly what was written. Inside attribute values references
//! are decoded, since an `href` has to be usable as a URL.

use super::machine::{LineTokenizer, TokenizerState};
use super::named_character_references::lookup_entity;
use super::token::Token;

impl LineTokenizer {
    /// Returns true if the return state is an attribute value state.
    /// Per spec: "consumed as part of an attribute"
    pub(super) const fn is_consumed_as_part_of_attribute(&self) -> bool {
        matches!(
            self.return_state,
            Some(
                TokenizerState::AttributeValueDoubleQuoted
                    | TokenizerState::AttributeValueSingleQuoted
                    | TokenizerState::AttributeValueUnquoted
            )
        )
    }

    /// "Flush code points consumed as a character reference"
    ///
    /// Used when the `&` turned out not to start a reference: the consumed
    /// characters go back where they came from, unchanged.
    pub(super) fn flush_code_points_consumed_as_character_reference(&mut self) {
        let buffer = std::mem::take(&mut self.temporary_buffer);
        if self.is_consumed_as_part_of_attribute() {
            self.append_to_attribute_value(&buffer);
        } else {
            self.pending_text.push_str(&buffer);
        }
    }

    fn take_return_state(&mut self) -> TokenizerState {
        self.return_state.take().unwrap_or(TokenizerState::Data)
    }

    /// Name characters accepted after `&`: letters, digits, `-` and `.`.
    const fn is_reference_name_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '-' | '.')
    }

    /// Consume a `;` if it is the next character. Returns whether it was there.
    fn consume_semicolon(&mut self) -> bool {
        if self.peek_codepoint(0) == Some(';') {
            self.consume_string(";");
            true
        } else {
            false
        }
    }

    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    pub(super) fn handle_character_reference_state(&mut self) {
        // "Set the temporary buffer to the empty string. Append a U+0026
        // AMPERSAND character (&) to the temporary buffer."
        self.temporary_buffer.clear();
        self.temporary_buffer.push('&');

        match self.current_input_character {
            Some(c) if c.is_ascii_alphabetic() => {
                self.reconsume_in(TokenizerState::NamedCharacterReference);
            }
            // "U+0023 NUMBER SIGN (#) - Append the current input character to the
            // temporary buffer. Switch to the numeric character reference state."
            Some('#') => {
                self.temporary_buffer.push('#');
                self.switch_to(TokenizerState::NumericCharacterReference);
            }
            // "Anything else - Flush code points consumed as a character reference.
            // Reconsume in the return state."
            _ => {
                self.flush_code_points_consumed_as_character_reference();
                let return_state = self.take_return_state();
                self.reconsume_in(return_state);
            }
        }
    }

    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    ///
    /// Entered by reconsume, so the current input character is the first
    /// letter of the name. The trailing `;` is optional.
    pub(super) fn handle_named_character_reference_state(&mut self) {
        let mut name = String::new();
        if let Some(c) = self.current_input_character {
            name.push(c);
        }
        while let Some(c) = self.peek_codepoint(0) {
            if !Self::is_reference_name_char(c) {
                break;
            }
            name.push(c);
            let _ = self.consume();
        }
        let terminated = self.consume_semicolon();
        self.temporary_buffer.clear();

        if self.is_consumed_as_part_of_attribute() {
            let key = if terminated {
                format!("{name};")
            } else {
                name.clone()
            };
            match lookup_entity(&key) {
                Some(replacement) => self.append_to_attribute_value(replacement),
                None => {
                    // Unknown names stay literal.
                    self.log_parse_error("unknown-named-character-reference");
                    self.append_to_attribute_value(&format!("&{key}"));
                }
            }
        } else {
            self.emit_token(Token::EntityReference { name });
        }

        let return_state = self.take_return_state();
        self.switch_to(return_state);
    }

    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    ///
    /// Entered after `&#`. Accepts `&#NN` and `&#xHH` (either case of `x`);
    /// `&#` followed by anything else is plain text.
    pub(super) fn handle_numeric_character_reference_state(&mut self) {
        let mut code = String::new();
        let radix = match self.current_input_character {
            Some(c @ ('x' | 'X'))
                if self
                    .peek_codepoint(0)
                    .is_some_and(|n| n.is_ascii_hexdigit()) =>
            {
                code.push(c);
                16
            }
            Some(c) if c.is_ascii_digit() => {
                code.push(c);
                10
            }
            // "absence-of-digits-in-numeric-character-reference parse error.
            // Flush code points consumed as a character reference. Reconsume
            // in the return state."
            _ => {
                self.log_parse_error("absence-of-digits-in-numeric-character-reference");
                self.flush_code_points_consumed_as_character_reference();
                let return_state = self.take_return_state();
                self.reconsume_in(return_state);
                return;
            }
        };

        while let Some(c) = self.peek_codepoint(0) {
            if !c.is_digit(radix) {
                break;
            }
            code.push(c);
            let _ = self.consume();
        }
        let _ = self.consume_semicolon();
        self.temporary_buffer.clear();

        if self.is_consumed_as_part_of_attribute() {
            let digits = code.trim_start_matches(['x', 'X']);
            let decoded = Self::decode_numeric_reference(digits, radix);
            self.append_to_attribute_value(decoded.encode_utf8(&mut [0; 4]));
        } else {
            self.emit_token(Token::CharacterReference { code });
        }

        let return_state = self.take_return_state();
        self.switch_to(return_state);
    }

    /// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
    ///
    /// "If the number is 0x00 ... or greater than 0x10FFFF ... or a surrogate,
    /// set the character reference code to 0xFFFD."
    fn decode_numeric_reference(digits: &str, radix: u32) -> char {
        u32::from_str_radix(digits, radix)
            .ok()
            .filter(|&n| n != 0)
            .and_then(char::from_u32)
            .unwrap_or('\u{FFFD}')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_numeric_reference() {
        assert_eq!(LineTokenizer::decode_numeric_reference("38", 10), '&');
        assert_eq!(LineTokenizer::decode_numeric_reference("26", 16), '&');
        assert_eq!(LineTokenizer::decode_numeric_reference("0", 10), '\u{FFFD}');
        assert_eq!(LineTokenizer::decode_numeric_reference("D800", 16), '\u{FFFD}');
        assert_eq!(
            LineTokenizer::decode_numeric_reference("99999999999", 10),
            '\u{FFFD}'
        );
    }
}
