//! HTML tokenizer module.
//!
//! A reduced version of [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! that keeps references visible to the consumer.

/// Character reference states.
pub mod character_reference;
/// Helper methods for tokenizer state transitions.
pub mod helpers;
/// HTML tokenizer state machine implementation.
pub mod machine;
/// Named character reference lookup table, used for attribute values.
pub mod named_character_references;
/// Token types produced by the tokenizer.
pub mod token;

pub use machine::{LineTokenizer, TokenizerState, tokenize};
pub use token::{Attributes, Token};
