//! HTML tokenizer for navtree.
//!
//! # Scope
//!
//! This crate turns a fragment of generated table-of-contents markup into a
//! flat stream of [`Token`]s:
//! - Start tags (with a lowercased name and an attribute map) and end tags
//! - Runs of character data
//! - Character references (`&#38;`) and entity references (`&amp;`), surfaced
//!   as their own tokens instead of being decoded into text
//!
//! The state machine follows the shape of the
//! [WHATWG tokenizer](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! but only keeps the states needed for tag soup. It never fails: anything it
//! cannot make sense of is skipped.
//!
//! # Not Implemented
//!
//! - RCDATA, RAWTEXT and script data states
//! - DOCTYPE tokens (declarations are skipped)
//! - Comment tokens (comments are skipped)

/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use tokenizer::{Attributes, LineTokenizer, Token, tokenize};
