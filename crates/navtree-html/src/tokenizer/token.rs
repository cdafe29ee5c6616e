use core::fmt;
use std::borrow::Cow;
use std::collections::HashMap;

/// Attributes of a start tag, keyed by lowercased attribute name.
///
/// When a tag repeats an attribute, the last occurrence wins.
pub type Attributes = HashMap<String, String>;

/// The tokenizer emits tokens of these types to the tree builder.
///
/// Unlike a full HTML tokenizer there is no DOCTYPE, comment or end-of-file
/// token: those constructs carry nothing a table of contents needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An opening tag such as `<a href="#intro">`.
    StartTag {
        /// Lowercased tag name
        name: String,
        /// Attribute map, values already decoded
        attributes: Attributes,
        /// Whether the tag was written as `<tag/>`
        self_closing: bool,
    },

    /// A closing tag such as `</a>`.
    EndTag {
        /// Lowercased tag name
        name: String,
    },

    /// A run of character data between tags.
    Text {
        /// The raw characters
        data: String,
    },

    /// A numeric character reference, `&#38;` or `&#x26;`.
    CharacterReference {
        /// The digits after `&#`, including a leading `x` for hex references
        code: String,
    },

    /// A named entity reference such as `&amp;`.
    EntityReference {
        /// The entity name without `&` and `;`
        name: String,
    },
}

impl Token {
    /// Returns true if this is a start tag with the given name.
    #[must_use]
    pub fn is_start_tag(&self, tag: &str) -> bool {
        matches!(self, Self::StartTag { name, .. } if name == tag)
    }

    /// Returns true if this is an end tag with the given name.
    #[must_use]
    pub fn is_end_tag(&self, tag: &str) -> bool {
        matches!(self, Self::EndTag { name } if name == tag)
    }

    /// The text this token contributes to a link title.
    ///
    /// References are written back in their `&...;` form rather than decoded,
    /// so a title reads exactly as it was authored. Tags contribute nothing.
    #[must_use]
    pub fn title_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Text { data } => Some(Cow::Borrowed(data)),
            Self::CharacterReference { code } => Some(Cow::Owned(format!("&#{code};"))),
            Self::EntityReference { name } => Some(Cow::Owned(format!("&{name};"))),
            Self::StartTag { .. } | Self::EndTag { .. } => None,
        }
    }
}

/// A single `name="value"` pair while the tag is still being read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct PendingAttribute {
    pub(super) name: String,
    pub(super) value: String,
}

/// Whether the tag under construction opens or closes an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TagKind {
    Start,
    End,
}

/// The tag token currently being built by the state machine.
///
/// Attributes are kept in source order until the tag is emitted, so the
/// attribute states can keep appending to "the current attribute".
#[derive(Debug, Clone)]
pub(super) struct PendingTag {
    pub(super) kind: TagKind,
    pub(super) name: String,
    pub(super) attributes: Vec<PendingAttribute>,
    pub(super) self_closing: bool,
}

impl PendingTag {
    pub(super) const fn new(kind: TagKind) -> Self {
        Self {
            kind,
            name: String::new(),
            attributes: Vec::new(),
            self_closing: false,
        }
    }

    pub(super) fn append_to_name(&mut self, c: char) {
        self.name.push(c);
    }

    pub(super) fn start_new_attribute(&mut self) {
        self.attributes.push(PendingAttribute::default());
    }

    pub(super) fn append_to_attribute_name(&mut self, c: char) {
        if let Some(attr) = self.attributes.last_mut() {
            attr.name.push(c);
        }
    }

    pub(super) fn append_to_attribute_value(&mut self, s: &str) {
        if let Some(attr) = self.attributes.last_mut() {
            attr.value.push_str(s);
        }
    }

    /// Finish the tag. End tags drop their attributes.
    pub(super) fn into_token(self) -> Token {
        match self.kind {
            TagKind::Start => {
                let attributes = self
                    .attributes
                    .into_iter()
                    .filter(|attr| !attr.name.is_empty())
                    .map(|attr| (attr.name, attr.value))
                    .collect();
                Token::StartTag {
                    name: self.name,
                    attributes,
                    self_closing: self.self_closing,
                }
            }
            TagKind::End => Token::EndTag { name: self.name },
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartTag {
                name,
                attributes,
                self_closing,
            } => {
                write!(f, "<{name}")?;
                let mut names: Vec<&String> = attributes.keys().collect();
                names.sort();
                for attr in names {
                    write!(f, " {attr}=\"{}\"", attributes[attr])?;
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag { name } => write!(f, "</{name}>"),
            Self::Text { data } => write!(f, "Text({data:?})"),
            Self::CharacterReference { code } => write!(f, "CharRef(&#{code};)"),
            Self::EntityReference { name } => write!(f, "EntityRef(&{name};)"),
        }
    }
}
