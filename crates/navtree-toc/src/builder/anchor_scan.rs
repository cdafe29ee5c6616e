use navtree_html::{Attributes, Token};

/// Collects the first anchor in a token stream: its attributes and the text
/// written between `<a>` and `</a>`.
///
/// Later anchors are ignored until [`AnchorScan::reset`].
#[derive(Debug, Default)]
pub(super) struct AnchorScan {
    attributes: Option<Attributes>,
    title: String,
    in_anchor: bool,
}

impl AnchorScan {
    /// Feed one token. Returns true when the token closed the anchor.
    pub(super) fn feed(&mut self, token: &Token) -> bool {
        match token {
            Token::StartTag {
                name,
                attributes,
                self_closing,
            } if name == "a" && self.attributes.is_none() => {
                self.attributes = Some(attributes.clone());
                self.in_anchor = !self_closing;
                *self_closing
            }
            _ if self.in_anchor && token.is_end_tag("a") => {
                self.in_anchor = false;
                true
            }
            _ => {
                if self.in_anchor
                    && let Some(text) = token.title_text()
                {
                    self.title.push_str(&text);
                }
                false
            }
        }
    }

    /// Whether an anchor was opened and has produced title text.
    pub(super) fn has_title(&self) -> bool {
        self.attributes.is_some() && !self.title.is_empty()
    }

    /// The anchor's `href`, if it had one.
    pub(super) fn href(&self) -> Option<&str> {
        self.attributes.as_ref()?.get("href").map(String::as_str)
    }

    pub(super) fn title(&self) -> &str {
        &self.title
    }

    /// Whether an anchor was opened and not yet closed.
    pub(super) const fn is_open(&self) -> bool {
        self.in_anchor
    }

    pub(super) fn reset(&mut self) {
        *self = Self::default();
    }
}
