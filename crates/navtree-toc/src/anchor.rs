use core::fmt;

use serde::Serialize;

/// Indentation added per nesting level by [`AnchorLink::indent_print`].
pub const INDENT_UNIT: &str = "    ";

/// A single entry in the table of contents.
///
/// Each entry owns its children; insertion order is document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnchorLink {
    title: String,
    url: String,
    active: bool,
    children: Vec<AnchorLink>,
}

impl AnchorLink {
    /// Create an entry with no children that is not active.
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            active: false,
            children: Vec::new(),
        }
    }

    /// The link text. Character and entity references appear in their
    /// written `&...;` form.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The `href` of the link.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Entries nested beneath this one.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Whether this is the entry marked active for the page.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) const fn children_mut(&mut self) -> &mut Vec<Self> {
        &mut self.children
    }

    pub(crate) const fn set_active(&mut self) {
        self.active = true;
    }

    /// Number of entries in this subtree, this one included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Render this entry and its descendants, one `title - url` line each,
    /// indented by [`INDENT_UNIT`] per level starting at `depth`.
    #[must_use]
    pub fn indent_print(&self, depth: usize) -> String {
        let mut ret = format!("{}{} - {}\n", INDENT_UNIT.repeat(depth), self.title, self.url);
        for child in &self.children {
            ret.push_str(&child.indent_print(depth + 1));
        }
        ret
    }
}

impl fmt::Display for AnchorLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.indent_print(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_print_nests_children() {
        let mut parent = AnchorLink::new("Guide", "#guide");
        let mut child = AnchorLink::new("Install", "#install");
        child.children_mut().push(AnchorLink::new("Linux", "#linux"));
        parent.children_mut().push(child);

        assert_eq!(
            parent.indent_print(0),
            "Guide - #guide\n    Install - #install\n        Linux - #linux\n"
        );
        assert_eq!(
            parent.children[0].indent_print(2),
            "        Install - #install\n            Linux - #linux\n"
        );
        assert_eq!(parent.node_count(), 3);
    }

    #[test]
    fn test_new_entry_is_inactive() {
        let mut link = AnchorLink::new("A", "#a");
        assert!(!link.is_active());
        link.set_active();
        assert!(link.is_active());
        assert!(link.children().is_empty());
    }
}
