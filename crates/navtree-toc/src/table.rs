use core::fmt;

use serde::Serialize;

use crate::anchor::AnchorLink;
use crate::builder::TreeBuilder;
use crate::issue::TocIssue;
use crate::options::TocOptions;

/// The table of contents for one page: an ordered forest of entries.
///
/// Built once from a complete fragment and not modified afterwards.
/// Serializes as a JSON array of its top-level entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TableOfContents {
    items: Vec<AnchorLink>,
}

impl TableOfContents {
    /// Build from `html` with the default options.
    #[must_use]
    pub fn new(html: &str) -> Self {
        Self::with_options(html, &TocOptions::default())
    }

    /// Build from `html` with the given options.
    #[must_use]
    pub fn with_options(html: &str, options: &TocOptions) -> Self {
        Self::parse_with_issues(html, options).0
    }

    /// Build from `html`, also returning what the builder had to skip.
    ///
    /// The tree is the same one [`TableOfContents::with_options`] returns.
    #[must_use]
    pub fn parse_with_issues(html: &str, options: &TocOptions) -> (Self, Vec<TocIssue>) {
        let (items, issues) = TreeBuilder::new(options.clone()).run(html);
        (Self { items }, issues)
    }

    /// The top-level entries in document order.
    #[must_use]
    pub fn items(&self) -> &[AnchorLink] {
        &self.items
    }

    /// Iterate over the top-level entries.
    pub fn iter(&self) -> core::slice::Iter<'_, AnchorLink> {
        self.items.iter()
    }

    /// Number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no entry survived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of entries at every depth.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.items.iter().map(AnchorLink::node_count).sum()
    }

    /// The entry marked active, which is always the first top-level one.
    #[must_use]
    pub fn active_item(&self) -> Option<&AnchorLink> {
        self.items.first().filter(|item| item.is_active())
    }
}

impl<'a> IntoIterator for &'a TableOfContents {
    type Item = &'a AnchorLink;
    type IntoIter = core::slice::Iter<'a, AnchorLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for TableOfContents {
    type Item = AnchorLink;
    type IntoIter = std::vec::IntoIter<AnchorLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl fmt::Display for TableOfContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            f.write_str(&item.indent_print(0))?;
        }
        Ok(())
    }
}
