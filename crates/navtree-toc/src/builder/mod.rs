//! Tree construction.
//!
//! The builder owns the forest being built and a stack locating the entries
//! that are currently open as parents. The stack holds child indices, not
//! references: `open_parents[0]` indexes the forest, `open_parents[1]` the
//! children of that entry, and so on, so the top of the stack is reached by
//! walking the path from the forest down.
//!
//! Two drivers feed it:
//! - `lines` reads the fragment one line at a time with a fresh tokenizer
//!   per line and infers nesting from how each raw line begins and ends.
//! - `tags` tokenizes the whole fragment and follows `<ul>`/`</ul>` events.

mod anchor_scan;
mod lines;
mod tags;

pub use lines::split_lines;

use navtree_common::warning::warn_once;

use crate::anchor::AnchorLink;
use crate::issue::{IssueKind, TocIssue};
use crate::options::{NestingStrategy, TocOptions};

/// Assembles [`AnchorLink`] entries into a forest.
///
/// A builder is single-use: [`TreeBuilder::run`] consumes it. Concurrent
/// conversions each need their own builder.
#[derive(Debug)]
pub struct TreeBuilder {
    options: TocOptions,
    items: Vec<AnchorLink>,
    open_parents: Vec<usize>,
    issues: Vec<TocIssue>,
}

impl TreeBuilder {
    /// Create a builder with an empty forest.
    #[must_use]
    pub const fn new(options: TocOptions) -> Self {
        Self {
            options,
            items: Vec::new(),
            open_parents: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Build the forest for `html`, returning it along with every issue
    /// recorded on the way. Never fails.
    #[must_use]
    pub fn run(mut self, html: &str) -> (Vec<AnchorLink>, Vec<TocIssue>) {
        match self.options.nesting {
            NestingStrategy::Lines => self.run_lines(html),
            NestingStrategy::Tags => self.run_tags(html),
        }
        self.finish()
    }

    /// The list new entries are appended to: the children of the innermost
    /// open parent, or the forest when nothing is open.
    fn insertion_point(&mut self) -> &mut Vec<AnchorLink> {
        let mut list = &mut self.items;
        for &index in &self.open_parents {
            list = list[index].children_mut();
        }
        list
    }

    /// Append an entry at the insertion point. Returns its index there, which
    /// is what [`TreeBuilder::open_parent`] expects.
    fn insert(&mut self, link: AnchorLink) -> usize {
        let list = self.insertion_point();
        list.push(link);
        list.len() - 1
    }

    /// Make the entry at `index` of the current insertion point the parent of
    /// subsequent entries.
    fn open_parent(&mut self, index: usize) {
        self.open_parents.push(index);
    }

    /// Close the innermost open parent. An unmatched close is recorded and
    /// otherwise ignored.
    fn close_parent(&mut self, line: Option<usize>) {
        if self.open_parents.pop().is_none() {
            self.record_issue(
                IssueKind::UnbalancedClose,
                line,
                "closing </ul> with no open list".to_string(),
            );
        }
    }

    fn record_issue(&mut self, kind: IssueKind, line: Option<usize>, message: String) {
        let issue = TocIssue {
            kind,
            line,
            message,
        };
        warn_once("TOC Builder", &issue.to_string());
        self.issues.push(issue);
    }

    fn record_missing_href(&mut self, title: &str, line: Option<usize>) {
        self.record_issue(
            IssueKind::MissingHref,
            line,
            format!("anchor {title:?} has no href, dropped"),
        );
    }

    /// Report lists left open and mark the first top-level entry active.
    fn finish(mut self) -> (Vec<AnchorLink>, Vec<TocIssue>) {
        let depth = self.open_parents.len();
        if depth > 0 {
            self.record_issue(
                IssueKind::UnclosedList,
                None,
                format!("{depth} list level(s) still open at end of input"),
            );
        }
        if let Some(first) = self.items.first_mut() {
            first.set_active();
        }
        (self.items, self.issues)
    }
}
