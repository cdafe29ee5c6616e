//! The tag-driven driver.
//!
//! The whole fragment goes through one tokenizer and nesting follows the tag
//! events, so the fragment may be laid out any way at all. A `<ul>` that
//! follows an entry inside the same list item nests beneath that entry; a
//! `<ul>` with no such entry only adds a level of list markup. The outer
//! wrapper needs no special treatment: its `<ul>` has no entry to adopt.

use navtree_html::tokenize;

use super::TreeBuilder;
use super::anchor_scan::AnchorScan;
use crate::anchor::AnchorLink;

#[derive(Debug, Default)]
struct TagWalk {
    scan: AnchorScan,
    /// One flag per open `<ul>`: whether it opened a parent in the builder.
    lists: Vec<bool>,
    /// Index, at the current insertion point, of the entry a `<ul>` would
    /// nest beneath.
    last_entry: Option<usize>,
}

impl TreeBuilder {
    pub(super) fn run_tags(&mut self, html: &str) {
        let mut walk = TagWalk::default();

        for token in &tokenize(html) {
            if walk.scan.feed(token) {
                self.take_entry(&mut walk);
                continue;
            }
            if walk.scan.is_open() {
                continue;
            }
            if token.is_start_tag("ul") {
                let adopted = walk.last_entry.take();
                if let Some(index) = adopted {
                    self.open_parent(index);
                }
                walk.lists.push(adopted.is_some());
            } else if token.is_end_tag("ul") {
                // A list that adopted no entry has no parent to close.
                if walk.lists.pop() != Some(false) {
                    self.close_parent(None);
                }
                walk.last_entry = None;
            } else if token.is_start_tag("li") || token.is_end_tag("li") {
                walk.last_entry = None;
            }
        }

        if walk.scan.is_open() {
            self.take_entry(&mut walk);
        }
    }

    /// Turn the finished anchor into an entry, if it has a title and href.
    fn take_entry(&mut self, walk: &mut TagWalk) {
        if walk.scan.has_title() {
            match walk.scan.href() {
                Some(href) => {
                    let link = AnchorLink::new(walk.scan.title(), href);
                    walk.last_entry = Some(self.insert(link));
                }
                None => self.record_missing_href(walk.scan.title(), None),
            }
        }
        walk.scan.reset();
    }
}
