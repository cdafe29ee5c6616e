//! The line-oriented driver.
//!
//! Each line is its own unit: a fresh tokenizer, at most one entry, and a
//! nesting change read off the raw text. A line that produced an entry and
//! ends with `<ul>` opens a level beneath that entry; a line that produced
//! nothing and starts with `</ul>` closes one.

use navtree_html::tokenize;

use super::TreeBuilder;
use super::anchor_scan::AnchorScan;
use crate::anchor::AnchorLink;

/// Split a fragment into lines the way the line strategy reads it.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A break at the very end
/// does not start another, empty line.
///
/// ```
/// use navtree_toc::split_lines;
///
/// assert_eq!(split_lines("a\r\nb\rc\n"), vec!["a", "b", "c"]);
/// ```
#[must_use]
pub fn split_lines(html: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = html;
    while !rest.is_empty() {
        let Some(end) = rest.find(['\n', '\r']) else {
            lines.push(rest);
            break;
        };
        lines.push(&rest[..end]);
        let break_len = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + break_len..];
    }
    lines
}

impl TreeBuilder {
    pub(super) fn run_lines(&mut self, html: &str) {
        let lines = split_lines(html);
        let leading = self.options.leading_wrapper_lines;
        let trailing = self.options.trailing_wrapper_lines;
        if lines.len() <= leading.saturating_add(trailing) {
            return;
        }
        let end = lines.len() - trailing;

        for (index, line) in lines.iter().enumerate().take(end).skip(leading) {
            self.process_line(index + 1, line);
        }
    }

    fn process_line(&mut self, line_number: usize, line: &str) {
        let mut scan = AnchorScan::default();
        for token in &tokenize(line) {
            let _ = scan.feed(token);
        }

        if scan.has_title() {
            let Some(href) = scan.href() else {
                self.record_missing_href(scan.title(), Some(line_number));
                return;
            };
            let index = self.insert(AnchorLink::new(scan.title(), href));
            if line.ends_with("<ul>") {
                self.open_parent(index);
            }
        } else if line.starts_with("</ul>") {
            self.close_parent(Some(line_number));
        }
    }
}
