//! Property tests over generated table-of-contents listings.
//!
//! Each case builds a random outline, renders it the way a markdown
//! table-of-contents extension lays out its listing, and checks the tree that
//! comes back.

// quickcheck passes generated values by value.
#![allow(clippy::needless_pass_by_value)]

use navtree_toc::{AnchorLink, NestingStrategy, TableOfContents, TocOptions};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

const MAX_DEPTH: usize = 3;

#[derive(Debug, Clone)]
struct Entry {
    title: String,
    slug: String,
    children: Vec<Entry>,
}

/// A random outline of headings, at most four levels deep.
#[derive(Debug, Clone)]
struct Outline(Vec<Entry>);

fn arbitrary_entries(g: &mut Gen, depth: usize) -> Vec<Entry> {
    let width = if depth == 0 { 6 } else { 4 };
    let count = usize::arbitrary(g) % width;
    (0..count)
        .map(|index| {
            let title = g
                .choose(&["Intro", "Usage", "Q &amp; A", "Step &#8212; one", "API <code>run()</code>"])
                .copied()
                .unwrap_or("Intro");
            Entry {
                title: title.to_string(),
                slug: format!("s{depth}-{index}-{}", u16::arbitrary(g)),
                children: if depth < MAX_DEPTH {
                    arbitrary_entries(g, depth + 1)
                } else {
                    Vec::new()
                },
            }
        })
        .collect()
}

impl Arbitrary for Outline {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(arbitrary_entries(g, 0))
    }
}

impl Entry {
    fn lines(&self, out: &mut Vec<String>) {
        let anchor = format!("<li><a href=\"#{}\">{}</a>", self.slug, self.title);
        if self.children.is_empty() {
            out.push(format!("{anchor}</li>"));
        } else {
            out.push(format!("{anchor}<ul>"));
            for child in &self.children {
                child.lines(out);
            }
            out.push("</ul></li>".to_string());
        }
    }

    /// The title once inline markup is gone; references stay as written.
    fn display_title(&self) -> String {
        self.title.replace("<code>", "").replace("</code>", "")
    }

    fn expected(&self, depth: usize, out: &mut String) {
        out.push_str(&format!(
            "{}{} - #{}\n",
            "    ".repeat(depth),
            self.display_title(),
            self.slug
        ));
        for child in &self.children {
            child.expected(depth + 1, out);
        }
    }

    fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }
}

impl Outline {
    fn entry_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for entry in &self.0 {
            entry.lines(&mut lines);
        }
        lines
    }

    fn expected(&self) -> String {
        let mut out = String::new();
        for entry in &self.0 {
            entry.expected(0, &mut out);
        }
        out
    }

    fn count(&self) -> usize {
        self.0.iter().map(Entry::count).sum()
    }
}

fn wrap(lines: &[String]) -> String {
    let mut html = String::from("<div class=\"toc\">\n<ul>\n");
    for line in lines {
        html.push_str(line);
        html.push('\n');
    }
    html.push_str("</ul>\n</div>\n");
    html
}

fn count_active(items: &[AnchorLink]) -> usize {
    items
        .iter()
        .map(|item| usize::from(item.is_active()) + count_active(item.children()))
        .sum()
}

#[quickcheck]
fn prop_tree_matches_outline(outline: Outline) -> bool {
    let toc = TableOfContents::new(&wrap(&outline.entry_lines()));
    toc.node_count() == outline.count() && toc.to_string() == outline.expected()
}

#[quickcheck]
fn prop_parsing_is_stable(outline: Outline) -> bool {
    let html = wrap(&outline.entry_lines());
    TableOfContents::new(&html) == TableOfContents::new(&html)
}

#[quickcheck]
fn prop_only_first_entry_is_active(outline: Outline) -> bool {
    let toc = TableOfContents::new(&wrap(&outline.entry_lines()));
    let expected_active = usize::from(!toc.is_empty());
    count_active(toc.items()) == expected_active
        && toc.items().first().is_none_or(AnchorLink::is_active)
}

#[quickcheck]
fn prop_missing_href_changes_nothing(outline: Outline, position: usize) -> bool {
    let mut lines = outline.entry_lines();
    let at = position % (lines.len() + 1);
    lines.insert(at, "<li><a>Ghost</a></li>".to_string());

    let toc = TableOfContents::new(&wrap(&lines));
    toc == TableOfContents::new(&wrap(&outline.entry_lines()))
}

#[quickcheck]
fn prop_extra_closes_change_nothing(outline: Outline, extra: u8) -> bool {
    let mut lines = outline.entry_lines();
    for _ in 0..(extra % 4) {
        lines.push("</ul>".to_string());
    }
    TableOfContents::new(&wrap(&lines)) == TableOfContents::new(&wrap(&outline.entry_lines()))
}

#[quickcheck]
fn prop_strategies_agree_on_generated_listings(outline: Outline) -> bool {
    let html = wrap(&outline.entry_lines());
    let tags = TocOptions::default().with_nesting(NestingStrategy::Tags);
    TableOfContents::with_options(&html, &tags) == TableOfContents::new(&html)
}
