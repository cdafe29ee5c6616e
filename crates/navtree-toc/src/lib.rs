//! Table-of-contents tree construction for navtree.
//!
//! # Scope
//!
//! This crate takes the HTML listing a markdown table-of-contents extension
//! produces (nested `<ul>`/`<li>`/`<a>` markup, one structural unit per line)
//! and turns it into a [`TableOfContents`]: an ordered forest of
//! [`AnchorLink`] entries, each with a title, a target URL and its children.
//!
//! - **Data model** - [`AnchorLink`] and [`TableOfContents`], with the
//!   indented text rendering used for debugging
//! - **Tree builder** - [`TreeBuilder`], driven line by line by the
//!   `navtree-html` tokenizer, or by tag events with [`NestingStrategy::Tags`]
//! - **Options** - [`TocOptions`] for wrapper lines and nesting strategy
//! - **Loading** - reading a fragment or an options file from disk
//!
//! Building never fails. Input the builder had to skip is reported as a
//! [`TocIssue`] instead.
//!
//! ```
//! use navtree_toc::TableOfContents;
//!
//! let html = "<div class=\"toc\">\n<ul>\n\
//!             <li><a href=\"#a\">A</a></li>\n\
//!             </ul>\n</div>";
//! let toc = TableOfContents::new(html);
//! assert_eq!(toc.to_string(), "A - #a\n");
//! ```

/// A single entry in the table of contents.
pub mod anchor;
/// Builds the entry forest from tokenizer output.
pub mod builder;
/// Non-fatal problems found while building.
pub mod issue;
/// Reading fragments and options from disk.
pub mod load;
/// Parsing options.
pub mod options;
/// The table of contents for one page.
pub mod table;

pub use anchor::AnchorLink;
pub use builder::{TreeBuilder, split_lines};
pub use issue::{IssueKind, TocIssue};
pub use load::{LoadError, load_options, load_table_of_contents};
pub use options::{NestingStrategy, TocOptions};
pub use table::TableOfContents;
