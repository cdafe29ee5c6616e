//! Named character reference lookup table.
//!
//! [§ 13.5 Named character references](https://html.spec.whatwg.org/multipage/named-characters.html)
//!
//! Only attribute values are decoded with this table; references in text are
//! passed through as tokens. URLs produced by table-of-contents generators
//! rarely contain anything beyond the first handful of entries, so this is a
//! subset of the full 2,231-entry list.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Maps entity names (without the leading '&') to their replacement strings.
///
/// A few legacy entities are also matched without the trailing semicolon
/// (`&amp` for `&amp;`), as browsers do.
static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("amp;", "&"),
        ("amp", "&"),
        ("lt;", "<"),
        ("lt", "<"),
        ("gt;", ">"),
        ("gt", ">"),
        ("quot;", "\""),
        ("quot", "\""),
        ("apos;", "'"),
        ("nbsp;", "\u{00A0}"),
        ("sol;", "/"),
        ("num;", "#"),
        ("percnt;", "%"),
        ("quest;", "?"),
        ("equals;", "="),
        ("colon;", ":"),
        ("lpar;", "("),
        ("rpar;", ")"),
        ("plus;", "+"),
        ("comma;", ","),
        ("period;", "."),
        ("lowbar;", "_"),
        ("tilde;", "~"),
        ("sect;", "\u{00A7}"),
        ("para;", "\u{00B6}"),
        ("copy;", "\u{00A9}"),
        ("reg;", "\u{00AE}"),
        ("trade;", "\u{2122}"),
        ("mdash;", "\u{2014}"),
        ("ndash;", "\u{2013}"),
        ("hellip;", "\u{2026}"),
        ("middot;", "\u{00B7}"),
        ("lsquo;", "\u{2018}"),
        ("rsquo;", "\u{2019}"),
        ("ldquo;", "\u{201C}"),
        ("rdquo;", "\u{201D}"),
        ("laquo;", "\u{00AB}"),
        ("raquo;", "\u{00BB}"),
        ("eacute;", "\u{00E9}"),
        ("egrave;", "\u{00E8}"),
        ("aacute;", "\u{00E1}"),
        ("agrave;", "\u{00E0}"),
        ("auml;", "\u{00E4}"),
        ("ouml;", "\u{00F6}"),
        ("uuml;", "\u{00FC}"),
        ("szlig;", "\u{00DF}"),
        ("ntilde;", "\u{00F1}"),
        ("ccedil;", "\u{00E7}"),
    ])
});

/// Look up a named character reference.
///
/// The `name` should NOT include the leading '&', and should include the
/// trailing ';' when the source had one.
///
/// # Example
/// ```
/// use navtree_html::tokenizer::named_character_references::lookup_entity;
///
/// assert_eq!(lookup_entity("amp;"), Some("&"));
/// assert_eq!(lookup_entity("amp"), Some("&"));
/// assert_eq!(lookup_entity("copy"), None);
/// ```
#[must_use]
pub fn lookup_entity(name: &str) -> Option<&'static str> {
    NAMED_ENTITIES.get(name).copied()
}
