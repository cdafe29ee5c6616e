use serde::Deserialize;
use strum_macros::{Display, EnumString};

/// How the builder decides which entry a new entry nests beneath.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NestingStrategy {
    /// One structural unit per line: a line ending in `<ul>` opens a level
    /// under its entry, a line starting with `</ul>` closes one. This is the
    /// layout markdown table-of-contents extensions emit.
    #[default]
    Lines,
    /// Nesting follows `<ul>`/`</ul>` tag events wherever they appear, so the
    /// line layout of the fragment does not matter.
    Tags,
}

/// Options controlling how a table-of-contents fragment is read.
///
/// Deserializes from JSON with every field optional:
///
/// ```
/// use navtree_toc::{NestingStrategy, TocOptions};
///
/// let options: TocOptions = serde_json::from_str(r#"{ "nesting": "tags" }"#).unwrap();
/// assert_eq!(options.nesting, NestingStrategy::Tags);
/// assert_eq!(options.leading_wrapper_lines, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TocOptions {
    /// Lines of outer wrapper markup skipped at the start (`Lines` only).
    pub leading_wrapper_lines: usize,
    /// Lines of outer wrapper markup skipped at the end (`Lines` only).
    pub trailing_wrapper_lines: usize,
    /// How nesting is derived.
    pub nesting: NestingStrategy,
}

impl Default for TocOptions {
    /// The layout of a generated listing: a two-line header (`<div class="toc">`
    /// and the outer `<ul>`) and the matching two-line footer.
    fn default() -> Self {
        Self {
            leading_wrapper_lines: 2,
            trailing_wrapper_lines: 2,
            nesting: NestingStrategy::Lines,
        }
    }
}

impl TocOptions {
    /// Set how many wrapper lines are skipped at each end of the input.
    #[must_use]
    pub const fn with_wrapper_lines(mut self, leading: usize, trailing: usize) -> Self {
        self.leading_wrapper_lines = leading;
        self.trailing_wrapper_lines = trailing;
        self
    }

    /// Set the nesting strategy.
    #[must_use]
    pub const fn with_nesting(mut self, nesting: NestingStrategy) -> Self {
        self.nesting = nesting;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_strategy_names() {
        assert_eq!(NestingStrategy::Lines.to_string(), "lines");
        assert_eq!(NestingStrategy::from_str("tags"), Ok(NestingStrategy::Tags));
        assert!(NestingStrategy::from_str("words").is_err());
    }

    #[test]
    fn test_builder_methods() {
        let options = TocOptions::default()
            .with_wrapper_lines(0, 1)
            .with_nesting(NestingStrategy::Tags);
        assert_eq!(options.leading_wrapper_lines, 0);
        assert_eq!(options.trailing_wrapper_lines, 1);
        assert_eq!(options.nesting, NestingStrategy::Tags);
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let result: Result<TocOptions, _> = serde_json::from_str(r#"{ "indent": 2 }"#);
        assert!(result.is_err());
    }
}
