//! navtree CLI - table-of-contents inspection tool
//!
//! Usage:
//!   navtree <file>             Print the navigation tree
//!   navtree <file> --json      Print the tree as JSON
//!   navtree <file> --tokens    Also show the tokens of every line read
//!   navtree <file> --issues    Also list what the builder skipped
//!
//! Examples:
//!   navtree site/toc.html
//!   navtree --html "$(cat toc.html)" --nesting tags

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use navtree_common::warning::set_warnings_enabled;
use navtree_html::tokenize;
use navtree_toc::{
    NestingStrategy, TableOfContents, TocIssue, TocOptions, load_options, split_lines,
};
use owo_colors::OwoColorize;

/// Build and print the navigation tree of a table-of-contents fragment
#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
#[command(name = "navtree")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r##"EXAMPLES:
    # Print the tree of a generated listing
    navtree toc.html

    # Same, as JSON
    navtree toc.html --json

    # A fragment with no fixed line layout
    navtree --html '<ul><li><a href="#a">A</a></li></ul>' --nesting tags

    # A listing without wrapper lines
    navtree toc.html --leading 0 --trailing 0
"##)]
struct Cli {
    /// Path to the HTML fragment
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Read the fragment from this string instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Print the tree as JSON
    #[arg(short, long)]
    json: bool,

    /// Show the tokens of every line that is read
    #[arg(short, long)]
    tokens: bool,

    /// How nesting is derived: lines or tags
    #[arg(long, value_name = "STRATEGY")]
    nesting: Option<NestingStrategy>,

    /// Wrapper lines skipped at the start
    #[arg(long, value_name = "N")]
    leading: Option<usize>,

    /// Wrapper lines skipped at the end
    #[arg(long, value_name = "N")]
    trailing: Option<usize>,

    /// JSON file with parsing options; flags override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// List the issues recorded while building
    #[arg(short, long)]
    issues: bool,

    /// Do not print warnings
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_warnings_enabled(!cli.quiet);

    let options = resolve_options(&cli)?;
    let html = read_input(&cli)?;

    if cli.tokens {
        print_tokens(&html, &options);
    }

    let (toc, issues) = TableOfContents::parse_with_issues(&html, &options);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&toc)?);
    } else {
        print_tree(&toc);
    }

    if cli.issues {
        print_issues(&issues);
    }

    Ok(())
}

/// Options file first, then command-line overrides
fn resolve_options(cli: &Cli) -> Result<TocOptions> {
    let mut options = match cli.config {
        Some(ref path) => load_options(path)?,
        None => TocOptions::default(),
    };
    if let Some(nesting) = cli.nesting {
        options.nesting = nesting;
    }
    if let Some(leading) = cli.leading {
        options.leading_wrapper_lines = leading;
    }
    if let Some(trailing) = cli.trailing {
        options.trailing_wrapper_lines = trailing;
    }
    Ok(options)
}

fn read_input(cli: &Cli) -> Result<String> {
    if let Some(ref html) = cli.html {
        Ok(html.clone())
    } else if let Some(ref path) = cli.path {
        fs::read_to_string(path).with_context(|| format!("Error reading '{}'", path.display()))
    } else {
        bail!("No input file or --html provided")
    }
}

/// Dump tokens the way the builder sees them: per processed line, or for the
/// whole fragment at once.
fn print_tokens(html: &str, options: &TocOptions) {
    match options.nesting {
        NestingStrategy::Lines => {
            let lines = split_lines(html);
            let start = options.leading_wrapper_lines;
            let end = lines.len().saturating_sub(options.trailing_wrapper_lines);
            println!("{}", "=== Line Tokens ===".bold());
            for (index, line) in lines.iter().enumerate() {
                if index < start || index >= end {
                    println!("{}", format!("{:4} (wrapper) {line}", index + 1).dimmed());
                    continue;
                }
                println!("{:4} {line}", (index + 1).cyan());
                for token in tokenize(line) {
                    println!("       {token}");
                }
            }
        }
        NestingStrategy::Tags => {
            let tokens = tokenize(html);
            println!("{}", format!("=== HTML Tokens ({}) ===", tokens.len()).bold());
            for (index, token) in tokens.iter().enumerate() {
                println!("  {index:3}: {token}");
            }
        }
    }
    println!();
}

fn print_tree(toc: &TableOfContents) {
    println!(
        "{}",
        format!(
            "=== Table of Contents ({} entries, {} top level) ===",
            toc.node_count(),
            toc.len()
        )
        .bold()
    );
    if toc.is_empty() {
        println!("{}", "(empty)".dimmed());
    } else {
        print!("{toc}");
    }
}

fn print_issues(issues: &[TocIssue]) {
    println!();
    println!("{}", format!("=== Issues ({}) ===", issues.len()).bold());
    if issues.is_empty() {
        println!("{}", "none".green());
    }
    for issue in issues {
        println!("  {}", issue.yellow());
    }
}
