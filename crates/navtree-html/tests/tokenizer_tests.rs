//! Integration tests for the HTML tokenizer.

use navtree_html::{LineTokenizer, Token, tokenize};

/// Helper to pull the attribute map out of the first token
fn first_start_tag(tokens: &[Token]) -> (&str, &navtree_html::Attributes, bool) {
    match &tokens[0] {
        Token::StartTag {
            name,
            attributes,
            self_closing,
        } => (name.as_str(), attributes, *self_closing),
        other => panic!("Expected StartTag token, got {other:?}"),
    }
}

/// Helper to concatenate the title text of every token
fn title_of(tokens: &[Token]) -> String {
    tokens.iter().filter_map(Token::title_text).collect()
}

#[test]
fn test_plain_text_is_one_token() {
    let tokens = tokenize("Hello world");
    assert_eq!(
        tokens,
        vec![Token::Text {
            data: "Hello world".to_string()
        }]
    );
}

#[test]
fn test_empty_input() {
    assert!(tokenize("").is_empty());
}

#[test]
fn test_start_tag() {
    let tokens = tokenize("<div>");
    assert_eq!(tokens.len(), 1);
    let (name, attributes, self_closing) = first_start_tag(&tokens);
    assert_eq!(name, "div");
    assert!(attributes.is_empty());
    assert!(!self_closing);
}

#[test]
fn test_end_tag() {
    let tokens = tokenize("</ul>");
    assert_eq!(tokens, vec![Token::EndTag { name: "ul".to_string() }]);
}

#[test]
fn test_tag_names_are_lowercased() {
    let tokens = tokenize("<UL></Ul>");
    assert!(tokens[0].is_start_tag("ul"));
    assert!(tokens[1].is_end_tag("ul"));
}

#[test]
fn test_self_closing_tag() {
    let tokens = tokenize("<br/>");
    let (name, _, self_closing) = first_start_tag(&tokens);
    assert_eq!(name, "br");
    assert!(self_closing);
}

#[test]
fn test_anchor_line() {
    let tokens = tokenize(r##"<li><a href="#intro">Intro</a></li>"##);
    assert_eq!(tokens.len(), 5);
    assert!(tokens[0].is_start_tag("li"));
    assert!(tokens[1].is_start_tag("a"));
    assert_eq!(
        tokens[2],
        Token::Text {
            data: "Intro".to_string()
        }
    );
    assert!(tokens[3].is_end_tag("a"));
    assert!(tokens[4].is_end_tag("li"));

    match &tokens[1] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes.get("href").map(String::as_str), Some("#intro"));
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_attribute_quoting_styles() {
    let tokens = tokenize(r#"<a href='single' title="double" class=bare>"#);
    let (_, attributes, _) = first_start_tag(&tokens);
    assert_eq!(attributes["href"], "single");
    assert_eq!(attributes["title"], "double");
    assert_eq!(attributes["class"], "bare");
}

#[test]
fn test_attribute_names_are_lowercased() {
    let tokens = tokenize(r##"<A HREF="#x">"##);
    let (name, attributes, _) = first_start_tag(&tokens);
    assert_eq!(name, "a");
    assert_eq!(attributes["href"], "#x");
}

#[test]
fn test_valueless_attribute_is_empty_string() {
    let tokens = tokenize("<a href>");
    let (_, attributes, _) = first_start_tag(&tokens);
    assert_eq!(attributes.get("href").map(String::as_str), Some(""));
}

#[test]
fn test_carriage_return_separates_tag_parts() {
    let tokens = tokenize("<a\r\nhref=\"#x\"\r\nid=y\r>X</a>");
    let (name, attributes, _) = first_start_tag(&tokens);
    assert_eq!(name, "a");
    assert_eq!(attributes["href"], "#x");
    assert_eq!(attributes["id"], "y");
    assert_eq!(attributes.len(), 2);
}

#[test]
fn test_duplicate_attribute_last_wins() {
    let tokens = tokenize(r##"<a href="#one" href="#two">"##);
    let (_, attributes, _) = first_start_tag(&tokens);
    assert_eq!(attributes.len(), 1);
    assert_eq!(attributes["href"], "#two");
}

#[test]
fn test_attribute_references_are_decoded() {
    let tokens = tokenize(r#"<a href="?a=1&amp;b=2&#38;c=3&#x26;d">"#);
    let (_, attributes, _) = first_start_tag(&tokens);
    assert_eq!(attributes["href"], "?a=1&b=2&c=3&d");
}

#[test]
fn test_unknown_attribute_reference_stays_literal() {
    let tokens = tokenize(r#"<a href="?x=1&y=2&bogus;">"#);
    let (_, attributes, _) = first_start_tag(&tokens);
    assert_eq!(attributes["href"], "?x=1&y=2&bogus;");
}

#[test]
fn test_character_reference_is_not_decoded() {
    let tokens = tokenize("A &#38; B");
    assert_eq!(
        tokens,
        vec![
            Token::Text {
                data: "A ".to_string()
            },
            Token::CharacterReference {
                code: "38".to_string()
            },
            Token::Text {
                data: " B".to_string()
            },
        ]
    );
}

#[test]
fn test_hex_character_reference_keeps_x() {
    let tokens = tokenize("&#x2014;");
    assert_eq!(
        tokens,
        vec![Token::CharacterReference {
            code: "x2014".to_string()
        }]
    );
    assert_eq!(title_of(&tokens), "&#x2014;");
}

#[test]
fn test_entity_reference_is_not_decoded() {
    let tokens = tokenize("Tom &amp; Jerry");
    assert!(matches!(
        &tokens[1],
        Token::EntityReference { name } if name == "amp"
    ));
    assert_eq!(title_of(&tokens), "Tom &amp; Jerry");
}

#[test]
fn test_unknown_entity_is_still_an_entity() {
    let tokens = tokenize("&madeup;");
    assert_eq!(
        tokens,
        vec![Token::EntityReference {
            name: "madeup".to_string()
        }]
    );
}

#[test]
fn test_entity_without_semicolon_is_normalized() {
    let tokens = tokenize("a &lt b");
    assert_eq!(title_of(&tokens), "a &lt; b");
}

#[test]
fn test_bare_ampersand_is_text() {
    assert_eq!(title_of(&tokenize("Q & A")), "Q & A");
    assert_eq!(title_of(&tokenize("Q &")), "Q &");
    assert_eq!(title_of(&tokenize("&#;")), "&#;");
    assert_eq!(title_of(&tokenize("&#xyz")), "&#xyz");
}

#[test]
fn test_comments_and_declarations_are_skipped() {
    let tokens = tokenize("<!DOCTYPE html><!-- note -->x<?php ?>y");
    assert_eq!(title_of(&tokens), "xy");
    assert!(
        tokens
            .iter()
            .all(|token| matches!(token, Token::Text { .. }))
    );
}

#[test]
fn test_less_than_in_text() {
    let tokens = tokenize("1 < 2");
    assert_eq!(title_of(&tokens), "1 < 2");
}

#[test]
fn test_incomplete_tag_at_end_is_dropped() {
    let tokens = tokenize(r##"Intro<a href="#intro"##);
    assert_eq!(
        tokens,
        vec![Token::Text {
            data: "Intro".to_string()
        }]
    );
    assert_eq!(tokenize("<"), Vec::<Token>::new());
    assert_eq!(tokenize("</"), Vec::<Token>::new());
}

#[test]
fn test_empty_end_tag_is_ignored() {
    let tokens = tokenize("a</>b");
    assert_eq!(title_of(&tokens), "ab");
}

#[test]
fn test_nested_markup_inside_anchor() {
    let tokens = tokenize(r##"<a href="#api"><code>run()</code> API</a>"##);
    assert_eq!(title_of(&tokens), "run() API");
    assert!(tokens[1].is_start_tag("code"));
}

#[test]
fn test_tokenizer_instances_share_no_state() {
    // A tag left open on one line must not leak into the next.
    let first = tokenize(r##"<a href="#a"##);
    let second = tokenize("B</a>");
    assert!(first.is_empty());
    assert_eq!(title_of(&second), "B");
    assert!(second[1].is_end_tag("a"));
}

#[test]
fn test_line_tokenizer_matches_tokenize() {
    let input = r##"<li><a href="#b">B</a><ul>"##;
    let mut tokenizer = LineTokenizer::new(input);
    tokenizer.run();
    assert_eq!(tokenizer.into_tokens(), tokenize(input));
}

#[test]
fn test_display() {
    let tokens = tokenize(r##"<a id="x" href="#x">T&amp;&#1;</a>"##);
    let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            r##"<a href="#x" id="x">"##,
            "Text(\"T\")",
            "EntityRef(&amp;)",
            "CharRef(&#1;)",
            "</a>",
        ]
    );
}
