//! Integration tests for the fragment tokenizer.

use tagdom_dom::{FragmentTokenizer, Token};

/// Helper to tokenize input and return the token stream.
fn tokenize(input: &str) -> Vec<Token> {
    let mut tokenizer = FragmentTokenizer::new(input.to_string());
    tokenizer.run();
    let (tokens, _issues) = tokenizer.into_parts();
    tokens
}

/// Helper to find the first start tag in a stream.
fn first_start_tag(tokens: &[Token]) -> &Token {
    tokens
        .iter()
        .find(|t| matches!(t, Token::StartTag { .. }))
        .expect("no start tag emitted")
}

#[test]
fn tokenizes_a_simple_tag_pair() {
    let tokens = tokenize("<div>hi</div>");

    assert!(matches!(&tokens[0], Token::StartTag { name, .. } if name == "div"));
    assert!(matches!(tokens[1], Token::Character { data: 'h' }));
    assert!(matches!(tokens[2], Token::Character { data: 'i' }));
    assert!(matches!(&tokens[3], Token::EndTag { name } if name == "div"));
    assert!(matches!(tokens[4], Token::EndOfFile));
}

#[test]
fn lowercases_tag_and_attribute_names() {
    let tokens = tokenize(r#"<DIV CLASS="Box"></DIV>"#);

    if let Token::StartTag {
        name, attributes, ..
    } = first_start_tag(&tokens)
    {
        assert_eq!(name, "div");
        assert_eq!(attributes[0].name, "class");
        assert_eq!(attributes[0].value, "Box");
    } else {
        panic!("expected start tag");
    }
}

#[test]
fn tokenizes_all_attribute_quoting_styles() {
    let tokens = tokenize(r#"<a href="/x" title='t' id=main disabled>"#);

    if let Token::StartTag { attributes, .. } = first_start_tag(&tokens) {
        let pairs: Vec<(&str, &str)> = attributes
            .iter()
            .map(|a| (a.name.as_str(), a.value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("href", "/x"),
                ("title", "t"),
                ("id", "main"),
                ("disabled", ""),
            ]
        );
    } else {
        panic!("expected start tag");
    }
}

#[test]
fn flags_self_closing_tags() {
    let tokens = tokenize("<br/>");

    assert!(matches!(
        first_start_tag(&tokens),
        Token::StartTag { self_closing: true, .. }
    ));
}

#[test]
fn drops_duplicate_attributes_keeping_the_first() {
    let mut tokenizer = FragmentTokenizer::new(r#"<a x="1" x="2">"#.to_string());
    tokenizer.run();
    let (tokens, issues) = tokenizer.into_parts();

    if let Token::StartTag { attributes, .. } = first_start_tag(&tokens) {
        assert_eq!(attributes.len(), 1);
        assert_eq!(attributes[0].value, "1");
    } else {
        panic!("expected start tag");
    }
    assert!(issues.iter().any(|i| i.message.contains("duplicate")));
}

#[test]
fn tokenizes_comments() {
    let tokens = tokenize("<!-- note -->");

    assert!(matches!(&tokens[0], Token::Comment { data } if data == " note "));
}

#[test]
fn comment_data_may_contain_single_dashes() {
    let tokens = tokenize("<!--a-b-->");

    assert!(matches!(&tokens[0], Token::Comment { data } if data == "a-b"));
}

#[test]
fn tolerates_a_doctype_as_a_bogus_comment() {
    let mut tokenizer = FragmentTokenizer::new("<!doctype html><p></p>".to_string());
    tokenizer.run();
    let (tokens, issues) = tokenizer.into_parts();

    assert!(matches!(&tokens[0], Token::Comment { .. }));
    assert!(matches!(&tokens[1], Token::StartTag { name, .. } if name == "p"));
    assert!(issues.iter().any(|i| i.message.contains("unsupported")));
}

#[test]
fn a_bare_less_than_stays_character_data() {
    let tokens = tokenize("1 < 2");

    let text: String = tokens
        .iter()
        .filter_map(|t| match t {
            Token::Character { data } => Some(*data),
            _ => None,
        })
        .collect();
    assert_eq!(text, "1 < 2");
}

#[test]
fn input_ending_inside_a_tag_is_tolerated() {
    let mut tokenizer = FragmentTokenizer::new("<div class=".to_string());
    tokenizer.run();
    let (tokens, issues) = tokenizer.into_parts();

    assert!(matches!(tokens.last(), Some(Token::EndOfFile)));
    assert!(issues.iter().any(|i| i.message.contains("eof in tag")));
}
