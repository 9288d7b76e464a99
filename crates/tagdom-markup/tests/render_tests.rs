//! Integration tests for template rendering and escaping.

use tagdom_markup::{Markup, Value, html};

#[test]
fn returns_same_string_when_no_values_are_used() {
    assert_eq!(html!("foo bar").as_str(), "foo bar");
    assert_eq!(html!("10").as_str(), "10");
}

#[test]
fn trims_the_ends_of_templates() {
    assert_eq!(html!("   foo bar\t").as_str(), "foo bar");
    assert_eq!(html!("\n\n\t10\n\n\t").as_str(), "10");
}

#[test]
fn stringifies_attribute_maps() {
    let attrs = Value::attrs([
        ("class", "foo"),
        ("title", "An attribute with \"quotes\"."),
    ]);
    let actual = html!("<div " { attrs } "></div>");
    let expected = r#"<div class="foo" title="An attribute with \"quotes\"."></div>"#;

    assert_eq!(actual.as_str(), expected);
}

#[test]
fn stringifies_booleans() {
    assert_eq!(html!("<div>" { false } "</div>").as_str(), "<div>false</div>");
    assert_eq!(html!("<div>" { true } "</div>").as_str(), "<div>true</div>");
}

#[test]
fn stringifies_absent_and_null_values() {
    let absent: Option<&str> = None;
    assert_eq!(html!("<div>" { absent } "</div>").as_str(), "<div></div>");
    assert_eq!(
        html!("<div>" { serde_json::Value::Null } "</div>").as_str(),
        "<div>null</div>"
    );
}

#[test]
fn stringifies_numbers() {
    assert_eq!(html!("<div>" { 10 } "</div>").as_str(), "<div>10</div>");
    assert_eq!(html!("<div>" { -10 } "</div>").as_str(), "<div>-10</div>");
}

#[test]
fn stringifies_lists_of_strings_with_no_separator() {
    let items = vec!["foo", "bar", "baz"];
    let actual = html!("<div>" { items } "</div>");

    assert_eq!(actual.as_str(), "<div>foobarbaz</div>");
}

#[test]
fn stringifies_unrecognized_shapes_as_json() {
    let shape = serde_json::json!({ "a": 1 });
    assert_eq!(
        html!("<div>" { shape } "</div>").as_str(),
        "<div>{\"a\":1}</div>"
    );
}

#[test]
fn escapes_markup_in_values() {
    let value = "<b>Hello world!</b>";
    let actual = html!("<div>" { value } "</div>");
    let expected = "<div>&lt;b&gt;Hello world!&lt;/b&gt;</div>";

    assert_eq!(actual.as_str(), expected);
}

#[test]
fn escapes_markup_in_value_lists() {
    let items = ["foo", "bar", "baz"];
    let lines: Vec<String> = items.iter().map(|item| format!("<li>{item}</li>")).collect();
    let actual = html!("<ul>" { lines } "</ul>");
    let expected = "<ul>&lt;li&gt;foo&lt;/li&gt;&lt;li&gt;bar&lt;/li&gt;&lt;li&gt;baz&lt;/li&gt;</ul>";

    assert_eq!(actual.as_str(), expected);
}

#[test]
fn accepts_prior_renders_without_re_escaping() {
    let inner = html!("<b>Hello world!</b>");
    let actual = html!("<div>" { inner } "</div>");
    let expected = "<div><b>Hello world!</b></div>";

    assert_eq!(actual.as_str(), expected);
}

#[test]
fn accepts_prior_renders_in_lists_without_re_escaping() {
    let items = ["foo", "bar", "baz"];
    let lines: Vec<Markup> = items
        .iter()
        .map(|item| html!("<li>" { *item } "</li>"))
        .collect();
    let actual = html!("<ul>" { lines } "</ul>");
    let expected = "<ul><li>foo</li><li>bar</li><li>baz</li></ul>";

    assert_eq!(actual.as_str(), expected);
}

#[test]
fn trusted_constructor_bypasses_escaping() {
    let trusted = Markup::trusted("<b>Hello world!</b>");
    let actual = html!("<div>" { trusted } "</div>");
    let expected = "<div><b>Hello world!</b></div>";

    assert_eq!(actual.as_str(), expected);
}

#[test]
fn nested_escaped_text_is_never_double_escaped() {
    let inner = html!("<li>" { "<i>" } "</li>");
    assert_eq!(inner.as_str(), "<li>&lt;i&gt;</li>");

    let outer = html!("<ul>" { inner } "</ul>");
    assert_eq!(outer.as_str(), "<ul><li>&lt;i&gt;</li></ul>");
}

#[test]
fn template_may_start_or_end_with_a_value() {
    let actual = html!({ "a" } "<br>" { "b" });
    assert_eq!(actual.as_str(), "a<br>b");

    let markup = html!({ Markup::trusted("<br>") });
    assert_eq!(markup.as_str(), "<br>");
}
