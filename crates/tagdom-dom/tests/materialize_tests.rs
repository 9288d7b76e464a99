//! Integration tests for materialization and serialization round-trips.

use tagdom_markup::{Markup, html};

use tagdom_dom::{NodeKind, materialize, outer_html};

#[test]
fn a_single_root_materializes_to_exactly_one_node() {
    let fragment = materialize(&html!(r#"<div title="foo"></div>"#));

    let node = fragment.only_node().expect("expected a single node");
    let data = fragment.tree.as_element(node).expect("not an element");
    assert_eq!(data.tag_name, "div");
    assert_eq!(data.attr("title"), Some("foo"));
}

#[test]
fn a_multi_root_string_materializes_to_all_top_level_nodes() {
    let fragment = materialize(&html!(
        r#"<a href="/">Home</a>
        <a href="/about">About</a>"#
    ));

    assert!(fragment.only_node().is_none());
    assert_eq!(fragment.len(), 3);

    let roots = fragment.roots();
    let first = fragment.tree.as_element(roots[0]).expect("not an element");
    assert_eq!(first.tag_name, "a");
    assert_eq!(first.attr("href"), Some("/"));
    assert_eq!(fragment.tree.text_content(roots[0]), "Home");

    // Whitespace between the links survives as a text node.
    let between = fragment.tree.get(roots[1]).expect("missing node");
    assert!(matches!(&between.kind, NodeKind::Text(_)));

    let second = fragment.tree.as_element(roots[2]).expect("not an element");
    assert_eq!(second.attr("href"), Some("/about"));
    assert_eq!(fragment.tree.text_content(roots[2]), "About");
}

#[test]
fn an_empty_string_materializes_to_an_empty_fragment() {
    let fragment = materialize(&Markup::trusted(""));

    assert!(fragment.is_empty());
    assert!(fragment.only_node().is_none());
}

#[test]
fn serialization_preserves_structure_and_attribute_order() {
    let fragment = materialize(&html!(r#"<div><h1 title="foo" class="x">Hello</h1></div>"#));

    let node = fragment.only_node().expect("expected a single node");
    assert_eq!(
        fragment.outer_html(node),
        r#"<div><h1 title="foo" class="x">Hello</h1></div>"#
    );
}

#[test]
fn serialization_writes_void_elements_without_end_tags() {
    let fragment = materialize(&html!("<p>a<br>b</p>"));

    let node = fragment.only_node().expect("expected a single node");
    assert_eq!(fragment.outer_html(node), "<p>a<br>b</p>");
}

#[test]
fn serialization_escapes_text_and_attribute_quotes() {
    let fragment = materialize(&html!("<p>1 < 2</p>"));
    let node = fragment.only_node().expect("expected a single node");
    assert_eq!(fragment.outer_html(node), "<p>1 &lt; 2</p>");

    let fragment = materialize(&html!("<p title='say \"hi\"'></p>"));
    let node = fragment.only_node().expect("expected a single node");
    assert_eq!(fragment.outer_html(node), r#"<p title="say &quot;hi&quot;"></p>"#);
}

#[test]
fn serializing_the_root_concatenates_all_top_level_nodes() {
    let fragment = materialize(&Markup::trusted("<b>x</b> <i>y</i>"));

    assert_eq!(
        outer_html(&fragment.tree, fragment.tree.root()),
        "<b>x</b> <i>y</i>"
    );
}

#[test]
fn live_nodes_round_trip_into_templates_as_trusted_values() {
    let fragment = materialize(&html!(r#"<div><h1 title="foo">Hello World</h1></div>"#));
    let div = fragment.only_node().expect("expected a single node");

    let markup = html!("<main>" { fragment.to_value(div) } "</main>");
    assert_eq!(
        markup.as_str(),
        r#"<main><div><h1 title="foo">Hello World</h1></div></main>"#
    );
}

#[test]
fn node_collections_round_trip_without_separators() {
    let fragment = materialize(&html!(
        "<ul>
            <li>Foo</li>
            <li>Bar</li>
            <li>Baz</li>
        </ul>"
    ));

    let items = fragment.tree.elements_by_tag_name(fragment.tree.root(), "li");
    assert_eq!(items.len(), 3);

    let markup = html!("<main>" { fragment.collection_value(&items) } "</main>");
    assert_eq!(
        markup.as_str(),
        "<main><li>Foo</li><li>Bar</li><li>Baz</li></main>"
    );
}

#[test]
fn malformed_markup_is_tolerated_and_reported() {
    let fragment = materialize(&Markup::trusted("<div><em>x"));

    assert!(fragment.only_node().is_some());
    assert!(!fragment.issues().is_empty());
}
