//! Outer-HTML serialization of fragment nodes.
//!
//! Serialization is the inverse boundary of materialization: it turns live
//! nodes back into markup so they can be interpolated into another template
//! as trusted fragments. Attribute order is preserved, text content gets
//! tag delimiters escaped, and attribute values get `"` written as
//! `&quot;`. Void elements are written without an end tag.

use tagdom_markup::escape_text;

use crate::tree::{DomTree, NodeId, NodeKind, is_void_element};

/// Serialize a node (and its subtree) to its outer markup.
///
/// Serializing the fragment root yields the concatenated markup of all
/// top-level nodes. An invalid ID serializes to the empty string.
#[must_use]
pub fn outer_html(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    write_node(tree, id, &mut out);
    out
}

fn write_node(tree: &DomTree, id: NodeId, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    match &node.kind {
        NodeKind::Fragment => {
            for &child in &node.children {
                write_node(tree, child, out);
            }
        }
        NodeKind::Element(data) => {
            out.push('<');
            out.push_str(&data.tag_name);
            for attr in &data.attrs {
                out.push(' ');
                out.push_str(&attr.name);
                if !attr.value.is_empty() {
                    out.push_str("=\"");
                    out.push_str(&attr.value.replace('"', "&quot;"));
                    out.push('"');
                }
            }
            out.push('>');
            if is_void_element(&data.tag_name) {
                return;
            }
            for &child in &node.children {
                write_node(tree, child, out);
            }
            out.push_str("</");
            out.push_str(&data.tag_name);
            out.push('>');
        }
        NodeKind::Text(data) => out.push_str(&escape_text(data)),
        NodeKind::Comment(data) => {
            out.push_str("<!--");
            out.push_str(data);
            out.push_str("-->");
        }
    }
}
