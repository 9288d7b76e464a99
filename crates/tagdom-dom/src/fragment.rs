//! Materialized fragments.
//!
//! [`materialize`] is the markup-parsing capability the renderer treats as
//! external: given a rendered [`Markup`] string, it produces the fragment's
//! live nodes. The reverse direction is covered by the `Value` conversions,
//! which serialize nodes back into trusted template values.

use tagdom_markup::{Markup, Value};

use crate::parser::{FragmentParser, ParseIssue};
use crate::serialize::outer_html;
use crate::tokenizer::FragmentTokenizer;
use crate::tree::{DomTree, NodeId};

/// The result of materializing a markup string: a fragment tree plus any
/// recovery actions taken while parsing it.
#[derive(Debug)]
pub struct DomFragment {
    /// The fragment tree. The synthetic root's children are the top-level
    /// nodes, interstitial whitespace text nodes included.
    pub tree: DomTree,
    issues: Vec<ParseIssue>,
}

impl DomFragment {
    /// The top-level nodes in document order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        self.tree.children(self.tree.root())
    }

    /// The number of top-level nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots().len()
    }

    /// Whether the fragment has no top-level nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots().is_empty()
    }

    /// The single top-level node, when exactly one was produced.
    #[must_use]
    pub fn only_node(&self) -> Option<NodeId> {
        match self.roots() {
            [id] => Some(*id),
            _ => None,
        }
    }

    /// Recovery actions taken while parsing. Empty for well-formed markup.
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// A node's serialized outer markup.
    #[must_use]
    pub fn outer_html(&self, id: NodeId) -> String {
        outer_html(&self.tree, id)
    }

    /// Turn a live node into a trusted template value.
    #[must_use]
    pub fn to_value(&self, id: NodeId) -> Value {
        Value::Element(self.outer_html(id))
    }

    /// Turn an ordered set of live nodes into a node-collection template
    /// value.
    #[must_use]
    pub fn collection_value(&self, ids: &[NodeId]) -> Value {
        Value::NodeCollection(ids.iter().map(|&id| self.to_value(id)).collect())
    }
}

/// Parse a markup string into live DOM nodes.
///
/// Parsing is lenient: malformed markup is tolerated, never rejected, and
/// every recovery action is recorded on the returned fragment's issue list.
#[must_use]
pub fn materialize(markup: &Markup) -> DomFragment {
    let mut tokenizer = FragmentTokenizer::new(markup.as_str().to_string());
    tokenizer.run();
    let (tokens, mut issues) = tokenizer.into_parts();

    let parser = FragmentParser::new(tokens);
    let (tree, parse_issues) = parser.run();
    issues.extend(parse_issues);

    DomFragment { tree, issues }
}
