//! Fragment tree construction.
//!
//! Consumes the tokenizer's output and builds the fragment tree with a
//! stack of open elements. Construction is lenient: mismatched end tags,
//! elements left open at end of input, and other malformed markup are
//! tolerated and recorded as [`ParseIssue`] entries rather than rejected.

use crate::tokenizer::Token;
use crate::tree::{DomTree, ElementData, NodeId, NodeKind, is_void_element};

/// A recovery action taken while parsing malformed markup.
///
/// Issues are diagnostics, not errors: they describe content the parser
/// tolerated, never a failure of the parse itself.
#[derive(Debug, Clone)]
pub struct ParseIssue {
    /// Description of what was tolerated.
    pub message: String,
    /// Byte offset into the input (for tokenizer issues) or index into the
    /// token stream (for tree-construction issues) where this happened.
    pub position: usize,
}

impl ParseIssue {
    /// Create a new issue.
    #[must_use]
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

/// Builds a fragment tree from a token stream.
pub struct FragmentParser {
    tokens: Vec<Token>,
    tree: DomTree,
    /// Stack of open elements; the fragment root is always at the bottom.
    open_elements: Vec<NodeId>,
    /// Adjacent character tokens coalesce here before becoming a text node.
    pending_text: String,
    issues: Vec<ParseIssue>,
}

impl FragmentParser {
    /// Create a parser for the given token stream.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        let tree = DomTree::new();
        let root = tree.root();
        FragmentParser {
            tokens,
            tree,
            open_elements: vec![root],
            pending_text: String::new(),
            issues: Vec::new(),
        }
    }

    /// Run tree construction to completion and return the tree plus any
    /// issues recorded along the way.
    #[must_use]
    pub fn run(mut self) -> (DomTree, Vec<ParseIssue>) {
        let tokens = std::mem::take(&mut self.tokens);
        for (index, token) in tokens.into_iter().enumerate() {
            match token {
                Token::Character { data } => self.pending_text.push(data),
                Token::StartTag {
                    name,
                    self_closing,
                    attributes,
                } => {
                    self.flush_text();
                    let id = self.tree.alloc(NodeKind::Element(ElementData {
                        tag_name: name.clone(),
                        attrs: attributes,
                    }));
                    self.tree.append_child(self.current_node(), id);
                    // Void elements and self-closed tags never open a scope.
                    if !self_closing && !is_void_element(&name) {
                        self.open_elements.push(id);
                    }
                }
                Token::EndTag { name } => {
                    self.flush_text();
                    self.close_element(&name, index);
                }
                Token::Comment { data } => {
                    self.flush_text();
                    let id = self.tree.alloc(NodeKind::Comment(data));
                    self.tree.append_child(self.current_node(), id);
                }
                Token::EndOfFile => {
                    self.flush_text();
                    // Everything still open is implicitly closed.
                    if self.open_elements.len() > 1 {
                        self.issues.push(ParseIssue::new(
                            "unclosed elements at end of input",
                            index,
                        ));
                    }
                }
            }
        }
        (self.tree, self.issues)
    }

    /// The current insertion point: the topmost open element, or the
    /// fragment root.
    fn current_node(&self) -> NodeId {
        self.open_elements.last().copied().unwrap_or(NodeId::ROOT)
    }

    /// Turn any pending character data into a text node under the current
    /// insertion point.
    fn flush_text(&mut self) {
        if self.pending_text.is_empty() {
            return;
        }
        let data = std::mem::take(&mut self.pending_text);
        let id = self.tree.alloc(NodeKind::Text(data));
        self.tree.append_child(self.current_node(), id);
    }

    /// Handle an end tag: pop to the nearest matching open element, or
    /// tolerate the tag if nothing matches.
    fn close_element(&mut self, name: &str, index: usize) {
        // The fragment root at position 0 is never a candidate.
        let matching = self.open_elements[1..]
            .iter()
            .rposition(|&id| {
                self.tree
                    .as_element(id)
                    .is_some_and(|data| data.tag_name == name)
            })
            .map(|pos| pos + 1);

        match matching {
            Some(pos) => {
                if pos + 1 < self.open_elements.len() {
                    self.issues.push(ParseIssue::new(
                        format!("end tag </{name}> implicitly closed open elements"),
                        index,
                    ));
                }
                self.open_elements.truncate(pos);
            }
            None => {
                self.issues.push(ParseIssue::new(
                    format!("unexpected end tag </{name}>"),
                    index,
                ));
            }
        }
    }
}
