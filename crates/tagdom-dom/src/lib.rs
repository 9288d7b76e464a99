//! DOM materialization for the tagdom HTML builder.
//!
//! This crate is the default markup-parsing adapter: it turns a rendered
//! [`Markup`](tagdom_markup::Markup) string into live nodes the way a host
//! environment's fragment parser would, and serializes nodes back into
//! markup so they can round-trip through another template.
//!
//! # Scope
//!
//! - **Fragment Tokenizer** - a lenient state machine covering tag, attribute,
//!   and comment states
//! - **Fragment Parser** - tree construction with a stack of open elements,
//!   tolerant of mismatched end tags and unclosed elements
//! - **Arena DOM** - a fragment-rooted tree addressed by [`NodeId`] indices
//! - **Serialization** - outer-HTML output with attribute order preserved
//!
//! # Not Yet Implemented
//!
//! - Character reference resolution (entities pass through undecoded)
//! - DOCTYPE handling (declarations are tolerated as bogus comments)
//! - Foster parenting and other full tree-construction rules
//!
//! Malformed markup is never rejected: recovery actions are recorded as
//! [`ParseIssue`] entries on the resulting fragment.

/// Materialized fragments and the entry point for parsing markup.
pub mod fragment;
/// Fragment tree construction from the token stream.
pub mod parser;
/// Outer-HTML serialization of fragment nodes.
pub mod serialize;
/// Fragment tokenizer for converting input into tokens.
pub mod tokenizer;
/// Arena-based fragment tree.
pub mod tree;

pub use fragment::{DomFragment, materialize};
pub use parser::{FragmentParser, ParseIssue};
pub use serialize::outer_html;
pub use tokenizer::{FragmentTokenizer, Token};
pub use tree::{Attribute, DomTree, ElementData, Node, NodeId, NodeKind, is_void_element, print_tree};
