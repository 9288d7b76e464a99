//! Tagged-template HTML builder with injection-safe escaping and DOM
//! materialization.
//!
//! # Scope
//!
//! This crate ties the two halves together:
//! - **Rendering** ([`html!`], [`render`], [`Markup`], [`Value`]) - build a
//!   safely-escaped HTML string from literal segments and interpolated
//!   values
//! - **Materialization** ([`dom!`], [`materialize`], [`DomFragment`]) -
//!   parse a rendered string into live fragment nodes and serialize nodes
//!   back into trusted template values
//!
//! ```
//! use tagdom::{dom, html};
//!
//! let user = "<script>alert(1)</script>";
//! let markup = html!("<p>" { user } "</p>");
//! assert_eq!(markup.as_str(), "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>");
//!
//! let fragment = dom!("<p>" { user } "</p>");
//! assert!(fragment.only_node().is_some());
//! ```

pub use tagdom_dom as dom;
pub use tagdom_markup as markup;

pub use tagdom_dom::{
    DomFragment, DomTree, Node, NodeId, NodeKind, ParseIssue, materialize, outer_html, print_tree,
};
pub use tagdom_markup::{Markup, Value, escape_attribute_value, escape_text, html, render};

/// Commonly used items for glob import.
pub mod prelude {
    pub use crate::{DomFragment, Markup, NodeId, Value, dom, html, materialize, render};
}

/// Render a template and materialize it into DOM nodes in one call.
///
/// Takes the same input as [`html!`] and expands to a render followed by
/// [`materialize`], yielding a [`DomFragment`].
#[macro_export]
macro_rules! dom {
    ($($input:tt)*) => {
        $crate::materialize(&$crate::html!($($input)*))
    };
}
