//! Template rendering and escaping for the tagdom HTML builder.
//!
//! # Scope
//!
//! This crate implements:
//! - **Value Transformer** - turns interpolated values into string fragments,
//!   escaping raw text and passing trusted markup through untouched
//! - **Template Renderer** - concatenates literal segments with transformed
//!   values and trims the result
//! - **[`Markup`]** - a newtype distinguishing trusted HTML from raw
//!   escapable text
//! - **[`html!`]** - the tagged-template call convention
//!
//! # Design
//!
//! Rendering is a pure, single-pass fold with no error conditions: any value
//! shape without a dedicated rule falls back to generic JSON serialization
//! rather than failing. Nothing here touches a DOM; materialization is a
//! separate capability supplied by the `tagdom-dom` adapter.

/// Context-specific escaping of markup characters.
pub mod escape;
/// The trusted-markup newtype.
pub mod markup;
/// Template rendering.
pub mod render;
/// Interpolated value kinds and their transformation rules.
pub mod value;

pub use escape::{escape_attribute_value, escape_text};
pub use markup::Markup;
pub use render::render;
pub use value::Value;
