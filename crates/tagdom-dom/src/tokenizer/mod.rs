//! Fragment tokenizer for converting input into tokens.

/// The tokenizer state machine.
pub mod core;
/// The token types emitted to tree construction.
pub mod token;

pub use self::core::{FragmentTokenizer, TokenizerState};
pub use token::Token;
