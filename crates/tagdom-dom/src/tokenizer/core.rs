//! The fragment tokenizer state machine.
//!
//! A deliberately small cousin of a full HTML tokenizer: enough states to
//! cover tags, attributes in all three quoting styles, self-closing tags,
//! and comments. Everything it cannot classify is tolerated, recorded as a
//! parse issue, and recovered from; tokenization never fails.

use strum_macros::Display;

use super::token::Token;
use crate::parser::ParseIssue;
use crate::tree::Attribute;

/// The tokenizer state machine's states.
///
/// Named after their counterparts in
/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization),
/// keeping only the subset a fragment builder needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenizerState {
    /// Plain character data between tags.
    Data,
    /// Just consumed `<`.
    TagOpen,
    /// Just consumed `</`.
    EndTagOpen,
    /// Inside a start or end tag name.
    TagName,
    /// After the tag name or an attribute, before the next attribute name.
    BeforeAttributeName,
    /// Inside an attribute name.
    AttributeName,
    /// After an attribute name, deciding between `=` and a new attribute.
    AfterAttributeName,
    /// After `=`, before the attribute value.
    BeforeAttributeValue,
    /// Inside a `"`-quoted attribute value.
    AttributeValueDoubleQuoted,
    /// Inside a `'`-quoted attribute value.
    AttributeValueSingleQuoted,
    /// Inside an unquoted attribute value.
    AttributeValueUnquoted,
    /// After the closing quote of an attribute value.
    AfterAttributeValueQuoted,
    /// Just consumed `/` before the expected `>`.
    SelfClosingStartTag,
    /// Just consumed `<!`.
    MarkupDeclarationOpen,
    /// Just consumed `<!--`.
    CommentStart,
    /// Inside comment data.
    Comment,
    /// Consumed one `-` inside a comment.
    CommentEndDash,
    /// Consumed `--` inside a comment.
    CommentEnd,
    /// Inside a declaration we do not understand; consumed up to `>`.
    BogusComment,
}

/// The fragment tokenizer.
///
/// Feed it the full input, call [`FragmentTokenizer::run`], then take the
/// token stream and any recorded issues with
/// [`FragmentTokenizer::into_parts`].
#[derive(Debug)]
pub struct FragmentTokenizer {
    state: TokenizerState,
    input: String,
    current_pos: usize,
    current_input_character: Option<char>,
    reconsume: bool,
    at_eof: bool,
    current_token: Option<Token>,
    token_stream: Vec<Token>,
    issues: Vec<ParseIssue>,
}

impl FragmentTokenizer {
    /// Create a new tokenizer for the given input. The initial state is the
    /// data state.
    #[must_use]
    pub const fn new(input: String) -> Self {
        FragmentTokenizer {
            state: TokenizerState::Data,
            input,
            current_pos: 0,
            current_input_character: None,
            reconsume: false,
            at_eof: false,
            current_token: None,
            token_stream: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Run the state machine to completion. The last emitted token is
    /// always [`Token::EndOfFile`].
    pub fn run(&mut self) {
        while !self.at_eof {
            if self.reconsume {
                self.reconsume = false;
            } else {
                self.current_input_character = self.consume();
            }
            match self.state {
                TokenizerState::Data => self.handle_data_state(),
                TokenizerState::TagOpen => self.handle_tag_open_state(),
                TokenizerState::EndTagOpen => self.handle_end_tag_open_state(),
                TokenizerState::TagName => self.handle_tag_name_state(),
                TokenizerState::BeforeAttributeName => self.handle_before_attribute_name_state(),
                TokenizerState::AttributeName => self.handle_attribute_name_state(),
                TokenizerState::AfterAttributeName => self.handle_after_attribute_name_state(),
                TokenizerState::BeforeAttributeValue => self.handle_before_attribute_value_state(),
                TokenizerState::AttributeValueDoubleQuoted => {
                    self.handle_attribute_value_double_quoted_state();
                }
                TokenizerState::AttributeValueSingleQuoted => {
                    self.handle_attribute_value_single_quoted_state();
                }
                TokenizerState::AttributeValueUnquoted => {
                    self.handle_attribute_value_unquoted_state();
                }
                TokenizerState::AfterAttributeValueQuoted => {
                    self.handle_after_attribute_value_quoted_state();
                }
                TokenizerState::SelfClosingStartTag => self.handle_self_closing_start_tag_state(),
                TokenizerState::MarkupDeclarationOpen => {
                    self.handle_markup_declaration_open_state();
                }
                TokenizerState::CommentStart => self.handle_comment_start_state(),
                TokenizerState::Comment => self.handle_comment_state(),
                TokenizerState::CommentEndDash => self.handle_comment_end_dash_state(),
                TokenizerState::CommentEnd => self.handle_comment_end_state(),
                TokenizerState::BogusComment => self.handle_bogus_comment_state(),
            }
        }
    }

    /// Consume the tokenizer and return the token stream plus any issues
    /// recorded along the way.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Token>, Vec<ParseIssue>) {
        (self.token_stream, self.issues)
    }
}

// =============================================================================
// State Handlers
// =============================================================================

impl FragmentTokenizer {
    /// Character data between tags.
    fn handle_data_state(&mut self) {
        match self.current_input_character {
            Some('<') => self.switch_to(TokenizerState::TagOpen),
            None => self.emit_eof_token(),
            Some(c) => self.emit_character_token(c),
        }
    }

    /// Just consumed `<`.
    fn handle_tag_open_state(&mut self) {
        match self.current_input_character {
            Some('!') => self.switch_to(TokenizerState::MarkupDeclarationOpen),
            Some('/') => self.switch_to(TokenizerState::EndTagOpen),
            Some(c) if c.is_ascii_alphabetic() => {
                self.current_token = Some(Token::new_start_tag());
                self.reconsume_in(TokenizerState::TagName);
            }
            None => {
                self.record_issue("eof before tag name");
                self.emit_character_token('<');
                self.emit_eof_token();
            }
            Some(_) => {
                // A bare `<` that does not open a tag stays character data.
                self.record_issue("invalid first character of tag name");
                self.emit_character_token('<');
                self.reconsume_in(TokenizerState::Data);
            }
        }
    }

    /// Just consumed `</`.
    fn handle_end_tag_open_state(&mut self) {
        match self.current_input_character {
            Some(c) if c.is_ascii_alphabetic() => {
                self.current_token = Some(Token::new_end_tag());
                self.reconsume_in(TokenizerState::TagName);
            }
            Some('>') => {
                self.record_issue("missing end tag name");
                self.switch_to(TokenizerState::Data);
            }
            None => {
                self.record_issue("eof before end tag name");
                self.emit_character_token('<');
                self.emit_character_token('/');
                self.emit_eof_token();
            }
            Some(_) => {
                self.record_issue("invalid first character of end tag name");
                self.current_token = Some(Token::new_comment());
                self.reconsume_in(TokenizerState::BogusComment);
            }
        }
    }

    /// Inside a tag name.
    fn handle_tag_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('>') => {
                self.emit_token();
                self.switch_to(TokenizerState::Data);
            }
            None => self.eof_in_tag(),
            Some(c) => {
                if let Some(token) = self.current_token.as_mut() {
                    token.append_to_tag_name(c.to_ascii_lowercase());
                }
            }
        }
    }

    /// Between the tag name (or an attribute) and the next attribute name.
    fn handle_before_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('>') => {
                self.emit_token();
                self.switch_to(TokenizerState::Data);
            }
            None => self.eof_in_tag(),
            Some(_) => {
                if let Some(token) = self.current_token.as_mut() {
                    token.start_new_attribute();
                }
                self.reconsume_in(TokenizerState::AttributeName);
            }
        }
    }

    /// Inside an attribute name.
    fn handle_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::AfterAttributeName);
            }
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('=') => self.switch_to(TokenizerState::BeforeAttributeValue),
            Some('>') => {
                self.emit_token();
                self.switch_to(TokenizerState::Data);
            }
            None => self.eof_in_tag(),
            Some(c) => {
                if let Some(token) = self.current_token.as_mut() {
                    token.append_to_attribute_name(c.to_ascii_lowercase());
                }
            }
        }
    }

    /// After an attribute name: `=`, a new attribute, or the end of the tag.
    fn handle_after_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('=') => self.switch_to(TokenizerState::BeforeAttributeValue),
            Some('>') => {
                self.emit_token();
                self.switch_to(TokenizerState::Data);
            }
            None => self.eof_in_tag(),
            Some(_) => {
                if let Some(token) = self.current_token.as_mut() {
                    token.start_new_attribute();
                }
                self.reconsume_in(TokenizerState::AttributeName);
            }
        }
    }

    /// After `=`, before the value.
    fn handle_before_attribute_value_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('"') => self.switch_to(TokenizerState::AttributeValueDoubleQuoted),
            Some('\'') => self.switch_to(TokenizerState::AttributeValueSingleQuoted),
            Some('>') => {
                self.record_issue("missing attribute value");
                self.emit_token();
                self.switch_to(TokenizerState::Data);
            }
            None => self.eof_in_tag(),
            Some(_) => self.reconsume_in(TokenizerState::AttributeValueUnquoted),
        }
    }

    /// Inside a `"`-quoted value.
    fn handle_attribute_value_double_quoted_state(&mut self) {
        match self.current_input_character {
            Some('"') => self.switch_to(TokenizerState::AfterAttributeValueQuoted),
            None => self.eof_in_tag(),
            Some(c) => {
                if let Some(token) = self.current_token.as_mut() {
                    token.append_to_attribute_value(c);
                }
            }
        }
    }

    /// Inside a `'`-quoted value.
    fn handle_attribute_value_single_quoted_state(&mut self) {
        match self.current_input_character {
            Some('\'') => self.switch_to(TokenizerState::AfterAttributeValueQuoted),
            None => self.eof_in_tag(),
            Some(c) => {
                if let Some(token) = self.current_token.as_mut() {
                    token.append_to_attribute_value(c);
                }
            }
        }
    }

    /// Inside an unquoted value.
    fn handle_attribute_value_unquoted_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('>') => {
                self.emit_token();
                self.switch_to(TokenizerState::Data);
            }
            None => self.eof_in_tag(),
            Some(c) => {
                if let Some(token) = self.current_token.as_mut() {
                    token.append_to_attribute_value(c);
                }
            }
        }
    }

    /// After the closing quote of a value.
    fn handle_after_attribute_value_quoted_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('>') => {
                self.emit_token();
                self.switch_to(TokenizerState::Data);
            }
            None => self.eof_in_tag(),
            Some(_) => {
                self.record_issue("missing whitespace between attributes");
                self.reconsume_in(TokenizerState::BeforeAttributeName);
            }
        }
    }

    /// Just consumed `/` inside a tag.
    fn handle_self_closing_start_tag_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                if let Some(token) = self.current_token.as_mut() {
                    token.set_self_closing();
                }
                self.emit_token();
                self.switch_to(TokenizerState::Data);
            }
            None => self.eof_in_tag(),
            Some(_) => {
                self.record_issue("unexpected solidus in tag");
                self.reconsume_in(TokenizerState::BeforeAttributeName);
            }
        }
    }

    /// Just consumed `<!`. Only comments are understood; DOCTYPE and CDATA
    /// declarations are tolerated as bogus comments.
    fn handle_markup_declaration_open_state(&mut self) {
        match self.current_input_character {
            Some('-') if self.peek_codepoint(0) == Some('-') => {
                let _ = self.consume();
                self.current_token = Some(Token::new_comment());
                self.switch_to(TokenizerState::CommentStart);
            }
            None => {
                self.record_issue("eof in markup declaration");
                self.current_token = Some(Token::new_comment());
                self.emit_token();
                self.emit_eof_token();
            }
            Some(_) => {
                self.record_issue("unsupported markup declaration");
                self.current_token = Some(Token::new_comment());
                self.reconsume_in(TokenizerState::BogusComment);
            }
        }
    }

    /// Just consumed `<!--`.
    fn handle_comment_start_state(&mut self) {
        match self.current_input_character {
            Some('-') => self.switch_to(TokenizerState::CommentEndDash),
            Some('>') => {
                self.record_issue("abrupt closing of empty comment");
                self.emit_token();
                self.switch_to(TokenizerState::Data);
            }
            None => self.eof_in_comment(),
            Some(c) => {
                if let Some(token) = self.current_token.as_mut() {
                    token.append_to_comment(c);
                }
                self.switch_to(TokenizerState::Comment);
            }
        }
    }

    /// Inside comment data.
    fn handle_comment_state(&mut self) {
        match self.current_input_character {
            Some('-') => self.switch_to(TokenizerState::CommentEndDash),
            None => self.eof_in_comment(),
            Some(c) => {
                if let Some(token) = self.current_token.as_mut() {
                    token.append_to_comment(c);
                }
            }
        }
    }

    /// Consumed one `-` inside a comment.
    fn handle_comment_end_dash_state(&mut self) {
        match self.current_input_character {
            Some('-') => self.switch_to(TokenizerState::CommentEnd),
            None => self.eof_in_comment(),
            Some(c) => {
                if let Some(token) = self.current_token.as_mut() {
                    token.append_to_comment('-');
                    token.append_to_comment(c);
                }
                self.switch_to(TokenizerState::Comment);
            }
        }
    }

    /// Consumed `--` inside a comment.
    fn handle_comment_end_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.emit_token();
                self.switch_to(TokenizerState::Data);
            }
            Some('-') => {
                if let Some(token) = self.current_token.as_mut() {
                    token.append_to_comment('-');
                }
            }
            None => self.eof_in_comment(),
            Some(c) => {
                if let Some(token) = self.current_token.as_mut() {
                    token.append_str_to_comment("--");
                    token.append_to_comment(c);
                }
                self.switch_to(TokenizerState::Comment);
            }
        }
    }

    /// Inside a declaration we do not understand; swallow up to `>`.
    fn handle_bogus_comment_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.emit_token();
                self.switch_to(TokenizerState::Data);
            }
            None => {
                self.emit_token();
                self.emit_eof_token();
            }
            Some(c) => {
                if let Some(token) = self.current_token.as_mut() {
                    token.append_to_comment(c);
                }
            }
        }
    }
}

// =============================================================================
// State Transition and Input Helpers
// =============================================================================

impl FragmentTokenizer {
    /// Transition to a new state. The next character is consumed on the
    /// next iteration of the main loop.
    const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// Transition to a new state without consuming the current character;
    /// it will be processed again in the new state.
    const fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.reconsume = true;
        self.state = new_state;
    }

    /// Return the character at the current position and advance past it,
    /// or `None` at end of input.
    fn consume(&mut self) -> Option<char> {
        if let Some(c) = self.input[self.current_pos..].chars().next() {
            self.current_pos += c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    /// Peek at a codepoint at the given offset from the current position
    /// without consuming it.
    #[must_use]
    fn peek_codepoint(&self, offset: usize) -> Option<char> {
        self.input[self.current_pos..].chars().nth(offset)
    }

    /// ASCII whitespace as the tokenizer sees it: tab, LF, FF, space.
    const fn is_whitespace_char(c: char) -> bool {
        matches!(c, ' ' | '\t' | '\n' | '\x0C')
    }
}

// =============================================================================
// Token Emission and Recovery Helpers
// =============================================================================

impl FragmentTokenizer {
    /// Emit the current token to the output stream.
    ///
    /// Start tags get their attribute lists deduplicated here: a later
    /// attribute with an already-seen name is dropped and recorded as an
    /// issue, keeping the first occurrence.
    fn emit_token(&mut self) {
        if let Some(mut token) = self.current_token.take() {
            if let Token::StartTag { attributes, .. } = &mut token {
                let mut kept: Vec<Attribute> = Vec::with_capacity(attributes.len());
                let mut dropped = false;
                for attr in attributes.drain(..) {
                    if kept.iter().any(|seen| seen.name == attr.name) {
                        dropped = true;
                    } else {
                        kept.push(attr);
                    }
                }
                *attributes = kept;
                if dropped {
                    self.record_issue("duplicate attribute");
                }
            }
            self.token_stream.push(token);
        }
    }

    /// Emit a character token directly, bypassing `current_token`.
    fn emit_character_token(&mut self, c: char) {
        self.token_stream.push(Token::Character { data: c });
    }

    /// Emit an end-of-file token and stop the main loop.
    fn emit_eof_token(&mut self) {
        self.token_stream.push(Token::EndOfFile);
        self.at_eof = true;
    }

    /// End of input inside a tag: the partial tag is discarded.
    fn eof_in_tag(&mut self) {
        self.record_issue("eof in tag");
        self.current_token = None;
        self.emit_eof_token();
    }

    /// End of input inside a comment: the partial comment is kept.
    fn eof_in_comment(&mut self) {
        self.record_issue("eof in comment");
        self.emit_token();
        self.emit_eof_token();
    }

    /// Record a recovery action. Issues are not fatal; the tokenizer
    /// continues.
    fn record_issue(&mut self, message: &str) {
        self.issues.push(ParseIssue::new(message, self.current_pos));
    }
}
