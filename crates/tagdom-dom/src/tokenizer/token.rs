//! Tokens emitted by the fragment tokenizer.

use core::fmt;

use crate::tree::Attribute;

/// The output of tokenization: start tags, end tags, character data,
/// comments, and end-of-file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A start tag with its name, self-closing flag, and attribute list.
    StartTag {
        /// The tag name, lowercased.
        name: String,
        /// Whether the tag was written `<name ... />`.
        self_closing: bool,
        /// The attributes in source order.
        attributes: Vec<Attribute>,
    },
    /// An end tag. Attributes on end tags are dropped during tokenization.
    EndTag {
        /// The tag name, lowercased.
        name: String,
    },
    /// A single character of data.
    Character {
        /// The character.
        data: char,
    },
    /// A comment with its data.
    Comment {
        /// The comment data, without the `<!--`/`-->` delimiters.
        data: String,
    },
    /// End-of-file signals the end of input.
    EndOfFile,
}

impl Token {
    /// A fresh start tag with an empty name and no attributes.
    #[must_use]
    pub const fn new_start_tag() -> Self {
        Self::StartTag {
            name: String::new(),
            self_closing: false,
            attributes: Vec::new(),
        }
    }

    /// A fresh end tag with an empty name.
    #[must_use]
    pub const fn new_end_tag() -> Self {
        Self::EndTag {
            name: String::new(),
        }
    }

    /// A fresh comment with empty data.
    #[must_use]
    pub const fn new_comment() -> Self {
        Self::Comment {
            data: String::new(),
        }
    }

    /// Append a character to the tag name.
    ///
    /// # Panics
    ///
    /// Panics if called on a non-tag token, indicating a tokenizer bug.
    pub fn append_to_tag_name(&mut self, c: char) {
        match self {
            Self::StartTag { name, .. } | Self::EndTag { name } => name.push(c),
            _ => panic!("append_to_tag_name called on non-tag token"),
        }
    }

    /// Set the self-closing flag.
    ///
    /// End tags have no such flag; a stray `/` before `>` on an end tag is
    /// tolerated and ignored.
    pub fn set_self_closing(&mut self) {
        if let Self::StartTag { self_closing, .. } = self {
            *self_closing = true;
        }
    }

    /// Append a character to the comment data.
    ///
    /// # Panics
    ///
    /// Panics if called on a non-comment token, indicating a tokenizer bug.
    pub fn append_to_comment(&mut self, c: char) {
        match self {
            Self::Comment { data } => data.push(c),
            _ => panic!("append_to_comment called on non-comment token"),
        }
    }

    /// Append a string to the comment data.
    ///
    /// # Panics
    ///
    /// Panics if called on a non-comment token, indicating a tokenizer bug.
    pub fn append_str_to_comment(&mut self, s: &str) {
        match self {
            Self::Comment { data } => data.push_str(s),
            _ => panic!("append_str_to_comment called on non-comment token"),
        }
    }

    /// Start a new attribute on a start tag.
    ///
    /// On an end tag this is a no-op; end tag attributes are dropped.
    pub fn start_new_attribute(&mut self) {
        if let Self::StartTag { attributes, .. } = self {
            attributes.push(Attribute::new(String::new(), String::new()));
        }
    }

    /// Append a character to the current (last) attribute's name.
    pub fn append_to_attribute_name(&mut self, c: char) {
        if let Self::StartTag { attributes, .. } = self
            && let Some(attr) = attributes.last_mut()
        {
            attr.name.push(c);
        }
    }

    /// Append a character to the current (last) attribute's value.
    pub fn append_to_attribute_value(&mut self, c: char) {
        if let Self::StartTag { attributes, .. } = self
            && let Some(attr) = attributes.last_mut()
        {
            attr.value.push(c);
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartTag {
                name,
                self_closing,
                attributes,
            } => {
                write!(f, "<{name}")?;
                for attr in attributes {
                    write!(f, " {}=\"{}\"", attr.name, attr.value)?;
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag { name } => write!(f, "</{name}>"),
            Self::Comment { data } => write!(f, "<!--{data}-->"),
            Self::Character { data } => match data {
                '\n' => write!(f, "Character(\\n)"),
                '\t' => write!(f, "Character(\\t)"),
                ' ' => write!(f, "Character(SPACE)"),
                c => write!(f, "Character({c})"),
            },
            Self::EndOfFile => write!(f, "EOF"),
        }
    }
}
