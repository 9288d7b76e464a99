//! The trusted-markup newtype.

use core::fmt;

use crate::escape::escape_text;

/// A string known to be HTML-safe.
///
/// `Markup` separates "raw escapable text" from "trusted markup": the only
/// ways to obtain one are the renderer's own output, [`Markup::escape`]
/// (which makes text safe by escaping it), and [`Markup::trusted`] (the
/// explicit "trust this string" escape hatch). A `Markup` interpolated into
/// another template is emitted verbatim, exactly once, at any nesting depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Wrap a string the caller vouches for, bypassing escaping.
    ///
    /// This is the deliberate trust boundary of the crate: anything passed
    /// here reaches the page unmodified.
    #[must_use]
    pub fn trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Make raw text safe by escaping tag delimiters.
    ///
    /// The result is trusted markup, so nested interpolation never escapes
    /// it a second time.
    #[must_use]
    pub fn escape(text: &str) -> Self {
        Self(escape_text(text))
    }

    /// The final markup string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the markup string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Markup> for String {
    fn from(markup: Markup) -> Self {
        markup.into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_produces_safe_markup() {
        assert_eq!(Markup::escape("<b>x</b>").as_str(), "&lt;b&gt;x&lt;/b&gt;");
    }

    #[test]
    fn trusted_passes_through_verbatim() {
        assert_eq!(Markup::trusted("<b>x</b>").as_str(), "<b>x</b>");
    }
}
