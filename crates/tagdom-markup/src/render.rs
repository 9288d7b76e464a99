//! Template rendering.
//!
//! A template invocation is an ordered sequence of literal segments
//! interleaved with interpolated values, the segment count being one greater
//! than the value count. Rendering folds the two together and trims the
//! result.

use crate::markup::Markup;
use crate::value::Value;

/// Render a template from its literal segments and interpolated values.
///
/// Accumulates `segment[i] + transform(value[i])` in order; the final
/// segment has no following value. Leading and trailing whitespace is
/// trimmed from the accumulated string before it is wrapped as trusted
/// markup.
///
/// The fold is total: a length mismatch between segments and values never
/// panics, the shorter side simply contributes nothing at the tail.
#[must_use]
pub fn render(segments: &[&str], values: &[Value]) -> Markup {
    let mut accum = String::new();
    for i in 0..segments.len().max(values.len()) {
        if let Some(segment) = segments.get(i) {
            accum.push_str(segment);
        }
        if let Some(value) = values.get(i) {
            accum.push_str(&value.transform());
        }
    }
    Markup::trusted(accum.trim())
}

/// The tagged-template call convention for [`render`].
///
/// Takes alternating string literals and `{ expression }` interpolations
/// and expands to a [`render`] call, converting each interpolation through
/// [`Value::from`]:
///
/// ```
/// use tagdom_markup::html;
///
/// let name = "<script>";
/// let markup = html!("<p>" { name } "</p>");
/// assert_eq!(markup.as_str(), "<p>&lt;script&gt;</p>");
/// ```
#[macro_export]
macro_rules! html {
    // Done, last token was a segment.
    (@seg [$($seg:expr,)*] [$($val:expr,)*]) => {
        $crate::render(&[$($seg,)*], &[$($val,)*])
    };
    // A literal segment; a value (or the end) must follow.
    (@seg [$($seg:expr,)*] [$($val:expr,)*] $lit:literal $($rest:tt)*) => {
        $crate::html!(@val [$($seg,)* $lit,] [$($val,)*] $($rest)*)
    };
    // An interpolation with no preceding segment gets an implicit empty one.
    (@seg [$($seg:expr,)*] [$($val:expr,)*] { $value:expr } $($rest:tt)*) => {
        $crate::html!(@val [$($seg,)* "",] [$($val,)*] { $value } $($rest)*)
    };
    (@seg $($rest:tt)*) => {
        compile_error!("expected a string literal segment")
    };
    // Done, last token was an interpolation.
    (@val [$($seg:expr,)*] [$($val:expr,)*]) => {
        $crate::render(&[$($seg,)*], &[$($val,)*])
    };
    // An interpolation; a segment (or the end) must follow.
    (@val [$($seg:expr,)*] [$($val:expr,)*] { $value:expr } $($rest:tt)*) => {
        $crate::html!(@seg [$($seg,)*] [$($val,)* $crate::Value::from($value),] $($rest)*)
    };
    (@val $($rest:tt)*) => {
        compile_error!("expected a `{ value }` interpolation between segments")
    };
    ($($input:tt)*) => {
        $crate::html!(@seg [] [] $($input)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::Value;

    #[test]
    fn fold_tolerates_length_mismatch() {
        let markup = crate::render(&["a", "b", "c"], &[Value::from("x")]);
        assert_eq!(markup.as_str(), "axbc");
    }
}
