//! Error-to-text conversion used when a report embeds an error payload.
//!
//! The rule has three tiers:
//!
//! - string payloads (`String`, `&str`, `Box<str>`, `Cow<str>`) are used
//!   verbatim, which is what their `Display` implementations produce;
//! - nullable text ([`NullableText`]) renders its text, or [`NULL_TEXT`] when
//!   it holds nothing;
//! - any other payload is rendered through its `Display` implementation.

use std::borrow::Cow;
use std::ffi::CStr;
use std::fmt;

/// Text rendered for a [`NullableText`] that holds no string.
pub const NULL_TEXT: &str = "nullptr error";

/// Renders an error payload as report text.
///
/// # Examples
///
/// ```
/// use hooked_outcome::{NullableText, describe_error};
///
/// assert_eq!(describe_error("Division by zero"), "Division by zero");
/// assert_eq!(describe_error(&NullableText::null()), "nullptr error");
/// assert_eq!(describe_error(&404_u16), "404");
/// ```
#[must_use]
pub fn describe_error<E>(error: &E) -> String
where
    E: fmt::Display + ?Sized,
{
    error.to_string()
}

/// Error text that may be absent, such as a message borrowed from a C string
/// pointer that can be null.
///
/// # Examples
///
/// ```
/// use hooked_outcome::{NullableText, Outcome};
///
/// let missing: Outcome<u8, NullableText<'_>> = Outcome::Err(NullableText::from(None::<&str>));
/// assert_eq!(missing.unwrap_or_log("lookup", 0), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NullableText<'a>(Option<Cow<'a, str>>);

impl<'a> NullableText<'a> {
    /// Creates text that holds no string.
    #[must_use]
    pub const fn null() -> Self {
        Self(None)
    }

    /// Wraps present text.
    #[must_use]
    pub fn new(text: impl Into<Cow<'a, str>>) -> Self {
        Self(Some(text.into()))
    }

    /// Returns the held text, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Returns `true` when no text is held.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for NullableText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or(NULL_TEXT))
    }
}

impl<'a> From<Option<&'a str>> for NullableText<'a> {
    fn from(text: Option<&'a str>) -> Self {
        Self(text.map(Cow::Borrowed))
    }
}

impl From<Option<String>> for NullableText<'_> {
    fn from(text: Option<String>) -> Self {
        Self(text.map(Cow::Owned))
    }
}

impl<'a> From<Option<&'a CStr>> for NullableText<'a> {
    fn from(text: Option<&'a CStr>) -> Self {
        Self(text.map(CStr::to_string_lossy))
    }
}

impl<'a> From<&'a str> for NullableText<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl From<String> for NullableText<'_> {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::borrowed("File not found")]
    #[case::with_punctuation("bad input: '42'")]
    #[case::empty("")]
    fn string_payloads_are_verbatim(#[case] text: &str) {
        assert_eq!(describe_error(text), text);
        assert_eq!(describe_error(&String::from(text)), text);
        assert_eq!(describe_error(&Cow::Borrowed(text)), text);
    }

    #[rstest]
    fn null_text_renders_placeholder() {
        assert_eq!(describe_error(&NullableText::null()), NULL_TEXT);
        assert_eq!(describe_error(&NullableText::from(None::<String>)), NULL_TEXT);
    }

    #[rstest]
    fn present_text_renders_verbatim() {
        let text = NullableText::from(Some("disk full"));
        assert!(!text.is_null());
        assert_eq!(describe_error(&text), "disk full");
    }

    #[rstest]
    fn c_strings_are_decoded() {
        let raw = c"socket closed";
        assert_eq!(
            describe_error(&NullableText::from(Some(raw))),
            "socket closed"
        );
        assert_eq!(describe_error(&NullableText::from(None::<&CStr>)), NULL_TEXT);
    }

    #[rstest]
    #[case::integer(describe_error(&-7_i32), "-7")]
    #[case::float(describe_error(&2.5_f64), "2.5")]
    #[case::character(describe_error(&'x'), "x")]
    fn other_payloads_use_display(#[case] rendered: String, #[case] expected: &str) {
        assert_eq!(rendered, expected);
    }
}
