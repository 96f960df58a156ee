//! Greeting construction.
//!
//! This module provides the default greeting and a name-personalized
//! variant. The name-less form is the fallback of the parameterized form
//! whenever no usable name is supplied.

use std::borrow::Cow;
use tracing::debug;

/// The greeting returned when no usable name is supplied.
pub const DEFAULT_GREETING: &str = "Hello, World!";

/// Returns the default greeting.
///
/// ## Examples
///
/// ```
/// use greeter::greet;
///
/// assert_eq!(greet(), "Hello, World!");
/// ```
pub fn greet() -> &'static str {
    DEFAULT_GREETING
}

/// Returns a greeting personalized for `name`.
///
/// Falls back to [`greet()`] when `name` is `None`, empty, or contains
/// only whitespace. A usable name appears in the output exactly as given;
/// trimming is applied only to decide emptiness, never to the output.
/// Returns `Cow::Borrowed` on the fallback path, `Cow::Owned` when a
/// personalized greeting was built.
///
/// ## Examples
///
/// ```
/// use greeter::greet_name;
///
/// // Personalized greeting
/// assert_eq!(greet_name(Some("Alice")), "Hello, Alice!");
///
/// // Absent names fall back to the default
/// assert_eq!(greet_name(None), "Hello, World!");
///
/// // Blank names fall back as well
/// assert_eq!(greet_name(Some("   ")), "Hello, World!");
/// ```
pub fn greet_name(name: Option<&str>) -> Cow<'static, str> {
    match name {
        Some(n) if !n.trim().is_empty() => Cow::Owned(format!("Hello, {}!", n)),
        _ => {
            debug!("No usable name supplied, using default greeting");
            Cow::Borrowed(DEFAULT_GREETING)
        }
    }
}
