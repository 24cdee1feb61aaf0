use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------------
// BracketMode

/// How the tokenizer treats bracket content that is neither an index nor a quoted key.
///
/// - `Strict`: reject it with a [`NotationSyntaxError`].
/// - `Loose`: keep the raw text, brackets included, as a named step.
///
/// `Loose` reproduces the permissive grammar of older notation parsers,
/// where `foo[bar]` silently became the named segments `foo` and `[bar]`.
///
/// [`NotationSyntaxError`]: crate::NotationSyntaxError
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketMode {
    #[default]
    Strict,
    Loose,
}

// -----------------------------------------------------------------------------
// AccessOptions

/// Instance level settings of an [`Accessor`](crate::Accessor).
///
/// Every field has a default, so partial configurations deserialize.
///
/// # Examples
///
/// ```
/// use vc_access::{AccessOptions, BracketMode};
///
/// let options: AccessOptions = serde_json::from_str(r#"{ "strict": true }"#).unwrap();
/// assert!(options.strict);
/// assert_eq!(options.brackets, BracketMode::Strict);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessOptions {
    /// Fail reads with [`PathNotFoundError`](crate::PathNotFoundError)
    /// instead of falling back to a default.
    pub strict: bool,
    /// Grammar used for malformed bracket content.
    pub brackets: BracketMode,
}

impl AccessOptions {
    /// Returns options with `strict` set.
    #[inline]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns options with `brackets` set.
    #[inline]
    pub const fn with_brackets(mut self, brackets: BracketMode) -> Self {
        self.brackets = brackets;
        self
    }
}

// -----------------------------------------------------------------------------
// Tests
