//! Provide the notation grammar and its tokenizer.

use alloc::borrow::Cow;
use alloc::string::String;

use vc_value::Key;

use crate::{AccessorStep, BracketMode, NotationSyntaxError, OffsetStep, SyntaxErrorKind};

// -----------------------------------------------------------------------------
// Notation

/// An interface where the type implementing this trait
/// can be tokenized into [`OffsetStep`]s.
///
/// This allows users to customize the syntax of notation.
///
/// This crate provides implementations for [`&str`] and [`&String`].
///
/// # Default Syntax
///
/// - Named: `name` or `.name`, e.g. `foo.bar`
/// - Index: `[digits]`, e.g. `[12]`
/// - Key: `['text']` or `["text"]`, e.g. `['bar']`
///
/// Empty segments are discarded, so `a..b`, `.a` and `[0].a` are accepted.
/// A bracket group ends a segment, so `a[0]b` is `a`, `[0]`, `b`.
///
/// [`&str`]: str
/// [`&String`]: String
pub trait Notation<'a> {
    /// Tokenizes the notation and returns an iterator of [`OffsetStep`].
    ///
    /// The iterator stops after the first error.
    fn to_steps(
        &self,
        mode: BracketMode,
    ) -> impl Iterator<Item = Result<OffsetStep<'a>, NotationSyntaxError>>;
}

impl<'a> Notation<'a> for &'a str {
    #[inline]
    fn to_steps(
        &self,
        mode: BracketMode,
    ) -> impl Iterator<Item = Result<OffsetStep<'a>, NotationSyntaxError>> {
        Tokenizer::new(self, mode)
    }
}

impl<'a> Notation<'a> for &'a String {
    #[inline]
    fn to_steps(
        &self,
        mode: BracketMode,
    ) -> impl Iterator<Item = Result<OffsetStep<'a>, NotationSyntaxError>> {
        Tokenizer::new(self.as_str(), mode)
    }
}

// -----------------------------------------------------------------------------
// Tokenizer

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Running,
    Done,
}

/// The tokenizer of the default notation grammar.
///
/// Yields borrowed steps, so tokenizing never copies the notation.
///
/// # Examples
///
/// ```
/// use vc_access::{AccessorStep, BracketMode, Tokenizer};
/// use vc_value::Key;
///
/// let steps: Vec<_> = Tokenizer::new("foo.bar[1]['baz']", BracketMode::Strict)
///     .map(|res| res.unwrap().step)
///     .collect();
///
/// assert_eq!(steps, [
///     AccessorStep::Named("foo".into()),
///     AccessorStep::Named("bar".into()),
///     AccessorStep::Keyed(Key::Index(1)),
///     AccessorStep::Keyed(Key::from("baz")),
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    notation: &'a str,
    pos: usize,
    mode: BracketMode,
    state: State,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `notation`.
    #[inline]
    pub const fn new(notation: &'a str, mode: BracketMode) -> Self {
        Self {
            notation,
            pos: 0,
            mode,
            state: State::Start,
        }
    }

    #[inline]
    fn error(&self, offset: usize, kind: SyntaxErrorKind) -> NotationSyntaxError {
        NotationSyntaxError::new(self.notation, offset, kind)
    }

    /// Scans a named segment starting at `self.pos`.
    fn name(&mut self) -> OffsetStep<'a> {
        let notation = self.notation;
        let bytes = notation.as_bytes();
        let start = self.pos;

        let mut end = start;
        while end < bytes.len() {
            match bytes[end] {
                b'.' | b'[' => break,
                b']' if self.mode == BracketMode::Strict => break,
                b']' => {
                    log::warn!("stray `]` at offset {end} of `{notation}` kept in a named step");
                }
                _ => {}
            }
            end += 1;
        }

        self.pos = end;
        OffsetStep::new(AccessorStep::Named(Cow::Borrowed(&notation[start..end])), start)
    }

    /// Scans a bracket group starting at `self.pos`, which points at `[`.
    fn bracket(&mut self) -> Result<OffsetStep<'a>, NotationSyntaxError> {
        let notation = self.notation;
        let bytes = notation.as_bytes();
        let open = self.pos;

        if let Some(&quote) = bytes.get(open + 1)
            && (quote == b'\'' || quote == b'"')
        {
            let body = open + 2;
            let len = bytes[body..]
                .windows(2)
                .position(|pair| pair[0] == quote && pair[1] == b']');
            if let Some(len) = len
                && len > 0
            {
                self.pos = body + len + 2;
                let key = Key::Name(Cow::Borrowed(&notation[body..body + len]));
                return Ok(OffsetStep::new(AccessorStep::Keyed(key), open));
            }
        }

        let Some(len) = bytes[open + 1..].iter().position(|&byte| byte == b']') else {
            self.pos = bytes.len();
            return self.reject(open, bytes.len(), SyntaxErrorKind::UnclosedBracket);
        };
        let close = open + 1 + len;
        let content = &notation[open + 1..close];
        self.pos = close + 1;

        if !content.is_empty() && content.bytes().all(|byte| byte.is_ascii_digit()) {
            return match content.parse::<usize>() {
                Ok(index) => Ok(OffsetStep::new(
                    AccessorStep::Keyed(Key::Index(index)),
                    open,
                )),
                Err(_) => self.reject(open, close + 1, SyntaxErrorKind::IndexOverflow),
            };
        }

        self.reject(open, close + 1, SyntaxErrorKind::InvalidBracket)
    }

    /// Fails in strict mode, demotes `notation[start..end]` to a named step otherwise.
    fn reject(
        &self,
        start: usize,
        end: usize,
        kind: SyntaxErrorKind,
    ) -> Result<OffsetStep<'a>, NotationSyntaxError> {
        match self.mode {
            BracketMode::Strict => Err(self.error(start, kind)),
            BracketMode::Loose => {
                let notation = self.notation;
                let raw = &notation[start..end];
                log::warn!(
                    "malformed bracket `{raw}` at offset {start} of `{notation}` \
                     kept as a named step: {kind}"
                );
                Ok(OffsetStep::new(AccessorStep::Named(Cow::Borrowed(raw)), start))
            }
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<OffsetStep<'a>, NotationSyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Done => return None,
            State::Start => {
                self.state = State::Running;
                if self.notation.is_empty() {
                    self.state = State::Done;
                    return Some(Err(self.error(0, SyntaxErrorKind::Empty)));
                }
            }
            State::Running => {}
        }

        let notation = self.notation;
        let bytes = notation.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos] == b'.' {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            self.state = State::Done;
            return None;
        }

        let res = match bytes[self.pos] {
            b'[' => self.bracket(),
            b']' if self.mode == BracketMode::Strict => {
                Err(self.error(self.pos, SyntaxErrorKind::UnexpectedBracket))
            }
            _ => Ok(self.name()),
        };

        if res.is_err() {
            self.state = State::Done;
        }
        Some(res)
    }
}

impl core::iter::FusedIterator for Tokenizer<'_> {}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::string::String;
    use alloc::vec::Vec;

    use vc_value::Key;

    use super::{Notation, Tokenizer};
    use crate::{AccessorStep, BracketMode, NotationSyntaxError, SyntaxErrorKind};

    fn steps(
        notation: &str,
        mode: BracketMode,
    ) -> Result<Vec<AccessorStep<'_>>, NotationSyntaxError> {
        Tokenizer::new(notation, mode)
            .map(|res| res.map(|offset_step| offset_step.step))
            .collect()
    }

    fn strict(notation: &str) -> Result<Vec<AccessorStep<'_>>, NotationSyntaxError> {
        steps(notation, BracketMode::Strict)
    }

    fn named(name: &str) -> AccessorStep<'_> {
        AccessorStep::Named(Cow::Borrowed(name))
    }

    fn index(index: usize) -> AccessorStep<'static> {
        AccessorStep::Keyed(Key::Index(index))
    }

    fn key(name: &str) -> AccessorStep<'_> {
        AccessorStep::Keyed(Key::from(name))
    }

    fn kind_of(
        res: Result<Vec<AccessorStep<'_>>, NotationSyntaxError>,
    ) -> (usize, SyntaxErrorKind) {
        let err = res.unwrap_err();
        (err.offset, err.kind)
    }

    #[test]
    fn mixed_notation() {
        assert_eq!(
            strict("foo.bar[1].baz").unwrap(),
            [named("foo"), named("bar"), index(1), named("baz")]
        );
        assert_eq!(
            strict(r#"a['b']["c"][0]"#).unwrap(),
            [named("a"), key("b"), key("c"), index(0)]
        );
    }

    #[test]
    fn empty_segments_are_discarded() {
        assert_eq!(strict("a..b").unwrap(), [named("a"), named("b")]);
        assert_eq!(strict(".a.").unwrap(), [named("a")]);
        assert_eq!(strict("[0].a").unwrap(), [index(0), named("a")]);
        assert_eq!(strict("a[0]b").unwrap(), [named("a"), index(0), named("b")]);
        assert!(strict("...").unwrap().is_empty());
    }

    #[test]
    fn multi_digit_indices() {
        assert_eq!(strict("[12][007]").unwrap(), [index(12), index(7)]);
    }

    #[test]
    fn quoted_keys() {
        assert_eq!(strict("['a b']").unwrap(), [key("a b")]);
        assert_eq!(strict(r#"["it's"]"#).unwrap(), [key("it's")]);
        assert_eq!(strict("['a]b']").unwrap(), [key("a]b")]);
        assert_eq!(strict("['0']").unwrap(), [key("0")]);
    }

    #[test]
    fn strict_rejections() {
        assert_eq!(kind_of(strict("")), (0, SyntaxErrorKind::Empty));
        assert_eq!(kind_of(strict("a[0")), (1, SyntaxErrorKind::UnclosedBracket));
        assert_eq!(kind_of(strict("a]")), (1, SyntaxErrorKind::UnexpectedBracket));
        assert_eq!(kind_of(strict("a.[b]")), (2, SyntaxErrorKind::InvalidBracket));
        assert_eq!(kind_of(strict("[]")), (0, SyntaxErrorKind::InvalidBracket));
        assert_eq!(kind_of(strict("['']")), (0, SyntaxErrorKind::InvalidBracket));
        assert_eq!(kind_of(strict("[-1]")), (0, SyntaxErrorKind::InvalidBracket));
        assert_eq!(kind_of(strict("['a]")), (0, SyntaxErrorKind::InvalidBracket));
        assert_eq!(
            kind_of(strict("[99999999999999999999999999]")),
            (0, SyntaxErrorKind::IndexOverflow)
        );
    }

    #[test]
    fn loose_demotes_to_named() {
        let loose = |notation| steps(notation, BracketMode::Loose);

        assert_eq!(loose("a[b].c").unwrap(), [named("a"), named("[b]"), named("c")]);
        assert_eq!(loose("a[0").unwrap(), [named("a"), named("[0")]);
        assert_eq!(loose("a]b.c").unwrap(), [named("a]b"), named("c")]);
        assert_eq!(loose("[0]").unwrap(), [index(0)]);
        assert_eq!(kind_of(loose("")), (0, SyntaxErrorKind::Empty));
    }

    #[test]
    fn offsets_and_fusing() {
        let offsets: Vec<_> = Tokenizer::new("ab.c[1]", BracketMode::Strict)
            .map(|res| res.unwrap().offset)
            .collect();
        assert_eq!(offsets, [Some(0), Some(3), Some(4)]);

        let mut tokenizer = Tokenizer::new("a]b", BracketMode::Strict);
        assert!(tokenizer.next().unwrap().is_ok());
        assert!(tokenizer.next().unwrap().is_err());
        assert!(tokenizer.next().is_none());
    }

    #[test]
    fn owned_notation() {
        let notation = String::from("x[2]");
        let count = (&notation).to_steps(BracketMode::Strict).count();
        assert_eq!(count, 2);
    }
}
