use crate::entities::WordClass;

/// An error raised by the conjugation engine.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new<K>(kind: K) -> Self
    where
        ErrorKind: From<K>,
    {
        Self { kind: kind.into() }
    }

    /// Test if the error was raised while constructing a lexeme.
    pub fn is_invalid_lexeme(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidLexeme { .. })
    }

    /// Test if the error was raised because a form doesn't apply to a word.
    pub fn is_unsupported_form(&self) -> bool {
        matches!(self.kind, ErrorKind::UnsupportedForm { .. })
    }
}

impl<K> From<K> for Error
where
    ErrorKind: From<K>,
{
    #[inline]
    fn from(value: K) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ErrorKind {
    #[error("Invalid {what} `{value}`: {reason}")]
    InvalidLexeme {
        what: &'static str,
        value: Box<str>,
        reason: &'static str,
    },
    #[error("Form `{form}` is not supported by {class} words")]
    UnsupportedForm { class: WordClass, form: &'static str },
    #[error("Failed to parse configuration")]
    Config(#[from] toml::de::Error),
}

impl ErrorKind {
    pub(crate) fn invalid_lexeme(what: &'static str, value: &str, reason: &'static str) -> Self {
        Self::InvalidLexeme {
            what,
            value: value.into(),
            reason,
        }
    }
}
