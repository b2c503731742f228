use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Failure to read a note token or a corpus line back from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown pitch token '{0}'")]
    UnknownPitch(String),

    #[error("invalid octave in note token '{0}'")]
    InvalidOctave(String),

    #[error("missing ':' between note and duration in '{0}'")]
    MissingSeparator(String),

    #[error("invalid duration '{value}' in '{token}'")]
    InvalidDuration { token: String, value: String },

    #[error("line {line}: {error}")]
    Line { line: usize, error: Box<ParseError> },
}

impl ParseError {
    pub fn unknown_pitch(token: impl Into<String>) -> Self {
        ParseError::UnknownPitch(token.into())
    }

    pub fn invalid_octave(token: impl Into<String>) -> Self {
        ParseError::InvalidOctave(token.into())
    }

    pub fn invalid_duration(token: impl Into<String>, value: impl Into<String>) -> Self {
        ParseError::InvalidDuration {
            token: token.into(),
            value: value.into(),
        }
    }

    pub fn at_line(self, line: usize) -> Self {
        ParseError::Line {
            line,
            error: Box::new(self),
        }
    }

    /// The 1-based corpus line the error was found on, if known.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Line { line, .. } => Some(*line),
            _ => None,
        }
    }
}
