use std::io;
use std::path::PathBuf;

use melody_core::{ParseError, Pitch};
use thiserror::Error;

/// Errors raised while turning a melody back into a MIDI file.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("note {0} is outside the MIDI range 0-127")]
    NoteOutOfRange(Pitch),

    #[error("duration {0} exceeds the largest MIDI delta time")]
    DurationOutOfRange(u32),

    #[error("failed to encode MIDI data")]
    Encode(#[source] io::Error),

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
