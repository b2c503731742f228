//! Core types for the melody corpus tools
//!
//! A melody is an ordered list of `note:duration` tokens. Note tokens are a
//! pitch-class letter followed by an octave number, where the letters are
//! `C c D d E F f G g A a B` and a lowercase letter is the sharp of the natural
//! before it. A corpus holds one melody per line.
//!
//! # Examples
//!
//! ```
//! use melody_core::{Melody, MelodyNote, Pitch};
//!
//! let melody = Melody::new(vec![
//!     MelodyNote::new(Pitch::from_midi(60), 0),
//!     MelodyNote::new(Pitch::from_midi(62), 480),
//! ]);
//! assert_eq!(melody.to_string(), "C5:0 D5:480");
//! assert_eq!("C5:0 D5:480".parse::<Melody>().unwrap(), melody);
//! ```

pub mod error;
pub mod melody;
pub mod pitch;

pub use error::{ParseError, Result};
pub use melody::{Corpus, Melody, MelodyNote};
pub use pitch::{Pitch, PitchClass, Symbol, PITCH_LETTERS, REST_TOKEN};
