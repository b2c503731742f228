//! MIDI encoding and decoding for melodies
//!
//! [`encode_file`] reads a Standard MIDI File into a [`Melody`] of
//! `note:rest` entries; [`Decoder`] writes a melody back out as a one-track
//! file, flooring each note length at [`DEFAULT_MIN_DURATION`] ticks.
//!
//! [`Melody`]: melody_core::Melody

pub mod decoder;
pub mod encoder;
pub mod error;

pub use decoder::{effective_duration, Decoder, DEFAULT_MIN_DURATION};
pub use encoder::{encode_bytes, encode_file, encode_smf, encode_tracks, Encoder};
pub use error::DecodeError;
