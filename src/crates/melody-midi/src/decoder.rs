use melody_core::{Melody, MelodyNote, Symbol};
use midly::{
    num::{u15, u28, u4, u7},
    Format, Header, MetaMessage, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind,
};
use std::path::Path;

use crate::error::DecodeError;

pub type Result<T> = std::result::Result<T, DecodeError>;

/// Shortest note length written back out, in ticks.
pub const DEFAULT_MIN_DURATION: u32 = 500;

/// Ticks per quarter note in MIDI output.
pub const TICKS_PER_QUARTER: u16 = 480;

/// Velocity for every note written back out.
pub const NOTE_VELOCITY: u8 = 64;

/// Largest delta time a variable-length quantity can hold.
const MAX_DELTA: u32 = (1 << 28) - 1;

/// Raise `duration` to at least `min_duration`.
pub fn effective_duration(duration: u32, min_duration: u32) -> u32 {
    duration.max(min_duration)
}

/// Builds a single-track MIDI file from a melody, reading each duration as
/// the length of its note.
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    min_duration: u32,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DURATION)
    }
}

impl Decoder {
    pub fn new(min_duration: u32) -> Self {
        Self { min_duration }
    }

    pub fn min_duration(&self) -> u32 {
        self.min_duration
    }

    pub fn decode(&self, melody: &Melody) -> Result<Track<'static>> {
        let mut track: Track<'static> = Vec::with_capacity(melody.len() * 2 + 1);

        for note in melody {
            self.push_note(&mut track, note)?;
        }

        track.push(TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
        });

        log::debug!("decoded {} notes into {} events", melody.len(), track.len());
        Ok(track)
    }

    /// Parse `(token, duration)` pairs, then decode them.
    pub fn decode_tokens<I, S>(&self, pairs: I) -> Result<Track<'static>>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let melody = pairs
            .into_iter()
            .map(|(token, duration)| -> Result<MelodyNote> {
                let symbol: Symbol = token.as_ref().parse()?;
                Ok(MelodyNote::new(symbol, duration))
            })
            .collect::<Result<Melody>>()?;

        self.decode(&melody)
    }

    pub fn to_smf(&self, melody: &Melody) -> Result<Smf<'static>> {
        let mut smf = Smf::new(Header::new(
            Format::Parallel,
            Timing::Metrical(u15::new(TICKS_PER_QUARTER)),
        ));
        smf.tracks.push(self.decode(melody)?);
        Ok(smf)
    }

    pub fn to_bytes(&self, melody: &Melody) -> Result<Vec<u8>> {
        let smf = self.to_smf(melody)?;
        let mut buf = Vec::new();
        smf.write_std(&mut buf).map_err(DecodeError::Encode)?;
        Ok(buf)
    }

    /// Write a melody as a MIDI file. Nothing touches the disk unless the
    /// whole melody encodes.
    pub fn write_file(&self, melody: &Melody, path: &Path) -> Result<()> {
        let buf = self.to_bytes(melody)?;
        std::fs::write(path, buf).map_err(|source| DecodeError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn push_note(&self, track: &mut Track<'static>, note: &MelodyNote) -> Result<()> {
        let duration = effective_duration(note.duration, self.min_duration);
        if duration > MAX_DELTA {
            return Err(DecodeError::DurationOutOfRange(duration));
        }

        match note.symbol {
            Symbol::Rest => {
                track.push(channel_event(
                    duration,
                    MidiMessage::NoteOff {
                        key: u7::new(0),
                        vel: u7::new(0),
                    },
                ));
            }
            Symbol::Note(pitch) => {
                let key = pitch
                    .midi_number()
                    .map(u7::new)
                    .ok_or(DecodeError::NoteOutOfRange(pitch))?;
                let vel = u7::new(NOTE_VELOCITY);

                track.push(channel_event(0, MidiMessage::NoteOn { key, vel }));
                track.push(channel_event(duration, MidiMessage::NoteOff { key, vel }));
            }
        }

        Ok(())
    }
}

fn channel_event(delta: u32, message: MidiMessage) -> TrackEvent<'static> {
    TrackEvent {
        delta: u28::new(delta),
        kind: TrackEventKind::Midi {
            channel: u4::new(0),
            message,
        },
    }
}
