use anyhow::{Context, Result};
use melody_core::{Melody, MelodyNote, Pitch};
use midly::{MidiMessage, Smf, Track, TrackEvent, TrackEventKind};
use std::path::Path;

/// Turns a stream of MIDI track events into a melody.
///
/// The running clock is shared by every event fed in, across tracks. A sounding
/// `NoteOn` records `delta - clock` (floored at zero) as its rest and then resets
/// the clock to its own delta; a `NoteOff` adds its delta to the clock. A `NoteOn`
/// with velocity 0 touches neither.
#[derive(Debug, Default)]
pub struct Encoder {
    last_event_time: u64,
    notes: Vec<MelodyNote>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, event: &TrackEvent<'_>) {
        let delta = event.delta.as_int() as u64;

        match event.kind {
            TrackEventKind::Midi {
                message: MidiMessage::NoteOn { key, vel },
                ..
            } if vel.as_int() > 0 => {
                // Bounded by the 28-bit delta, so it always fits
                let rest = delta.saturating_sub(self.last_event_time) as u32;
                self.notes
                    .push(MelodyNote::new(Pitch::from_midi(key.as_int()), rest));
                self.last_event_time = delta;
            }
            TrackEventKind::Midi {
                message: MidiMessage::NoteOff { .. },
                ..
            } => {
                self.last_event_time += delta;
            }
            _ => {}
        }
    }

    pub fn feed_track(&mut self, track: &[TrackEvent<'_>]) {
        for event in track {
            self.feed(event);
        }
    }

    pub fn finish(self) -> Melody {
        Melody::new(self.notes)
    }
}

/// Encode tracks in order with one shared clock.
pub fn encode_tracks(tracks: &[Track<'_>]) -> Melody {
    let mut encoder = Encoder::new();
    for track in tracks {
        encoder.feed_track(track);
    }
    encoder.finish()
}

pub fn encode_smf(smf: &Smf<'_>) -> Melody {
    encode_tracks(&smf.tracks)
}

pub fn encode_bytes(data: &[u8]) -> Result<Melody> {
    let smf = Smf::parse(data).context("Failed to parse MIDI file")?;
    Ok(encode_smf(&smf))
}

/// Read and encode one MIDI file.
pub fn encode_file(path: &Path) -> Result<Melody> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read MIDI file: {}", path.display()))?;

    let melody = encode_bytes(&data).with_context(|| format!("In {}", path.display()))?;
    log::debug!("{}: {} notes", path.display(), melody.len());

    Ok(melody)
}
