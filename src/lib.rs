//! Batch driver for the melody corpus
//!
//! Scans a directory of MIDI files, encodes each into a one-line melody of
//! `note:rest` tokens, writes the lines to a corpus file and regenerates one
//! MIDI file per melody for checking by ear.
//!
//! # Examples
//!
//! ```no_run
//! use melody_corpus::{run_batch, BatchConfig};
//!
//! let report = run_batch(&BatchConfig::default())?;
//! println!("{} melodies, {} skipped", report.encoded.len(), report.skipped.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod batch;
pub mod config;
pub mod logger;

pub use batch::{
    decode_corpus, find_midi_files, output_midi_path, run_batch, write_corpus, write_midi_outputs,
    BatchReport, EncodedFile,
};
pub use config::BatchConfig;
pub use logger::Logger;
