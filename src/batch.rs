use anyhow::{Context, Result};
use melody_core::{Corpus, Melody};
use melody_midi::Decoder;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::BatchConfig;

/// A source file that produced a melody, in corpus order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedFile {
    pub path: PathBuf,
    pub notes: usize,
}

/// What a batch run did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub encoded: Vec<EncodedFile>,
    /// Files with no sounding notes, left out of every output
    pub skipped: Vec<PathBuf>,
    pub corpus_path: PathBuf,
    pub midi_outputs: Vec<PathBuf>,
}

impl BatchReport {
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize run report")?;
        fs::write(path, format!("{}\n", json))
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

/// Name of the n-th (1-based) regenerated MIDI file.
pub fn output_midi_path(output_dir: &Path, index: usize) -> PathBuf {
    output_dir.join(format!("output_midi_{}.mid", index))
}

/// Files in `dir` with the given extension. Order follows the directory
/// listing unless `sort` is set.
pub fn find_midi_files(dir: &Path, extension: &str, sort: bool) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();

        // Follows symlinks, so a linked file counts as a file
        if path.extension().and_then(|s| s.to_str()) == Some(extension) && path.is_file() {
            files.push(path);
        }
    }

    if sort {
        files.sort();
    }

    Ok(files)
}

pub fn write_corpus(path: &Path, corpus: &Corpus) -> Result<()> {
    fs::write(path, corpus.to_string())
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Decode each melody into `output_midi_<n>.mid`, creating `output_dir` if needed.
pub fn write_midi_outputs(
    melodies: &[Melody],
    output_dir: &Path,
    decoder: &Decoder,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let mut outputs = Vec::with_capacity(melodies.len());
    for (idx, melody) in melodies.iter().enumerate() {
        let path = output_midi_path(output_dir, idx + 1);
        decoder.write_file(melody, &path)?;
        log::debug!("wrote {}", path.display());
        outputs.push(path);
    }

    Ok(outputs)
}

/// Encode every MIDI file of the input directory into the corpus, then
/// regenerate one MIDI file per melody.
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport> {
    let files = find_midi_files(&config.input_dir, &config.extension, config.sort_inputs)?;
    log::info!(
        "Processing {} files from {}",
        files.len(),
        config.input_dir.display()
    );

    let mut report = BatchReport {
        corpus_path: config.corpus_path.clone(),
        ..BatchReport::default()
    };
    let mut melodies = Vec::new();

    for path in files {
        let melody = melody_midi::encode_file(&path)?;
        if melody.is_empty() {
            let name = path.file_name().unwrap_or(path.as_os_str());
            log::warn!("No notes found in {}", name.to_string_lossy());
            report.skipped.push(path);
            continue;
        }

        report.encoded.push(EncodedFile {
            notes: melody.len(),
            path,
        });
        melodies.push(melody);
    }

    let corpus = Corpus::new(melodies);
    write_corpus(&config.corpus_path, &corpus)?;
    log::info!(
        "Text sequences have been written to {}",
        config.corpus_path.display()
    );

    let decoder = Decoder::new(config.min_duration);
    report.midi_outputs = write_midi_outputs(&corpus.melodies, &config.output_dir, &decoder)?;
    log::info!(
        "Wrote {} MIDI files to {}",
        report.midi_outputs.len(),
        config.output_dir.display()
    );

    Ok(report)
}

/// Regenerate MIDI files from a corpus text file, one per line.
pub fn decode_corpus(
    corpus_path: &Path,
    output_dir: &Path,
    min_duration: u32,
) -> Result<Vec<PathBuf>> {
    let text = fs::read_to_string(corpus_path)
        .with_context(|| format!("Failed to read {}", corpus_path.display()))?;
    let corpus = Corpus::parse(&text).with_context(|| format!("In {}", corpus_path.display()))?;

    write_midi_outputs(&corpus.melodies, output_dir, &Decoder::new(min_duration))
}
