use std::path::PathBuf;

use melody_midi::DEFAULT_MIN_DURATION;

pub const DEFAULT_INPUT_DIR: &str = "musicDatasetOriginal";
pub const DEFAULT_OUTPUT_DIR: &str = "musicDatasetSimplified";
pub const DEFAULT_CORPUS_FILE: &str = "inputMelodies.txt";
pub const DEFAULT_EXTENSION: &str = "mid";

/// Everything a batch run reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Directory scanned for MIDI files (not recursive)
    pub input_dir: PathBuf,
    /// Directory receiving `output_midi_<n>.mid`; created if missing
    pub output_dir: PathBuf,
    /// Corpus text file, overwritten on every run
    pub corpus_path: PathBuf,
    /// File extension to pick up, without the leading dot
    pub extension: String,
    /// Sort input file names instead of using directory listing order
    pub sort_inputs: bool,
    /// Floor applied to every duration when writing MIDI back out
    pub min_duration: u32,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            corpus_path: PathBuf::from(DEFAULT_CORPUS_FILE),
            extension: DEFAULT_EXTENSION.to_string(),
            sort_inputs: false,
            min_duration: DEFAULT_MIN_DURATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BatchConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("musicDatasetOriginal"));
        assert_eq!(config.output_dir, PathBuf::from("musicDatasetSimplified"));
        assert_eq!(config.corpus_path, PathBuf::from("inputMelodies.txt"));
        assert_eq!(config.extension, "mid");
        assert!(!config.sort_inputs);
        assert_eq!(config.min_duration, 500);
    }
}
