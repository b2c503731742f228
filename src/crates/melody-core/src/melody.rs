use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ParseError, Result};
use crate::pitch::{Pitch, Symbol};

/// One `note:duration` entry of a melody.
///
/// On the encode side `duration` is the rest in ticks before the note started;
/// on the decode side it is read as the note length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MelodyNote {
    pub symbol: Symbol,
    pub duration: u32,
}

impl MelodyNote {
    pub fn new(symbol: impl Into<Symbol>, duration: u32) -> Self {
        Self {
            symbol: symbol.into(),
            duration,
        }
    }

    pub fn rest(duration: u32) -> Self {
        Self {
            symbol: Symbol::Rest,
            duration,
        }
    }

    pub fn pitch(&self) -> Option<Pitch> {
        match self.symbol {
            Symbol::Note(pitch) => Some(pitch),
            Symbol::Rest => None,
        }
    }
}

impl fmt::Display for MelodyNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.symbol, self.duration)
    }
}

impl FromStr for MelodyNote {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self> {
        let (symbol, duration) = token
            .split_once(':')
            .ok_or_else(|| ParseError::MissingSeparator(token.to_string()))?;

        let symbol = symbol.parse()?;
        let duration = duration
            .parse()
            .map_err(|_| ParseError::invalid_duration(token, duration))?;

        Ok(MelodyNote { symbol, duration })
    }
}

/// An ordered, immutable sequence of notes taken from one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Melody {
    notes: Vec<MelodyNote>,
}

impl Melody {
    pub fn new(notes: Vec<MelodyNote>) -> Self {
        Self { notes }
    }

    pub fn notes(&self) -> &[MelodyNote] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MelodyNote> {
        self.notes.iter()
    }
}

impl FromIterator<MelodyNote> for Melody {
    fn from_iter<I: IntoIterator<Item = MelodyNote>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Melody {
    type Item = &'a MelodyNote;
    type IntoIter = std::slice::Iter<'a, MelodyNote>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

/// Formats as a single corpus line without the trailing newline.
impl fmt::Display for Melody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, note) in self.notes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", note)?;
        }
        Ok(())
    }
}

impl FromStr for Melody {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self> {
        line.split_whitespace().map(str::parse).collect()
    }
}

/// Every melody of a batch run, in collection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pub melodies: Vec<Melody>,
}

impl Corpus {
    pub fn new(melodies: Vec<Melody>) -> Self {
        Self { melodies }
    }

    /// Reads corpus text back, one melody per non-blank line.
    pub fn parse(text: &str) -> Result<Self> {
        let melodies = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| line.parse::<Melody>().map_err(|e| e.at_line(idx + 1)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { melodies })
    }

    pub fn len(&self) -> usize {
        self.melodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.melodies.is_empty()
    }
}

/// One newline-terminated line per melody.
impl fmt::Display for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for melody in &self.melodies {
            writeln!(f, "{}", melody)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(midi: u8, duration: u32) -> MelodyNote {
        MelodyNote::new(Pitch::from_midi(midi), duration)
    }

    #[test]
    fn test_token_format() {
        assert_eq!(note(60, 0).to_string(), "C5:0");
        assert_eq!(note(66, 240).to_string(), "f5:240");
        assert_eq!(MelodyNote::rest(500).to_string(), "R:500");
    }

    #[test]
    fn test_token_parse() {
        assert_eq!("C5:0".parse::<MelodyNote>(), Ok(note(60, 0)));
        assert_eq!("R:120".parse::<MelodyNote>(), Ok(MelodyNote::rest(120)));
    }

    #[test]
    fn test_token_parse_errors() {
        assert_eq!(
            "C5".parse::<MelodyNote>(),
            Err(ParseError::MissingSeparator("C5".to_string()))
        );
        assert_eq!(
            "C5:-3".parse::<MelodyNote>(),
            Err(ParseError::invalid_duration("C5:-3", "-3"))
        );
        assert_eq!(
            "Z3:10".parse::<MelodyNote>(),
            Err(ParseError::UnknownPitch("Z3".to_string()))
        );
    }

    #[test]
    fn test_melody_line() {
        let melody = Melody::new(vec![note(60, 0), note(62, 480), note(64, 0)]);
        assert_eq!(melody.to_string(), "C5:0 D5:480 E5:0");
        assert_eq!("C5:0  D5:480\tE5:0".parse::<Melody>(), Ok(melody));
    }

    #[test]
    fn test_empty_melody_is_empty_line() {
        assert_eq!(Melody::default().to_string(), "");
        assert!("".parse::<Melody>().unwrap().is_empty());
    }

    #[test]
    fn test_corpus_text() {
        let corpus = Corpus::new(vec![
            Melody::new(vec![note(60, 0)]),
            Melody::new(vec![note(67, 10), note(69, 20)]),
        ]);
        let text = corpus.to_string();
        assert_eq!(text, "C5:0\nG5:10 A5:20\n");
        assert_eq!(Corpus::parse(&text), Ok(corpus));
    }

    #[test]
    fn test_corpus_skips_blank_lines() {
        let corpus = Corpus::parse("C5:0\n\n   \nD5:1\n").unwrap();
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn test_corpus_reports_line() {
        let err = Corpus::parse("C5:0\nC5:0 Z3:4\n").unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.to_string(), "line 2: unknown pitch token 'Z3'");
    }
}
