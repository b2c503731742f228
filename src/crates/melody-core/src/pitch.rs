use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, Result};

/// Letters for the 12 pitch classes in chromatic order.
/// A lowercase letter is the sharp of the natural before it.
pub const PITCH_LETTERS: [char; 12] = ['C', 'c', 'D', 'd', 'E', 'F', 'f', 'G', 'g', 'A', 'a', 'B'];

/// Token used in place of a note for an explicit rest.
pub const REST_TOKEN: &str = "R";

/// One of the 12 pitch classes, independent of octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Pitch class of a MIDI note number (`note % 12`).
    pub fn from_midi(note: u8) -> Self {
        PitchClass(note % 12)
    }

    pub fn from_index(index: u8) -> Option<Self> {
        (index < 12).then_some(PitchClass(index))
    }

    /// Inverse of [`PitchClass::letter`].
    pub fn from_letter(letter: char) -> Option<Self> {
        let index = match letter {
            'C' => 0,
            'c' => 1,
            'D' => 2,
            'd' => 3,
            'E' => 4,
            'F' => 5,
            'f' => 6,
            'G' => 7,
            'g' => 8,
            'A' => 9,
            'a' => 10,
            'B' => 11,
            _ => return None,
        };
        Some(PitchClass(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn letter(self) -> char {
        PITCH_LETTERS[self.0 as usize]
    }
}

/// A pitch class together with its octave (`note / 12`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pitch {
    pub class: PitchClass,
    pub octave: u8,
}

impl Pitch {
    pub fn new(class: PitchClass, octave: u8) -> Self {
        Self { class, octave }
    }

    pub fn from_midi(note: u8) -> Self {
        Self {
            class: PitchClass::from_midi(note),
            octave: note / 12,
        }
    }

    /// MIDI note number, or `None` if it falls outside 0-127.
    pub fn midi_number(self) -> Option<u8> {
        let number = self.class.index() as u16 + 12 * self.octave as u16;
        u8::try_from(number).ok().filter(|&n| n <= 127)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class.letter(), self.octave)
    }
}

impl FromStr for Pitch {
    type Err = ParseError;

    /// Splits the token into a letter and the trailing run of digits.
    fn from_str(token: &str) -> Result<Self> {
        let letter_len = token.trim_end_matches(|c: char| c.is_ascii_digit()).len();
        let (letter, digits) = token.split_at(letter_len);

        if digits.is_empty() {
            return Err(ParseError::invalid_octave(token));
        }
        let octave: u8 = digits
            .parse()
            .map_err(|_| ParseError::invalid_octave(token))?;

        let mut chars = letter.chars();
        let class = match (chars.next(), chars.next()) {
            (Some(c), None) => PitchClass::from_letter(c),
            _ => None,
        }
        .ok_or_else(|| ParseError::unknown_pitch(token))?;

        Ok(Pitch::new(class, octave))
    }
}

/// What a melody entry sounds: a pitch, or the rest marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Note(Pitch),
    Rest,
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Note(pitch) => pitch.fmt(f),
            Symbol::Rest => f.write_str(REST_TOKEN),
        }
    }
}

impl FromStr for Symbol {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self> {
        if token == REST_TOKEN {
            Ok(Symbol::Rest)
        } else {
            token.parse().map(Symbol::Note)
        }
    }
}

impl From<Pitch> for Symbol {
    fn from(pitch: Pitch) -> Self {
        Symbol::Note(pitch)
    }
}

impl serde::Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_note_names() {
        assert_eq!(Pitch::from_midi(60).to_string(), "C5");
        assert_eq!(Pitch::from_midi(61).to_string(), "c5");
        assert_eq!(Pitch::from_midi(69).to_string(), "A5");
        assert_eq!(Pitch::from_midi(0).to_string(), "C0");
        assert_eq!(Pitch::from_midi(127).to_string(), "G10");
    }

    #[test]
    fn test_letter_table_is_its_own_inverse() {
        for index in 0..12 {
            let class = PitchClass::from_index(index).unwrap();
            assert_eq!(PitchClass::from_letter(class.letter()), Some(class));
        }
        assert_eq!(PitchClass::from_index(12), None);
        assert_eq!(PitchClass::from_letter('e'), None);
        assert_eq!(PitchClass::from_letter('b'), None);
    }

    #[test]
    fn test_parse_pitch() {
        assert_eq!("C5".parse::<Pitch>(), Ok(Pitch::from_midi(60)));
        assert_eq!("a4".parse::<Pitch>(), Ok(Pitch::from_midi(58)));
        assert_eq!("G10".parse::<Pitch>(), Ok(Pitch::from_midi(127)));
    }

    #[test]
    fn test_parse_unknown_letter() {
        assert_eq!(
            "Z3".parse::<Pitch>(),
            Err(ParseError::UnknownPitch("Z3".to_string()))
        );
        assert_eq!(
            "Cc3".parse::<Pitch>(),
            Err(ParseError::UnknownPitch("Cc3".to_string()))
        );
        assert!(matches!("3".parse::<Pitch>(), Err(ParseError::UnknownPitch(_))));
    }

    #[test]
    fn test_parse_bad_octave() {
        assert_eq!(
            "Cx".parse::<Pitch>(),
            Err(ParseError::InvalidOctave("Cx".to_string()))
        );
        assert!(matches!("C4x".parse::<Pitch>(), Err(ParseError::InvalidOctave(_))));
        assert!(matches!("C".parse::<Pitch>(), Err(ParseError::InvalidOctave(_))));
        assert!(matches!("C999".parse::<Pitch>(), Err(ParseError::InvalidOctave(_))));
    }

    #[test]
    fn test_midi_number_range() {
        assert_eq!(Pitch::new(PitchClass::from_midi(7), 10).midi_number(), Some(127));
        assert_eq!(Pitch::new(PitchClass::from_midi(8), 10).midi_number(), None);
        assert_eq!(Pitch::new(PitchClass::from_midi(0), 200).midi_number(), None);
    }

    #[test]
    fn test_rest_symbol() {
        assert_eq!("R".parse::<Symbol>(), Ok(Symbol::Rest));
        assert_eq!(Symbol::Rest.to_string(), "R");
        assert!(matches!("R1".parse::<Symbol>(), Err(ParseError::UnknownPitch(_))));
    }

    proptest! {
        #[test]
        fn pitch_token_roundtrips_for_every_midi_note(note in 0u8..=127) {
            let pitch = Pitch::from_midi(note);
            let parsed: Pitch = pitch.to_string().parse().unwrap();
            prop_assert_eq!(parsed.class, PitchClass::from_midi(note));
            prop_assert_eq!(parsed.octave, note / 12);
            prop_assert_eq!(parsed.midi_number(), Some(note));
        }
    }
}
