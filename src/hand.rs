use std::error::Error;
use std::fmt;

/// A hand of letter tiles: counts for each of the 26 lowercase ASCII letters.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Hand {
    counts: [u32; 26],
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HandError {
    /// A word requested more copies of a letter than the hand holds.
    InsufficientTiles { letter: char },
}

impl fmt::Display for HandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandError::InsufficientTiles { letter } => {
                write!(f, "not enough '{letter}' tiles in hand")
            }
        }
    }
}

impl Error for HandError {}

fn letter_index(c: char) -> Option<usize> {
    let lower = c.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some((lower as u8 - b'a') as usize)
    } else {
        None
    }
}

impl Hand {
    /// Counts the occurrences of each letter in `sequence`.
    /// Characters that are not ASCII letters can never be tiles and are ignored.
    pub fn frequency(sequence: &str) -> Hand {
        let mut counts = [0; 26];
        for c in sequence.chars() {
            if let Some(idx) = letter_index(c) {
                counts[idx] += 1;
            }
        }
        Hand { counts }
    }

    pub fn with_tile(mut self, letter: char) -> Hand {
        if let Some(idx) = letter_index(letter) {
            self.counts[idx] += 1;
        }
        self
    }

    pub fn count(&self, letter: char) -> u32 {
        letter_index(letter).map_or(0, |idx| self.counts[idx])
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Returns a new hand with every letter of `word` removed.
    /// Fails if any letter is over-requested; `self` is never modified.
    pub fn consume(&self, word: &str) -> Result<Hand, HandError> {
        let needed = Hand::frequency(word);
        let mut remaining = *self;
        for (idx, &need) in needed.counts.iter().enumerate() {
            if need > remaining.counts[idx] {
                let letter = (b'a' + idx as u8) as char;
                return Err(HandError::InsufficientTiles { letter });
            }
            remaining.counts[idx] -= need;
        }
        Ok(remaining)
    }

    pub fn letters(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(idx, &count)| ((b'a' + idx as u8) as char, count))
    }
}

impl fmt::Display for Hand {
    /// One token per remaining tile, grouped by letter: `a x x l l l e` style.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (letter, count) in self.letters() {
            for _ in 0..count {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{letter}")?;
                first = false;
            }
        }
        Ok(())
    }
}
