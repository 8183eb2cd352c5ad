use crate::hand::Hand;
use rand::Rng;
use std::collections::HashSet;

pub const VOWELS: &[u8] = b"aeiou";
pub const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";

pub const DEFAULT_HAND_SIZE: u32 = 7;

/// Scrabble-standard point values, indexed by letter (a through z).
const LETTER_VALUES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

pub fn letter_value(letter: char) -> u32 {
    let lower = letter.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        LETTER_VALUES[(lower as u8 - b'a') as usize]
    } else {
        0
    }
}

/// Scores a word: the sum of per-letter points multiplied by the word's length,
/// plus a flat 50-point bonus when the word uses a full hand of
/// `required_hand_size` tiles.
pub fn word_score(word: &str, required_hand_size: u32) -> u32 {
    if word.is_empty() {
        return 0;
    }
    let freq = Hand::frequency(word);
    let letter_points: u32 = freq
        .letters()
        .map(|(letter, count)| count * letter_value(letter))
        .sum();
    let mut score = letter_points * word.len() as u32;
    if word.len() as u32 == required_hand_size {
        score += 50;
    }
    score
}

/// True when `word` can be formed from `hand` and is a recognized word.
/// Letter sufficiency is checked against a working copy; neither the hand nor
/// the word list is modified.
pub fn is_valid_word(word: &str, hand: &Hand, words: &HashSet<String>) -> bool {
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    if hand.consume(word).is_err() {
        return false;
    }
    words.contains(&word.to_lowercase())
}

/// Deals a random hand of `size` tiles. The first `size / 3` tiles are drawn
/// from the vowels, the rest from the consonants, both uniformly with
/// replacement.
pub fn deal_hand(size: u32, rng: &mut impl Rng) -> Hand {
    let num_vowels = size / 3;
    let mut hand = Hand::default();
    for _ in 0..num_vowels {
        let letter = VOWELS[rng.random_range(0..VOWELS.len())] as char;
        hand = hand.with_tile(letter);
    }
    for _ in num_vowels..size {
        let letter = CONSONANTS[rng.random_range(0..CONSONANTS.len())] as char;
        hand = hand.with_tile(letter);
    }
    hand
}
