use crate::debug_log;
use rand::Rng;
use std::collections::HashSet;
use std::io::BufRead;

const STARTING_GUESSES: u32 = 8;

pub fn choose_word(words: &HashSet<String>, rng: &mut impl Rng) -> Option<String> {
    if words.is_empty() {
        return None;
    }
    let pick = rng.random_range(0..words.len());
    words.iter().nth(pick).cloned()
}

pub fn is_word_guessed(secret: &str, guessed: &[char]) -> bool {
    secret.chars().all(|c| guessed.contains(&c))
}

/// Renders the secret with unguessed letters hidden: "t_ st_ ng" style.
pub fn masked_word(secret: &str, guessed: &[char]) -> String {
    secret
        .chars()
        .map(|c| {
            if guessed.contains(&c) {
                c.to_string()
            } else {
                "_ ".to_string()
            }
        })
        .collect()
}

pub fn available_letters(guessed: &[char]) -> String {
    ('a'..='z').filter(|c| !guessed.contains(c)).collect()
}

/// One round of Hangman: guess the secret a letter at a time, with
/// eight wrong guesses allowed. Repeated guesses are warned without penalty.
pub fn play_hangman<R: BufRead>(secret: &str, mut reader: R) {
    let mut guesses_left = STARTING_GUESSES;
    let mut guessed: Vec<char> = Vec::new();

    println!("Welcome to the game, Hangman!");
    println!(
        "I am thinking of a word that is {} letters long.",
        secret.len()
    );
    println!("-------------");

    while !is_word_guessed(secret, &guessed) && guesses_left > 0 {
        println!("You have {guesses_left} guesses left.");
        println!("Available letters: {}", available_letters(&guessed));
        println!("Please guess a letter:");

        let mut input = String::new();
        if reader.read_line(&mut input).unwrap_or(0) == 0 {
            break;
        }
        let Some(guess) = input.trim().to_lowercase().chars().next() else {
            continue;
        };
        debug_log!("guessed letter: {guess}");

        if guessed.contains(&guess) {
            println!(
                "Oops! You've already guessed that letter: {}",
                masked_word(secret, &guessed)
            );
        } else {
            guessed.push(guess);
            if secret.contains(guess) {
                println!("Good guess: {}", masked_word(secret, &guessed));
            } else {
                guesses_left -= 1;
                println!(
                    "Oops! That letter is not in my word: {}",
                    masked_word(secret, &guessed)
                );
            }
        }
        println!("-------------");
    }

    if is_word_guessed(secret, &guessed) {
        println!("Congratulations, you won!");
    } else {
        println!("Sorry, you ran out of guesses. The word was {secret}.");
    }
}
