use crate::game::{DONE_TOKEN, GameIo, HandEnd, MenuChoice, TurnInput};
use crate::hand::Hand;
use crate::rules::DEFAULT_HAND_SIZE;
use clap::Parser;
use std::io::BufRead;

/// Console word games: a tile game and Hangman.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a word-list file (one word per line or whitespace separated)
    #[arg(short = 'i', long = "input")]
    pub wordlist_path: Option<String>,

    /// Number of tiles dealt per hand
    #[arg(long = "hand-size", default_value_t = DEFAULT_HAND_SIZE)]
    pub hand_size: u32,

    /// Seed for the tile dealer, for reproducible hands
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play Hangman instead of the tile game
    #[arg(long)]
    pub hangman: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Console implementation of the game interface over any buffered reader,
/// so tests can drive full games from scripted input.
pub struct ConsoleIo<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ConsoleIo<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(input.trim().to_lowercase()),
        }
    }
}

impl<R: BufRead> GameIo for ConsoleIo<R> {
    fn show_hand(&mut self, hand: &Hand) {
        println!("\nCurrent hand: {hand}");
    }

    fn prompt_turn(&mut self) -> Option<TurnInput> {
        println!("Enter word, or a \"{DONE_TOKEN}\" to indicate that you are finished:");
        let input = self.read_line()?;
        if input == DONE_TOKEN {
            Some(TurnInput::Done)
        } else {
            Some(TurnInput::Word(input))
        }
    }

    fn report_invalid_word(&mut self) {
        println!("Invalid word, please try again.\n");
    }

    fn report_word_score(&mut self, word: &str, score: u32, total: u32) {
        println!("\"{word}\" earned {score} points. Total: {total} points\n");
    }

    fn report_hand_end(&mut self, end: HandEnd, total: u32) {
        match end {
            HandEnd::Quit => println!("Goodbye! Total score: {total} points."),
            HandEnd::Exhausted => println!("Ran out of letters. Total score: {total} points."),
        }
    }

    fn prompt_menu(&mut self) -> Option<MenuChoice> {
        println!("\nEnter n to deal a new hand, r to replay the last hand, or e to end game:");
        let input = self.read_line()?;
        Some(match input.as_str() {
            "n" => MenuChoice::NewHand,
            "r" => MenuChoice::Replay,
            "e" => MenuChoice::End,
            _ => MenuChoice::Invalid,
        })
    }

    fn report_invalid_choice(&mut self) {
        println!("Invalid command.");
    }

    fn report_no_hand_to_replay(&mut self) {
        println!("You have not played a hand yet. Please play a new hand first!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli {
            wordlist_path: None,
            hand_size: DEFAULT_HAND_SIZE,
            seed: None,
            hangman: false,
        };
        assert_eq!(cli.hand_size, 7);
        assert!(cli.wordlist_path.is_none());
        assert!(!cli.hangman);
    }

    #[test]
    fn test_prompt_turn_word() {
        let mut io = ConsoleIo::new(Cursor::new("quail\n"));
        assert_eq!(io.prompt_turn(), Some(TurnInput::Word("quail".to_string())));
    }

    #[test]
    fn test_prompt_turn_lowercases_and_trims_input() {
        let mut io = ConsoleIo::new(Cursor::new("  QUAIL  \n"));
        assert_eq!(io.prompt_turn(), Some(TurnInput::Word("quail".to_string())));
    }

    #[test]
    fn test_prompt_turn_done_token() {
        let mut io = ConsoleIo::new(Cursor::new(".\n"));
        assert_eq!(io.prompt_turn(), Some(TurnInput::Done));
    }

    #[test]
    fn test_prompt_turn_eof() {
        let mut io = ConsoleIo::new(Cursor::new(""));
        assert_eq!(io.prompt_turn(), None);
    }

    #[test]
    fn test_prompt_menu_choices() {
        let mut io = ConsoleIo::new(Cursor::new("n\nr\ne\nx\n"));
        assert_eq!(io.prompt_menu(), Some(MenuChoice::NewHand));
        assert_eq!(io.prompt_menu(), Some(MenuChoice::Replay));
        assert_eq!(io.prompt_menu(), Some(MenuChoice::End));
        assert_eq!(io.prompt_menu(), Some(MenuChoice::Invalid));
    }

    #[test]
    fn test_prompt_menu_is_case_insensitive() {
        let mut io = ConsoleIo::new(Cursor::new("N\n"));
        assert_eq!(io.prompt_menu(), Some(MenuChoice::NewHand));
    }

    #[test]
    fn test_prompt_menu_eof() {
        let mut io = ConsoleIo::new(Cursor::new(""));
        assert_eq!(io.prompt_menu(), None);
    }
}
