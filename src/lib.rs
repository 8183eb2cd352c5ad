// Library interface for the word games
// This allows integration tests to access internal modules

pub mod cli;
pub mod game;
pub mod hand;
pub mod hangman;
pub mod logging;
pub mod rules;
pub mod wordlist;

// Re-export commonly used items for easier testing
pub use game::{GameIo, HandEnd, MenuChoice, TurnInput, play_hand, run_session};
pub use hand::{Hand, HandError};
pub use rules::{deal_hand, is_valid_word, word_score};
pub use wordlist::{load_words_from_file, load_words_from_str};
