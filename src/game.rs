use crate::debug_log;
use crate::hand::Hand;
use crate::rules::{deal_hand, is_valid_word, word_score};
use rand::Rng;
use std::collections::HashSet;

/// The sentinel the player types to finish a hand early.
pub const DONE_TOKEN: &str = ".";

/// One turn's worth of player input.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TurnInput {
    Done,
    Word(String),
}

/// How a hand finished.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HandEnd {
    /// The player entered the done token.
    Quit,
    /// Every tile was used up.
    Exhausted,
}

/// Session-selector menu input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuChoice {
    NewHand,
    Replay,
    End,
    Invalid,
}

/// The console collaborator seam. The CLI implements this over stdin/stdout;
/// tests implement it over scripted input.
pub trait GameIo {
    fn show_hand(&mut self, hand: &Hand);
    /// Reads the next turn's input. `None` means the input source is
    /// exhausted, which the loop treats as the player being done.
    fn prompt_turn(&mut self) -> Option<TurnInput>;
    fn report_invalid_word(&mut self);
    fn report_word_score(&mut self, word: &str, score: u32, total: u32);
    fn report_hand_end(&mut self, end: HandEnd, total: u32);
    /// Reads the next menu selection. `None` means input is exhausted,
    /// which ends the session.
    fn prompt_menu(&mut self) -> Option<MenuChoice>;
    fn report_invalid_choice(&mut self);
    fn report_no_hand_to_replay(&mut self);
}

/// Plays a single hand to completion and returns the accumulated score.
///
/// Each turn the remaining hand is shown and the player either enters the
/// done token or a candidate word. Invalid words are rejected without
/// changing any state. Valid words are scored against `hand_size` (the full
/// hand bonus threshold) and their letters removed from the hand. The hand
/// ends when the tiles run out or the player quits.
pub fn play_hand(
    hand: &Hand,
    words: &HashSet<String>,
    hand_size: u32,
    io: &mut impl GameIo,
) -> u32 {
    let mut remaining = *hand;
    let mut total = 0;

    let end = loop {
        if remaining.is_empty() {
            break HandEnd::Exhausted;
        }
        io.show_hand(&remaining);

        let word = match io.prompt_turn() {
            None | Some(TurnInput::Done) => break HandEnd::Quit,
            Some(TurnInput::Word(word)) => word,
        };

        if !is_valid_word(&word, &remaining, words) {
            debug_log!("rejected word: {word}");
            io.report_invalid_word();
            continue;
        }

        let score = word_score(&word, hand_size);
        total += score;
        io.report_word_score(&word, score, total);

        remaining = match remaining.consume(&word) {
            Ok(next) => next,
            // Unreachable after validation, but never let a count go negative.
            Err(_) => {
                io.report_invalid_word();
                continue;
            }
        };
    };

    io.report_hand_end(end, total);
    total
}

/// Runs the outer session selector: deal a new hand, replay the last hand,
/// or end. Replay is rejected until a first hand has been dealt.
pub fn run_session(
    words: &HashSet<String>,
    hand_size: u32,
    rng: &mut impl Rng,
    io: &mut impl GameIo,
) {
    let mut last_hand: Option<Hand> = None;

    loop {
        match io.prompt_menu() {
            None | Some(MenuChoice::End) => break,
            Some(MenuChoice::NewHand) => {
                let hand = deal_hand(hand_size, rng);
                debug_log!("dealt hand: {hand}");
                play_hand(&hand, words, hand_size, io);
                last_hand = Some(hand);
            }
            Some(MenuChoice::Replay) => match last_hand {
                Some(hand) => {
                    play_hand(&hand, words, hand_size, io);
                }
                None => io.report_no_hand_to_replay(),
            },
            Some(MenuChoice::Invalid) => io.report_invalid_choice(),
        }
    }
}
