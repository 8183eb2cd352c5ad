use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;
use word_games::cli::{ConsoleIo, parse_cli};
use word_games::game::run_session;
use word_games::hangman::{choose_word, play_hangman};
use word_games::info_log;
use word_games::wordlist::{EMBEDDED_WORDLIST, load_words_from_file, load_words_from_str};

fn main() -> ExitCode {
    env_logger::init();
    let cli = parse_cli();

    println!("Loading word list...");
    let words = match &cli.wordlist_path {
        Some(path) => match load_words_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load word list from '{path}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => load_words_from_str(EMBEDDED_WORDLIST),
    };
    println!("  {} words loaded.", words.len());
    info_log!("word list ready: {} entries", words.len());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let stdin = io::stdin();
    if cli.hangman {
        let Some(secret) = choose_word(&words, &mut rng) else {
            eprintln!("No words available to choose a secret from.");
            return ExitCode::FAILURE;
        };
        play_hangman(&secret, stdin.lock());
    } else {
        let mut io = ConsoleIo::new(stdin.lock());
        run_session(&words, cli.hand_size, &mut rng, &mut io);
    }
    ExitCode::SUCCESS
}
