//! Word-guessing game driven by the `hangman` command.
//!
//! A tiny self-contained state machine: the word is chosen uniformly at
//! random from a fixed list at game start; each guess either reveals the
//! letter everywhere it occurs or decrements the shared attempt counter.
//! The game ends in `Won` when all letters are revealed or `Lost` when
//! attempts reach zero; further guesses after the end are rejected until
//! a new game is started.

use std::collections::BTreeSet;

const WORDS: &[&str] = &[
    "terminal",
    "keyboard",
    "hangman",
    "developer",
    "interface",
    "component",
    "browser",
    "command",
];

/// Shared attempt budget per game.
pub const MAX_ATTEMPTS: u32 = 6;

/// Gallows art per number of incorrect guesses (0 through 6).
const STAGES: &[&str] = &[
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// One game in progress (or finished).
#[derive(Clone, Debug)]
pub struct HangmanGame {
    word: String,
    guessed: BTreeSet<char>,
    remaining: u32,
    status: GameStatus,
    last_message: String,
}

impl HangmanGame {
    /// Start a new game with a randomly chosen word.
    pub fn start() -> Self {
        let word = WORDS[fastrand::usize(..WORDS.len())];
        Self::with_word(word)
    }

    /// Start a game with a known word (test seam).
    pub fn with_word(word: &str) -> Self {
        Self {
            word: word.to_lowercase(),
            guessed: BTreeSet::new(),
            remaining: MAX_ATTEMPTS,
            status: GameStatus::Playing,
            last_message: "New game started!".to_string(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Apply one guessed letter.
    pub fn guess(&mut self, letter: char) {
        if self.status != GameStatus::Playing {
            self.last_message = "Game over. Start a new game.".to_string();
            return;
        }

        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            self.last_message = "Invalid guess. Please enter a single letter.".to_string();
            return;
        }

        if !self.guessed.insert(letter) {
            self.last_message = format!("Letter '{}' already guessed.", letter);
            return;
        }

        if self.word.contains(letter) {
            self.last_message = format!("Correct guess: '{}'.", letter);
        } else {
            self.remaining -= 1;
            self.last_message = format!("Incorrect guess: '{}'.", letter);
        }

        if self.displayed_word() == self.word {
            self.status = GameStatus::Won;
            self.last_message = format!("You won! The word was: {}", self.word);
        } else if self.remaining == 0 {
            self.status = GameStatus::Lost;
            self.last_message = format!("You lost! The word was: {}", self.word);
        }
    }

    /// The word with unguessed letters masked as `_`.
    pub fn displayed_word(&self) -> String {
        self.word
            .chars()
            .map(|c| if self.guessed.contains(&c) { c } else { '_' })
            .collect()
    }

    /// Render the full game display: gallows, masked word, guesses,
    /// attempts and the latest feedback message.
    pub fn display(&self) -> String {
        let incorrect = (MAX_ATTEMPTS - self.remaining) as usize;
        let art = STAGES[incorrect.min(STAGES.len() - 1)];

        let spaced: Vec<String> = self.displayed_word().chars().map(String::from).collect();
        let guessed: Vec<String> = self.guessed.iter().map(|c| c.to_string()).collect();

        format!(
            "{}\n\nWord: {}\nGuessed: {}\nAttempts left: {}/{}\n\n{}",
            art,
            spaced.join(" "),
            guessed.join(", "),
            self.remaining,
            MAX_ATTEMPTS,
            self.last_message,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = HangmanGame::start();
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(WORDS.contains(&game.word()));
        assert!(game.displayed_word().chars().all(|c| c == '_'));
    }

    #[test]
    fn test_correct_guess_reveals_everywhere() {
        let mut game = HangmanGame::with_word("developer");
        game.guess('e');
        assert_eq!(game.displayed_word(), "_e_e___e_");
        assert_eq!(game.remaining, MAX_ATTEMPTS);
    }

    #[test]
    fn test_incorrect_guess_decrements_attempts() {
        let mut game = HangmanGame::with_word("terminal");
        game.guess('z');
        assert_eq!(game.remaining, MAX_ATTEMPTS - 1);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn test_repeated_guess_costs_nothing() {
        let mut game = HangmanGame::with_word("terminal");
        game.guess('z');
        game.guess('z');
        assert_eq!(game.remaining, MAX_ATTEMPTS - 1);
        assert!(game.display().contains("already guessed"));
    }

    #[test]
    fn test_winning() {
        let mut game = HangmanGame::with_word("cat");
        for c in ['c', 'a', 't'] {
            game.guess(c);
        }
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.display().contains("You won!"));
    }

    #[test]
    fn test_losing() {
        let mut game = HangmanGame::with_word("cat");
        for c in ['z', 'x', 'q', 'w', 'v', 'm'] {
            game.guess(c);
        }
        assert_eq!(game.status(), GameStatus::Lost);
        assert!(game.display().contains("You lost! The word was: cat"));
    }

    #[test]
    fn test_guess_after_game_over_is_rejected() {
        let mut game = HangmanGame::with_word("cat");
        for c in ['c', 'a', 't'] {
            game.guess(c);
        }
        let remaining = game.remaining;
        game.guess('z');
        assert_eq!(game.remaining, remaining);
        assert!(game.display().contains("Game over"));
    }
}
