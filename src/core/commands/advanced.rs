//! Commands with their own machinery: `calc`, `weather`, `hangman`.

use crate::config::weather_url;
use crate::core::calc;
use crate::core::hangman::{GameStatus, HangmanGame};
use crate::core::registry::{ready, CommandOutput, CommandSpec, Registry};
use crate::utils::fetch_text;

pub fn register(registry: &mut Registry) {
    registry.register(
        CommandSpec::new("calc", "evaluate an arithmetic expression", |_, _, args| {
            if args.is_empty() {
                return ready("Usage: calc [expression]. Example: calc (5 + 3) * 2");
            }
            let expression = args.join(" ");
            // Every parse/evaluation failure collapses to one message.
            match calc::evaluate(&expression) {
                Ok(value) => ready(format!("{expression} = {value}")),
                Err(_) => ready("Invalid expression. Example: calc (5 + 3) * 2"),
            }
        })
        .with_usage("calc <expression>"),
    );

    registry.register(
        CommandSpec::new("weather", "show the weather for a city", |_, _, args| {
            let city = args.join("+");
            if city.is_empty() {
                return ready("Usage: weather [city]. Example: weather Brussels");
            }
            CommandOutput::Deferred(Box::pin(async move {
                match fetch_text(&weather_url(&city)).await {
                    Ok(report) => report,
                    Err(err) => format!("weather: {err}"),
                }
            }))
        })
        .with_usage("weather <city>"),
    );

    registry.register(
        CommandSpec::new("hangman", "play a word-guessing game", |_, session, args| {
            let action = args.first().map(|a| a.to_lowercase());

            match action.as_deref() {
                None | Some("start") => {
                    let game = HangmanGame::start();
                    let display = game.display();
                    session.hangman = Some(game);
                    ready(display)
                }
                Some(action) => {
                    let Some(game) = session.hangman.as_mut() else {
                        return ready("No game in progress. Type 'hangman start' to begin.");
                    };

                    if game.status() != GameStatus::Playing {
                        return ready(format!(
                            "Game over. The word was: {}. Type 'hangman start' to play again.",
                            game.word()
                        ));
                    }

                    let mut chars = action.chars();
                    match (chars.next(), chars.next()) {
                        (Some(letter), None) if letter.is_ascii_lowercase() => {
                            game.guess(letter);
                            ready(game.display())
                        }
                        _ => ready(format!(
                            "Invalid command or guess: '{}'. Type a single letter to guess, or 'hangman start' for a new game.",
                            args.join(" ")
                        )),
                    }
                }
            }
        })
        .with_usage("hangman [start|<letter>]"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::Session;

    fn run(session: &mut Session, name: &str, args: &[&str]) -> String {
        let mut registry = Registry::new();
        register(&mut registry);
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        match registry.invoke(name, session, &args) {
            Some(CommandOutput::Ready(out)) => out,
            _ => panic!("expected ready output from {name}"),
        }
    }

    #[test]
    fn test_calc_evaluates() {
        let mut session = Session::new();
        assert_eq!(run(&mut session, "calc", &["2", "+", "2"]), "2 + 2 = 4");
        assert_eq!(run(&mut session, "calc", &["(5", "+", "3)", "*", "2"]), "(5 + 3) * 2 = 16");
    }

    #[test]
    fn test_calc_no_args_is_usage() {
        let mut session = Session::new();
        assert!(run(&mut session, "calc", &[]).starts_with("Usage: calc"));
    }

    #[test]
    fn test_calc_collapses_errors() {
        let mut session = Session::new();
        for bad in [&["1", "/", "0"][..], &["(2", "+", "3"], &["nonsense"]] {
            assert_eq!(
                run(&mut session, "calc", bad),
                "Invalid expression. Example: calc (5 + 3) * 2"
            );
        }
    }

    #[test]
    fn test_weather_no_city_is_usage() {
        let mut session = Session::new();
        assert_eq!(
            run(&mut session, "weather", &[]),
            "Usage: weather [city]. Example: weather Brussels"
        );
    }

    #[test]
    fn test_weather_with_city_is_deferred() {
        let mut registry = Registry::new();
        register(&mut registry);
        let mut session = Session::new();
        let args = vec!["Brussels".to_string()];
        match registry.invoke("weather", &mut session, &args) {
            Some(CommandOutput::Deferred(_)) => {}
            _ => panic!("expected deferred output"),
        }
    }

    #[test]
    fn test_hangman_start_and_guess() {
        let mut session = Session::new();
        let out = run(&mut session, "hangman", &["start"]);
        assert!(out.contains("New game started!"));
        assert!(session.hangman.is_some());

        let out = run(&mut session, "hangman", &["e"]);
        assert!(out.contains("guess: 'e'"));
    }

    #[test]
    fn test_hangman_guess_without_game() {
        let mut session = Session::new();
        assert_eq!(
            run(&mut session, "hangman", &["a"]),
            "No game in progress. Type 'hangman start' to begin."
        );
    }

    #[test]
    fn test_hangman_invalid_guess() {
        let mut session = Session::new();
        run(&mut session, "hangman", &["start"]);
        let out = run(&mut session, "hangman", &["ab"]);
        assert!(out.starts_with("Invalid command or guess: 'ab'."));
    }

    #[test]
    fn test_hangman_finished_game_prompts_restart() {
        let mut session = Session::new();
        run(&mut session, "hangman", &["start"]);
        for letter in "abcdefghijklmnopqrstuvwxyz".chars() {
            run(&mut session, "hangman", &[&letter.to_string()]);
            let done = session
                .hangman
                .as_ref()
                .is_some_and(|g| g.status() != GameStatus::Playing);
            if done {
                break;
            }
        }
        let out = run(&mut session, "hangman", &["z"]);
        assert!(out.starts_with("Game over. The word was:"));
    }
}
