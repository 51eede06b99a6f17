//! Round where the player guesses the computer's word

use super::prompt::Console;
use crate::config::GameConfig;
use crate::core::{TriedLetters, is_revealed, reveal};
use crate::dictionary::Dictionary;
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};

/// Play one round with the player guessing a random dictionary word
///
/// Returns `true` if the player found every letter before running out of
/// errors.
///
/// # Errors
///
/// Returns an error if the dictionary has no word long enough, or if the
/// console fails or closes.
pub fn play_player_round<R: BufRead, W: Write, G: Rng + ?Sized>(
    console: &mut Console<R, W>,
    dictionary: &Dictionary,
    config: &GameConfig,
    rng: &mut G,
) -> Result<bool> {
    let word = dictionary.pick_random(rng)?;
    log::debug!("computer picked a word of {} letters", word.len());

    console.say("You must guess the word chosen by the computer")?;
    let mut known = TriedLetters::new();
    console.say(reveal(word, &known))?;

    let mut errors = 0;
    while errors < config.max_errors {
        let letter = console.ask_letter(&known)?;
        known.insert(letter);

        if word.has_letter(letter) {
            console.say(reveal(word, &known))?;
            if is_revealed(word, &known) {
                console.say("You won!")?;
                return Ok(true);
            }
        } else {
            errors += 1;
            console.say(format!("Missed, {errors} error(s)..."))?;
        }
    }

    console.say("You lost!")?;
    console.say(format!("The word was '{word}'"))?;
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn run(input: &str) -> (bool, String) {
        // Only one word is long enough to be picked
        let dictionary = Dictionary::from_text("chat\nmaison\n");
        let mut console = Console::new(Cursor::new(input), Vec::new());
        let mut rng = StdRng::seed_from_u64(3);

        let won =
            play_player_round(&mut console, &dictionary, &GameConfig::default(), &mut rng).unwrap();
        (won, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn player_wins_by_finding_every_letter() {
        let (won, out) = run("m\na\ni\ns\no\nn\n");
        assert!(won);
        assert!(out.contains("------"));
        assert!(out.contains("ma----"));
        assert!(out.contains("You won!"));
    }

    #[test]
    fn repeated_letter_is_reprompted_not_counted() {
        let (won, out) = run("z\nz\nm\na\ni\ns\no\nn\n");
        assert!(won);
        assert!(out.contains("Missed, 1 error(s)"));
        assert!(out.contains("already proposed"));
        assert!(!out.contains("Missed, 2 error(s)"));
    }

    #[test]
    fn player_loses_after_max_errors() {
        let (won, out) = run("b\nc\nd\ne\nf\ng\nh\n");
        assert!(!won);
        assert!(out.contains("Missed, 7 error(s)"));
        assert!(out.contains("The word was 'maison'"));
    }

    #[test]
    fn no_long_word_is_an_error() {
        let dictionary = Dictionary::from_text("chat\n");
        let mut console = Console::new(Cursor::new(""), Vec::new());
        let mut rng = StdRng::seed_from_u64(3);

        let result = play_player_round(&mut console, &dictionary, &GameConfig::default(), &mut rng);
        assert!(result.is_err());
    }
}
