//! One puzzle line: answer word, score targets, and the valid guess list.

use serde::{Deserialize, Serialize};

use crate::errors::RecordError;
use crate::layout::{MAX_GUESS_WORDS, MAX_TARGET, MAX_WORD_LEN, TARGET_COUNT};

/// A parsed puzzle. `guesses` holds the valid-word list with the answer
/// word already removed, in original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub word: String,
    pub targets: [u8; TARGET_COUNT],
    pub guesses: Vec<String>,
}

impl Record {
    /// Parses one CSV line: `word,target0,target1,target2,word list`.
    ///
    /// The final field is space separated and must contain the answer word
    /// as an exact token; its first occurrence is dropped from `guesses`.
    /// Every constraint the bit format relies on is checked here: field
    /// count, lowercase answer letters, answer length, target and count
    /// ranges, and that every guess letter occurs in the answer word.
    pub fn parse_line(line: &str) -> Result<Record, RecordError> {
        let fields: Vec<&str> = line.trim().split(',').collect();
        if fields.len() != 5 {
            return Err(RecordError::FieldCount(fields.len()));
        }

        let word = fields[0];
        if word.is_empty() {
            return Err(RecordError::EmptyWord);
        }
        for c in word.chars() {
            if !c.is_ascii_lowercase() {
                return Err(RecordError::BadLetter(c));
            }
        }
        if word.len() > MAX_WORD_LEN {
            return Err(RecordError::WordTooLong(word.len()));
        }

        let mut targets = [0u8; TARGET_COUNT];
        for (slot, field) in targets.iter_mut().zip(&fields[1..4]) {
            let value: u64 = field
                .parse()
                .map_err(|_| RecordError::BadTarget(field.to_string()))?;
            if value > MAX_TARGET as u64 {
                return Err(RecordError::TargetOverflow(value));
            }
            *slot = value as u8;
        }

        let mut guesses: Vec<String> = fields[4]
            .split(' ')
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();

        let answer_pos = guesses
            .iter()
            .position(|w| w == word)
            .ok_or(RecordError::AnswerNotInList)?;
        guesses.remove(answer_pos);

        if guesses.len() > MAX_GUESS_WORDS {
            return Err(RecordError::TooManyGuesses(guesses.len()));
        }

        for guess in &guesses {
            for c in guess.chars() {
                if !word.contains(c) {
                    return Err(RecordError::LetterNotInWord {
                        word: guess.clone(),
                        letter: c,
                    });
                }
            }
        }

        Ok(Record {
            word: word.to_string(),
            targets,
            guesses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let record = Record::parse_line("apple,1,2,3,apple ale ape").unwrap();
        assert_eq!(record.word, "apple");
        assert_eq!(record.targets, [1, 2, 3]);
        assert_eq!(record.guesses, ["ale", "ape"]);
    }

    #[test]
    fn test_parse_line_answer_only() {
        let record = Record::parse_line("apple,1,2,3,apple").unwrap();
        assert!(record.guesses.is_empty());
    }

    #[test]
    fn test_parse_line_removes_first_answer_occurrence_only() {
        let record = Record::parse_line("apple,1,2,3,ale apple apple").unwrap();
        assert_eq!(record.guesses, ["ale", "apple"]);
    }

    #[test]
    fn test_parse_line_trims_newline() {
        let record = Record::parse_line("apple,1,2,3,apple ale\n").unwrap();
        assert_eq!(record.guesses, ["ale"]);
    }

    #[test]
    fn test_parse_line_wrong_field_count() {
        assert_eq!(
            Record::parse_line("apple,1,2").unwrap_err(),
            RecordError::FieldCount(3)
        );
    }

    #[test]
    fn test_parse_line_bad_target() {
        assert_eq!(
            Record::parse_line("apple,1,x,3,apple").unwrap_err(),
            RecordError::BadTarget("x".to_string())
        );
    }

    #[test]
    fn test_parse_line_target_overflow() {
        assert_eq!(
            Record::parse_line("apple,1,64,3,apple").unwrap_err(),
            RecordError::TargetOverflow(64)
        );
    }

    #[test]
    fn test_parse_line_uppercase_letter() {
        assert_eq!(
            Record::parse_line("Apple,1,2,3,Apple").unwrap_err(),
            RecordError::BadLetter('A')
        );
    }

    #[test]
    fn test_parse_line_word_too_long() {
        assert_eq!(
            Record::parse_line("alphabets,1,2,3,alphabets").unwrap_err(),
            RecordError::WordTooLong(9)
        );
    }

    #[test]
    fn test_parse_line_answer_missing_from_list() {
        assert_eq!(
            Record::parse_line("apple,1,2,3,ale ape").unwrap_err(),
            RecordError::AnswerNotInList
        );
    }

    #[test]
    fn test_parse_line_guess_letter_not_in_answer() {
        assert_eq!(
            Record::parse_line("apple,1,2,3,apple axe").unwrap_err(),
            RecordError::LetterNotInWord {
                word: "axe".to_string(),
                letter: 'x'
            }
        );
    }

    #[test]
    fn test_parse_line_too_many_guesses() {
        let mut line = String::from("ab,1,2,3,ab");
        for _ in 0..64 {
            line.push_str(" ba");
        }
        assert_eq!(
            Record::parse_line(&line).unwrap_err(),
            RecordError::TooManyGuesses(64)
        );
    }
}
