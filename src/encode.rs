//! Record-to-bits encoder and the whole-file packing driver.

use std::io::BufRead;

use crate::bits::BitVec;
use crate::errors::{EncodeError, PackError};
use crate::layout::{COUNT_BITS, INDEX_BITS, LETTER_BITS, TARGET_BITS, WORD_SEPARATOR};
use crate::record::Record;

/// Index of `letter`'s first occurrence in `word`. Duplicate letters always
/// resolve to the lowest index.
pub fn letter_index(word: &str, letter: char) -> Option<usize> {
    word.chars().position(|c| c == letter)
}

/// Appends one record to `bits`: the three targets, one letter code per
/// answer letter, the guess count, then each guess word as letter indices
/// into the answer word terminated by [`WORD_SEPARATOR`].
pub fn encode_record(record: &Record, bits: &mut BitVec) -> Result<(), EncodeError> {
    for &target in &record.targets {
        bits.push_bits(target as u64, TARGET_BITS)?;
    }

    for letter in record.word.chars() {
        if !letter.is_ascii_lowercase() {
            return Err(EncodeError::BadLetter(letter));
        }
        bits.push_bits(letter as u64 - 'a' as u64, LETTER_BITS)?;
    }

    bits.push_bits(record.guesses.len() as u64, COUNT_BITS)?;

    for guess in &record.guesses {
        for letter in guess.chars() {
            let index =
                letter_index(&record.word, letter).ok_or_else(|| EncodeError::LetterNotInWord {
                    word: guess.clone(),
                    letter,
                })?;

            // An index equal to the separator would end the word early on
            // the decoding side.
            if index as u64 == WORD_SEPARATOR {
                return Err(EncodeError::IndexIsSeparator {
                    word: guess.clone(),
                    letter,
                });
            }

            bits.push_bits(index as u64, INDEX_BITS)?;
        }

        bits.push_bits(WORD_SEPARATOR, INDEX_BITS)?;
    }

    Ok(())
}

/// Packs every CSV line from `input` into one blob, in input order. Blank
/// lines are skipped. Any bad line aborts the run with its 1-based line
/// number; no partial output is produced.
pub fn pack_lines(input: impl BufRead) -> Result<Vec<u8>, PackError> {
    let mut bits = BitVec::new();

    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(PackError::Io)?;
        if line.trim().is_empty() {
            continue;
        }

        let number = index + 1;
        let record = Record::parse_line(&line).map_err(|source| PackError::Record {
            line: number,
            source,
        })?;
        encode_record(&record, &mut bits).map_err(|source| PackError::Encode {
            line: number,
            source,
        })?;
    }

    Ok(bits.to_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::header_bits;

    #[test]
    fn test_letter_index_first_occurrence() {
        assert_eq!(letter_index("hello", 'l'), Some(2));
        assert_eq!(letter_index("hello", 'h'), Some(0));
        assert_eq!(letter_index("hello", 'z'), None);
    }

    #[test]
    fn test_encode_record_worked_example() {
        // apple,1,2,3,apple ale ape
        //   targets 1,2,3 as 6 bits each
        //   letters a p p l e -> 0,15,15,11,4 as 5 bits each
        //   count 2 as 6 bits
        //   ale -> 0,3,4,7  ape -> 0,1,4,7 as 3 bits each
        let record = Record::parse_line("apple,1,2,3,apple ale ape").unwrap();
        let mut bits = BitVec::new();
        encode_record(&record, &mut bits).unwrap();

        assert_eq!(bits.len_bits(), 73);
        assert_eq!(
            bits.to_bytes(),
            vec![0x04, 0x20, 0xC0, 0xF7, 0xAC, 0x81, 0x07, 0x38, 0x33, 0x80]
        );
    }

    #[test]
    fn test_encode_record_no_guesses() {
        let record = Record::parse_line("apple,1,2,3,apple").unwrap();
        let mut bits = BitVec::new();
        encode_record(&record, &mut bits).unwrap();

        // Header only: count field is 0 and no index bits follow.
        assert_eq!(bits.len_bits(), header_bits(5));
    }

    #[test]
    fn test_encode_record_index_collides_with_separator() {
        // 'o' sits at index 7 of the 8-letter answer word.
        let record = Record::parse_line("flamingo,1,2,3,flamingo log").unwrap();
        let mut bits = BitVec::new();
        assert_eq!(
            encode_record(&record, &mut bits).unwrap_err(),
            EncodeError::IndexIsSeparator {
                word: "log".to_string(),
                letter: 'o'
            }
        );
    }

    #[test]
    fn test_encode_record_letter_not_in_word() {
        // Hand-built record that bypasses parse_line validation.
        let record = Record {
            word: "apple".to_string(),
            targets: [1, 2, 3],
            guesses: vec!["axe".to_string()],
        };
        let mut bits = BitVec::new();
        assert_eq!(
            encode_record(&record, &mut bits).unwrap_err(),
            EncodeError::LetterNotInWord {
                word: "axe".to_string(),
                letter: 'x'
            }
        );
    }

    #[test]
    fn test_encode_record_rejects_non_lowercase_word() {
        let record = Record {
            word: "Apple".to_string(),
            targets: [0, 0, 0],
            guesses: vec![],
        };
        let mut bits = BitVec::new();
        assert_eq!(
            encode_record(&record, &mut bits).unwrap_err(),
            EncodeError::BadLetter('A')
        );
    }

    #[test]
    fn test_pack_lines_concatenates_records() {
        let csv = "apple,1,2,3,apple ale ape\napple,1,2,3,apple ale ape\n";
        let packed = pack_lines(csv.as_bytes()).unwrap();

        // Two 73-bit records back to back: 146 bits -> 19 bytes.
        assert_eq!(packed.len(), 19);

        // The stream starts with the first record's target fields.
        assert_eq!(&packed[..2], &[0x04, 0x20]);
    }

    #[test]
    fn test_pack_lines_skips_blank_lines_keeps_numbering() {
        let csv = "apple,1,2,3,apple\n\napple,1,2,bad\n";
        let err = pack_lines(csv.as_bytes()).unwrap_err();
        match err {
            PackError::Record { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_pack_lines_empty_input() {
        let packed = pack_lines(&b""[..]).unwrap();
        assert!(packed.is_empty());
    }
}
