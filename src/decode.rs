//! Decodes a packed blob back into records, for inspection and for keeping
//! the encoder honest against the game client's reader.

use crate::bit_reader::BitReader;
use crate::errors::DecodeError;
use crate::layout::{
    COUNT_BITS, INDEX_BITS, LETTER_BITS, TARGET_BITS, TARGET_COUNT, WORD_SEPARATOR, header_bits,
};
use crate::record::Record;

fn decode_record(bits: &mut BitReader<'_>, word_len: usize) -> Result<Record, DecodeError> {
    let mut targets = [0u8; TARGET_COUNT];
    for slot in &mut targets {
        *slot = bits.read_bits(TARGET_BITS)? as u8;
    }

    let mut word = String::with_capacity(word_len);
    for _ in 0..word_len {
        let code = bits.read_bits(LETTER_BITS)?;
        if code >= 26 {
            return Err(DecodeError::BadLetterCode(code));
        }
        word.push((b'a' + code as u8) as char);
    }

    let count = bits.read_bits(COUNT_BITS)? as usize;
    let letters: Vec<char> = word.chars().collect();

    let mut guesses = Vec::with_capacity(count);
    for _ in 0..count {
        let mut guess = String::new();
        loop {
            let index = bits.read_bits(INDEX_BITS)?;
            if index == WORD_SEPARATOR {
                break;
            }

            let letter = *letters
                .get(index as usize)
                .ok_or(DecodeError::BadLetterIndex(index))?;
            guess.push(letter);
        }

        guesses.push(guess);
    }

    Ok(Record {
        word,
        targets,
        guesses,
    })
}

/// Decodes every record in `data`. The answer-word length is not stored in
/// the stream; the caller must supply the length the blob was packed with.
///
/// Stops once fewer bits than one record header remain, which tolerates the
/// zero padding in the final byte.
pub fn decode_records(data: &[u8], word_len: usize) -> Result<Vec<Record>, DecodeError> {
    let mut bits = BitReader::new(data);
    let mut records = Vec::new();

    while bits.remaining_bits() >= header_bits(word_len) {
        records.push(decode_record(&mut bits, word_len)?);
    }

    Ok(records)
}

/// Advances past one record without materializing it, the way the client
/// seeks to a random puzzle.
pub fn skip_record(bits: &mut BitReader<'_>, word_len: usize) -> Result<(), DecodeError> {
    bits.skip_bits(TARGET_BITS * TARGET_COUNT + LETTER_BITS * word_len);

    let count = bits.read_bits(COUNT_BITS)? as usize;
    for _ in 0..count {
        while bits.read_bits(INDEX_BITS)? != WORD_SEPARATOR {}
    }

    Ok(())
}
