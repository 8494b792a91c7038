//! Bit widths of the packed word-data format.
//!
//! The stream is not self-describing: a decoder must know these widths, the
//! field order, and the answer-word length out of band. Encoder and decoder
//! both read them from here so the two cannot drift apart.
//!
//! Per record, fields are concatenated with no padding, each field MSB-first:
//! three score targets, one letter code per answer letter, the guess count,
//! then for each guess word its letter indices followed by [`WORD_SEPARATOR`].

/// Bits per score target.
pub const TARGET_BITS: usize = 6;

/// Score targets per record.
pub const TARGET_COUNT: usize = 3;

/// Bits per answer-word letter code (`letter - b'a'`).
pub const LETTER_BITS: usize = 5;

/// Bits for the remaining-guess-word count.
pub const COUNT_BITS: usize = 6;

/// Bits per letter index in the guess-word stream.
pub const INDEX_BITS: usize = 3;

/// Index-stream value marking the end of a guess word.
pub const WORD_SEPARATOR: u64 = 7;

/// Longest answer word the 3-bit index stream can address.
pub const MAX_WORD_LEN: usize = 8;

/// Largest remaining-guess count the count field can hold.
pub const MAX_GUESS_WORDS: usize = 63;

/// Largest score target the target field can hold.
pub const MAX_TARGET: u8 = 63;

/// Fixed bits at the front of a record: targets, answer letters, guess count.
pub fn header_bits(word_len: usize) -> usize {
    TARGET_BITS * TARGET_COUNT + LETTER_BITS * word_len + COUNT_BITS
}
