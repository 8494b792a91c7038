//! Error types for CSV parsing, bit packing, and blob decoding.

use std::fmt;

/// Errors produced when appending to a [crate::bits::BitVec].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitsError {
    /// Value does not fit in the requested field width.
    ValueTooWide { value: u64, bits: usize },
}

impl fmt::Display for BitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitsError::ValueTooWide { value, bits } => {
                write!(f, "value {value} does not fit in {bits} bits")
            }
        }
    }
}

impl std::error::Error for BitsError {}

/// Errors produced when reading bits back from a byte slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// Requested bit range is beyond the end of the data.
    OutOfBounds,
    /// More than 64 bits were requested in a single read.
    TooManyBitsRead,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "bit read past the end of the data"),
            ReadError::TooManyBitsRead => write!(f, "more than 64 bits requested in one read"),
        }
    }
}

impl std::error::Error for ReadError {}

/// Errors produced when parsing one CSV line into a [crate::record::Record].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Line does not have exactly 5 comma-separated fields.
    FieldCount(usize),
    /// Answer word is empty.
    EmptyWord,
    /// Answer word contains a character outside `a..=z`.
    BadLetter(char),
    /// Answer word is longer than the index stream can address.
    WordTooLong(usize),
    /// Score target is not an unsigned integer.
    BadTarget(String),
    /// Score target does not fit in its 6-bit field.
    TargetOverflow(u64),
    /// Guess list does not contain the answer word as an exact token.
    AnswerNotInList,
    /// Too many guess words for the 6-bit count field.
    TooManyGuesses(usize),
    /// Guess word uses a letter that does not occur in the answer word.
    LetterNotInWord { word: String, letter: char },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::FieldCount(n) => {
                write!(f, "expected 5 comma-separated fields, found {n}")
            }
            RecordError::EmptyWord => write!(f, "answer word is empty"),
            RecordError::BadLetter(c) => {
                write!(f, "answer word contains {c:?}, expected a-z")
            }
            RecordError::WordTooLong(n) => {
                write!(f, "answer word has {n} letters, the format allows at most 8")
            }
            RecordError::BadTarget(s) => write!(f, "target {s:?} is not an unsigned integer"),
            RecordError::TargetOverflow(v) => {
                write!(f, "target {v} does not fit in 6 bits (max 63)")
            }
            RecordError::AnswerNotInList => {
                write!(f, "guess list does not contain the answer word")
            }
            RecordError::TooManyGuesses(n) => {
                write!(f, "{n} guess words do not fit in the 6-bit count (max 63)")
            }
            RecordError::LetterNotInWord { word, letter } => {
                write!(f, "guess {word:?} uses {letter:?}, which is not in the answer word")
            }
        }
    }
}

impl std::error::Error for RecordError {}

/// Errors produced while encoding a parsed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A field value spilled over its bit width.
    Bits(BitsError),
    /// Answer word contains a character outside `a..=z`.
    BadLetter(char),
    /// Guess word uses a letter that does not occur in the answer word.
    LetterNotInWord { word: String, letter: char },
    /// A guess letter's index equals the word separator, which would be
    /// indistinguishable from the end of the word.
    IndexIsSeparator { word: String, letter: char },
}

impl From<BitsError> for EncodeError {
    fn from(value: BitsError) -> Self {
        EncodeError::Bits(value)
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Bits(e) => write!(f, "{e}"),
            EncodeError::BadLetter(c) => {
                write!(f, "answer word contains {c:?}, expected a-z")
            }
            EncodeError::LetterNotInWord { word, letter } => {
                write!(f, "guess {word:?} uses {letter:?}, which is not in the answer word")
            }
            EncodeError::IndexIsSeparator { word, letter } => {
                write!(
                    f,
                    "guess {word:?}: {letter:?} sits at index 7, which collides with the word separator"
                )
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Errors produced while decoding a packed blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The bit stream ended in the middle of a record.
    Truncated,
    /// A letter code is not in `0..26`.
    BadLetterCode(u64),
    /// A letter index points past the end of the answer word.
    BadLetterIndex(u64),
}

impl From<ReadError> for DecodeError {
    fn from(_: ReadError) -> Self {
        DecodeError::Truncated
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Truncated => write!(f, "bit stream ended in the middle of a record"),
            DecodeError::BadLetterCode(c) => write!(f, "letter code {c} is not in 0..26"),
            DecodeError::BadLetterIndex(i) => {
                write!(f, "letter index {i} points past the end of the answer word")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Failure of a whole pack run. Record and encode failures carry the
/// 1-based line number of the offending input line.
#[derive(Debug)]
pub enum PackError {
    /// Reading the input failed.
    Io(std::io::Error),
    /// A line failed to parse.
    Record { line: usize, source: RecordError },
    /// A parsed record failed to encode.
    Encode { line: usize, source: EncodeError },
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackError::Io(e) => write!(f, "reading input: {e}"),
            PackError::Record { line, source } => write!(f, "line {line}: {source}"),
            PackError::Encode { line, source } => write!(f, "line {line}: {source}"),
        }
    }
}

impl std::error::Error for PackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PackError::Io(e) => Some(e),
            PackError::Record { source, .. } => Some(source),
            PackError::Encode { source, .. } => Some(source),
        }
    }
}
