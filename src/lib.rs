//! # wordpack
//!
//! Asset pipeline for a letter-position word puzzle. Converts a CSV word
//! list into the compact bit-packed blob the game client reads at runtime,
//! and decodes such blobs back for inspection.
//!
//! Each CSV line is one puzzle: the answer word, three score targets, and a
//! space-separated list of valid guesses (which contains the answer itself).
//! The packed form is a plain concatenation of variable-length bit records
//! with no header or delimiters; see [`layout`] for the field widths shared
//! by encoder and decoder.
//!
//! ## Example
//!
//! ```
//! use wordpack::record::Record;
//! use wordpack::bits::BitVec;
//! use wordpack::encode::encode_record;
//! use wordpack::decode::decode_records;
//!
//! let record = Record::parse_line("apple,1,2,3,apple ale ape").unwrap();
//! let mut bits = BitVec::new();
//! encode_record(&record, &mut bits).unwrap();
//!
//! let decoded = decode_records(&bits.to_bytes(), 5).unwrap();
//! assert_eq!(decoded[0].word, "apple");
//! assert_eq!(decoded[0].guesses, vec!["ale", "ape"]);
//! ```

pub mod bit_reader;
pub mod bits;
pub mod decode;
pub mod encode;
pub mod errors;
pub mod layout;
pub mod record;
