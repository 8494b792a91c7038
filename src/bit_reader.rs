//! MSB-first bit cursor over a packed blob, mirroring the game client's reader.

use crate::errors::ReadError;

pub struct BitReader<'a> {
    data: &'a [u8],
    bit_pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, bit_pos: 0 }
    }

    fn read_bit(&mut self) -> Result<u8, ReadError> {
        let byte_index = self.bit_pos / 8;
        let bit_index = self.bit_pos % 8;

        let byte = *self.data.get(byte_index).ok_or(ReadError::OutOfBounds)?;
        let bit = (byte >> (7 - bit_index)) & 1;

        self.bit_pos += 1;

        Ok(bit)
    }

    /// Reads the next `n` bits as an unsigned value (max 64).
    pub fn read_bits(&mut self, n: usize) -> Result<u64, ReadError> {
        if n > 64 {
            return Err(ReadError::TooManyBitsRead);
        }

        let needed_bits = self.bit_pos + n;
        if needed_bits > self.data.len() * 8 {
            return Err(ReadError::OutOfBounds);
        }

        let mut value = 0u64;

        for _ in 0..n {
            let bit = self.read_bit()? as u64;
            value = (value << 1) | bit;
        }

        Ok(value)
    }

    pub fn skip_bits(&mut self, n: usize) {
        self.bit_pos += n;
    }

    /// Bits left before the end of the underlying data.
    pub fn remaining_bits(&self) -> usize {
        (self.data.len() * 8).saturating_sub(self.bit_pos)
    }
}
