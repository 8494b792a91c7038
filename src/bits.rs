//! Growable MSB-first bit buffer the packed blob is assembled in.

use crate::errors::BitsError;

/// Accumulates variable-width fields bit by bit. The whole blob is built in
/// memory and converted to bytes in one pass at the end, so fields never
/// straddle a flush boundary.
pub struct BitVec {
    buf: Vec<u8>,
    cur: u8,
    used: u8,
}

impl BitVec {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            cur: 0,
            used: 0,
        }
    }

    /// Total bits pushed so far.
    pub fn len_bits(&self) -> usize {
        self.buf.len() * 8 + self.used as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len_bits() == 0
    }

    /// Appends the low `n` bits of `value`, most significant first.
    ///
    /// A value wider than `n` bits is rejected rather than silently
    /// truncated to the field width.
    pub fn push_bits(&mut self, value: u64, n: usize) -> Result<(), BitsError> {
        if n < 64 && (value >> n) != 0 {
            return Err(BitsError::ValueTooWide { value, bits: n });
        }

        for i in (0..n).rev() {
            let bit = ((value >> i) & 1) as u8;
            self.cur = (self.cur << 1) | bit;
            self.used += 1;

            if self.used == 8 {
                self.buf.push(self.cur);
                self.cur = 0;
                self.used = 0;
            }
        }

        Ok(())
    }

    /// Copies the buffer out as whole bytes. A trailing partial byte is
    /// zero-padded on the low side, matching the convention the shipped
    /// game data was produced with.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.buf.clone();
        if self.used > 0 {
            out.push(self.cur << (8 - self.used));
        }

        out
    }
}

impl Default for BitVec {
    fn default() -> Self {
        Self::new()
    }
}
