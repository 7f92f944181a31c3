//! Bit-level cursor primitives for the BITS format.
//!
//! A transmission is a sequence of bit symbols (one `u8` per bit, value
//! 0 or 1) produced by hex expansion. [`BitReader`] wraps such a slice
//! with an advancing read offset; [`BitWriter`] assembles one.

use crate::error::DecodeError;

/// Converts a string of `'0'`/`'1'` characters into bit symbols.
///
/// Any other character fails with [`DecodeError::InvalidSymbol`].
pub fn bits_from_str(s: &str) -> Result<Vec<u8>, DecodeError> {
    s.char_indices()
        .map(|(offset, symbol)| match symbol {
            '0' => Ok(0),
            '1' => Ok(1),
            _ => Err(DecodeError::InvalidSymbol { symbol, offset }),
        })
        .collect()
}

/// Reader for decoding a bit stream.
///
/// Wraps a bit-symbol slice and provides fixed-width unsigned reads
/// with bounds checking. The offset only moves forward; a single reader
/// is threaded by mutable reference through the whole recursive decode
/// so every call observes one globally-advancing position.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    bits: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a reader over bit symbols (each 0 or 1).
    pub fn new(bits: &'a [u8]) -> Self {
        Self { bits, pos: 0 }
    }

    /// Returns the current offset in bits.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of unread bits.
    pub fn remaining_len(&self) -> usize {
        self.bits.len() - self.pos
    }

    /// Returns true if all bits have been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.bits.len()
    }

    /// Returns true while the unread region still holds a set bit.
    ///
    /// Trailing padding is all zeros by construction of the format, so
    /// this is the termination test for top-level packet scans: a region
    /// holds a real packet only while a 1 remains in it.
    pub fn has_more_packets(&self) -> bool {
        self.bits[self.pos..].contains(&1)
    }

    /// Reads the next bit.
    #[inline]
    pub fn read_bit(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        if self.pos >= self.bits.len() {
            return Err(DecodeError::OutOfRange {
                context,
                wanted: 1,
                remaining: 0,
            });
        }
        let bit = self.bits[self.pos];
        self.pos += 1;
        Ok(bit)
    }

    /// Reads the next `n` bits as a big-endian unsigned integer.
    ///
    /// `n` must be at most 64; fails with [`DecodeError::OutOfRange`]
    /// if fewer than `n` bits remain.
    #[inline]
    pub fn read_bits(&mut self, n: usize, context: &'static str) -> Result<u64, DecodeError> {
        debug_assert!(n <= 64, "read_bits width exceeds u64");
        if n > self.remaining_len() {
            return Err(DecodeError::OutOfRange {
                context,
                wanted: n,
                remaining: self.remaining_len(),
            });
        }
        let mut value: u64 = 0;
        for &bit in &self.bits[self.pos..self.pos + n] {
            value = (value << 1) | u64::from(bit);
        }
        self.pos += n;
        Ok(value)
    }
}

/// Writer for assembling a bit stream.
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bits: Vec<u8>,
}

impl BitWriter {
    /// Creates a new empty writer.
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Returns the number of bits written.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns true if no bits have been written.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the written bit symbols.
    pub fn as_bits(&self) -> &[u8] {
        &self.bits
    }

    /// Consumes the writer, returning the bit symbols.
    pub fn into_bits(self) -> Vec<u8> {
        self.bits
    }

    /// Writes a single bit.
    #[inline]
    pub fn push_bit(&mut self, bit: u8) {
        debug_assert!(bit <= 1);
        self.bits.push(bit);
    }

    /// Writes the low `n` bits of `value`, most significant first.
    #[inline]
    pub fn push_bits(&mut self, value: u64, n: usize) {
        debug_assert!(n <= 64);
        for i in (0..n).rev() {
            self.bits.push(((value >> i) & 1) as u8);
        }
    }

    /// Appends all bits from another writer.
    pub fn append(&mut self, other: &BitWriter) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Renders the written bits as a `'0'`/`'1'` string.
    pub fn to_bit_string(&self) -> String {
        self.bits.iter().map(|&b| if b == 1 { '1' } else { '0' }).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_bits_big_endian() {
        let bits = bits_from_str("110100101111").unwrap();
        let mut reader = BitReader::new(&bits);
        assert_eq!(reader.read_bits(3, "test").unwrap(), 0b110);
        assert_eq!(reader.read_bits(3, "test").unwrap(), 0b100);
        assert_eq!(reader.position(), 6);
        assert_eq!(reader.remaining_len(), 6);
    }

    #[test]
    fn test_read_bits_underrun() {
        let bits = bits_from_str("101").unwrap();
        let mut reader = BitReader::new(&bits);
        let result = reader.read_bits(5, "test");
        assert_eq!(
            result,
            Err(DecodeError::OutOfRange {
                context: "test",
                wanted: 5,
                remaining: 3,
            })
        );
        // A failed read does not advance the cursor.
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_read_bit() {
        let bits = bits_from_str("10").unwrap();
        let mut reader = BitReader::new(&bits);
        assert_eq!(reader.read_bit("test").unwrap(), 1);
        assert_eq!(reader.read_bit("test").unwrap(), 0);
        assert!(matches!(
            reader.read_bit("test"),
            Err(DecodeError::OutOfRange { remaining: 0, .. })
        ));
    }

    #[test]
    fn test_has_more_packets_skips_zero_padding() {
        let bits = bits_from_str("0001000000").unwrap();
        let mut reader = BitReader::new(&bits);
        assert!(reader.has_more_packets());
        reader.read_bits(4, "test").unwrap();
        assert!(!reader.has_more_packets());
        assert!(!reader.is_empty());
    }

    #[test]
    fn test_has_more_packets_all_zeros() {
        let bits = bits_from_str("0000000").unwrap();
        let reader = BitReader::new(&bits);
        assert!(!reader.has_more_packets());
    }

    #[test]
    fn test_bits_from_str_rejects_other_symbols() {
        assert_eq!(
            bits_from_str("0102"),
            Err(DecodeError::InvalidSymbol {
                symbol: '2',
                offset: 3,
            })
        );
    }

    #[test]
    fn test_writer_reader_roundtrip() {
        let mut writer = BitWriter::new();
        writer.push_bits(0b101, 3);
        writer.push_bit(1);
        writer.push_bits(2021, 15);
        assert_eq!(writer.len(), 19);

        let bits = writer.into_bits();
        let mut reader = BitReader::new(&bits);
        assert_eq!(reader.read_bits(3, "test").unwrap(), 0b101);
        assert_eq!(reader.read_bit("test").unwrap(), 1);
        assert_eq!(reader.read_bits(15, "test").unwrap(), 2021);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_writer_bit_string() {
        let mut writer = BitWriter::new();
        writer.push_bits(0b0100, 4);
        assert_eq!(writer.to_bit_string(), "0100");
    }
}
