//! Hexadecimal transmission transcoding.
//!
//! A raw transmission arrives as one line of hex text; each digit
//! expands to a fixed 4-bit pattern, and the concatenation of those
//! patterns is the bit stream the decoder consumes. The mapping also
//! exists as an external table file (`key = value`, one mapping per
//! line); [`DigitTable`] parses that format.

use crate::error::DecodeError;

/// Expands a hex line into bit symbols using the builtin digit table.
///
/// Lowercase digits are accepted; anything else fails with
/// [`DecodeError::InvalidHexDigit`].
pub fn bits_from_hex(hex_line: &str) -> Result<Vec<u8>, DecodeError> {
    let mut bits = Vec::with_capacity(hex_line.len() * 4);
    for (offset, digit) in hex_line.char_indices() {
        let value = digit
            .to_digit(16)
            .ok_or(DecodeError::InvalidHexDigit { digit, offset })?;
        for i in (0..4).rev() {
            bits.push(((value >> i) & 1) as u8);
        }
    }
    Ok(bits)
}

/// Hex-digit to 4-bit lookup table.
///
/// Matches the external table-file format the transmission ships with:
/// one `key = value` mapping per line, e.g. `4 = 0100`. The builtin
/// table covers all sixteen digits; a parsed table may be partial, and
/// expanding a digit it does not map fails with
/// [`DecodeError::InvalidHexDigit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitTable {
    patterns: [Option<[u8; 4]>; 16],
}

impl DigitTable {
    /// Returns the fixed hexadecimal table.
    pub fn builtin() -> DigitTable {
        let mut patterns = [None; 16];
        for (value, slot) in patterns.iter_mut().enumerate() {
            let mut bits = [0u8; 4];
            for (i, bit) in bits.iter_mut().enumerate() {
                *bit = ((value >> (3 - i)) & 1) as u8;
            }
            *slot = Some(bits);
        }
        DigitTable { patterns }
    }

    /// Parses a table file: one `key = value` mapping per line, key a
    /// single hex digit, value four `0`/`1` characters. Blank lines are
    /// skipped; anything else fails with [`DecodeError::MalformedTable`].
    pub fn parse(text: &str) -> Result<DigitTable, DecodeError> {
        let mut patterns = [None; 16];
        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let malformed = || DecodeError::MalformedTable { line: index + 1 };
            let (key, value) = line.split_once(" = ").ok_or_else(malformed)?;

            let mut key_chars = key.chars();
            let digit = key_chars
                .next()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(malformed)?;
            if key_chars.next().is_some() {
                return Err(malformed());
            }

            if value.len() != 4 {
                return Err(malformed());
            }
            let mut bits = [0u8; 4];
            for (i, c) in value.chars().enumerate() {
                bits[i] = match c {
                    '0' => 0,
                    '1' => 1,
                    _ => return Err(malformed()),
                };
            }
            patterns[digit as usize] = Some(bits);
        }
        Ok(DigitTable { patterns })
    }

    /// Expands a hex line into bit symbols using this table.
    pub fn expand(&self, hex_line: &str) -> Result<Vec<u8>, DecodeError> {
        let mut bits = Vec::with_capacity(hex_line.len() * 4);
        for (offset, digit) in hex_line.char_indices() {
            let pattern = digit
                .to_digit(16)
                .and_then(|v| self.patterns[v as usize])
                .ok_or(DecodeError::InvalidHexDigit { digit, offset })?;
            bits.extend_from_slice(&pattern);
        }
        Ok(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digit_expansion() {
        assert_eq!(bits_from_hex("4").unwrap(), vec![0, 1, 0, 0]);
        assert_eq!(bits_from_hex("F").unwrap(), vec![1, 1, 1, 1]);
        assert_eq!(bits_from_hex("0").unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_known_transmission_expansion() {
        let bits = bits_from_hex("D2FE28").unwrap();
        let as_string: String = bits
            .iter()
            .map(|&b| if b == 1 { '1' } else { '0' })
            .collect();
        assert_eq!(as_string, "110100101111111000101000");
    }

    #[test]
    fn test_lowercase_accepted() {
        assert_eq!(bits_from_hex("d2fe28"), bits_from_hex("D2FE28"));
    }

    #[test]
    fn test_invalid_digit_rejected() {
        assert_eq!(
            bits_from_hex("D2G"),
            Err(DecodeError::InvalidHexDigit {
                digit: 'G',
                offset: 2,
            })
        );
    }

    #[test]
    fn test_parsed_table_matches_builtin() {
        let text = "0 = 0000\n1 = 0001\n2 = 0010\n3 = 0011\n4 = 0100\n5 = 0101\n\
                    6 = 0110\n7 = 0111\n8 = 1000\n9 = 1001\nA = 1010\nB = 1011\n\
                    C = 1100\nD = 1101\nE = 1110\nF = 1111";
        let table = DigitTable::parse(text).unwrap();
        assert_eq!(table, DigitTable::builtin());
        assert_eq!(table.expand("D2FE28").unwrap(), bits_from_hex("D2FE28").unwrap());
    }

    #[test]
    fn test_malformed_table_line() {
        assert_eq!(
            DigitTable::parse("0 = 0000\n1 : 0001"),
            Err(DecodeError::MalformedTable { line: 2 })
        );
        assert_eq!(
            DigitTable::parse("G = 0000"),
            Err(DecodeError::MalformedTable { line: 1 })
        );
        assert_eq!(
            DigitTable::parse("4 = 01000"),
            Err(DecodeError::MalformedTable { line: 1 })
        );
        assert_eq!(
            DigitTable::parse("4 = 0102"),
            Err(DecodeError::MalformedTable { line: 1 })
        );
    }

    #[test]
    fn test_partial_table_rejects_unmapped_digit() {
        let table = DigitTable::parse("4 = 0100").unwrap();
        assert_eq!(table.expand("4").unwrap(), vec![0, 1, 0, 0]);
        assert_eq!(
            table.expand("5"),
            Err(DecodeError::InvalidHexDigit {
                digit: '5',
                offset: 0,
            })
        );
    }
}
