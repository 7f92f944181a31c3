//! Error types for BITS decoding and encoding.

use thiserror::Error;

/// Error during transmission decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A fixed-width read requested more bits than remain in the stream.
    /// Indicates truncated or malformed input.
    #[error("out of range: reading {wanted} bits for {context} with only {remaining} remaining")]
    OutOfRange {
        context: &'static str,
        wanted: usize,
        remaining: usize,
    },

    /// Total-length framing declared a sub-packet bit span that the
    /// sub-packets actually decoded do not land on exactly.
    #[error("framing error: sub-packets consumed {consumed} bits, {declared} declared")]
    Framing { declared: usize, consumed: usize },

    /// A character in the supplied bit string was not `0` or `1`.
    #[error("invalid symbol {symbol:?} at offset {offset} (expected '0' or '1')")]
    InvalidSymbol { symbol: char, offset: usize },

    /// A character in the supplied hex line was not a hexadecimal digit.
    #[error("invalid hex digit {digit:?} at offset {offset}")]
    InvalidHexDigit { digit: char, offset: usize },

    /// A line in a digit-table file did not match `key = value` with a
    /// single hex digit key and a 4-bit value.
    #[error("malformed digit table at line {line}")]
    MalformedTable { line: usize },

    /// A literal value spans more 5-bit groups than the decoder's u128
    /// accumulator can hold.
    #[error("literal value spans {groups} groups, maximum is {max}")]
    LiteralTooWide { groups: usize, max: usize },

    /// Packet nesting exceeded the recursion limit.
    #[error("packet nesting exceeds maximum depth {max}")]
    NestingTooDeep { max: usize },
}

/// Error during transmission encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A header or framing field does not fit its fixed-width slot.
    #[error("{field} value {value} exceeds maximum {max}")]
    FieldOutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },

    /// An operator packet carries the literal type id.
    #[error("operator packet uses the literal type id (4)")]
    OperatorTypeIsLiteral,

    /// A literal packet carries an operator type id.
    #[error("literal packet uses operator type id {type_id}")]
    LiteralTypeMismatch { type_id: u8 },
}
