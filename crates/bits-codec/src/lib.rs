//! BITS: decoder for the recursive binary packet transmission format.
//!
//! A transmission is a single line of hexadecimal text. Each hex digit
//! expands to four bits, and the resulting bit stream holds one
//! outermost packet (plus trailing zero padding). Every packet opens
//! with a 3-bit version and a 3-bit type id; type id 4 is a literal
//! value, any other type id is an operator nesting further packets,
//! framed either by a 15-bit total bit span or an 11-bit sub-packet
//! count.
//!
//! # Quick Start
//!
//! ```rust
//! use bits_codec::{Packet, decode_hex, sum_packet_versions_hex};
//!
//! // A single literal packet: version 6, value 2021.
//! let packets = decode_hex("D2FE28").unwrap();
//! assert!(matches!(packets[0], Packet::Literal { value: 2021, .. }));
//!
//! // Sum every version field across the packet tree.
//! assert_eq!(sum_packet_versions_hex("A0016C880162017C3686B18A3D4780").unwrap(), 31);
//! ```
//!
//! # Modules
//!
//! - [`model`]: The packet tree types (Packet, PacketHeader, LengthType)
//! - [`codec`]: Bit-stream cursor and packet encoding/decoding
//! - [`hex`]: Hex-line to bit-stream transcoding
//! - [`error`]: Error types
//! - [`limits`]: Security limits for decoding
//!
//! # Security
//!
//! The decoder is designed to safely handle untrusted input:
//! - Recursion depth is capped, so crafted nesting cannot exhaust the
//!   call stack
//! - Literal values are bounded to 128 bits and rejected beyond that
//! - Truncated or misframed input is rejected with descriptive errors,
//!   never partially decoded

pub mod codec;
pub mod error;
pub mod hex;
pub mod limits;
pub mod model;

// Re-export commonly used items at crate root
pub use codec::{
    BitReader, BitWriter, bits_from_str, decode_hex, decode_packet, decode_transmission,
    encode_packet, encode_transmission, sum_packet_versions, sum_packet_versions_hex,
};
pub use error::{DecodeError, EncodeError};
pub use hex::{DigitTable, bits_from_hex};
pub use model::{LITERAL_TYPE_ID, LengthType, Packet, PacketHeader};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
