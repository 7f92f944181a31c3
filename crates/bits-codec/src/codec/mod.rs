//! Bit-level encoding/decoding for BITS transmissions.

pub mod bits;
pub mod packet;

pub use bits::{BitReader, BitWriter, bits_from_str};
pub use packet::{
    decode_hex, decode_packet, decode_transmission, encode_packet, encode_transmission,
    sum_packet_versions, sum_packet_versions_hex,
};
