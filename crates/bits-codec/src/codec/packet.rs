//! Packet encoding/decoding for the BITS transmission format.
//!
//! Every packet opens with a 6-bit header (3-bit version, 3-bit type
//! id). Type id 4 is a literal value in continued 5-bit groups; every
//! other type id is an operator whose sub-packets are framed either by
//! a 15-bit total bit span or an 11-bit packet count.

use crate::codec::bits::{BitReader, BitWriter, bits_from_str};
use crate::error::{DecodeError, EncodeError};
use crate::hex::bits_from_hex;
use crate::limits::{MAX_LITERAL_GROUPS, MAX_NESTING_DEPTH};
use crate::model::{LITERAL_TYPE_ID, LengthType, Packet, PacketHeader};

/// Maximum sub-packet bit span expressible in total-length framing.
const MAX_TOTAL_BITS: usize = (1 << 15) - 1;

/// Maximum sub-packet count expressible in count framing.
const MAX_SUB_PACKETS: usize = (1 << 11) - 1;

// =============================================================================
// DECODING
// =============================================================================

/// Decodes one packet, advancing the reader past exactly the bits the
/// packet occupies.
pub fn decode_packet(reader: &mut BitReader<'_>) -> Result<Packet, DecodeError> {
    decode_at(reader, 0)
}

fn decode_at(reader: &mut BitReader<'_>, depth: usize) -> Result<Packet, DecodeError> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(DecodeError::NestingTooDeep {
            max: MAX_NESTING_DEPTH,
        });
    }

    let header = decode_header(reader)?;
    if header.type_id == LITERAL_TYPE_ID {
        let value = decode_literal_value(reader)?;
        return Ok(Packet::Literal { header, value });
    }

    let length_type = LengthType::from_bit(reader.read_bit("length type")?);
    let packets = match length_type {
        LengthType::TotalBits => {
            let declared = reader.read_bits(15, "total sub-packet bits")? as usize;
            let start = reader.position();
            let target = start + declared;
            let mut packets = Vec::new();
            while reader.position() < target {
                packets.push(decode_at(reader, depth + 1)?);
                if reader.position() > target {
                    return Err(DecodeError::Framing {
                        declared,
                        consumed: reader.position() - start,
                    });
                }
            }
            packets
        }
        LengthType::PacketCount => {
            let count = reader.read_bits(11, "sub-packet count")? as usize;
            let mut packets = Vec::with_capacity(count);
            for _ in 0..count {
                packets.push(decode_at(reader, depth + 1)?);
            }
            packets
        }
    };

    Ok(Packet::Operator {
        header,
        length_type,
        packets,
    })
}

fn decode_header(reader: &mut BitReader<'_>) -> Result<PacketHeader, DecodeError> {
    let version = reader.read_bits(3, "packet version")? as u8;
    let type_id = reader.read_bits(3, "type id")? as u8;
    Ok(PacketHeader { version, type_id })
}

/// Decodes a literal body: 5-bit groups, leading bit 1 continuing,
/// low 4 bits appended most-significant-group first. The terminal
/// 0-leading group's nibble still counts; nothing after it belongs to
/// the literal.
fn decode_literal_value(reader: &mut BitReader<'_>) -> Result<u128, DecodeError> {
    let mut value: u128 = 0;
    let mut groups = 0usize;
    loop {
        let group = reader.read_bits(5, "literal group")?;
        groups += 1;
        if groups > MAX_LITERAL_GROUPS {
            return Err(DecodeError::LiteralTooWide {
                groups,
                max: MAX_LITERAL_GROUPS,
            });
        }
        value = (value << 4) | u128::from(group & 0x0F);
        if group & 0x10 == 0 {
            return Ok(value);
        }
    }
}

/// Decodes one packet while folding version fields into `total`.
///
/// The version is added the moment the header is read, before any
/// descent into sub-packets, so accumulation is strictly pre-order.
fn sum_one(
    reader: &mut BitReader<'_>,
    depth: usize,
    total: &mut u64,
) -> Result<(), DecodeError> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(DecodeError::NestingTooDeep {
            max: MAX_NESTING_DEPTH,
        });
    }

    let header = decode_header(reader)?;
    *total += u64::from(header.version);

    if header.type_id == LITERAL_TYPE_ID {
        // The value is not needed for the sum but its bits must still
        // be consumed so siblings resume at the right offset.
        decode_literal_value(reader)?;
        return Ok(());
    }

    match LengthType::from_bit(reader.read_bit("length type")?) {
        LengthType::TotalBits => {
            let declared = reader.read_bits(15, "total sub-packet bits")? as usize;
            let start = reader.position();
            let target = start + declared;
            while reader.position() < target {
                sum_one(reader, depth + 1, total)?;
                if reader.position() > target {
                    return Err(DecodeError::Framing {
                        declared,
                        consumed: reader.position() - start,
                    });
                }
            }
        }
        LengthType::PacketCount => {
            let count = reader.read_bits(11, "sub-packet count")?;
            for _ in 0..count {
                sum_one(reader, depth + 1, total)?;
            }
        }
    }
    Ok(())
}

// =============================================================================
// TOP-LEVEL DRIVERS
// =============================================================================

/// Sums every packet version in a transmission given as a `'0'`/`'1'`
/// string.
///
/// Decodes top-level packets while a set bit remains, so the trailing
/// zero padding left by hex expansion is never parsed as a packet. Any
/// error aborts the whole decode; no partial sum is returned.
pub fn sum_packet_versions(bit_string: &str) -> Result<u64, DecodeError> {
    let bits = bits_from_str(bit_string)?;
    sum_bits(&bits)
}

/// Sums every packet version in a hex-encoded transmission line.
pub fn sum_packet_versions_hex(hex_line: &str) -> Result<u64, DecodeError> {
    let bits = bits_from_hex(hex_line)?;
    sum_bits(&bits)
}

/// Decodes the packet trees in a transmission given as a `'0'`/`'1'`
/// string. The puzzle format carries a single top-level packet, but a
/// stream with several is decoded in order.
pub fn decode_transmission(bit_string: &str) -> Result<Vec<Packet>, DecodeError> {
    let bits = bits_from_str(bit_string)?;
    decode_bits(&bits)
}

/// Decodes the packet trees in a hex-encoded transmission line.
pub fn decode_hex(hex_line: &str) -> Result<Vec<Packet>, DecodeError> {
    let bits = bits_from_hex(hex_line)?;
    decode_bits(&bits)
}

fn sum_bits(bits: &[u8]) -> Result<u64, DecodeError> {
    let mut reader = BitReader::new(bits);
    let mut total = 0u64;
    while reader.has_more_packets() {
        sum_one(&mut reader, 0, &mut total)?;
    }
    Ok(total)
}

fn decode_bits(bits: &[u8]) -> Result<Vec<Packet>, DecodeError> {
    let mut reader = BitReader::new(bits);
    let mut packets = Vec::new();
    while reader.has_more_packets() {
        packets.push(decode_at(&mut reader, 0)?);
    }
    Ok(packets)
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes one packet onto a writer.
pub fn encode_packet(packet: &Packet, writer: &mut BitWriter) -> Result<(), EncodeError> {
    let header = packet.header();
    if header.version > 7 {
        return Err(EncodeError::FieldOutOfRange {
            field: "packet version",
            value: u64::from(header.version),
            max: 7,
        });
    }
    if header.type_id > 7 {
        return Err(EncodeError::FieldOutOfRange {
            field: "type id",
            value: u64::from(header.type_id),
            max: 7,
        });
    }

    match packet {
        Packet::Literal { header, value } => {
            if header.type_id != LITERAL_TYPE_ID {
                return Err(EncodeError::LiteralTypeMismatch {
                    type_id: header.type_id,
                });
            }
            writer.push_bits(u64::from(header.version), 3);
            writer.push_bits(u64::from(header.type_id), 3);
            encode_literal_value(*value, writer);
        }
        Packet::Operator {
            header,
            length_type,
            packets,
        } => {
            if header.type_id == LITERAL_TYPE_ID {
                return Err(EncodeError::OperatorTypeIsLiteral);
            }
            writer.push_bits(u64::from(header.version), 3);
            writer.push_bits(u64::from(header.type_id), 3);
            writer.push_bit(*length_type as u8);

            let mut body = BitWriter::new();
            for sub in packets {
                encode_packet(sub, &mut body)?;
            }
            match length_type {
                LengthType::TotalBits => {
                    if body.len() > MAX_TOTAL_BITS {
                        return Err(EncodeError::FieldOutOfRange {
                            field: "sub-packet bit span",
                            value: body.len() as u64,
                            max: MAX_TOTAL_BITS as u64,
                        });
                    }
                    writer.push_bits(body.len() as u64, 15);
                }
                LengthType::PacketCount => {
                    if packets.len() > MAX_SUB_PACKETS {
                        return Err(EncodeError::FieldOutOfRange {
                            field: "sub-packet count",
                            value: packets.len() as u64,
                            max: MAX_SUB_PACKETS as u64,
                        });
                    }
                    writer.push_bits(packets.len() as u64, 11);
                }
            }
            writer.append(&body);
        }
    }
    Ok(())
}

fn encode_literal_value(value: u128, writer: &mut BitWriter) {
    let value_bits = 128 - value.leading_zeros() as usize;
    let nibbles = value_bits.div_ceil(4).max(1);
    for i in (0..nibbles).rev() {
        let nibble = ((value >> (i * 4)) & 0x0F) as u64;
        let continuation = u64::from(i > 0);
        writer.push_bits((continuation << 4) | nibble, 5);
    }
}

/// Encodes packets into a `'0'`/`'1'` transmission string, zero-padded
/// to a whole number of hex digits.
pub fn encode_transmission(packets: &[Packet]) -> Result<String, EncodeError> {
    let mut writer = BitWriter::new();
    for packet in packets {
        encode_packet(packet, &mut writer)?;
    }
    while writer.len() % 4 != 0 {
        writer.push_bit(0);
    }
    Ok(writer.to_bit_string())
}
