//! Packet tree types for the BITS format.
//!
//! A transmission decodes into a tree of packets: literal leaves and
//! operator nodes whose children are further packets.

/// Type id marking a literal-value packet. Every other type id is an
/// operator.
pub const LITERAL_TYPE_ID: u8 = 4;

/// The 6-bit header opening every packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PacketHeader {
    /// 3-bit packet version (0–7), summed across the tree.
    pub version: u8,
    /// 3-bit type id (0–7); 4 means literal, anything else operator.
    pub type_id: u8,
}

/// Sub-packet framing scheme selected by an operator's length-type bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LengthType {
    /// Length type 0: a 15-bit field declares the total bit span of all
    /// sub-packets.
    TotalBits = 0,
    /// Length type 1: an 11-bit field declares the number of
    /// sub-packets.
    PacketCount = 1,
}

impl LengthType {
    /// Creates a LengthType from its wire bit.
    pub fn from_bit(bit: u8) -> LengthType {
        if bit == 0 {
            LengthType::TotalBits
        } else {
            LengthType::PacketCount
        }
    }
}

/// A decoded packet: header plus either a literal value or nested
/// sub-packets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    /// Type id 4: a single unsigned integer encoded in continued 5-bit
    /// groups. Values wider than 128 bits are rejected at decode time.
    Literal { header: PacketHeader, value: u128 },
    /// Any other type id: one or more sub-packets in parse order.
    Operator {
        header: PacketHeader,
        length_type: LengthType,
        packets: Vec<Packet>,
    },
}

impl Packet {
    /// Returns this packet's header.
    pub fn header(&self) -> &PacketHeader {
        match self {
            Packet::Literal { header, .. } | Packet::Operator { header, .. } => header,
        }
    }

    /// Returns true for literal-value packets.
    pub fn is_literal(&self) -> bool {
        matches!(self, Packet::Literal { .. })
    }

    /// Sums the version fields of this packet and all nested
    /// sub-packets, depth-first, parent before children.
    pub fn version_sum(&self) -> u64 {
        match self {
            Packet::Literal { header, .. } => u64::from(header.version),
            Packet::Operator { header, packets, .. } => {
                u64::from(header.version)
                    + packets.iter().map(Packet::version_sum).sum::<u64>()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(version: u8, value: u128) -> Packet {
        Packet::Literal {
            header: PacketHeader {
                version,
                type_id: LITERAL_TYPE_ID,
            },
            value,
        }
    }

    #[test]
    fn test_version_sum_counts_every_level() {
        let tree = Packet::Operator {
            header: PacketHeader {
                version: 3,
                type_id: 0,
            },
            length_type: LengthType::PacketCount,
            packets: vec![
                literal(1, 10),
                Packet::Operator {
                    header: PacketHeader {
                        version: 5,
                        type_id: 6,
                    },
                    length_type: LengthType::TotalBits,
                    packets: vec![literal(2, 20), literal(7, 30)],
                },
            ],
        };
        assert_eq!(tree.version_sum(), 3 + 1 + 5 + 2 + 7);
    }

    #[test]
    fn test_length_type_from_bit() {
        assert_eq!(LengthType::from_bit(0), LengthType::TotalBits);
        assert_eq!(LengthType::from_bit(1), LengthType::PacketCount);
    }

    #[test]
    fn test_header_accessor() {
        let p = literal(6, 2021);
        assert_eq!(p.header().version, 6);
        assert_eq!(p.header().type_id, LITERAL_TYPE_ID);
        assert!(p.is_literal());
    }
}
