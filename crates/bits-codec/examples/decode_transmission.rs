//! Decodes a BITS transmission file and prints the packet tree.

use std::fs;

use bits_codec::{LengthType, Packet, decode_hex};

fn describe(packet: &Packet, indent: usize) {
    let pad = "  ".repeat(indent);
    match packet {
        Packet::Literal { header, value } => {
            println!("{}Literal v{} = {}", pad, header.version, value);
        }
        Packet::Operator {
            header,
            length_type,
            packets,
        } => {
            let framing = match length_type {
                LengthType::TotalBits => "total-bits",
                LengthType::PacketCount => "count",
            };
            println!(
                "{}Operator v{} type {} ({} framing, {} sub-packets)",
                pad,
                header.version,
                header.type_id,
                framing,
                packets.len()
            );
            for sub in packets {
                describe(sub, indent + 1);
            }
        }
    }
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "transmission.txt".to_string());

    println!("Reading: {}", path);
    let text = fs::read_to_string(&path).expect("Failed to read file");
    let hex_line = text.trim();
    println!("Transmission: {} hex digits", hex_line.len());

    let packets = decode_hex(hex_line).expect("Failed to decode");

    println!("\n=== Packet Tree ===");
    for packet in &packets {
        describe(packet, 0);
    }

    let version_sum: u64 = packets.iter().map(Packet::version_sum).sum();
    println!("\nThe total sum of all packet version numbers is: {}", version_sum);
}
