//! Data model types for decoded transmissions.

pub mod packet;

pub use packet::{LITERAL_TYPE_ID, LengthType, Packet, PacketHeader};
