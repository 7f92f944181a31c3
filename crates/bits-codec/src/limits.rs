//! Security limits for decoding.
//!
//! The decoder accepts untrusted input; these caps bound the two
//! resources an adversarial transmission could otherwise exhaust.

/// Maximum number of 5-bit groups in a literal value.
///
/// 32 groups carry 128 value bits, the width of the `u128` accumulator.
/// Wider literals fail with [`DecodeError::LiteralTooWide`] rather than
/// silently truncating.
///
/// [`DecodeError::LiteralTooWide`]: crate::error::DecodeError::LiteralTooWide
pub const MAX_LITERAL_GROUPS: usize = 32;

/// Maximum packet nesting depth.
///
/// Decoding recurses once per nesting level; the cap keeps crafted
/// deeply-nested operators from exhausting the call stack.
pub const MAX_NESTING_DEPTH: usize = 512;
