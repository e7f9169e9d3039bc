//! Protocol constants shared by every station family.

// ============================================================================
// Control Codes
// ============================================================================

/// Handshake (`M_NULL` on the first-generation solder protocol).
pub const CODE_HS: u8 = 0x00;
/// End of transmission.
pub const CODE_EOT: u8 = 0x04;
/// Positive acknowledgement.
pub const CODE_ACK: u8 = 0x06;
/// Negative acknowledgement.
pub const CODE_NACK: u8 = 0x15;
/// Keepalive.
pub const CODE_SYN: u8 = 0x16;

/// First payload byte of a write acknowledgement.
pub const ACK_MARKER: u8 = 0x06;

// ============================================================================
// NACK Reasons
// ============================================================================

pub const NACK_FORMAT_LENGTH: u8 = 0x01;
pub const NACK_UNSUPPORTED_CMD: u8 = 0x02;
pub const NACK_ILLEGAL_STATE: u8 = 0x03;
pub const NACK_BAD_ARGUMENTS: u8 = 0x04;
pub const NACK_NOT_ALLOWED: u8 = 0x05;

// ============================================================================
// Limits
// ============================================================================

/// Maximum tokens on one console line (command name included).
pub const MAX_TOKENS: usize = 12;

/// Maximum encoded payload size.
pub const MAX_PAYLOAD: usize = 48;

/// Device-internal temperature units per degree Celsius.
pub const UTI_PER_DEGREE: i32 = 9;

/// Marker for a disabled temperature alarm.
pub const TEMP_DISABLED: u16 = 0xFFFF;

/// Upper bound of per-mille readings (100.0 %).
pub const PER_MILLE_MAX: u16 = 1000;
