//! Codec error types.

use thiserror::Error;

use crate::family::Family;

/// Errors raised while turning a console line into a payload.
///
/// No bytes are produced when any of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The line held no command name.
    #[error("empty command line")]
    Empty,

    /// More tokens than a console line may carry.
    #[error("too many tokens: maximum {max}, got {actual}")]
    TooManyTokens {
        /// Maximum token count, command name included.
        max: usize,
        /// Tokens found on the line.
        actual: usize,
    },

    /// The name is not in the family's catalog.
    #[error("unknown command {name} for {family}")]
    UnknownCommand {
        /// Requested name, upper-cased.
        name: String,
        /// Family searched.
        family: Family,
    },

    /// The command is known but has no console argument format.
    #[error("{name} has no console argument format")]
    NotEncodable {
        /// Catalog name.
        name: &'static str,
    },

    /// Not enough argument tokens for the command's format.
    #[error("{name}: missing arguments, usage: {usage}")]
    MissingArguments {
        /// Catalog name.
        name: &'static str,
        /// Expected argument list.
        usage: &'static str,
    },

    /// A numeric token could not be parsed.
    #[error("invalid number for {what}: {token:?}")]
    InvalidNumber {
        /// Argument being parsed.
        what: &'static str,
        /// Offending token.
        token: String,
    },

    /// A numeric token does not fit its wire field.
    #[error("{what} out of range: {value}")]
    OutOfRange {
        /// Argument being parsed.
        what: &'static str,
        /// Parsed value.
        value: i64,
    },

    /// Port index not addressable on this family.
    #[error("port {port} not allowed for {family}")]
    PortNotAllowed {
        /// Requested port.
        port: u8,
        /// Target family.
        family: Family,
    },

    /// Malformed dotted-quad address.
    #[error("invalid IPv4 {what}: {token:?}")]
    InvalidIpv4 {
        /// Which address of the configuration.
        what: &'static str,
        /// Offending token.
        token: String,
    },

    /// Text command with nothing after the name.
    #[error("{name}: text argument is empty")]
    EmptyText {
        /// Catalog name.
        name: &'static str,
    },

    /// Encoded payload would exceed the frame capacity.
    #[error("payload too long: maximum {max} bytes, got {actual}")]
    PayloadTooLong {
        /// Maximum payload size.
        max: usize,
        /// Size the command would need.
        actual: usize,
    },

    /// Payload does not match the layout of its argument format.
    #[error("payload does not match {format} layout ({len} bytes)")]
    LayoutMismatch {
        /// Format name.
        format: &'static str,
        /// Payload length.
        len: usize,
    },
}

/// Result alias for encoder operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Rejection reason carried in the first byte of a NACK payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NackReason {
    /// Frame format or length wrong.
    FormatLength,
    /// Command not supported by the station.
    UnsupportedCommand,
    /// Station state forbids the command, or it is locked.
    IllegalState,
    /// Arguments rejected.
    BadArguments,
    /// Not allowed while remote mode is off.
    NotAllowed,
    /// Unrecognised reason code.
    Unknown(u8),
}

impl std::fmt::Display for NackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NackReason::FormatLength => write!(f, "format/length"),
            NackReason::UnsupportedCommand => write!(f, "unsupported command"),
            NackReason::IllegalState => write!(f, "illegal state/locked"),
            NackReason::BadArguments => write!(f, "bad arguments"),
            NackReason::NotAllowed => write!(f, "not allowed/remote off"),
            NackReason::Unknown(code) => write!(f, "unknown reason (0x{:02X})", code),
        }
    }
}

impl From<u8> for NackReason {
    fn from(code: u8) -> Self {
        use crate::constants::*;
        match code {
            NACK_FORMAT_LENGTH => NackReason::FormatLength,
            NACK_UNSUPPORTED_CMD => NackReason::UnsupportedCommand,
            NACK_ILLEGAL_STATE => NackReason::IllegalState,
            NACK_BAD_ARGUMENTS => NackReason::BadArguments,
            NACK_NOT_ALLOWED => NackReason::NotAllowed,
            _ => NackReason::Unknown(code),
        }
    }
}

impl From<NackReason> for u8 {
    fn from(reason: NackReason) -> Self {
        use crate::constants::*;
        match reason {
            NackReason::FormatLength => NACK_FORMAT_LENGTH,
            NackReason::UnsupportedCommand => NACK_UNSUPPORTED_CMD,
            NackReason::IllegalState => NACK_ILLEGAL_STATE,
            NackReason::BadArguments => NACK_BAD_ARGUMENTS,
            NackReason::NotAllowed => NACK_NOT_ALLOWED,
            NackReason::Unknown(code) => code,
        }
    }
}
