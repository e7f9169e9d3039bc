//! JBC Bench-Station Protocol Codec
//!
//! This crate maps console commands to wire payloads and wire payloads back
//! to readable reports for JBC soldering, hot-air, preheater, fume-extractor
//! and dispenser stations. Framing (start/stop bytes, addressing, checksums)
//! is left to the transport; everything here works on the command code and
//! the payload that follows it.
//!
//! # Protocol Overview
//!
//! Each product line ("family") has its own command-code space:
//!
//! - **Catalog**: one static table per family mapping `M_*` names to codes
//!   and argument formats
//! - **Encoder**: `NAME arg...` console lines to little-endian payloads,
//!   temperatures in native units (9 per °C)
//! - **Decoder**: reply payloads to one-line reports, falling back to raw hex
//!   when nothing matches
//!
//! Control codes (`HS`, `EOT`, `ACK`, `NACK`, `SYN`) are shared by every
//! family.
//!
//! # Example
//!
//! ```rust,ignore
//! use jbc_protocol::{decode, encode, DecoderConfig, Family};
//!
//! // Build a command
//! let family = Family::resolve("DDE");
//! let cmd = encode("M_W_SELECTTEMP 0 350", family)?;
//! assert_eq!(cmd.payload.as_ref(), &[0x4E, 0x0C, 0x00]);
//!
//! // Render a reply
//! let decoded = decode(family, 0x50, &[0x4E, 0x0C], &DecoderConfig::default());
//! ```

pub mod catalog;
mod config;
mod constants;
pub mod datetime;
mod decoder;
mod encoder;
mod error;
mod family;
mod format;
pub mod translate;

pub use catalog::{CommandDescriptor, Confidence};
pub use config::*;
pub use constants::*;
pub use decoder::*;
pub use encoder::*;
pub use error::*;
pub use family::*;
pub use format::*;
