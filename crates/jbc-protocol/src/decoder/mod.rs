//! Payload decoding.
//!
//! A reply is identified by its family and command code. The code is named
//! through the family's catalog and the name selects the decoder. Decoders
//! are tried in a fixed order and the first one that claims the frame wins:
//!
//! 1. control frames (keepalive, ACK, NACK, handshake, end of transmission)
//! 2. write acknowledgements
//! 3. decoders shared by several families (firmware, identity, port info, ...)
//! 4. family decoders
//! 5. plain 16-bit readings
//! 6. the hex fallback
//!
//! Decoding never fails. Payloads too short for their layout degrade to raw
//! hex and nothing is ever read past the end of the buffer.

mod auxiliary;
mod control;
mod generic;
mod hot_air;
mod layout;
mod report;
mod solder;

pub use report::{hex_spaced, parse_hex, Decoded, Field, Report, Value};

use crate::catalog;
use crate::config::DecoderConfig;
use crate::family::Family;

/// One reply being decoded.
pub(crate) struct Frame<'a> {
    /// Family whose decoders apply. For [`Family::Unknown`] this is the
    /// family whose catalog named the code.
    pub family: Family,
    /// Family shown in report headers.
    pub header: Family,
    pub name: &'static str,
    pub data: &'a [u8],
}

impl<'a> Frame<'a> {
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn report(&self) -> Report {
        Report::new(self.header, self.name)
    }

    pub(crate) fn u8(&self, offset: usize) -> Option<u8> {
        self.data.get(offset).copied()
    }

    pub(crate) fn u16(&self, offset: usize) -> Option<u16> {
        let b = self.data.get(offset..offset + 2)?;
        Some(u16::from_le_bytes([b[0], b[1]]))
    }

    pub(crate) fn i16(&self, offset: usize) -> Option<i16> {
        self.u16(offset).map(|v| v as i16)
    }

    pub(crate) fn u32(&self, offset: usize) -> Option<u32> {
        let b = self.data.get(offset..offset + 4)?;
        Some(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub(crate) fn tail(&self, from: usize) -> &'a [u8] {
        self.data.get(from..).unwrap_or_default()
    }

    /// `raw=<hex>` under the command name.
    pub(crate) fn raw(&self) -> Report {
        self.report().with("raw", Value::Bytes(self.data.to_vec()))
    }

    /// `payload=<len> raw=<hex>` for blocks shorter than their layout.
    pub(crate) fn short_raw(&self) -> Report {
        self.report()
            .with("payload", Value::Uint(self.len() as u64))
            .with("raw", Value::Bytes(self.data.to_vec()))
    }

    /// Printable characters of the payload.
    pub(crate) fn text(&self) -> String {
        sanitize(self.data)
    }
}

/// Drop control characters; keep everything printable.
pub(crate) fn sanitize(data: &[u8]) -> String {
    data.iter()
        .filter(|b| **b >= 0x20 && **b != 0x7F)
        .map(|b| char::from(*b))
        .collect()
}

/// Decode one reply.
pub fn decode(family: Family, code: u8, payload: &[u8], config: &DecoderConfig) -> Decoded {
    let mut decoded = dispatch(family, code, payload, config);
    if let Decoded::Report(report) = &mut decoded {
        report.correlation_id = config.correlation_id;
        if !report.is_handled() {
            log::debug!(
                "no decoder for {} ({} bytes)",
                catalog::qualified_name(code, family),
                payload.len()
            );
        }
    }
    decoded
}

fn dispatch(family: Family, code: u8, payload: &[u8], config: &DecoderConfig) -> Decoded {
    if let Some(decoded) = control::decode(family, code, payload, config) {
        return decoded;
    }

    let Some((hit, descriptor)) = catalog::find_by_code(code, family) else {
        return Decoded::Report(Report::fallback(family, payload));
    };
    let frame = Frame {
        family: hit,
        header: family,
        name: descriptor.name,
        data: payload,
    };
    log::trace!("decoding {} as {}", frame.name, hit);

    if let Some(report) = control::write_ack(&frame) {
        return Decoded::Report(report);
    }
    if let Some(report) = generic::decode(&frame) {
        return Decoded::Report(report);
    }
    let specific = match hit {
        Family::SolderV2 | Family::SolderV1 => solder::decode(&frame),
        Family::HotAir => hot_air::decode(&frame),
        Family::Preheater | Family::FumeExtractor | Family::Dispenser => auxiliary::decode(&frame),
        Family::Unknown => None,
    };
    if let Some(decoded) = specific {
        return decoded;
    }
    if let Some(report) = generic::common_u16(&frame) {
        return Decoded::Report(report);
    }
    Decoded::Report(Report::fallback(family, payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(family: Family, code: u8, payload: &[u8]) -> String {
        match decode(family, code, payload, &DecoderConfig::default()) {
            Decoded::Report(report) => report.to_string(),
            Decoded::Suppressed => String::new(),
        }
    }

    #[test]
    fn test_unknown_code_falls_back() {
        assert_eq!(line(Family::Dispenser, 0xEE, &[1, 2]), "[PAYLOAD] 2 bytes: 01 02");
    }

    #[test]
    fn test_unknown_family_uses_first_hit() {
        // 0x50 is the solder select temperature; the header keeps BASE.
        assert_eq!(
            line(Family::Unknown, 0x50, &[0x4E, 0x0C]),
            "[BASE_M_R_SELECTTEMP] c=350.0 uti=0x0C4E"
        );
    }

    #[test]
    fn test_correlation_id_attached() {
        let config = DecoderConfig {
            correlation_id: Some(42),
            ..DecoderConfig::default()
        };
        let decoded = decode(Family::SolderV2, 0x52, &[0x4E, 0x0C], &config);
        let report = decoded.report().unwrap();
        assert_eq!(report.correlation_id, Some(42));
        assert!(report.to_string().starts_with("[SOLD_M_R_TIPTEMP] <fid=42>"));
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize(b"DDE\x00\x7F\n_2C"), "DDE_2C");
    }
}
