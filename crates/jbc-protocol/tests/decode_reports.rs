//! Reply decoding through the public API.

use jbc_protocol::{decode, Decoded, DecoderConfig, Family, Value, CODE_NACK};

fn report(family: Family, code: u8, payload: &[u8]) -> jbc_protocol::Report {
    match decode(family, code, payload, &DecoderConfig::default()) {
        Decoded::Report(report) => report,
        Decoded::Suppressed => panic!("suppressed 0x{:02X}", code),
    }
}

#[test]
fn test_nack_reason_name() {
    let report = report(Family::SolderV2, CODE_NACK, &[0x04]);
    assert_eq!(
        report.get("reason_name"),
        Some(&Value::Text("bad arguments".to_string()))
    );
}

#[test]
fn test_date_time_reading() {
    let report = report(
        Family::HotAir,
        0x96,
        &[0xE8, 0xCB, 0x00, 0x19, 0x00, 0x08, 0x1B],
    );
    assert_eq!(
        report.get("iso"),
        Some(&Value::Text("2025-08-27 14:30:00".to_string()))
    );
}

#[test]
fn test_short_port_info_is_raw_and_deterministic() {
    for family in [Family::SolderV2, Family::SolderV1, Family::HotAir, Family::Preheater] {
        for len in 0..12 {
            let data: Vec<u8> = (0..len as u8).collect();
            let first = report(family, 0x30, &data);
            let second = report(family, 0x30, &data);
            assert_eq!(first, second);
            assert!(first.is_handled());
            assert_eq!(first.get("payload").and_then(Value::as_u64), Some(len as u64));
            assert_eq!(first.get("raw"), Some(&Value::Bytes(data)));
        }
    }
}

#[test]
fn test_selected_temperature() {
    let line = report(Family::SolderV2, 0x50, &[0x4E, 0x0C]).to_string();
    assert_eq!(line, "[SOLD_M_R_SELECTTEMP] c=350.0 uti=0x0C4E");
}

#[test]
fn test_correlation_id_and_json() {
    let config = DecoderConfig::default().with_correlation_id(12);
    let Decoded::Report(report) = decode(Family::SolderV2, 0x06, &[], &config) else {
        panic!("ack suppressed");
    };
    assert_eq!(report.to_string(), "[SOLD_ACK] <fid=12> OK");
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["correlation_id"], 12);
    assert_eq!(json["status"], "OK");
    assert_eq!(json["family"], "SOLDER_V2");
}

#[test]
fn test_keepalive() {
    assert_eq!(
        decode(Family::HotAir, 0x16, &[], &DecoderConfig::default()),
        Decoded::Suppressed
    );
    let config = DecoderConfig {
        suppress_keepalive: false,
        correlation_id: None,
    };
    assert!(decode(Family::HotAir, 0x16, &[], &config).is_handled());
}

#[test]
fn test_unmapped_code_falls_back_to_hex() {
    let report = report(Family::Dispenser, 0xEE, &[0xDE, 0xAD]);
    assert!(!report.is_handled());
    assert_eq!(report.to_string(), "[PAYLOAD] 2 bytes: DE AD");
}

/// No code and payload length may read past the buffer.
#[test]
fn test_no_panic_on_any_code_or_length() {
    let config = DecoderConfig {
        suppress_keepalive: false,
        correlation_id: Some(1),
    };
    let mut families = Family::SEARCH_ORDER.to_vec();
    families.push(Family::Unknown);
    for family in families {
        for code in 0..=u8::MAX {
            for len in [0usize, 1, 2, 3, 5, 7, 12, 14, 16, 20, 40] {
                let data: Vec<u8> = (0..len).map(|i| (i as u8).wrapping_mul(37)).collect();
                let decoded = decode(family, code, &data, &config);
                if let Decoded::Report(report) = decoded {
                    assert!(!report.to_string().is_empty());
                }
            }
        }
    }
}
