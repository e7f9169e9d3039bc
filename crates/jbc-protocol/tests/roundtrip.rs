//! Catalog and encoder round trips over every family table.

use jbc_protocol::catalog::{self, Confidence};
use jbc_protocol::{decode_arguments, encode, ArgFormat, Family};

/// Console arguments that are valid for `format` on every family.
fn sample_arguments(format: ArgFormat) -> &'static str {
    match format {
        ArgFormat::None => "",
        ArgFormat::Port => "0",
        ArgFormat::PortTool => "0 1",
        ArgFormat::U8 => "7",
        ArgFormat::U16 => "513",
        ArgFormat::Temp => "350",
        ArgFormat::U16U16 => "100 200",
        ArgFormat::TempTemp => "450 100",
        ArgFormat::Text => "bench one",
        ArgFormat::RawBytes => "0x01 0x02 0xFF",
        ArgFormat::IpConfig => "1 10.0.0.2 255.255.255.0 10.0.0.1 8.8.8.8 8080",
        ArgFormat::WritePortU8 => "0 7",
        ArgFormat::WritePortU16 => "0 1000",
        ArgFormat::WritePortTemp => "0 350",
        ArgFormat::WritePort3Temp => "0 200 300 350",
        ArgFormat::WritePortToolU8 => "0 1 3",
        ArgFormat::WritePortToolU16 => "0 1 600",
        ArgFormat::WritePortToolTemp => "0 1 150",
        ArgFormat::WritePortTool3Temp => "0 1 200 300 350",
        ArgFormat::WritePortToolU8U8 => "0 1 10 1",
        ArgFormat::WriteLevelsTemps => "0 1 1 2 1 200 1 300 0 350",
        ArgFormat::WritePortToolTempDelta => "0 1 -15",
        ArgFormat::WriteDateTime => "2025 8 27 14 30 0",
    }
}

#[test]
fn test_lookup_then_reverse_lookup() {
    for family in Family::SEARCH_ORDER {
        for descriptor in catalog::entries(family) {
            let found = catalog::lookup(descriptor.name, family)
                .unwrap_or_else(|| panic!("{} missing {}", family, descriptor.name));
            assert_eq!(found.code, descriptor.code);
            if descriptor.confidence != Confidence::Alias {
                assert_eq!(
                    catalog::reverse_lookup(descriptor.code, family),
                    descriptor.name,
                    "{} 0x{:02X}",
                    family,
                    descriptor.code
                );
            }
        }
    }
}

#[test]
fn test_every_encodable_entry_round_trips() {
    let mut checked = 0;
    for family in Family::SEARCH_ORDER {
        for descriptor in catalog::entries(family) {
            let Some(format) = descriptor.format else {
                continue;
            };
            let args = sample_arguments(format);
            let line = format!("{} {}", descriptor.name, args);
            let cmd = encode(&line, family)
                .unwrap_or_else(|e| panic!("{} {:?}: {}", family, line, e));
            assert_eq!(cmd.code, descriptor.code);

            let decoded = decode_arguments(format, &cmd.payload)
                .unwrap_or_else(|e| panic!("{} {:?}: {}", family, line, e));
            let tokens: Vec<String> = decoded.iter().map(|a| a.to_string()).collect();
            assert_eq!(tokens.join(" "), args, "{} {}", family, descriptor.name);
            checked += 1;
        }
    }
    assert!(checked > 100);
}

#[test]
fn test_unknown_family_searches_all_tables() {
    let cmd = encode("M_W_DATETIME 2025 8 27 14 30 0", Family::Unknown).unwrap();
    assert_eq!(cmd.code, 0x97);
    assert_eq!(cmd.payload.len(), 7);
}

#[test]
fn test_failed_encode_produces_nothing() {
    assert!(encode("M_W_SELECTTEMP 5 350", Family::SolderV2).is_err());
    assert!(encode("M_W_SELECTTEMP 0 99999", Family::SolderV2).is_err());
    assert!(encode("M_W_SELECTTEMP 0 abc", Family::SolderV2).is_err());
}
