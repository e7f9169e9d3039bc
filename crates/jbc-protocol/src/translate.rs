//! Bitmask and code-to-name tables.
//!
//! Every table is static and read-only. Bitmask renderings list known names
//! in table order, then any unknown set bit as `BITn`.

use crate::family::Family;

/// One named bit (or bit group) of a status mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitName {
    pub mask: u16,
    pub name: &'static str,
}

const fn bit(mask: u16, name: &'static str) -> BitName {
    BitName { mask, name }
}

/// Named bits of a mask together with the mask's width.
#[derive(Debug, Clone, Copy)]
pub struct BitTable {
    pub width: u8,
    pub bits: &'static [BitName],
}

impl BitTable {
    /// Names of every set bit. Unknown bits render as `BITn`.
    pub fn names(&self, value: u16) -> Vec<String> {
        let mut names: Vec<String> = self
            .bits
            .iter()
            .filter(|b| value & b.mask != 0)
            .map(|b| b.name.to_string())
            .collect();
        let known = self.bits.iter().fold(0u16, |acc, b| acc | b.mask);
        for n in 0..self.width.min(16) {
            let m = 1u16 << n;
            if value & m != 0 && known & m == 0 {
                names.push(format!("BIT{}", n));
            }
        }
        names
    }

    /// Like [`BitTable::names`] but yields `NONE` for an empty mask.
    pub fn names_or_none(&self, value: u16) -> Vec<String> {
        let names = self.names(value);
        if names.is_empty() {
            vec!["NONE".to_string()]
        } else {
            names
        }
    }
}

// ============================================================================
// Bit Tables
// ============================================================================

/// 8-bit solder port flags.
pub static SOLDER_FLAGS: BitTable = BitTable {
    width: 8,
    bits: &[
        bit(0x01, "STAND"),
        bit(0x02, "SLEEP"),
        bit(0x04, "HIBERNATION"),
        bit(0x08, "EXTRACTOR"),
        bit(0x10, "DESOLDER"),
        bit(0x20, "PORT_LOCKED"),
    ],
};

/// 16-bit solder tool status.
pub static SOLDER_STATUS_TOOL: BitTable = BitTable {
    width: 16,
    bits: &[
        bit(0x0001, "STAND"),
        bit(0x0002, "SLEEP"),
        bit(0x0004, "HIBERNATION"),
        bit(0x0008, "EXTRACTOR"),
        bit(0x0010, "DESOLDER"),
        bit(0x0020, "PORT_LOCKED"),
        bit(0x0100, "DESOLDER_TOOL"),
    ],
};

/// Change notifications carried in port-info blocks.
pub static PORT_CHANGES: BitTable = BitTable {
    width: 8,
    bits: &[
        bit(0x01, "SELECTTEMP_CHANGED"),
        bit(0x02, "STATION_PARAM_CHANGED"),
        bit(0x04, "TOOL_PARAM_GRP0_CHANGED"),
        bit(0x08, "TOOL_PARAM_GRP1_CHANGED"),
        bit(0x10, "TOOL_PARAM_GRP2_CHANGED"),
        bit(0x20, "TOOL_PARAM_GRP3_CHANGED"),
        bit(0x80, "COUNTER_CHANGED"),
    ],
};

/// Hot-air station status byte.
pub static HOT_AIR_STATUS: BitTable = BitTable {
    width: 8,
    bits: &[
        bit(0x01, "HEATER"),
        bit(0x02, "HEATER_REQUESTED"),
        bit(0x04, "COOLING"),
        bit(0x08, "SUCTION"),
        bit(0x10, "SUCTION_REQUESTED"),
        bit(0x20, "PEDAL_CONNECTED"),
        bit(0x40, "PEDAL_PRESSED"),
        bit(0x80, "STAND"),
    ],
};

/// Hot-air start triggers.
pub static HOT_AIR_START_MODE: BitTable = BitTable {
    width: 8,
    bits: &[
        bit(0x01, "TOOL_BUTTON"),
        bit(0x02, "STAND_OUT"),
        bit(0x04, "PEDAL_PULSE"),
        bit(0x08, "PEDAL_HOLD_DOWN"),
    ],
};

// ============================================================================
// Tools
// ============================================================================

static SOLDER_TOOLS: [&str; 10] = [
    "NOTOOL", "T210", "T245", "PA", "HT", "DS", "DR", "NT105", "NP105", "T470",
];

static HOT_AIR_TOOLS: [&str; 3] = ["NOTOOL", "JT", "TE"];

/// Solder handpiece name.
pub fn solder_tool_name(code: u8) -> Option<&'static str> {
    SOLDER_TOOLS.get(code as usize).copied()
}

/// Hot-air handpiece name.
pub fn hot_air_tool_name(code: u8) -> Option<&'static str> {
    HOT_AIR_TOOLS.get(code as usize).copied()
}

/// Tool name in the family's tool space. Hot-air has its own; every other
/// family reports solder tool codes.
pub fn tool_name(family: Family, code: u8) -> Option<&'static str> {
    match family {
        Family::HotAir => hot_air_tool_name(code),
        _ => solder_tool_name(code),
    }
}

/// Tool code for a console mnemonic (`T245`, `JT`, ...), case-insensitive.
pub fn tool_code(family: Family, mnemonic: &str) -> Option<u8> {
    let upper = mnemonic.to_ascii_uppercase();
    let code = match upper.as_str() {
        "" | "NONE" | "NOTOOL" => 0,
        _ if family == Family::HotAir => match upper.as_str() {
            "JT" => 1,
            "TE" => 2,
            _ => return None,
        },
        "T210" => 1,
        "T245" => 2,
        "PA" | "PA120" => 3,
        "HT" => 4,
        "DS" | "DS360" => 5,
        "DR" | "DR560" => 6,
        "NT105" => 7,
        "NP105" => 8,
        "T470" => 9,
        _ => return None,
    };
    Some(code)
}

/// Tool error name per family. Fume extractors and dispensers have none.
pub fn tool_error_name(family: Family, code: u8) -> Option<&'static str> {
    let table: &[&str] = match family {
        Family::SolderV2 | Family::SolderV1 | Family::Unknown => &[
            "OK",
            "SHORTCIRCUIT",
            "SHORTCIRCUIT_NR",
            "OPENCIRCUIT",
            "NOTOOL",
            "WRONGTOOL",
            "DETECTIONTOOL",
            "MAXPOWER",
            "STOPOVERLOAD_MOS",
        ],
        Family::HotAir => &[
            "OK",
            "AIR_PUMP_ERROR",
            "PROTECTION_TC_HIGH",
            "REGULATION_TC_HIGH",
            "EXTERNAL_TC_MISSING",
            "SELECTED_TEMP_NOT_REACHED",
            "HIGH_HEATER_INTENSITY",
            "LOW_HEATER_RESISTANCE",
            "WRONG_HEATER",
            "NOTOOL_HA",
            "DETECTIONTOOL_HA",
        ],
        Family::Preheater => &[
            "OK",
            "SELECTED_TEMP_NOT_REACHED_PH",
            "LOW_HEATER_INTENSITY",
            "TC1_NOT_CONNECTED",
            "TC1_LIMIT_REACHED",
            "TC2_NOT_CONNECTED",
            "TC2_LIMIT_REACHED",
            "TC1_TC2_NOT_CONNECTED",
        ],
        Family::FumeExtractor | Family::Dispenser => &[],
    };
    table.get(code as usize).copied()
}

// ============================================================================
// Station Settings
// ============================================================================

pub fn station_error_name(code: u8) -> Option<&'static str> {
    const NAMES: [&str; 7] = [
        "OK",
        "STOPOVERLOAD_TRAFO",
        "WRONGSENSOR_TRAFO",
        "MEMORY",
        "MAINSFREQUENCY",
        "STATION_MODEL",
        "NOT_MCU_TOOLS",
    ];
    NAMES.get(code as usize).copied()
}

pub fn ground_type_name(code: u8) -> Option<&'static str> {
    match code {
        0 => Some("SOFTGROUND"),
        1 => Some("HARDGROUND"),
        _ => None,
    }
}

/// Temperature unit from a numeric code or an ASCII letter.
pub fn temp_unit_name(code: u8) -> Option<&'static str> {
    match code {
        0 | b'C' | b'c' => Some("CELSIUS"),
        1 | b'F' | b'f' => Some("FAHRENHEIT"),
        _ => None,
    }
}

static LANGUAGES: [(&[u8; 2], &str); 6] = [
    (b"EN", "ENGLISH"),
    (b"ES", "SPANISH"),
    (b"DE", "GERMAN"),
    (b"FR", "FRENCH"),
    (b"IT", "ITALIAN"),
    (b"PT", "PORTUGUESE"),
];

/// Language from a two-letter ASCII prefix.
pub fn language_from_ascii(data: &[u8]) -> Option<&'static str> {
    let prefix = data.get(..2)?;
    LANGUAGES
        .iter()
        .find(|(code, _)| prefix.eq_ignore_ascii_case(&code[..]))
        .map(|(_, name)| *name)
}

/// Language from a numeric code (0 = English).
pub fn language_from_code(code: u8) -> Option<&'static str> {
    LANGUAGES.get(code as usize).map(|(_, name)| *name)
}

pub fn theme_name(code: u8) -> Option<&'static str> {
    match code {
        0 => Some("DARK"),
        1 => Some("LIGHT"),
        2 => Some("AUTO"),
        _ => None,
    }
}

/// USB connection mode from the last letter of the status text.
pub fn usb_mode_name(text: &str) -> Option<&'static str> {
    match text
        .chars()
        .rev()
        .find(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
    {
        Some('C') => Some("PC_CONTROL"),
        Some('M') => Some("MONITOR"),
        _ => None,
    }
}

// ============================================================================
// Robot Interface
// ============================================================================

/// Baud rates indexed by the robot link speed code.
pub static ROBOT_BAUD_RATES: [u32; 10] = [
    1200, 2400, 4800, 9600, 19200, 38400, 57600, 115200, 230400, 250000,
];

pub fn parity_name(c: u8) -> Option<&'static str> {
    match c.to_ascii_uppercase() {
        b'N' => Some("NONE"),
        b'E' => Some("EVEN"),
        b'O' => Some("ODD"),
        b'M' => Some("MARK"),
        b'S' => Some("SPACE"),
        _ => None,
    }
}

pub fn robot_state_name(c: u8) -> Option<&'static str> {
    match c.to_ascii_uppercase() {
        b'C' => Some("CONNECTED"),
        b'N' => Some("NOT_CONNECTED"),
        b'O' => Some("OPEN"),
        b'K' => Some("OK"),
        _ => None,
    }
}

pub fn peripheral_state_name(c: u8) -> Option<&'static str> {
    match c {
        b'C' => Some("CONNECTED"),
        b'O' => Some("OPEN"),
        b'K' => Some("OK"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_names_known_and_unknown() {
        assert_eq!(SOLDER_FLAGS.names(0x03), vec!["STAND", "SLEEP"]);
        assert_eq!(SOLDER_FLAGS.names(0x41), vec!["STAND", "BIT6"]);
        assert_eq!(SOLDER_FLAGS.names_or_none(0), vec!["NONE"]);
        assert_eq!(
            SOLDER_STATUS_TOOL.names(0x0301),
            vec!["STAND", "DESOLDER_TOOL", "BIT9"]
        );
        assert_eq!(PORT_CHANGES.names(0xC0), vec!["COUNTER_CHANGED", "BIT6"]);
    }

    #[test]
    fn test_tool_tables() {
        assert_eq!(tool_name(Family::SolderV2, 2), Some("T245"));
        assert_eq!(tool_name(Family::HotAir, 2), Some("TE"));
        assert_eq!(tool_name(Family::HotAir, 3), None);
        assert_eq!(tool_code(Family::SolderV2, "pa120"), Some(3));
        assert_eq!(tool_code(Family::HotAir, "JT"), Some(1));
        assert_eq!(tool_code(Family::HotAir, "T245"), None);
        assert_eq!(tool_code(Family::Preheater, "NOTOOL"), Some(0));
    }

    #[test]
    fn test_languages() {
        assert_eq!(language_from_ascii(b"de"), Some("GERMAN"));
        assert_eq!(language_from_ascii(b"X"), None);
        assert_eq!(language_from_code(5), Some("PORTUGUESE"));
        assert_eq!(language_from_code(6), None);
    }

    #[test]
    fn test_usb_mode() {
        assert_eq!(usb_mode_name("USB C"), Some("PC_CONTROL"));
        assert_eq!(usb_mode_name("m1"), Some("MONITOR"));
        assert_eq!(usb_mode_name("123"), None);
    }

    #[test]
    fn test_tool_errors_per_family() {
        assert_eq!(tool_error_name(Family::SolderV1, 8), Some("STOPOVERLOAD_MOS"));
        assert_eq!(tool_error_name(Family::HotAir, 1), Some("AIR_PUMP_ERROR"));
        assert_eq!(tool_error_name(Family::Dispenser, 0), None);
    }
}
