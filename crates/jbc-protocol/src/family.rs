//! Station families and family resolution.
//!
//! Every product line speaks its own command-code space over the same frame
//! shape. The family of a connected station is derived either from its model
//! string (`"DDE"`, `"JTSE"`, ...) or from the firmware banner it answers
//! with (`"02:DDE_2C:1.0:..."`).

use serde::{Deserialize, Serialize};

/// Product line of a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Family {
    /// Second-generation soldering stations (`SOLD_02`).
    SolderV2,
    /// First-generation soldering stations (`SOLD_01`).
    SolderV1,
    /// Hot-air stations (`HA_02`).
    HotAir,
    /// Fume extractors (`FE_02`).
    FumeExtractor,
    /// Preheaters (`PH_02`).
    Preheater,
    /// Wire-feed dispensers (`SF_02`).
    Dispenser,
    /// Not resolved.
    Unknown,
}

impl Family {
    /// Concrete families in the order used for cross-family searches.
    pub const SEARCH_ORDER: [Family; 6] = [
        Family::SolderV2,
        Family::SolderV1,
        Family::HotAir,
        Family::Preheater,
        Family::FumeExtractor,
        Family::Dispenser,
    ];

    /// Resolve from a model string by its two-letter prefix.
    pub fn from_model(model: &str) -> Family {
        if model.len() < 2 {
            return Family::Unknown;
        }
        match &model.as_bytes()[..2] {
            b"DD" => Family::SolderV2,
            b"JT" => Family::HotAir,
            b"FE" => Family::FumeExtractor,
            b"PH" => Family::Preheater,
            b"SF" => Family::Dispenser,
            _ => Family::Unknown,
        }
    }

    /// Resolve from a firmware banner `"<proto>:<model>:..."`.
    ///
    /// Protocol `01` always means the first-generation solder protocol. Other
    /// protocols resolve by model prefix, with protocol `02` falling back to
    /// the second-generation solder family. Malformed banners resolve to
    /// [`Family::Unknown`].
    pub fn from_banner(banner: &str) -> Family {
        let Some(first) = banner.find(':') else {
            return Family::Unknown;
        };
        let Some(second) = banner[first + 1..].find(':').map(|i| first + 1 + i) else {
            return Family::Unknown;
        };
        if first == 0 {
            return Family::Unknown;
        }

        let proto = &banner[..first];
        let model = &banner[first + 1..second];

        if proto == "01" {
            return Family::SolderV1;
        }
        match Family::from_model(model) {
            Family::Unknown if proto == "02" => Family::SolderV2,
            family => family,
        }
    }

    /// Resolve from either a banner (anything containing `:`) or a model.
    pub fn resolve(input: &str) -> Family {
        let input = input.trim();
        let family = if input.contains(':') {
            Family::from_banner(input)
        } else {
            Family::from_model(input)
        };
        log::debug!("resolved {:?} as {}", input, family);
        family
    }

    /// Backend name, e.g. `SOLD_02`.
    pub fn backend_name(&self) -> &'static str {
        match self {
            Family::SolderV2 => "SOLD_02",
            Family::SolderV1 => "SOLD_01",
            Family::HotAir => "HA_02",
            Family::FumeExtractor => "FE_02",
            Family::Preheater => "PH_02",
            Family::Dispenser => "SF_02",
            Family::Unknown => "UNKNOWN",
        }
    }

    /// Short tag used in report headers, e.g. `SOLD`.
    pub fn tag(&self) -> &'static str {
        match self {
            Family::SolderV2 => "SOLD",
            Family::SolderV1 => "SOLD1",
            Family::HotAir => "HA",
            Family::FumeExtractor => "FE",
            Family::Preheater => "PH",
            Family::Dispenser => "SF",
            Family::Unknown => "BASE",
        }
    }

    /// Either solder generation.
    pub fn is_solder(&self) -> bool {
        matches!(self, Family::SolderV2 | Family::SolderV1)
    }

    /// Highest addressable port, if the family restricts ports.
    pub fn max_port(&self) -> Option<u8> {
        match self {
            Family::SolderV2 => Some(3),
            Family::SolderV1 | Family::HotAir => Some(0),
            _ => None,
        }
    }

    /// Whether `port` may be addressed on this family.
    pub fn port_allowed(&self, port: u8) -> bool {
        self.max_port().map_or(true, |max| port <= max)
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.backend_name())
    }
}

impl std::str::FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase().replace('-', "_");
        let family = match upper.as_str() {
            "SOLD_02" | "SOLD" | "SOLDER_V2" | "SOLDERV2" => Family::SolderV2,
            "SOLD_01" | "SOLD1" | "SOLDER_V1" | "SOLDERV1" => Family::SolderV1,
            "HA_02" | "HA" | "HOT_AIR" | "HOTAIR" => Family::HotAir,
            "FE_02" | "FE" | "FUME_EXTRACTOR" | "FUMEEXTRACTOR" => Family::FumeExtractor,
            "PH_02" | "PH" | "PREHEATER" => Family::Preheater,
            "SF_02" | "SF" | "DISPENSER" => Family::Dispenser,
            "UNKNOWN" | "BASE" => Family::Unknown,
            _ => return Err(format!("unknown family: {}", s)),
        };
        Ok(family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_model() {
        assert_eq!(Family::from_model("DDE"), Family::SolderV2);
        assert_eq!(Family::from_model("JTSE"), Family::HotAir);
        assert_eq!(Family::from_model("FAE"), Family::Unknown);
        assert_eq!(Family::from_model("FE"), Family::FumeExtractor);
        assert_eq!(Family::from_model("PHBE"), Family::Preheater);
        assert_eq!(Family::from_model("SFE"), Family::Dispenser);
        assert_eq!(Family::from_model("D"), Family::Unknown);
        assert_eq!(Family::from_model("dde"), Family::Unknown);
    }

    #[test]
    fn test_from_banner() {
        assert_eq!(Family::from_banner("01:CD_1:1.0:2.0"), Family::SolderV1);
        assert_eq!(Family::from_banner("01:JTSE:x"), Family::SolderV1);
        assert_eq!(Family::from_banner("02:JTSE_2C:1.0:2.0"), Family::HotAir);
        assert_eq!(Family::from_banner("02:XYZ:1.0"), Family::SolderV2);
        assert_eq!(Family::from_banner("03:PHBE:1.0"), Family::Preheater);
        assert_eq!(Family::from_banner("03:XYZ:1.0"), Family::Unknown);
        assert_eq!(Family::from_banner(":DDE:1.0"), Family::Unknown);
        assert_eq!(Family::from_banner("02:DDE"), Family::Unknown);
        assert_eq!(Family::from_banner("02::"), Family::SolderV2);
    }

    #[test]
    fn test_resolve_picks_rules() {
        assert_eq!(Family::resolve("  DDE  "), Family::SolderV2);
        assert_eq!(Family::resolve("02:FE_1:1:1"), Family::FumeExtractor);
    }

    #[test]
    fn test_port_limits() {
        assert!(Family::SolderV2.port_allowed(3));
        assert!(!Family::SolderV2.port_allowed(4));
        assert!(Family::HotAir.port_allowed(0));
        assert!(!Family::SolderV1.port_allowed(1));
        assert!(Family::Preheater.port_allowed(200));
    }

    #[test]
    fn test_names_and_parse() {
        for family in Family::SEARCH_ORDER {
            assert_eq!(family.backend_name().parse::<Family>(), Ok(family));
            assert_eq!(family.tag().parse::<Family>(), Ok(family));
        }
        assert_eq!("hot-air".parse::<Family>(), Ok(Family::HotAir));
        assert!("XX".parse::<Family>().is_err());
    }
}
