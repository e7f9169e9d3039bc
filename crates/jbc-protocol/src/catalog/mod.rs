//! Per-family command catalogs.
//!
//! Each family owns one static table mapping symbolic names to numeric codes
//! and argument formats. Tables are independent; the only cross-family
//! search happens for [`Family::Unknown`], which tries the concrete families
//! in [`Family::SEARCH_ORDER`].

mod dispenser;
mod fume_extractor;
mod hot_air;
mod preheater;
mod solder_v1;
mod solder_v2;

use serde::Serialize;

use crate::family::Family;
use crate::format::ArgFormat;

/// How well a catalog entry is established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Confidence {
    /// Exercised against real stations.
    Confirmed,
    /// Listed by the vendor tooling but never exercised.
    Untested,
    /// Deliberately shares its code with another entry.
    Alias,
}

/// One command of a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    pub code: u8,
    pub name: &'static str,
    /// Console argument format; `None` for entries that cannot be encoded
    /// from a console line (firmware update, file transfer, ...).
    pub format: Option<ArgFormat>,
    pub confidence: Confidence,
}

impl CommandDescriptor {
    const fn untested(self) -> Self {
        CommandDescriptor {
            confidence: Confidence::Untested,
            ..self
        }
    }

    const fn alias(self) -> Self {
        CommandDescriptor {
            confidence: Confidence::Alias,
            ..self
        }
    }

    /// Whether this is a write (`M_W_*`) command.
    pub fn is_write(&self) -> bool {
        self.name.starts_with("M_W_")
    }
}

/// Encodable command.
const fn cmd(code: u8, name: &'static str, format: ArgFormat) -> CommandDescriptor {
    CommandDescriptor {
        code,
        name,
        format: Some(format),
        confidence: Confidence::Confirmed,
    }
}

/// Name-only entry.
const fn known(code: u8, name: &'static str) -> CommandDescriptor {
    CommandDescriptor {
        code,
        name,
        format: None,
        confidence: Confidence::Confirmed,
    }
}

/// The command table of a concrete family. Empty for [`Family::Unknown`].
pub fn entries(family: Family) -> &'static [CommandDescriptor] {
    match family {
        Family::SolderV2 => solder_v2::COMMANDS,
        Family::SolderV1 => solder_v1::COMMANDS,
        Family::HotAir => hot_air::COMMANDS,
        Family::Preheater => preheater::COMMANDS,
        Family::FumeExtractor => fume_extractor::COMMANDS,
        Family::Dispenser => dispenser::COMMANDS,
        Family::Unknown => &[],
    }
}

/// Write commands whose replies are acknowledged with a leading `0x06`.
fn acknowledged_writes(family: Family) -> &'static [&'static str] {
    match family {
        Family::SolderV2 => solder_v2::ACKNOWLEDGED_WRITES,
        Family::HotAir => hot_air::ACKNOWLEDGED_WRITES,
        Family::Preheater => preheater::ACKNOWLEDGED_WRITES,
        Family::FumeExtractor => fume_extractor::ACKNOWLEDGED_WRITES,
        Family::Dispenser => dispenser::ACKNOWLEDGED_WRITES,
        Family::SolderV1 | Family::Unknown => &[],
    }
}

fn families(family: Family) -> &'static [Family] {
    match family {
        Family::Unknown => &Family::SEARCH_ORDER,
        Family::SolderV2 => &[Family::SolderV2],
        Family::SolderV1 => &[Family::SolderV1],
        Family::HotAir => &[Family::HotAir],
        Family::Preheater => &[Family::Preheater],
        Family::FumeExtractor => &[Family::FumeExtractor],
        Family::Dispenser => &[Family::Dispenser],
    }
}

/// Find a command by name (case-insensitive).
pub fn lookup(name: &str, family: Family) -> Option<&'static CommandDescriptor> {
    families(family).iter().find_map(|f| {
        entries(*f)
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
    })
}

/// Find a command by code, together with the family whose table matched.
///
/// Aliased entries never win over the primary entry for a code.
pub fn find_by_code(code: u8, family: Family) -> Option<(Family, &'static CommandDescriptor)> {
    families(family).iter().find_map(|f| {
        entries(*f)
            .iter()
            .find(|d| d.code == code && d.confidence != Confidence::Alias)
            .map(|d| (*f, d))
    })
}

/// Name for a code, or `"unknown"`.
pub fn reverse_lookup(code: u8, family: Family) -> &'static str {
    find_by_code(code, family).map_or("unknown", |(_, d)| d.name)
}

/// `FAMILY::NAME` label for traffic logs, `FAMILY::?` when unknown.
pub fn qualified_name(code: u8, family: Family) -> String {
    match find_by_code(code, family) {
        Some((_, d)) => format!("{}::{}", family.backend_name(), d.name),
        None => format!("{}::?", family.backend_name()),
    }
}

/// Whether a reply to `name` starting with `0x06` is a write acknowledgement.
pub fn acknowledges_write(name: &str, family: Family) -> bool {
    acknowledged_writes(family).contains(&name)
}
