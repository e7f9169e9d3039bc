//! Field-descriptor tables for fixed-offset payloads.
//!
//! Most reads reply with a handful of little-endian fields at fixed offsets.
//! Those are described once as a [`Layout`] instead of a hand-written
//! decoder each. Fields past the end of a payload that met the minimum
//! length are skipped, which is how optional trailing bytes are expressed.

use super::report::{Report, Value};
use super::Frame;
use crate::translate::{self, BitTable};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Width {
    U8,
    U16,
    I16,
    U32,
}

impl Width {
    fn size(self) -> usize {
        match self {
            Width::U8 => 1,
            Width::U16 | Width::I16 => 2,
            Width::U32 => 4,
        }
    }
}

/// How a raw field value is presented.
#[derive(Clone, Copy)]
pub(crate) enum Semantic {
    Uint,
    Hex,
    /// Native temperature units.
    Celsius,
    /// Per-mille, rendered as a clamped percentage.
    Percent,
    /// Minutes rendered as `H:MM`.
    HoursMinutes,
    /// Tool code followed by `<key>_name` when the family knows it.
    Tool,
    /// Only the translated name; nothing when unknown.
    Named(fn(u8) -> Option<&'static str>),
    Flags(&'static BitTable),
}

#[derive(Clone, Copy)]
pub(crate) struct FieldSpec {
    key: &'static str,
    offset: usize,
    width: Width,
    semantic: Semantic,
}

pub(crate) const fn field(
    key: &'static str,
    offset: usize,
    width: Width,
    semantic: Semantic,
) -> FieldSpec {
    FieldSpec {
        key,
        offset,
        width,
        semantic,
    }
}

/// What to do with a payload shorter than the layout's minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Short {
    /// Leave it to later decoders.
    Skip,
    /// `raw=<hex>`.
    Raw,
    /// `payload=<len> raw=<hex>`.
    LengthAndRaw,
}

pub(crate) struct Layout {
    pub min_len: usize,
    pub short: Short,
    pub fields: &'static [FieldSpec],
}

impl Layout {
    pub(crate) fn decode(&self, frame: &Frame<'_>) -> Option<Report> {
        if frame.data.len() < self.min_len {
            return match self.short {
                Short::Skip => None,
                Short::Raw => Some(frame.raw()),
                Short::LengthAndRaw => Some(frame.short_raw()),
            };
        }
        let mut report = frame.report();
        for spec in self.fields {
            if let Some(raw) = read(frame.data, spec.offset, spec.width) {
                spec.render(frame, raw, &mut report);
            }
        }
        Some(report)
    }
}

impl FieldSpec {
    fn render(&self, frame: &Frame<'_>, raw: i64, report: &mut Report) {
        let key = self.key;
        match self.semantic {
            Semantic::Uint => report.push(key, uint_or_int(raw)),
            Semantic::Hex => report.push(
                key,
                Value::Hex {
                    value: raw as u32,
                    digits: (self.width.size() * 2) as u8,
                },
            ),
            Semantic::Celsius => report.push(key, Value::Temperature(raw as i32)),
            Semantic::Percent => report.push(key, Value::PerMille(raw as u16)),
            Semantic::HoursMinutes => report.push(key, Value::Text(hours_minutes(raw as u32))),
            Semantic::Tool => {
                let code = raw as u8;
                report.push(key, Value::Uint(u64::from(code)));
                if let Some(name) = translate::tool_name(frame.family, code) {
                    report.push(format!("{}_name", key), Value::Name(name));
                }
            }
            Semantic::Named(lookup) => {
                if let Some(name) = lookup(raw as u8) {
                    report.push(key, Value::Name(name));
                }
            }
            Semantic::Flags(table) => {
                report.push(key, Value::Flags(table.names_or_none(raw as u16)));
            }
        }
    }
}

fn uint_or_int(raw: i64) -> Value {
    if raw < 0 {
        Value::Int(raw)
    } else {
        Value::Uint(raw as u64)
    }
}

fn read(data: &[u8], offset: usize, width: Width) -> Option<i64> {
    let bytes = data.get(offset..offset + width.size())?;
    let value = match width {
        Width::U8 => i64::from(bytes[0]),
        Width::U16 => i64::from(u16::from_le_bytes([bytes[0], bytes[1]])),
        Width::I16 => i64::from(i16::from_le_bytes([bytes[0], bytes[1]])),
        Width::U32 => i64::from(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
    };
    Some(value)
}

/// `H:MM` for a minute count.
pub(crate) fn hours_minutes(minutes: u32) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// `MM:SS` for whole seconds.
pub(crate) fn minutes_seconds(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// `MM:SS` with a `.t` suffix when the tenths digit is non-zero.
pub(crate) fn deciseconds(ds: u32) -> String {
    let mut s = minutes_seconds(ds / 10);
    if ds % 10 != 0 {
        s.push_str(&format!(".{}", ds % 10));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::Family;

    static SAMPLE: Layout = Layout {
        min_len: 4,
        short: Short::LengthAndRaw,
        fields: &[
            field("c", 0, Width::U16, Semantic::Celsius),
            field("port", 2, Width::U8, Semantic::Uint),
            field("tool", 3, Width::U8, Semantic::Tool),
            field("extra", 4, Width::U8, Semantic::Hex),
        ],
    };

    fn frame(data: &[u8]) -> Frame<'_> {
        Frame {
            family: Family::SolderV2,
            header: Family::SolderV2,
            name: "M_R_SAMPLE",
            data,
        }
    }

    #[test]
    fn test_layout_renders_fields() {
        let report = SAMPLE.decode(&frame(&[0x4E, 0x0C, 0x01, 0x02])).unwrap();
        assert_eq!(
            report.to_string(),
            "[SOLD_M_R_SAMPLE] c=350.0 port=1 tool=2 tool_name=\"T245\""
        );
    }

    #[test]
    fn test_layout_optional_trailing_field() {
        let report = SAMPLE
            .decode(&frame(&[0x4E, 0x0C, 0x01, 0x02, 0xAB]))
            .unwrap();
        assert_eq!(report.get("extra"), Some(&Value::hex2(0xAB)));
    }

    #[test]
    fn test_layout_short_payload() {
        let report = SAMPLE.decode(&frame(&[0x4E])).unwrap();
        assert_eq!(report.to_string(), "[SOLD_M_R_SAMPLE] payload=1 raw=\"4E\"");
    }

    #[test]
    fn test_time_helpers() {
        assert_eq!(hours_minutes(125), "2:05");
        assert_eq!(minutes_seconds(75), "01:15");
        assert_eq!(deciseconds(755), "01:15.5");
        assert_eq!(deciseconds(750), "01:15");
    }
}
