//! Structured decode output.

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::constants::{PER_MILLE_MAX, UTI_PER_DEGREE};
use crate::family::Family;

/// Outcome of decoding one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// Handled, nothing to show (keepalives, empty status polls).
    Suppressed,
    /// Something to show.
    Report(Report),
}

impl Decoded {
    /// Whether any decoder claimed the frame.
    pub fn is_handled(&self) -> bool {
        match self {
            Decoded::Suppressed => true,
            Decoded::Report(report) => report.is_handled(),
        }
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            Decoded::Suppressed => None,
            Decoded::Report(report) => Some(report),
        }
    }
}

/// A typed field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Uint(u64),
    Int(i64),
    /// Zero-padded uppercase hex with a `0x` prefix.
    Hex { value: u32, digits: u8 },
    /// Native units, 9 per degree Celsius.
    Temperature(i32),
    /// Tenths of a percent. Renders clamped to 100.0.
    PerMille(u16),
    Text(String),
    Name(&'static str),
    Flags(Vec<String>),
    Bytes(Vec<u8>),
}

impl Value {
    pub fn hex2(value: u8) -> Value {
        Value::Hex {
            value: u32::from(value),
            digits: 2,
        }
    }

    pub fn hex4(value: u16) -> Value {
        Value::Hex {
            value: u32::from(value),
            digits: 4,
        }
    }

    pub fn hex8(value: u32) -> Value {
        Value::Hex { value, digits: 8 }
    }

    /// Degrees Celsius for temperatures.
    pub fn celsius(&self) -> Option<f64> {
        match self {
            Value::Temperature(uti) => Some(f64::from(*uti) / f64::from(UTI_PER_DEGREE)),
            _ => None,
        }
    }

    /// Percent for per-mille readings.
    pub fn percent(&self) -> Option<f64> {
        match self {
            Value::PerMille(v) => Some(f64::from((*v).min(PER_MILLE_MAX)) / 10.0),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Uint(v) => Some(*v),
            Value::Hex { value, .. } => Some(u64::from(*value)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Uint(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Hex { value, digits } => {
                write!(f, "0x{:0width$X}", value, width = *digits as usize)
            }
            Value::Temperature(_) => write!(f, "{:.1}", self.celsius().unwrap_or_default()),
            Value::PerMille(_) => write!(f, "{:.1}", self.percent().unwrap_or_default()),
            Value::Text(s) => write_quoted(f, s),
            Value::Name(s) => write_quoted(f, s),
            Value::Flags(names) => write_quoted(f, &names.join("|")),
            Value::Bytes(bytes) => write_quoted(f, &hex_spaced(bytes)),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Uint(v) => serializer.serialize_u64(*v),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Temperature(_) => serializer.serialize_f64(self.celsius().unwrap_or_default()),
            Value::PerMille(_) => serializer.serialize_f64(self.percent().unwrap_or_default()),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Name(s) => serializer.serialize_str(s),
            Value::Flags(names) => names.serialize(serializer),
            Value::Hex { .. } => serializer.collect_str(self),
            Value::Bytes(bytes) => serializer.serialize_str(&hex_spaced(bytes)),
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "\"{}\"", s.replace('"', "\\\""))
}

/// Uppercase hex bytes separated by single spaces.
pub fn hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse console hex such as `4E 0C 00`, `4e0c00` or `0x4E 0x0C`.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let digits: String = input
        .split(|c: char| c.is_whitespace() || c == ',' || c == ':')
        .filter(|t| !t.is_empty())
        .map(|t| t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")).unwrap_or(t))
        .map(|t| if t.len() == 1 { format!("0{}", t) } else { t.to_string() })
        .collect();
    hex::decode(digits)
}

/// One `key=value` pair of a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub key: Cow<'static, str>,
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportKind {
    Decoded,
    Fallback,
}

/// A decoded frame: header plus an ordered field list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Family shown in the header.
    pub family: Family,
    /// Usually the command name; `ACK`, `NACK` and similar for control frames.
    pub title: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<u32>,
    /// Bare word printed before the fields (`OK`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    pub fields: Vec<Field>,
    #[serde(skip)]
    kind: ReportKind,
}

impl Report {
    pub(crate) fn new(family: Family, title: impl Into<Cow<'static, str>>) -> Self {
        Report {
            family,
            title: title.into(),
            correlation_id: None,
            status: None,
            fields: Vec::new(),
            kind: ReportKind::Decoded,
        }
    }

    /// Report for a payload no decoder claimed.
    pub(crate) fn fallback(family: Family, data: &[u8]) -> Self {
        let mut report = Report::new(family, "PAYLOAD");
        report.kind = ReportKind::Fallback;
        report.push("bytes", Value::Bytes(data.to_vec()));
        report
    }

    pub(crate) fn push(&mut self, key: impl Into<Cow<'static, str>>, value: Value) {
        self.fields.push(Field {
            key: key.into(),
            value,
        });
    }

    pub(crate) fn with(mut self, key: impl Into<Cow<'static, str>>, value: Value) -> Self {
        self.push(key, value);
        self
    }

    pub(crate) fn ok(mut self) -> Self {
        self.status = Some("OK");
        self
    }

    /// First field with `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|f| f.key == key).map(|f| &f.value)
    }

    /// False only for the generic `[PAYLOAD]` fallback.
    pub fn is_handled(&self) -> bool {
        self.kind == ReportKind::Decoded
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == ReportKind::Fallback {
            write!(f, "[PAYLOAD]")?;
        } else {
            write!(f, "[{}_{}]", self.family.tag(), self.title)?;
        }
        if let Some(id) = self.correlation_id {
            write!(f, " <fid={}>", id)?;
        }
        if self.kind == ReportKind::Fallback {
            let bytes = match self.get("bytes") {
                Some(Value::Bytes(bytes)) => bytes.as_slice(),
                _ => &[],
            };
            return write!(f, " {} bytes: {}", bytes.len(), hex_spaced(bytes));
        }
        if let Some(status) = self.status {
            write!(f, " {}", status)?;
        }
        for field in &self.fields {
            write!(f, " {}={}", field.key, field.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::hex2(0x0A).to_string(), "0x0A");
        assert_eq!(Value::hex4(0x0C4E).to_string(), "0x0C4E");
        assert_eq!(Value::Temperature(3150).to_string(), "350.0");
        assert_eq!(Value::Temperature(-45).to_string(), "-5.0");
        assert_eq!(Value::PerMille(455).to_string(), "45.5");
        assert_eq!(Value::PerMille(1500).to_string(), "100.0");
        assert_eq!(Value::Text("a\"b".into()).to_string(), "\"a\\\"b\"");
        assert_eq!(
            Value::Flags(vec!["STAND".into(), "SLEEP".into()]).to_string(),
            "\"STAND|SLEEP\""
        );
        assert_eq!(Value::Bytes(vec![0x4E, 0x0C]).to_string(), "\"4E 0C\"");
    }

    #[test]
    fn test_report_display() {
        let mut report = Report::new(Family::SolderV2, "M_R_SELECTTEMP")
            .with("c", Value::Temperature(3150))
            .with("uti", Value::hex4(3150));
        report.correlation_id = Some(7);
        assert_eq!(
            report.to_string(),
            "[SOLD_M_R_SELECTTEMP] <fid=7> c=350.0 uti=0x0C4E"
        );
        assert!(report.is_handled());
    }

    #[test]
    fn test_ok_status() {
        let report = Report::new(Family::HotAir, "ACK").ok().with("port", Value::Uint(0));
        assert_eq!(report.to_string(), "[HA_ACK] OK port=0");
    }

    #[test]
    fn test_fallback_display() {
        let report = Report::fallback(Family::Dispenser, &[0xDE, 0xAD]);
        assert_eq!(report.to_string(), "[PAYLOAD] 2 bytes: DE AD");
        assert!(!report.is_handled());
        assert!(!Decoded::Report(report).is_handled());
        assert!(Decoded::Suppressed.is_handled());
    }

    #[test]
    fn test_value_json() {
        let json = serde_json::to_string(&Value::Temperature(3150)).unwrap();
        assert_eq!(json, "350.0");
        let json = serde_json::to_string(&Value::hex2(6)).unwrap();
        assert_eq!(json, "\"0x06\"");
    }

    #[test]
    fn test_report_json() {
        let report = Report::new(Family::SolderV2, "M_R_SELECTTEMP")
            .with("c", Value::Temperature(3150))
            .with("uti", Value::hex4(3150));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["title"], "M_R_SELECTTEMP");
        assert_eq!(json["fields"][0]["key"], "c");
        assert_eq!(json["fields"][0]["value"], 350.0);
        assert_eq!(json["fields"][1]["value"], "0x0C4E");
        assert!(json.get("correlation_id").is_none());
        assert!(json.get("status").is_none());
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("4E 0C 00").unwrap(), vec![0x4E, 0x0C, 0x00]);
        assert_eq!(parse_hex("4e0c").unwrap(), vec![0x4E, 0x0C]);
        assert_eq!(parse_hex("0x6 0xAA").unwrap(), vec![0x06, 0xAA]);
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
        assert!(parse_hex("4G").is_err());
        assert!(parse_hex("ABC").is_err());
    }
}
