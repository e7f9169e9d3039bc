//! Preheater, fume extractor and dispenser replies.
//!
//! These families mostly answer with single status bytes or one 16-bit
//! value.

use super::hot_air::{clamped_percent, time_to_stop};
use super::layout::{field, FieldSpec, Layout, Semantic::*, Short, Width::*};
use super::report::{Decoded, Report, Value};
use super::Frame;
use crate::family::Family;

static CODE: [FieldSpec; 1] = [field("code", 0, U8, Uint)];
static ON: [FieldSpec; 1] = [field("on", 0, U8, Uint)];
static CONNECTED: [FieldSpec; 1] = [field("connected", 0, U8, Uint)];
static MASK: [FieldSpec; 1] = [field("mask", 0, U8, Hex)];
static RAW16: [FieldSpec; 1] = [field("raw", 0, U16, Uint)];
static MILLIS: [FieldSpec; 1] = [field("ms", 0, U16, Uint)];

static CODE_BYTE: Layout = Layout {
    min_len: 1,
    short: Short::Skip,
    fields: &CODE,
};

static ON_BYTE: Layout = Layout {
    min_len: 1,
    short: Short::Skip,
    fields: &ON,
};

static ACTIVE_ZONES: Layout = Layout {
    min_len: 1,
    short: Short::Skip,
    fields: &MASK,
};

static PEDAL_CONNECTED: Layout = Layout {
    min_len: 1,
    short: Short::Skip,
    fields: &CONNECTED,
};

static SUCTION_DELAY: Layout = Layout {
    min_len: 2,
    short: Short::Skip,
    fields: &MILLIS,
};

static RAW_U16: Layout = Layout {
    min_len: 2,
    short: Short::Raw,
    fields: &RAW16,
};

pub(super) fn decode(frame: &Frame<'_>) -> Option<Decoded> {
    let report = match frame.family {
        Family::Preheater => preheater(frame),
        Family::FumeExtractor => fume_extractor(frame),
        Family::Dispenser => dispenser(frame),
        _ => None,
    };
    report.map(Decoded::Report)
}

fn percent_or_raw(frame: &Frame<'_>) -> Option<Report> {
    Some(clamped_percent(frame).unwrap_or_else(|| frame.raw()))
}

fn preheater(frame: &Frame<'_>) -> Option<Report> {
    match frame.name {
        "M_R_SELECTPOWER" => percent_or_raw(frame),
        "M_R_WARNING" => Some(frame.raw()),
        "M_R_ACTIVEZONES" => ACTIVE_ZONES.decode(frame),
        "M_R_WORKMODE" => CODE_BYTE.decode(frame),
        "M_R_HEATERSTATUS" | "M_R_EXTTCMODE" => ON_BYTE.decode(frame),
        "M_R_TIMETOSTOP" => time_to_stop(frame),
        _ => None,
    }
}

fn fume_extractor(frame: &Frame<'_>) -> Option<Report> {
    match frame.name {
        "M_R_FLOW" | "M_R_SELECTFLOW" => percent_or_raw(frame),
        "M_R_SPEED" => RAW_U16.decode(frame),
        "M_R_SUCTIONLEVEL" => Some(suction_level(frame)),
        "M_R_FILTERSTATUS" | "M_R_RESETFILTER" | "M_R_PEDALMODE" => CODE_BYTE.decode(frame),
        "M_R_CONNECTEDPEDAL" => PEDAL_CONNECTED.decode(frame),
        "M_R_COUNTERS" => Some(frame.raw()),
        "M_R_ACTIVATIONPEDAL" | "M_R_INTAKEACTIVATION" => ON_BYTE.decode(frame),
        "M_R_SUCTIONDELAY" => SUCTION_DELAY.decode(frame),
        _ => None,
    }
}

/// Values above 100.0 % are not a percentage; only the raw value is shown.
fn suction_level(frame: &Frame<'_>) -> Report {
    let Some(v) = frame.u16(0) else {
        return frame.raw();
    };
    let mut report = frame.report();
    if v <= crate::constants::PER_MILLE_MAX {
        report.push("pct", Value::PerMille(v));
    }
    report.with("raw", Value::Uint(u64::from(v)))
}

fn dispenser(frame: &Frame<'_>) -> Option<Report> {
    match frame.name {
        "M_R_SPEED" | "M_R_LENGTH" => RAW_U16.decode(frame),
        "M_R_PROGRAM" | "M_R_DISPENSERMODE" | "M_R_BACKWARDMODE" | "M_R_LENGTHUNIT" => {
            CODE_BYTE.decode(frame)
        }
        "M_R_TOOLENABLED" => ON_BYTE.decode(frame),
        "M_R_PROGRAMLIST" | "M_R_COUNTERS" => Some(frame.raw()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(family: Family, name: &'static str, data: &[u8]) -> String {
        let frame = Frame {
            family,
            header: family,
            name,
            data,
        };
        match decode(&frame) {
            Some(Decoded::Report(report)) => report.to_string(),
            _ => String::new(),
        }
    }

    #[test]
    fn test_preheater() {
        assert_eq!(
            line(Family::Preheater, "M_R_SELECTPOWER", &[0x20, 0x03]),
            "[PH_M_R_SELECTPOWER] pct=80.0 raw=800"
        );
        assert_eq!(
            line(Family::Preheater, "M_R_SELECTPOWER", &[0x20]),
            "[PH_M_R_SELECTPOWER] raw=\"20\""
        );
        assert_eq!(
            line(Family::Preheater, "M_R_ACTIVEZONES", &[0x05]),
            "[PH_M_R_ACTIVEZONES] mask=0x05"
        );
        assert_eq!(
            line(Family::Preheater, "M_R_WARNING", &[]),
            "[PH_M_R_WARNING] raw=\"\""
        );
        assert_eq!(
            line(Family::Preheater, "M_R_TIMETOSTOP", &[0x0F, 0x00]),
            "[PH_M_R_TIMETOSTOP] mmss=\"00:01.5\" ds=15"
        );
    }

    #[test]
    fn test_fume_extractor() {
        assert_eq!(
            line(Family::FumeExtractor, "M_R_FLOW", &[0xF4, 0x01]),
            "[FE_M_R_FLOW] pct=50.0 raw=500"
        );
        assert_eq!(
            line(Family::FumeExtractor, "M_R_SPEED", &[0x10, 0x27]),
            "[FE_M_R_SPEED] raw=10000"
        );
        assert_eq!(
            line(Family::FumeExtractor, "M_R_SUCTIONLEVEL", &[0xD0, 0x07]),
            "[FE_M_R_SUCTIONLEVEL] raw=2000"
        );
        assert_eq!(
            line(Family::FumeExtractor, "M_R_SUCTIONLEVEL", &[0x64, 0x00]),
            "[FE_M_R_SUCTIONLEVEL] pct=10.0 raw=100"
        );
        assert_eq!(
            line(Family::FumeExtractor, "M_R_CONNECTEDPEDAL", &[1]),
            "[FE_M_R_CONNECTEDPEDAL] connected=1"
        );
        assert_eq!(
            line(Family::FumeExtractor, "M_R_SUCTIONDELAY", &[0xE8, 0x03]),
            "[FE_M_R_SUCTIONDELAY] ms=1000"
        );
        assert_eq!(line(Family::FumeExtractor, "M_R_SUCTIONDELAY", &[1]), "");
    }

    #[test]
    fn test_dispenser() {
        assert_eq!(
            line(Family::Dispenser, "M_R_LENGTH", &[0x2C, 0x01]),
            "[SF_M_R_LENGTH] raw=300"
        );
        assert_eq!(
            line(Family::Dispenser, "M_R_PROGRAM", &[4]),
            "[SF_M_R_PROGRAM] code=4"
        );
        assert_eq!(
            line(Family::Dispenser, "M_R_TOOLENABLED", &[0]),
            "[SF_M_R_TOOLENABLED] on=0"
        );
        assert_eq!(
            line(Family::Dispenser, "M_R_COUNTERS", &[1, 2]),
            "[SF_M_R_COUNTERS] raw=\"01 02\""
        );
    }
}
