//! Hot-air station replies.

use super::layout::{deciseconds, field, Layout, Semantic::*, Short, Width::*};
use super::report::{Decoded, Report, Value};
use super::{solder, Frame};
use crate::datetime::{self, DateTimeReading};
use crate::translate::{self, HOT_AIR_START_MODE, HOT_AIR_STATUS};

static MINUTES: Layout = Layout {
    min_len: 4,
    short: Short::Raw,
    fields: &[
        field("min", 0, U32, Uint),
        field("hm", 0, U32, HoursMinutes),
    ],
};

static CYCLES: Layout = Layout {
    min_len: 4,
    short: Short::Raw,
    fields: &[field("value", 0, U32, Uint)],
};

static START_MODE: Layout = Layout {
    min_len: 1,
    short: Short::Skip,
    fields: &[
        field("value", 0, U8, Hex),
        field("bits", 0, U8, Flags(&HOT_AIR_START_MODE)),
    ],
};

static EXT_TC_MODE: Layout = Layout {
    min_len: 1,
    short: Short::Skip,
    fields: &[
        field("on", 0, U8, Uint),
        field("port", 1, U8, Uint),
        field("tool", 2, U8, Tool),
    ],
};

static THEME: Layout = Layout {
    min_len: 1,
    short: Short::Skip,
    fields: &[
        field("code", 0, U8, Uint),
        field("name", 0, U8, Named(translate::theme_name)),
    ],
};

static SELECT_EXT_TEMP: Layout = Layout {
    min_len: 2,
    short: Short::Skip,
    fields: &[field("c", 0, U16, Celsius), field("uti", 0, U16, Hex)],
};

static MAX_MIN_TEMP: Layout = Layout {
    min_len: 4,
    short: Short::Skip,
    fields: &[field("max_c", 0, U16, Celsius), field("min_c", 2, U16, Celsius)],
};

static MAX_MIN_FLOW: Layout = Layout {
    min_len: 4,
    short: Short::Skip,
    fields: &[field("max_pct", 0, U16, Percent), field("min_pct", 2, U16, Percent)],
};

pub(super) fn decode(frame: &Frame<'_>) -> Option<Decoded> {
    let report = match frame.name {
        "M_R_STATUSTOOL" => return Some(status_tool(frame)),
        "M_R_PLUGTIME" | "M_R_WORKTIME" | "M_R_PLUGTIMEP" | "M_R_WORKTIMEP" => {
            MINUTES.decode(frame)
        }
        "M_R_WORKCYCLES" | "M_R_SUCTIONCYCLES" | "M_R_WORKCYCLESP" | "M_R_SUCTIONCYCLESP" => {
            CYCLES.decode(frame)
        }
        "M_R_AIRFLOW" | "M_R_POWER" => Some(clamped_percent(frame).unwrap_or_else(|| frame.raw())),
        "M_R_SELECTFLOW" => clamped_percent(frame),
        "M_R_STATERROR" => Some(solder::station_error(frame)),
        "M_R_STARTMODE" => START_MODE.decode(frame),
        "M_R_AJUSTTEMP" => adjust_temp(frame),
        "M_R_EXTTCMODE" => EXT_TC_MODE.decode(frame),
        "M_R_CONTIMODE" => Some(continuous_mode(frame)),
        "M_R_THEME" => THEME.decode(frame),
        "M_R_DATETIME" => Some(date_time(frame)),
        "M_R_HEATERSTATUS" | "M_R_SUCTIONSTATUS" => frame
            .u8(0)
            .map(|on| frame.report().with("on", Value::Uint(u64::from(on)))),
        "M_R_PROFILEMODE" => frame
            .u8(0)
            .map(|code| frame.report().with("code", Value::Uint(u64::from(code)))),
        "M_R_SELECTEXTTEMP" => SELECT_EXT_TEMP.decode(frame),
        "M_R_TIMETOSTOP" => time_to_stop(frame),
        "M_R_MAXMINTEMP" | "M_R_MAXMINEXTTEMP" => MAX_MIN_TEMP.decode(frame),
        "M_R_MAXMINFLOW" => MAX_MIN_FLOW.decode(frame),
        _ => None,
    };
    report.map(Decoded::Report)
}

/// Only the low byte carries status bits. An empty reply is a bare poll
/// acknowledgement and shows nothing.
fn status_tool(frame: &Frame<'_>) -> Decoded {
    let Some(status) = frame.u8(0) else {
        return Decoded::Suppressed;
    };
    let mut report = frame.report().with("mask", Value::hex2(status));
    let bits = HOT_AIR_STATUS.names(u16::from(status));
    if !bits.is_empty() {
        report.push("bits", Value::Flags(bits));
    }
    Decoded::Report(report)
}

/// `pct raw`, both clamped to 100.0 %.
pub(super) fn clamped_percent(frame: &Frame<'_>) -> Option<Report> {
    let raw = frame.u16(0)?.min(crate::constants::PER_MILLE_MAX);
    Some(
        frame
            .report()
            .with("pct", Value::PerMille(raw))
            .with("raw", Value::Uint(u64::from(raw))),
    )
}

/// `delta16 [port tool]`
fn adjust_temp(frame: &Frame<'_>) -> Option<Report> {
    let delta = frame.i16(0)?;
    let mut report = frame
        .report()
        .with("delta_c", Value::Temperature(i32::from(delta)));
    if let (Some(port), Some(tool)) = (frame.u8(2), frame.u8(3)) {
        report.push("port", Value::Uint(u64::from(port)));
        report.push("tool", Value::Uint(u64::from(tool)));
        if let Some(name) = translate::hot_air_tool_name(tool) {
            report.push("tool_name", Value::Name(name));
        }
    }
    Some(report)
}

fn continuous_mode(frame: &Frame<'_>) -> Report {
    let mask = match (frame.u16(0), frame.u8(0)) {
        (Some(v), _) => Value::hex4(v),
        (None, Some(v)) => Value::hex2(v),
        (None, None) => Value::Name("?"),
    };
    frame.report().with("mask", mask)
}

/// Shared with the preheater family.
pub(super) fn time_to_stop(frame: &Frame<'_>) -> Option<Report> {
    let ds = frame.u16(0)?;
    Some(
        frame
            .report()
            .with("mmss", Value::Text(deciseconds(u32::from(ds))))
            .with("ds", Value::Uint(u64::from(ds))),
    )
}

fn date_time(frame: &Frame<'_>) -> Report {
    let report = frame.report();
    match datetime::parse(frame.data) {
        reading @ DateTimeReading::Full {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } => report
            .with("iso", Value::Text(reading.iso().unwrap_or_default()))
            .with("year", Value::Uint(u64::from(year)))
            .with("month", Value::Uint(u64::from(month)))
            .with("day", Value::Uint(u64::from(day)))
            .with("hour", Value::Uint(u64::from(hour)))
            .with("min", Value::Uint(u64::from(minute)))
            .with("sec", Value::Uint(u64::from(second))),
        DateTimeReading::TimeOnly {
            seconds_of_day,
            year,
            month,
            day,
        } => {
            let mut report = report
                .with("sod", Value::Uint(u64::from(seconds_of_day)))
                .with("year", Value::Uint(u64::from(year)));
            if let Some(month) = month {
                report.push("month", Value::Uint(u64::from(month)));
            }
            if let Some(day) = day {
                report.push("day", Value::Uint(u64::from(day)));
            }
            report
        }
        DateTimeReading::Unrecognized => frame.raw(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::Family;

    fn frame<'a>(name: &'static str, data: &'a [u8]) -> Frame<'a> {
        Frame {
            family: Family::HotAir,
            header: Family::HotAir,
            name,
            data,
        }
    }

    fn line(name: &'static str, data: &[u8]) -> String {
        match decode(&frame(name, data)) {
            Some(Decoded::Report(report)) => report.to_string(),
            Some(Decoded::Suppressed) => "<suppressed>".to_string(),
            None => String::new(),
        }
    }

    #[test]
    fn test_status_tool() {
        assert_eq!(line("M_R_STATUSTOOL", &[]), "<suppressed>");
        assert_eq!(line("M_R_STATUSTOOL", &[0x00]), "[HA_M_R_STATUSTOOL] mask=0x00");
        assert_eq!(
            line("M_R_STATUSTOOL", &[0x81, 0xFF]),
            "[HA_M_R_STATUSTOOL] mask=0x81 bits=\"HEATER|STAND\""
        );
    }

    #[test]
    fn test_counters_short_is_raw_only() {
        assert_eq!(line("M_R_WORKCYCLES", &[1]), "[HA_M_R_WORKCYCLES] raw=\"01\"");
        assert_eq!(
            line("M_R_PLUGTIME", &[0x3C, 0, 0, 0]),
            "[HA_M_R_PLUGTIME] min=60 hm=\"1:00\""
        );
    }

    #[test]
    fn test_airflow_clamped() {
        assert_eq!(
            line("M_R_AIRFLOW", &[0xB0, 0x04]),
            "[HA_M_R_AIRFLOW] pct=100.0 raw=1000"
        );
        assert_eq!(line("M_R_POWER", &[0x05]), "[HA_M_R_POWER] raw=\"05\"");
        assert_eq!(line("M_R_SELECTFLOW", &[0x05]), "");
    }

    #[test]
    fn test_start_mode() {
        assert_eq!(
            line("M_R_STARTMODE", &[0x05]),
            "[HA_M_R_STARTMODE] value=0x05 bits=\"TOOL_BUTTON|PEDAL_PULSE\""
        );
        assert_eq!(
            line("M_R_STARTMODE", &[0x00]),
            "[HA_M_R_STARTMODE] value=0x00 bits=\"NONE\""
        );
    }

    #[test]
    fn test_adjust_temp_forms() {
        assert_eq!(
            line("M_R_AJUSTTEMP", &[0x5A, 0x00, 0, 1]),
            "[HA_M_R_AJUSTTEMP] delta_c=10.0 port=0 tool=1 tool_name=\"JT\""
        );
        assert_eq!(
            line("M_R_AJUSTTEMP", &[0xA6, 0xFF]),
            "[HA_M_R_AJUSTTEMP] delta_c=-10.0"
        );
    }

    #[test]
    fn test_ext_tc_mode_optional_port() {
        assert_eq!(line("M_R_EXTTCMODE", &[1]), "[HA_M_R_EXTTCMODE] on=1");
        assert_eq!(
            line("M_R_EXTTCMODE", &[1, 0, 2]),
            "[HA_M_R_EXTTCMODE] on=1 port=0 tool=2 tool_name=\"TE\""
        );
    }

    #[test]
    fn test_continuous_mode_widths() {
        assert_eq!(line("M_R_CONTIMODE", &[]), "[HA_M_R_CONTIMODE] mask=\"?\"");
        assert_eq!(line("M_R_CONTIMODE", &[3]), "[HA_M_R_CONTIMODE] mask=0x03");
        assert_eq!(line("M_R_CONTIMODE", &[3, 1]), "[HA_M_R_CONTIMODE] mask=0x0103");
    }

    #[test]
    fn test_theme() {
        assert_eq!(line("M_R_THEME", &[1]), "[HA_M_R_THEME] code=1 name=\"LIGHT\"");
        assert_eq!(line("M_R_THEME", &[7]), "[HA_M_R_THEME] code=7");
    }

    #[test]
    fn test_date_time() {
        assert_eq!(
            line("M_R_DATETIME", &[0xE8, 0xCB, 0x00, 0x19, 0x00, 0x08, 0x1B]),
            "[HA_M_R_DATETIME] iso=\"2025-08-27 14:30:00\" year=2025 month=8 day=27 \
             hour=14 min=30 sec=0"
        );
        assert_eq!(
            line("M_R_DATETIME", &[0x10, 0x0E, 0x00, 0x19, 0x00, 0x00, 0xAA]),
            "[HA_M_R_DATETIME] sod=3600 year=2025"
        );
        assert_eq!(line("M_R_DATETIME", &[1, 2]), "[HA_M_R_DATETIME] raw=\"01 02\"");
    }

    #[test]
    fn test_time_to_stop_and_limits() {
        assert_eq!(
            line("M_R_TIMETOSTOP", &[0x58, 0x02]),
            "[HA_M_R_TIMETOSTOP] mmss=\"01:00\" ds=600"
        );
        assert_eq!(
            line("M_R_MAXMINTEMP", &[0x04, 0x11, 0xC2, 0x01]),
            "[HA_M_R_MAXMINTEMP] max_c=484.0 min_c=50.0"
        );
        assert_eq!(
            line("M_R_MAXMINFLOW", &[0xE8, 0x03, 0x64, 0x00]),
            "[HA_M_R_MAXMINFLOW] max_pct=100.0 min_pct=10.0"
        );
    }
}
