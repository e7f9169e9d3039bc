//! Soldering station replies (both generations).

use super::layout::{field, minutes_seconds, Layout, Semantic::*, Short, Width::*};
use super::report::{Decoded, Report, Value};
use super::Frame;
use crate::constants::TEMP_DISABLED;
use crate::family::Family;
use crate::translate::{self, SOLDER_FLAGS, SOLDER_STATUS_TOOL};

static MINUTES: Layout = Layout {
    min_len: 4,
    short: Short::LengthAndRaw,
    fields: &[
        field("min", 0, U32, Uint),
        field("hm", 0, U32, HoursMinutes),
    ],
};

static CYCLES: Layout = Layout {
    min_len: 4,
    short: Short::LengthAndRaw,
    fields: &[field("value", 0, U32, Uint)],
};

static LEVELS_TEMPS: Layout = Layout {
    min_len: 11,
    short: Short::Skip,
    fields: &[
        field("on", 0, U8, Uint),
        field("sel", 1, U8, Uint),
        field("l1_on", 2, U8, Uint),
        field("l1_c", 3, U16, Celsius),
        field("l1_uti", 3, U16, Hex),
        field("l2_on", 5, U8, Uint),
        field("l2_c", 6, U16, Celsius),
        field("l2_uti", 6, U16, Hex),
        field("l3_on", 8, U8, Uint),
        field("l3_c", 9, U16, Celsius),
        field("l3_uti", 9, U16, Hex),
        field("port", 11, U8, Uint),
        field("tool", 12, U8, Tool),
    ],
};

static CARTRIDGE: Layout = Layout {
    min_len: 11,
    short: Short::Skip,
    fields: &[
        field("on", 0, U8, Uint),
        field("nbr", 1, U16, Uint),
        field("adj300_c", 3, I16, Celsius),
        field("adj400_c", 5, I16, Celsius),
        field("group", 7, U8, Uint),
        field("family", 8, U8, Uint),
        field("port", 9, U8, Uint),
        field("tool", 10, U8, Tool),
    ],
};

static DELAY: Layout = Layout {
    min_len: 4,
    short: Short::Skip,
    fields: &[
        field("min", 0, U8, Uint),
        field("on", 1, U8, Uint),
        field("port", 2, U8, Uint),
        field("tool", 3, U8, Tool),
    ],
};

static SLEEP_TEMP: Layout = Layout {
    min_len: 4,
    short: Short::Skip,
    fields: &[
        field("c", 0, U16, Celsius),
        field("uti", 0, U16, Hex),
        field("port", 2, U8, Uint),
        field("tool", 3, U8, Tool),
    ],
};

static ADJUST_TEMP: Layout = Layout {
    min_len: 4,
    short: Short::Skip,
    fields: &[
        field("delta_c", 0, I16, Celsius),
        field("port", 2, U8, Uint),
        field("tool", 3, U8, Tool),
    ],
};

static INTERNAL_TEMP: Layout = Layout {
    min_len: 2,
    short: Short::Skip,
    fields: &[field("c", 0, U16, Celsius), field("uti", 0, U16, Hex)],
};

static POWER: Layout = Layout {
    min_len: 2,
    short: Short::Skip,
    fields: &[field("pct", 0, U16, Percent), field("raw", 0, U16, Uint)],
};

static GROUND: Layout = Layout {
    min_len: 1,
    short: Short::Skip,
    fields: &[
        field("code", 0, U8, Uint),
        field("name", 0, U8, Named(translate::ground_type_name)),
    ],
};

pub(super) fn decode(frame: &Frame<'_>) -> Option<Decoded> {
    let v2 = frame.family == Family::SolderV2;
    let report = match frame.name {
        "M_R_STATUSTOOL" => status_tool(frame),
        "M_R_PLUGTIME" | "M_R_WORKTIME" | "M_R_SLEEPTIME" | "M_R_HIBERTIME"
        | "M_R_NOTOOLTIME" | "M_R_PLUGTIMEP" | "M_R_WORKTIMEP" | "M_R_SLEEPTIMEP"
        | "M_R_HIBERTIMEP" | "M_R_NOTOOLTIMEP" => MINUTES.decode(frame),
        "M_R_SLEEPCYCLES" | "M_R_DESOLCYCLES" | "M_R_SLEEPCYCLESP" | "M_R_DESOLCYCLESP" => {
            CYCLES.decode(frame)
        }
        "M_R_LEVELSTEMPS" => LEVELS_TEMPS.decode(frame),
        "M_R_CARTRIDGE" => CARTRIDGE.decode(frame),
        // The first generation replies to these with other layouts.
        "M_R_SLEEPDELAY" | "M_R_HIBERDELAY" if v2 => DELAY.decode(frame),
        "M_R_SLEEPTEMP" if v2 => SLEEP_TEMP.decode(frame),
        "M_R_AJUSTTEMP" if v2 => ADJUST_TEMP.decode(frame),
        "M_R_TRAFOTEMP" | "M_R_MOSTEMP" | "M_R_MAXTEMP" | "M_R_MINTEMP" => {
            INTERNAL_TEMP.decode(frame)
        }
        "M_R_POWER" => POWER.decode(frame),
        "M_R_POWERLIM" => power_limit(frame),
        "M_R_QST_STATUS" => Some(qst_status(frame)),
        "M_R_DELAYTIME" => delay_time(frame),
        "M_R_ETH_TCPIPCONFIG" => Some(tcpip_config(frame)),
        "M_R_ETH_CONNECTSTATUS" => Some(frame.raw()),
        "M_R_ALARMMAXTEMP" => Some(alarm_limit(frame, "M_R_ALARM_MAXTEMP")),
        "M_R_ALARMMINTEMP" => Some(alarm_limit(frame, "M_R_ALARM_MINTEMP")),
        "M_R_ALARMTEMP" => Some(alarm_temp(frame)),
        "M_R_CONTIMODE" => continuous_mode(frame),
        "M_R_LOCK_PORT" => Some(lock_port(frame)),
        "M_R_QST_ACTIVATE" => frame
            .u8(0)
            .map(|on| frame.report().with("on", Value::Uint(u64::from(on)))),
        "M_R_TYPEOFGROUND" => GROUND.decode(frame),
        "M_R_STATERROR" => Some(station_error(frame)),
        "M_R_PERIPHCOUNT" => Some(match frame.u8(0) {
            Some(count) => frame.report().with("count", Value::Uint(u64::from(count))),
            None => frame.raw(),
        }),
        "M_R_PERIPHCONFIG" => Some(peripheral_config(frame)),
        "M_R_PERIPHSTATUS" => Some(peripheral_status(frame)),
        _ => None,
    };
    report.map(Decoded::Report)
}

/// 16-bit tool status on current firmware, 8-bit port flags on older.
fn status_tool(frame: &Frame<'_>) -> Option<Report> {
    let (mask, bits) = match (frame.u16(0), frame.u8(0)) {
        (Some(v), _) => (Value::hex4(v), SOLDER_STATUS_TOOL.names_or_none(v)),
        (None, Some(v)) => (Value::hex2(v), SOLDER_FLAGS.names_or_none(u16::from(v))),
        (None, None) => return None,
    };
    Some(
        frame
            .report()
            .with("mask", mask)
            .with("bits", Value::Flags(bits)),
    )
}

/// Unlike `M_R_POWER`, the raw value is reported clamped.
fn power_limit(frame: &Frame<'_>) -> Option<Report> {
    let raw = frame.u16(0)?.min(crate::constants::PER_MILLE_MAX);
    Some(
        frame
            .report()
            .with("pct", Value::PerMille(raw))
            .with("raw", Value::Uint(u64::from(raw))),
    )
}

fn qst_status(frame: &Frame<'_>) -> Report {
    match (frame.len(), frame.u16(0), frame.u8(0)) {
        (0, _, _) => frame.report().with("state", Value::Text(String::new())),
        (1, _, Some(on @ (0 | 1))) => frame.report().with("on", Value::Uint(u64::from(on))),
        (_, Some(v), _) => frame
            .report()
            .with("mask", Value::hex4(v))
            .with("bits", Value::Flags(SOLDER_STATUS_TOOL.names_or_none(v))),
        (_, None, b) => frame
            .report()
            .with("mask", Value::hex2(b.unwrap_or_default())),
    }
}

/// `secs16 tag port`; `0xFFFF` seconds means no countdown.
fn delay_time(frame: &Frame<'_>) -> Option<Report> {
    if frame.len() < 4 {
        return None;
    }
    let secs = match frame.u16(0)? {
        0xFFFF => 0,
        s => s,
    };
    let tag = frame.u8(2)?;
    let mut report = frame
        .report()
        .with("mmss", Value::Text(minutes_seconds(u32::from(secs))))
        .with("sec", Value::Uint(u64::from(secs)))
        .with("tag", Value::hex2(tag));
    let next = match tag {
        b'S' => Some("SLEEP"),
        b'H' => Some("HIBERNATION"),
        b'N' => Some("NONE"),
        _ if secs == 0 => Some("NONE"),
        _ => None,
    };
    if let Some(next) = next {
        report.push("next", Value::Name(next));
    }
    report.push("port", Value::Uint(u64::from(frame.u8(3)?)));
    Some(report)
}

fn ipv4(octets: &[u8]) -> Value {
    Value::Text(
        octets
            .iter()
            .map(|o| o.to_string())
            .collect::<Vec<_>>()
            .join("."),
    )
}

/// `dhcp ip mask gw dns port16`
fn tcpip_config(frame: &Frame<'_>) -> Report {
    if frame.len() < 19 {
        return frame.raw();
    }
    let d = frame.data;
    frame
        .report()
        .with("dhcp", Value::Uint(u64::from(d[0])))
        .with("ip", ipv4(&d[1..5]))
        .with("mask", ipv4(&d[5..9]))
        .with("gw", ipv4(&d[9..13]))
        .with("dns", ipv4(&d[13..17]))
        .with("port", Value::Uint(u64::from(u16::from_le_bytes([d[17], d[18]]))))
}

/// `uti16 _ _ [port]`, `0xFFFF` disables the alarm.
fn alarm_limit(frame: &Frame<'_>, title: &'static str) -> Report {
    let Some(uti) = frame.u16(0) else {
        return Report::new(frame.header, title).with("raw", Value::Bytes(frame.data.to_vec()));
    };
    let disabled = uti == TEMP_DISABLED;
    let mut report = Report::new(frame.header, title).with("uti", Value::hex4(uti));
    if !disabled {
        report.push("c", Value::Temperature(i32::from(uti)));
    }
    report.push(
        "state",
        Value::Name(if disabled { "DISABLED" } else { "ENABLED" }),
    );
    if let Some(port) = frame.u8(4) {
        report.push("port", Value::Uint(u64::from(port)));
    }
    report
}

fn alarm_temp(frame: &Frame<'_>) -> Report {
    let report = Report::new(frame.header, "M_R_ALARM_TEMP");
    match frame.u16(0) {
        Some(uti) => report
            .with("uti", Value::hex4(uti))
            .with("c", Value::Temperature(i32::from(uti))),
        None => report.with("raw", Value::Bytes(frame.data.to_vec())),
    }
}

fn continuous_mode(frame: &Frame<'_>) -> Option<Report> {
    let mask = frame.u16(0).or_else(|| frame.u8(0).map(u16::from))?;
    Some(frame.report().with("mask", Value::hex4(mask)))
}

/// `[state, port]`
fn lock_port(frame: &Frame<'_>) -> Report {
    let mut report = frame.report();
    if let Some(port) = frame.u8(1) {
        report.push("port", Value::Uint(u64::from(port)));
    }
    if let Some(on) = frame.u8(0) {
        report.push("on", Value::Uint(u64::from(on)));
    }
    report
}

/// Shared with the hot-air family.
pub(super) fn station_error(frame: &Frame<'_>) -> Report {
    let mask = frame
        .u16(0)
        .or_else(|| frame.u8(0).map(u16::from))
        .unwrap_or(0);
    let mut report = frame.report().with("mask", Value::hex4(mask));
    if let Some(name) = translate::station_error_name((mask & 0xFF) as u8) {
        report.push("lowbyte_name", Value::Name(name));
    }
    report
}

fn peripheral_config(frame: &Frame<'_>) -> Report {
    let text = frame.text();
    if frame.len() > 0 && text.is_empty() {
        return frame.raw();
    }
    frame.report().with("text", Value::Text(text))
}

/// `active state idx`
fn peripheral_status(frame: &Frame<'_>) -> Report {
    let &[active, state, idx] = frame.data else {
        return frame.raw();
    };
    let mut report = frame
        .report()
        .with("active", Value::Uint(u64::from(active)))
        .with("idx", Value::Uint(u64::from(idx)));
    match translate::peripheral_state_name(state) {
        Some(name) => report.push("state", Value::Name(name)),
        None => report.push("state_char", Value::hex2(state)),
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame<'a>(family: Family, name: &'static str, data: &'a [u8]) -> Frame<'a> {
        Frame {
            family,
            header: family,
            name,
            data,
        }
    }

    fn line(name: &'static str, data: &[u8]) -> String {
        match decode(&frame(Family::SolderV2, name, data)) {
            Some(Decoded::Report(report)) => report.to_string(),
            _ => String::new(),
        }
    }

    #[test]
    fn test_status_tool_widths() {
        assert_eq!(
            line("M_R_STATUSTOOL", &[0x01, 0x01]),
            "[SOLD_M_R_STATUSTOOL] mask=0x0101 bits=\"STAND|DESOLDER_TOOL\""
        );
        assert_eq!(
            line("M_R_STATUSTOOL", &[0x06]),
            "[SOLD_M_R_STATUSTOOL] mask=0x06 bits=\"SLEEP|HIBERNATION\""
        );
        assert_eq!(
            line("M_R_STATUSTOOL", &[0x00, 0x00]),
            "[SOLD_M_R_STATUSTOOL] mask=0x0000 bits=\"NONE\""
        );
        assert_eq!(line("M_R_STATUSTOOL", &[]), "");
    }

    #[test]
    fn test_counters() {
        assert_eq!(
            line("M_R_WORKTIMEP", &[0x7D, 0x00, 0x00, 0x00]),
            "[SOLD_M_R_WORKTIMEP] min=125 hm=\"2:05\""
        );
        assert_eq!(
            line("M_R_DESOLCYCLES", &[0x10, 0x27, 0x00, 0x00]),
            "[SOLD_M_R_DESOLCYCLES] value=10000"
        );
        assert_eq!(
            line("M_R_PLUGTIME", &[0x01, 0x02]),
            "[SOLD_M_R_PLUGTIME] payload=2 raw=\"01 02\""
        );
    }

    #[test]
    fn test_levels_temps() {
        let data = [
            1, 2, 1, 0x4E, 0x0C, 0, 0x8C, 0x0A, 1, 0x10, 0x0E, 0x01, 0x02,
        ];
        let report = match decode(&frame(Family::SolderV2, "M_R_LEVELSTEMPS", &data)) {
            Some(Decoded::Report(report)) => report,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(report.get("l1_c"), Some(&Value::Temperature(3150)));
        assert_eq!(report.get("l2_uti"), Some(&Value::hex4(0x0A8C)));
        assert_eq!(report.get("l3_c").map(|v| v.to_string()).as_deref(), Some("400.0"));
        assert_eq!(report.get("tool_name"), Some(&Value::Name("T245")));
        // Too short: left for the fallback.
        assert_eq!(line("M_R_LEVELSTEMPS", &data[..10]), "");
    }

    #[test]
    fn test_cartridge_signed_adjust() {
        let data = [1, 0x2C, 0x01, 0xD3, 0xFF, 0x2D, 0x00, 3, 4, 0, 1];
        assert_eq!(
            line("M_R_CARTRIDGE", &data),
            "[SOLD_M_R_CARTRIDGE] on=1 nbr=300 adj300_c=-5.0 adj400_c=5.0 group=3 family=4 \
             port=0 tool=1 tool_name=\"T210\""
        );
    }

    #[test]
    fn test_port_tool_settings() {
        assert_eq!(
            line("M_R_SLEEPDELAY", &[5, 1, 0, 2]),
            "[SOLD_M_R_SLEEPDELAY] min=5 on=1 port=0 tool=2 tool_name=\"T245\""
        );
        assert_eq!(
            line("M_R_AJUSTTEMP", &[0xF7, 0xFF, 1, 9]),
            "[SOLD_M_R_AJUSTTEMP] delta_c=-1.0 port=1 tool=9 tool_name=\"T470\""
        );
        // Other layout on the first generation.
        let v1 = decode(&frame(Family::SolderV1, "M_R_SLEEPDELAY", &[5, 0, 0, 0]));
        assert!(v1.is_none());
    }

    #[test]
    fn test_power_and_limit() {
        assert_eq!(
            line("M_R_POWER", &[0xDC, 0x05]),
            "[SOLD_M_R_POWER] pct=100.0 raw=1500"
        );
        assert_eq!(
            line("M_R_POWERLIM", &[0xDC, 0x05]),
            "[SOLD_M_R_POWERLIM] pct=100.0 raw=1000"
        );
    }

    #[test]
    fn test_qst_status() {
        assert_eq!(line("M_R_QST_STATUS", &[]), "[SOLD_M_R_QST_STATUS] state=\"\"");
        assert_eq!(line("M_R_QST_STATUS", &[1]), "[SOLD_M_R_QST_STATUS] on=1");
        assert_eq!(line("M_R_QST_STATUS", &[7]), "[SOLD_M_R_QST_STATUS] mask=0x07");
        assert_eq!(
            line("M_R_QST_STATUS", &[0x02, 0x00]),
            "[SOLD_M_R_QST_STATUS] mask=0x0002 bits=\"SLEEP\""
        );
    }

    #[test]
    fn test_delay_time() {
        assert_eq!(
            line("M_R_DELAYTIME", &[0x5A, 0x00, b'S', 1]),
            "[SOLD_M_R_DELAYTIME] mmss=\"01:30\" sec=90 tag=0x53 next=\"SLEEP\" port=1"
        );
        assert_eq!(
            line("M_R_DELAYTIME", &[0xFF, 0xFF, 0x00, 0]),
            "[SOLD_M_R_DELAYTIME] mmss=\"00:00\" sec=0 tag=0x00 next=\"NONE\" port=0"
        );
    }

    #[test]
    fn test_tcpip_config() {
        let data = [
            0, 192, 168, 1, 10, 255, 255, 255, 0, 192, 168, 1, 1, 8, 8, 8, 8, 0x50, 0x00,
        ];
        assert_eq!(
            line("M_R_ETH_TCPIPCONFIG", &data),
            "[SOLD_M_R_ETH_TCPIPCONFIG] dhcp=0 ip=\"192.168.1.10\" mask=\"255.255.255.0\" \
             gw=\"192.168.1.1\" dns=\"8.8.8.8\" port=80"
        );
        assert_eq!(
            line("M_R_ETH_TCPIPCONFIG", &data[..5]),
            "[SOLD_M_R_ETH_TCPIPCONFIG] raw=\"00 C0 A8 01 0A\""
        );
    }

    #[test]
    fn test_alarms() {
        assert_eq!(
            line("M_R_ALARMMAXTEMP", &[0xFF, 0xFF, 0, 0, 1]),
            "[SOLD_M_R_ALARM_MAXTEMP] uti=0xFFFF state=\"DISABLED\" port=1"
        );
        assert_eq!(
            line("M_R_ALARMMINTEMP", &[0x4E, 0x0C]),
            "[SOLD_M_R_ALARM_MINTEMP] uti=0x0C4E c=350.0 state=\"ENABLED\""
        );
        assert_eq!(line("M_R_ALARMTEMP", &[1]), "[SOLD_M_R_ALARM_TEMP] raw=\"01\"");
    }

    #[test]
    fn test_station_error_and_ground() {
        assert_eq!(
            line("M_R_STATERROR", &[0x03, 0x00]),
            "[SOLD_M_R_STATERROR] mask=0x0003 lowbyte_name=\"MEMORY\""
        );
        assert_eq!(
            line("M_R_STATERROR", &[]),
            "[SOLD_M_R_STATERROR] mask=0x0000 lowbyte_name=\"OK\""
        );
        assert_eq!(
            line("M_R_TYPEOFGROUND", &[1]),
            "[SOLD_M_R_TYPEOFGROUND] code=1 name=\"HARDGROUND\""
        );
    }

    #[test]
    fn test_lock_port_and_peripherals() {
        assert_eq!(line("M_R_LOCK_PORT", &[1, 2]), "[SOLD_M_R_LOCK_PORT] port=2 on=1");
        assert_eq!(line("M_R_PERIPHCOUNT", &[3]), "[SOLD_M_R_PERIPHCOUNT] count=3");
        assert_eq!(
            line("M_R_PERIPHSTATUS", &[1, b'C', 0]),
            "[SOLD_M_R_PERIPHSTATUS] active=1 idx=0 state=\"CONNECTED\""
        );
        assert_eq!(
            line("M_R_PERIPHSTATUS", &[1, b'x', 0]),
            "[SOLD_M_R_PERIPHSTATUS] active=1 idx=0 state_char=0x78"
        );
        assert_eq!(line("M_R_PERIPHCONFIG", &[]), "[SOLD_M_R_PERIPHCONFIG] text=\"\"");
    }
}
