//! Decoders shared by several families.
//!
//! These match on the command name alone, so a family picks one up simply
//! by carrying the name in its catalog.

use super::layout::deciseconds;
use super::report::{Report, Value};
use super::Frame;
use crate::constants::{ACK_MARKER, CODE_NACK};
use crate::family::Family;
use crate::translate::{self, HOT_AIR_STATUS, PORT_CHANGES, SOLDER_FLAGS};

pub(super) fn decode(frame: &Frame<'_>) -> Option<Report> {
    match frame.name {
        "M_FIRMWARE" => Some(firmware(frame)),
        "M_R_DEVICENAME" => device_name(frame),
        "M_R_DEVICEIDORIGINAL" => Some(device_id_original(frame)),
        "M_R_DEVICEID" => Some(device_id(frame)),
        "M_INF_PORT" => port_info(frame),
        "M_R_CONNECTTOOL" => connected_tool(frame),
        "M_R_TEMPUNIT" => temp_unit(frame),
        "M_R_LANGUAGE" => Some(language(frame)),
        "M_R_USB_CONNECTSTATUS" => Some(usb_status(frame)),
        "M_R_DISCOVER" => Some(discover(frame)),
        "M_R_PIN" => Some(pin(frame)),
        "M_R_PINENABLED" | "M_R_STATIONLOCKED" | "M_R_BEEP" => on_off(frame),
        "M_R_REMOTEMODE" => remote_mode(frame),
        "M_R_TOOLERROR" => tool_error(frame),
        "M_R_RBT_CONNCONFIG" => Some(robot_config(frame)),
        "M_R_RBT_CONNECTSTATUS" => Some(robot_status(frame)),
        _ => None,
    }
}

/// `proto:model:sw:hw`, with the model as `name_type_version`. Shorter
/// banners only name the model.
fn firmware(frame: &Frame<'_>) -> Report {
    let text = frame.text();
    let mut report = frame.report().with("string", Value::Text(text.clone()));
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() < 3 || parts[0].is_empty() {
        return report;
    }
    let model = parts[1];
    if parts.len() == 3 {
        report.push("name", Value::Text(model.to_string()));
    } else {
        report.push("proto", Value::Text(parts[0].to_string()));
        report.push("sw", Value::Text(parts[2].to_string()));
        report.push("hw", Value::Text(parts[3].to_string()));
        split_model(&mut report, model);
    }
    report.push(
        "family",
        Value::Name(Family::from_banner(&text).backend_name()),
    );
    report
}

fn split_model(report: &mut Report, model: &str) {
    let mut pieces = model.splitn(3, '_');
    match (pieces.next(), pieces.next(), pieces.next()) {
        (Some(name), Some(kind), Some(version)) if !name.is_empty() && !kind.is_empty() => {
            report.push("name", Value::Text(name.to_string()));
            report.push("type", Value::Text(kind.to_string()));
            report.push("ver", Value::Uint(leading_number(version)));
        }
        _ => report.push("name", Value::Text(model.to_string())),
    }
}

fn leading_number(s: &str) -> u64 {
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

fn device_name(frame: &Frame<'_>) -> Option<Report> {
    let name = frame.text();
    if name.is_empty() {
        return None;
    }
    Some(frame.report().with("name", Value::Text(name)))
}

fn device_id_original(frame: &Frame<'_>) -> Report {
    if frame.len() != 16 {
        return frame.raw();
    }
    let mut report = frame.report();
    if let (Some(vid), Some(pid)) = (frame.u16(0), frame.u16(2)) {
        report.push("vid", Value::hex4(vid));
        report.push("pid", Value::hex4(pid));
    }
    for (i, key) in ["w0", "w1", "w2", "w3"].into_iter().enumerate() {
        if let Some(word) = frame.u32(i * 4) {
            report.push(key, Value::hex8(word));
        }
    }
    report
}

fn device_id(frame: &Frame<'_>) -> Report {
    let text = frame.text();
    if frame.len() > 0 && text.is_empty() {
        return frame.raw();
    }
    frame.report().with("text", Value::Text(text))
}

fn port_info(frame: &Frame<'_>) -> Option<Report> {
    match frame.family {
        Family::HotAir => Some(hot_air_port_info(frame)),
        Family::Preheater => Some(preheater_port_info(frame)),
        Family::SolderV2 | Family::SolderV1 => Some(solder_port_info(frame)),
        Family::FumeExtractor | Family::Dispenser | Family::Unknown => None,
    }
}

fn push_tool(frame: &Frame<'_>, report: &mut Report, code: u8) {
    match translate::tool_name(frame.family, code) {
        Some(name) => report.push("tool", Value::Name(name)),
        None => report.push("tool_code", Value::Uint(u64::from(code))),
    }
}

fn push_temp(report: &mut Report, key: &'static str, uti: Option<u16>) {
    if let Some(uti) = uti {
        report.push(key, Value::Temperature(i32::from(uti)));
    }
}

fn push_percent(report: &mut Report, key: &'static str, raw: Option<u16>) {
    if let Some(raw) = raw {
        report.push(key, Value::PerMille(raw));
    }
}

/// `tool, _, air, protection TC, power, flow, time to stop, status [.. changes]`
fn hot_air_port_info(frame: &Frame<'_>) -> Report {
    if frame.len() < 14 {
        return frame.short_raw();
    }
    let d = frame.data;
    let mut report = frame.report();
    push_tool(frame, &mut report, d[0]);
    push_temp(&mut report, "air_c", frame.u16(2));
    push_temp(&mut report, "prot_tc_c", frame.u16(4));
    push_percent(&mut report, "power_pct", frame.u16(6));
    push_percent(&mut report, "flow_pct", frame.u16(8));
    if let Some(ds) = frame.u16(10) {
        report.push("tts", Value::Text(deciseconds(u32::from(ds))));
    }
    let status = d[12];
    report.push("status", Value::hex2(status));
    if frame.len() >= 15 {
        report.push("changes", Value::hex2(d[d.len() - 1]));
    }
    report.push(
        "status_text",
        Value::Flags(HOT_AIR_STATUS.names_or_none(u16::from(status))),
    );
    report
}

fn preheater_port_info(frame: &Frame<'_>) -> Report {
    if frame.len() < 12 {
        return frame.short_raw();
    }
    let d = frame.data;
    let mut report = frame.report();
    push_tool(frame, &mut report, d[0]);
    push_temp(&mut report, "temp_c", frame.u16(2));
    push_temp(&mut report, "ext_tc_c", frame.u16(4));
    if let (Some(heater), Some(power)) = (frame.u16(6), frame.u16(8)) {
        report.push("heater_raw", Value::Uint(u64::from(heater)));
        report.push("power_raw", Value::Uint(u64::from(power)));
    }
    report.push("flags", Value::hex2(d[10]));
    report
}

/// `tool, tool error, tip1, tip2, power1, power2, flags, changes`
fn solder_port_info(frame: &Frame<'_>) -> Report {
    if frame.len() < 12 {
        return frame.short_raw();
    }
    let d = frame.data;
    let mut report = frame.report();
    push_tool(frame, &mut report, d[0]);
    report.push("tool_err", Value::Uint(u64::from(d[1])));
    if let Some(name) = translate::tool_error_name(frame.family, d[1]) {
        report.push("tool_err_name", Value::Name(name));
    }
    push_temp(&mut report, "tip1_c", frame.u16(2));
    push_temp(&mut report, "tip2_c", frame.u16(4));
    push_percent(&mut report, "pwr1_pct", frame.u16(6));
    push_percent(&mut report, "pwr2_pct", frame.u16(8));
    // The first generation has no flags byte.
    if frame.family == Family::SolderV2 {
        report.push("flags", Value::hex2(d[10]));
        report.push(
            "flags_bits",
            Value::Flags(SOLDER_FLAGS.names_or_none(u16::from(d[10]))),
        );
    }
    report.push("changes", Value::hex2(d[11]));
    report.push(
        "changes_bits",
        Value::Flags(PORT_CHANGES.names_or_none(u16::from(d[11]))),
    );
    report
}

fn connected_tool(frame: &Frame<'_>) -> Option<Report> {
    if !(frame.family.is_solder() || frame.family == Family::HotAir) {
        return None;
    }
    let Some(code) = frame.u8(0) else {
        return Some(frame.report().with("name", Value::Text(String::new())));
    };
    let name = translate::tool_name(frame.family, code).unwrap_or("UNKNOWN");
    Some(
        frame
            .report()
            .with("code", Value::hex2(code))
            .with("name", Value::Name(name)),
    )
}

fn temp_unit(frame: &Frame<'_>) -> Option<Report> {
    let code = frame.u8(0)?;
    let mut report = frame.report();
    if let Some(unit) = translate::temp_unit_name(code) {
        report.push("unit", Value::Name(unit));
    }
    report.push("code", Value::hex2(code));
    Some(report)
}

/// Two ASCII letters on newer firmware, a numeric code on older.
fn language(frame: &Frame<'_>) -> Report {
    if frame.len() >= 2 {
        if let Some(name) = translate::language_from_ascii(frame.data) {
            return frame
                .report()
                .with("name", Value::Name(name))
                .with("src", Value::Name("ASCII"));
        }
    }
    match frame.u8(0).and_then(translate::language_from_code) {
        Some(name) => frame
            .report()
            .with("name", Value::Name(name))
            .with("src", Value::Name("CODE")),
        None => frame.raw(),
    }
}

fn usb_status(frame: &Frame<'_>) -> Report {
    let text = frame.text();
    if frame.len() == 0 {
        return frame.report().with("text", Value::Text(text));
    }
    if text.is_empty() {
        return frame.raw();
    }
    let mode = translate::usb_mode_name(&text);
    let mut report = frame.report().with("text", Value::Text(text));
    if let Some(mode) = mode {
        report.push("mode", Value::Name(mode));
    }
    report
}

/// Presence probe: a single ACK/NACK or ASCII digit.
fn discover(frame: &Frame<'_>) -> Report {
    let (1, Some(b)) = (frame.len(), frame.u8(0)) else {
        return frame.raw();
    };
    let report = frame.report();
    match b {
        ACK_MARKER => report
            .with("present", Value::Uint(1))
            .with("ack", Value::hex2(b)),
        CODE_NACK => report
            .with("present", Value::Uint(0))
            .with("nack", Value::hex2(b)),
        b'0' | b'1' => report
            .with("present", Value::Uint(u64::from(b - b'0')))
            .with("raw", Value::hex2(b)),
        _ => report.with("code", Value::hex2(b)),
    }
}

fn pin(frame: &Frame<'_>) -> Report {
    if frame.len() == 4 && frame.data.iter().all(u8::is_ascii_digit) {
        return frame.report().with("pin", Value::Text(frame.text()));
    }
    frame.raw()
}

fn on_off(frame: &Frame<'_>) -> Option<Report> {
    let on = frame.u8(0)?;
    Some(frame.report().with("on", Value::Uint(u64::from(on))))
}

fn remote_mode(frame: &Frame<'_>) -> Option<Report> {
    let b = frame.u8(0)?;
    let key = if b <= 1 { "on" } else { "code" };
    Some(frame.report().with(key, Value::Uint(u64::from(b))))
}

fn tool_error(frame: &Frame<'_>) -> Option<Report> {
    let code = frame.u8(0)?;
    let mut report = frame.report().with("code", Value::hex2(code));
    if let Some(name) = translate::tool_error_name(frame.family, code) {
        report.push("name", Value::Name(name));
    }
    Some(report)
}

fn digit(b: u8) -> Option<u8> {
    b.is_ascii_digit().then(|| b - b'0')
}

/// `speed databits parity stopbits addr_enabled [addr digits] [tail]`
fn robot_config(frame: &Frame<'_>) -> Report {
    if frame.len() < 5 {
        return frame.raw();
    }
    let d = frame.data;
    let mut report = frame.report();

    let speed = digit(d[0]).unwrap_or(d[0]);
    report.push("speed_code", Value::Uint(u64::from(speed)));
    match translate::ROBOT_BAUD_RATES.get(speed as usize) {
        Some(baud) => report.push("baud", Value::Uint(u64::from(*baud))),
        None => report.push("baud", Value::Name("?")),
    }

    report.push(
        "databits",
        Value::Uint(u64::from(digit(d[1]).unwrap_or(d[1]))),
    );
    match translate::parity_name(d[2]) {
        Some(name) => report.push("parity", Value::Name(name)),
        None => report.push("parity_raw", Value::hex2(d[2])),
    }
    match digit(d[3]) {
        Some(v) => report.push("stopbits", Value::Uint(u64::from(v))),
        None => report.push("stopbits_raw", Value::hex2(d[3])),
    }
    match digit(d[4]) {
        Some(v) => report.push("addr_enabled", Value::Uint(u64::from(v))),
        None => report.push("addr_enabled_raw", Value::hex2(d[4])),
    }

    let tail = &d[5..];
    let addr = match tail.len() {
        0 => None,
        1 => digit(tail[0]),
        n => digit(tail[n - 2])
            .zip(digit(tail[n - 1]))
            .map(|(hi, lo)| hi * 10 + lo),
    };
    if let Some(addr) = addr {
        report.push("addr", Value::Uint(u64::from(addr)));
    }
    if tail.len() > 2 {
        report.push("tail", Value::Bytes(tail.to_vec()));
    }
    report
}

fn robot_status(frame: &Frame<'_>) -> Report {
    let Some(c) = frame.u8(0) else {
        return frame.report().with("state", Value::Text(String::new()));
    };
    match translate::robot_state_name(c) {
        Some(state) => frame.report().with("state", Value::Name(state)),
        None => frame.report().with("state_char", Value::hex2(c)),
    }
}

/// Plain 16-bit readings shared by the temperature families.
pub(super) fn common_u16(frame: &Frame<'_>) -> Option<Report> {
    let v = frame.u16(0)?;
    let f = frame.family;
    let temp = Value::Temperature(i32::from(v));
    let report = frame.report();
    let report = match frame.name {
        "M_R_SELECTTEMP" if f.is_solder() || f == Family::HotAir || f == Family::Preheater => {
            report.with("c", temp).with("uti", Value::hex4(v))
        }
        "M_R_TIPTEMP" if f.is_solder() => report.with("c", temp).with("uti", Value::hex4(v)),
        "M_R_POWER" | "M_R_CURRENT" if f.is_solder() => report.with("raw", Value::Uint(u64::from(v))),
        "M_R_AIRTEMP" if f == Family::HotAir => report.with("c", temp),
        "M_R_EXTTCTEMP" if f == Family::HotAir || f == Family::Preheater => report.with("c", temp),
        "M_R_SELECTPOWER" if f == Family::Preheater => report.with("pct", Value::PerMille(v)),
        _ => return None,
    };
    Some(report)
}
