//! Control frames and write acknowledgements.

use super::report::{Decoded, Report, Value};
use super::Frame;
use crate::catalog;
use crate::config::DecoderConfig;
use crate::constants::*;
use crate::error::NackReason;
use crate::family::Family;
use crate::translate;

/// Control codes are the same in every family.
pub(super) fn decode(
    family: Family,
    code: u8,
    data: &[u8],
    config: &DecoderConfig,
) -> Option<Decoded> {
    let report = match code {
        CODE_SYN if config.suppress_keepalive => return Some(Decoded::Suppressed),
        CODE_SYN => with_extra(Report::new(family, "SYN"), data),
        CODE_NACK => nack(family, data),
        CODE_ACK => with_extra(Report::new(family, "ACK").ok(), data),
        CODE_HS => with_extra(Report::new(family, "HS"), data),
        CODE_EOT => with_extra(Report::new(family, "EOT"), data),
        _ => return None,
    };
    Some(Decoded::Report(report))
}

fn with_extra(report: Report, data: &[u8]) -> Report {
    if data.is_empty() {
        report
    } else {
        report.with("extra", Value::Bytes(data.to_vec()))
    }
}

/// `reason cmd arg0 port tool tail...`
fn nack(family: Family, d: &[u8]) -> Report {
    let mut report = Report::new(family, "NACK");
    let Some(&reason) = d.first() else {
        return report.with("reason", Value::Name("?"));
    };
    report.push("reason", Value::hex2(reason));
    report.push("reason_name", Value::Text(NackReason::from(reason).to_string()));
    if let Some(&cmd) = d.get(1) {
        report.push("cmd", Value::hex2(cmd));
        if let Some((_, descriptor)) = catalog::find_by_code(cmd, family) {
            report.push("cmd_name", Value::Name(descriptor.name));
        }
    }
    if let Some(&arg0) = d.get(2) {
        report.push("arg0", Value::hex2(arg0));
    }
    if let Some(&port) = d.get(3) {
        report.push("port", Value::Uint(u64::from(port)));
    }
    if let Some(&tool) = d.get(4) {
        report.push("tool", Value::Uint(u64::from(tool)));
        if family.is_solder() || family == Family::HotAir {
            if let Some(name) = translate::tool_name(family, tool) {
                report.push("tool_name", Value::Name(name));
            }
        }
    }
    if d.len() > 5 {
        report.push("tail", Value::Bytes(d[5..].to_vec()));
    }
    report
}

/// Replies to writes on the family's allow-list that start with `0x06`.
pub(super) fn write_ack(frame: &Frame<'_>) -> Option<Report> {
    if frame.u8(0) != Some(ACK_MARKER) {
        return None;
    }
    if frame.family == Family::SolderV2 {
        match frame.name {
            "M_W_LEVELSTEMPS" => {
                let mut report = Report::new(frame.header, "LEVELSTEMPS/ACK").ok();
                push_port_tool(frame, &mut report);
                return Some(report);
            }
            "M_W_LOCK_PORT" => {
                let mut report = Report::new(frame.header, "LOCK_PORT/ACK").ok();
                if let Some(port) = frame.u8(1) {
                    report.push("port", Value::Uint(u64::from(port)));
                }
                return Some(report);
            }
            _ => {}
        }
    }
    if !catalog::acknowledges_write(frame.name, frame.family) {
        return None;
    }
    let mut report = Report::new(frame.header, "ACK")
        .ok()
        .with("cmd", Value::Name(frame.name));
    push_port_tool(frame, &mut report);
    if frame.len() > 3 {
        report.push("extra", Value::Bytes(frame.tail(3).to_vec()));
    }
    Some(report)
}

fn push_port_tool(frame: &Frame<'_>, report: &mut Report) {
    if let Some(port) = frame.u8(1) {
        report.push("port", Value::Uint(u64::from(port)));
    }
    if let Some(tool) = frame.u8(2) {
        report.push("tool", Value::Uint(u64::from(tool)));
        if let Some(name) = translate::tool_name(frame.family, tool) {
            report.push("tool_name", Value::Name(name));
        }
    }
}
