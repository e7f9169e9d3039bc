//! Console line to payload encoding.
//!
//! A console line is `NAME arg...`. The name is resolved in the family's
//! catalog and the arguments are packed according to the entry's
//! [`ArgFormat`]. Write formats take `port [tool]` first on the console but
//! put them after the value on the wire.
//!
//! [`decode_arguments`] inverts every layout back into console order.

use std::net::Ipv4Addr;

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::catalog;
use crate::constants::{MAX_PAYLOAD, MAX_TOKENS, UTI_PER_DEGREE};
use crate::decoder::hex_spaced;
use crate::error::{EncodeError, EncodeResult};
use crate::family::Family;
use crate::format::ArgFormat;
use crate::translate;

/// A resolved and packed command, ready to be framed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedCommand {
    pub family: Family,
    pub name: &'static str,
    pub code: u8,
    pub payload: Bytes,
}

impl std::fmt::Display for EncodedCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[TX] {}::{} (0x{:02X}) payload=",
            self.family.backend_name(),
            self.name,
            self.code
        )?;
        if self.payload.is_empty() {
            f.write_str("(none)")
        } else {
            f.write_str(&hex_spaced(&self.payload))
        }
    }
}

/// Encode one console line for `family`.
///
/// Nothing is produced on error.
pub fn encode(line: &str, family: Family) -> EncodeResult<EncodedCommand> {
    let line = line.trim();
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&name) = tokens.first() else {
        return Err(EncodeError::Empty);
    };

    let descriptor =
        catalog::lookup(name, family).ok_or_else(|| EncodeError::UnknownCommand {
            name: name.to_ascii_uppercase(),
            family,
        })?;
    let format = descriptor
        .format
        .ok_or(EncodeError::NotEncodable {
            name: descriptor.name,
        })?;

    let mut buf = BytesMut::with_capacity(MAX_PAYLOAD);
    if format == ArgFormat::Text {
        let text = line
            .split_once(char::is_whitespace)
            .map_or("", |(_, rest)| rest.trim_start());
        if text.is_empty() {
            return Err(EncodeError::EmptyText {
                name: descriptor.name,
            });
        }
        buf.put_slice(text.as_bytes());
    } else {
        if tokens.len() > MAX_TOKENS {
            return Err(EncodeError::TooManyTokens {
                max: MAX_TOKENS,
                actual: tokens.len(),
            });
        }
        let args = &tokens[1..];
        if args.len() < format.min_args() {
            return Err(EncodeError::MissingArguments {
                name: descriptor.name,
                usage: format.usage(),
            });
        }
        let mut args = Args {
            name: descriptor.name,
            format,
            family,
            tokens: args,
            pos: 0,
        };
        pack(format, &mut args, &mut buf)?;
    }

    if buf.len() > MAX_PAYLOAD {
        return Err(EncodeError::PayloadTooLong {
            max: MAX_PAYLOAD,
            actual: buf.len(),
        });
    }

    log::debug!(
        "encoded {}::{} as {} ({} bytes)",
        family,
        descriptor.name,
        format,
        buf.len()
    );

    Ok(EncodedCommand {
        family,
        name: descriptor.name,
        code: descriptor.code,
        payload: buf.freeze(),
    })
}

/// Console-order argument tokens of one command.
struct Args<'a> {
    name: &'static str,
    format: ArgFormat,
    family: Family,
    tokens: &'a [&'a str],
    pos: usize,
}

impl<'a> Args<'a> {
    fn next(&mut self) -> EncodeResult<&'a str> {
        self.optional().ok_or(EncodeError::MissingArguments {
            name: self.name,
            usage: self.format.usage(),
        })
    }

    fn optional(&mut self) -> Option<&'a str> {
        let token = self.tokens.get(self.pos).copied()?;
        self.pos += 1;
        Some(token)
    }

    fn remaining(&mut self) -> &'a [&'a str] {
        let tokens = self.tokens;
        self.pos = self.pos.min(tokens.len());
        let rest = &tokens[self.pos..];
        self.pos = tokens.len();
        rest
    }

    fn number(&mut self, what: &'static str) -> EncodeResult<i64> {
        parse_number(what, self.next()?)
    }

    fn u8(&mut self, what: &'static str) -> EncodeResult<u8> {
        let value = self.number(what)?;
        u8::try_from(value).map_err(|_| EncodeError::OutOfRange { what, value })
    }

    fn u16(&mut self, what: &'static str) -> EncodeResult<u16> {
        let value = self.number(what)?;
        u16::try_from(value).map_err(|_| EncodeError::OutOfRange { what, value })
    }

    /// Whole °C to native units.
    fn temp(&mut self, what: &'static str) -> EncodeResult<u16> {
        let value = self.number(what)?;
        value
            .checked_mul(i64::from(UTI_PER_DEGREE))
            .and_then(|uti| u16::try_from(uti).ok())
            .ok_or(EncodeError::OutOfRange { what, value })
    }

    /// Signed °C difference to native units.
    fn delta(&mut self, what: &'static str) -> EncodeResult<i16> {
        let value = self.number(what)?;
        value
            .checked_mul(i64::from(UTI_PER_DEGREE))
            .and_then(|uti| i16::try_from(uti).ok())
            .ok_or(EncodeError::OutOfRange { what, value })
    }

    fn bounded(&mut self, what: &'static str, range: std::ops::RangeInclusive<u8>) -> EncodeResult<u8> {
        let value = self.u8(what)?;
        if range.contains(&value) {
            Ok(value)
        } else {
            Err(EncodeError::OutOfRange {
                what,
                value: i64::from(value),
            })
        }
    }

    fn port(&mut self) -> EncodeResult<u8> {
        let port = self.u8("port")?;
        if self.family.port_allowed(port) {
            Ok(port)
        } else {
            Err(EncodeError::PortNotAllowed {
                port,
                family: self.family,
            })
        }
    }

    fn tool(&mut self) -> EncodeResult<u8> {
        let token = self.next()?;
        match translate::tool_code(self.family, token) {
            Some(code) => Ok(code),
            None => {
                let value = parse_number("tool", token)?;
                u8::try_from(value).map_err(|_| EncodeError::OutOfRange { what: "tool", value })
            }
        }
    }

    fn ipv4(&mut self, what: &'static str) -> EncodeResult<Ipv4Addr> {
        let token = self.optional().ok_or_else(|| EncodeError::InvalidIpv4 {
            what,
            token: String::new(),
        })?;
        parse_ipv4(what, token)
    }
}

/// Decimal, negative decimal, or `0x` hex.
fn parse_number(what: &'static str, token: &str) -> EncodeResult<i64> {
    let parsed = match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => token.parse::<i64>(),
    };
    parsed.map_err(|_| EncodeError::InvalidNumber {
        what,
        token: token.to_string(),
    })
}

fn parse_ipv4(what: &'static str, token: &str) -> EncodeResult<Ipv4Addr> {
    token.parse().map_err(|_| EncodeError::InvalidIpv4 {
        what,
        token: token.to_string(),
    })
}

fn pack(format: ArgFormat, args: &mut Args<'_>, buf: &mut BytesMut) -> EncodeResult<()> {
    match format {
        ArgFormat::None => {}
        ArgFormat::Port => buf.put_u8(args.port()?),
        ArgFormat::PortTool => {
            let port = args.port()?;
            let tool = args.tool()?;
            buf.put_u8(port);
            buf.put_u8(tool);
        }
        ArgFormat::U8 => buf.put_u8(args.u8("value")?),
        ArgFormat::U16 => buf.put_u16_le(args.u16("value")?),
        ArgFormat::Temp => buf.put_u16_le(args.temp("temperature")?),
        ArgFormat::U16U16 => {
            buf.put_u16_le(args.u16("first value")?);
            buf.put_u16_le(args.u16("second value")?);
        }
        ArgFormat::TempTemp => {
            buf.put_u16_le(args.temp("first temperature")?);
            buf.put_u16_le(args.temp("second temperature")?);
        }
        // Packed by the caller from the untokenised line.
        ArgFormat::Text => {}
        ArgFormat::RawBytes => {
            for token in args.remaining() {
                let value = parse_number("byte", token)?;
                let byte = u8::try_from(value)
                    .map_err(|_| EncodeError::OutOfRange { what: "byte", value })?;
                buf.put_u8(byte);
            }
        }
        ArgFormat::IpConfig => {
            let dhcp = args.u8("dhcp")?;
            if dhcp > 1 {
                return Err(EncodeError::OutOfRange {
                    what: "dhcp",
                    value: i64::from(dhcp),
                });
            }
            let ip = args.ipv4("address")?;
            let mask = args.ipv4("mask")?;
            let gateway = args.ipv4("gateway")?;
            let dns = match args.optional() {
                Some(token) => parse_ipv4("dns", token)?,
                None => Ipv4Addr::UNSPECIFIED,
            };
            let port = match args.optional() {
                Some(token) => {
                    let value = parse_number("tcp port", token)?;
                    u16::try_from(value).map_err(|_| EncodeError::OutOfRange {
                        what: "tcp port",
                        value,
                    })?
                }
                None => 0,
            };
            buf.put_u8(dhcp);
            for address in [ip, mask, gateway, dns] {
                buf.put_slice(&address.octets());
            }
            buf.put_u16_le(port);
        }
        ArgFormat::WritePortU8 => {
            let port = args.port()?;
            buf.put_u8(args.u8("value")?);
            buf.put_u8(port);
        }
        ArgFormat::WritePortU16 => {
            let port = args.port()?;
            buf.put_u16_le(args.u16("value")?);
            buf.put_u8(port);
        }
        ArgFormat::WritePortTemp => {
            let port = args.port()?;
            buf.put_u16_le(args.temp("temperature")?);
            buf.put_u8(port);
        }
        ArgFormat::WritePort3Temp => {
            let port = args.port()?;
            for what in ["level 1", "level 2", "level 3"] {
                buf.put_u16_le(args.temp(what)?);
            }
            buf.put_u8(port);
        }
        ArgFormat::WritePortToolU8 => {
            let (port, tool) = (args.port()?, args.tool()?);
            buf.put_u8(args.u8("value")?);
            buf.put_u8(port);
            buf.put_u8(tool);
        }
        ArgFormat::WritePortToolU16 => {
            let (port, tool) = (args.port()?, args.tool()?);
            buf.put_u16_le(args.u16("value")?);
            buf.put_u8(port);
            buf.put_u8(tool);
        }
        ArgFormat::WritePortToolTemp => {
            let (port, tool) = (args.port()?, args.tool()?);
            buf.put_u16_le(args.temp("temperature")?);
            buf.put_u8(port);
            buf.put_u8(tool);
        }
        ArgFormat::WritePortTool3Temp => {
            let (port, tool) = (args.port()?, args.tool()?);
            for what in ["level 1", "level 2", "level 3"] {
                buf.put_u16_le(args.temp(what)?);
            }
            buf.put_u8(port);
            buf.put_u8(tool);
        }
        ArgFormat::WritePortToolU8U8 => {
            let (port, tool) = (args.port()?, args.tool()?);
            buf.put_u8(args.u8("value")?);
            buf.put_u8(args.u8("onoff")?);
            buf.put_u8(port);
            buf.put_u8(tool);
        }
        ArgFormat::WriteLevelsTemps => {
            let (port, tool) = (args.port()?, args.tool()?);
            buf.put_u8(args.u8("onoff")?);
            buf.put_u8(args.u8("selected level")?);
            for (on, temp) in [("l1_on", "l1"), ("l2_on", "l2"), ("l3_on", "l3")] {
                buf.put_u8(args.u8(on)?);
                buf.put_u16_le(args.temp(temp)?);
            }
            buf.put_u8(port);
            buf.put_u8(tool);
        }
        ArgFormat::WritePortToolTempDelta => {
            let (port, tool) = (args.port()?, args.tool()?);
            buf.put_i16_le(args.delta("delta")?);
            buf.put_u8(port);
            buf.put_u8(tool);
        }
        ArgFormat::WriteDateTime => {
            buf.put_u16_le(args.u16("year")?);
            buf.put_u8(args.bounded("month", 1..=12)?);
            buf.put_u8(args.bounded("day", 1..=31)?);
            buf.put_u8(args.bounded("hour", 0..=23)?);
            buf.put_u8(args.bounded("minute", 0..=59)?);
            buf.put_u8(args.bounded("second", 0..=59)?);
        }
    }
    Ok(())
}

/// One argument recovered from a payload, in console order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    Port(u8),
    Tool(u8),
    Uint(u32),
    /// Native units; displayed in °C.
    Temperature(i32),
    Text(String),
    Byte(u8),
    Ipv4(Ipv4Addr),
}

impl std::fmt::Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Argument::Port(v) | Argument::Tool(v) => write!(f, "{}", v),
            Argument::Uint(v) => write!(f, "{}", v),
            Argument::Temperature(uti) if uti % UTI_PER_DEGREE == 0 => {
                write!(f, "{}", uti / UTI_PER_DEGREE)
            }
            Argument::Temperature(uti) => {
                write!(f, "{:.1}", f64::from(*uti) / f64::from(UTI_PER_DEGREE))
            }
            Argument::Text(text) => f.write_str(text),
            Argument::Byte(b) => write!(f, "0x{:02X}", b),
            Argument::Ipv4(address) => write!(f, "{}", address),
        }
    }
}

/// Exact payload length of fixed-size layouts.
fn fixed_len(format: ArgFormat) -> Option<usize> {
    let len = match format {
        ArgFormat::None => 0,
        ArgFormat::Port | ArgFormat::U8 => 1,
        ArgFormat::PortTool | ArgFormat::U16 | ArgFormat::Temp | ArgFormat::WritePortU8 => 2,
        ArgFormat::WritePortU16 | ArgFormat::WritePortTemp | ArgFormat::WritePortToolU8 => 3,
        ArgFormat::U16U16
        | ArgFormat::TempTemp
        | ArgFormat::WritePortToolU16
        | ArgFormat::WritePortToolTemp
        | ArgFormat::WritePortToolU8U8
        | ArgFormat::WritePortToolTempDelta => 4,
        ArgFormat::WritePort3Temp | ArgFormat::WriteDateTime => 7,
        ArgFormat::WritePortTool3Temp => 8,
        ArgFormat::WriteLevelsTemps => 13,
        ArgFormat::IpConfig => 19,
        ArgFormat::Text | ArgFormat::RawBytes => return None,
    };
    Some(len)
}

/// Recover console-order arguments from a payload packed with `format`.
pub fn decode_arguments(format: ArgFormat, payload: &[u8]) -> EncodeResult<Vec<Argument>> {
    let mismatch = || EncodeError::LayoutMismatch {
        format: format.as_str(),
        len: payload.len(),
    };
    match fixed_len(format) {
        Some(len) if len != payload.len() => return Err(mismatch()),
        None if payload.is_empty() => return Err(mismatch()),
        _ => {}
    }

    let mut buf = payload;
    let temp = |buf: &mut &[u8]| Argument::Temperature(i32::from(buf.get_u16_le()));
    let u8_arg = |buf: &mut &[u8]| Argument::Uint(u32::from(buf.get_u8()));
    let u16_arg = |buf: &mut &[u8]| Argument::Uint(u32::from(buf.get_u16_le()));
    // Port and tool trail the value on the wire.
    let trailer = |payload: &[u8], n: usize| -> Vec<Argument> {
        let tail = &payload[payload.len() - n..];
        let mut out = vec![Argument::Port(tail[0])];
        if n == 2 {
            out.push(Argument::Tool(tail[1]));
        }
        out
    };

    let args = match format {
        ArgFormat::None => Vec::new(),
        ArgFormat::Port => vec![Argument::Port(payload[0])],
        ArgFormat::PortTool => vec![Argument::Port(payload[0]), Argument::Tool(payload[1])],
        ArgFormat::U8 => vec![u8_arg(&mut buf)],
        ArgFormat::U16 => vec![u16_arg(&mut buf)],
        ArgFormat::Temp => vec![temp(&mut buf)],
        ArgFormat::U16U16 => vec![u16_arg(&mut buf), u16_arg(&mut buf)],
        ArgFormat::TempTemp => vec![temp(&mut buf), temp(&mut buf)],
        ArgFormat::Text => vec![Argument::Text(String::from_utf8_lossy(payload).into_owned())],
        ArgFormat::RawBytes => payload.iter().map(|b| Argument::Byte(*b)).collect(),
        ArgFormat::IpConfig => {
            let mut args = vec![u8_arg(&mut buf)];
            for _ in 0..4 {
                let mut octets = [0u8; 4];
                buf.copy_to_slice(&mut octets);
                args.push(Argument::Ipv4(Ipv4Addr::from(octets)));
            }
            args.push(u16_arg(&mut buf));
            args
        }
        ArgFormat::WritePortU8 => {
            let mut args = trailer(payload, 1);
            args.push(u8_arg(&mut buf));
            args
        }
        ArgFormat::WritePortU16 => {
            let mut args = trailer(payload, 1);
            args.push(u16_arg(&mut buf));
            args
        }
        ArgFormat::WritePortTemp => {
            let mut args = trailer(payload, 1);
            args.push(temp(&mut buf));
            args
        }
        ArgFormat::WritePort3Temp => {
            let mut args = trailer(payload, 1);
            for _ in 0..3 {
                args.push(temp(&mut buf));
            }
            args
        }
        ArgFormat::WritePortToolU8 => {
            let mut args = trailer(payload, 2);
            args.push(u8_arg(&mut buf));
            args
        }
        ArgFormat::WritePortToolU16 => {
            let mut args = trailer(payload, 2);
            args.push(u16_arg(&mut buf));
            args
        }
        ArgFormat::WritePortToolTemp => {
            let mut args = trailer(payload, 2);
            args.push(temp(&mut buf));
            args
        }
        ArgFormat::WritePortTool3Temp => {
            let mut args = trailer(payload, 2);
            for _ in 0..3 {
                args.push(temp(&mut buf));
            }
            args
        }
        ArgFormat::WritePortToolU8U8 => {
            let mut args = trailer(payload, 2);
            args.push(u8_arg(&mut buf));
            args.push(u8_arg(&mut buf));
            args
        }
        ArgFormat::WriteLevelsTemps => {
            let mut args = trailer(payload, 2);
            args.push(u8_arg(&mut buf));
            args.push(u8_arg(&mut buf));
            for _ in 0..3 {
                args.push(u8_arg(&mut buf));
                args.push(temp(&mut buf));
            }
            args
        }
        ArgFormat::WritePortToolTempDelta => {
            let mut args = trailer(payload, 2);
            args.push(Argument::Temperature(i32::from(buf.get_i16_le())));
            args
        }
        ArgFormat::WriteDateTime => {
            let mut args = vec![u16_arg(&mut buf)];
            for _ in 0..5 {
                args.push(u8_arg(&mut buf));
            }
            args
        }
    };
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(line: &str, family: Family) -> Vec<u8> {
        encode(line, family).unwrap().payload.to_vec()
    }

    #[test]
    fn test_select_temp() {
        let cmd = encode("M_W_SELECTTEMP 0 350", Family::SolderV2).unwrap();
        assert_eq!(cmd.code, 0x51);
        assert_eq!(cmd.name, "M_W_SELECTTEMP");
        assert_eq!(cmd.payload.as_ref(), &[0x4E, 0x0C, 0x00]);
        assert_eq!(
            cmd.to_string(),
            "[TX] SOLD_02::M_W_SELECTTEMP (0x51) payload=4E 0C 00"
        );
    }

    #[test]
    fn test_name_is_case_insensitive() {
        assert_eq!(
            payload("m_w_selecttemp 1 300", Family::SolderV2),
            vec![0x8C, 0x0A, 0x01]
        );
    }

    #[test]
    fn test_port_not_allowed() {
        assert_eq!(
            encode("M_W_SELECTTEMP 5 350", Family::SolderV2),
            Err(EncodeError::PortNotAllowed {
                port: 5,
                family: Family::SolderV2
            })
        );
        assert!(encode("M_W_SELECTTEMP 1 350", Family::SolderV1).is_err());
    }

    #[test]
    fn test_value_before_port() {
        assert_eq!(payload("M_W_LOCK_PORT 2 7", Family::SolderV2), vec![0x07, 0x02]);
    }

    #[test]
    fn test_unknown_and_not_encodable() {
        assert_eq!(
            encode("m_w_nothing 1", Family::SolderV2),
            Err(EncodeError::UnknownCommand {
                name: "M_W_NOTHING".to_string(),
                family: Family::SolderV2
            })
        );
        assert_eq!(
            encode("M_RESET", Family::SolderV2),
            Err(EncodeError::NotEncodable { name: "M_RESET" })
        );
        assert_eq!(encode("   ", Family::SolderV2), Err(EncodeError::Empty));
    }

    #[test]
    fn test_too_many_tokens() {
        let line = format!("M_W_DEVICEID {}", ["1"; 12].join(" "));
        assert_eq!(
            encode(&line, Family::SolderV2),
            Err(EncodeError::TooManyTokens { max: 12, actual: 13 })
        );
    }

    #[test]
    fn test_text_keeps_spacing() {
        let text = "a b c d e f g h i j k l m n";
        let cmd = encode(&format!("M_W_DEVICENAME {}", text), Family::SolderV2).unwrap();
        assert_eq!(cmd.payload.as_ref(), text.as_bytes());
        assert_eq!(
            encode("M_W_DEVICENAME", Family::SolderV2),
            Err(EncodeError::EmptyText {
                name: "M_W_DEVICENAME"
            })
        );
    }

    #[test]
    fn test_text_too_long() {
        let line = format!("M_W_DEVICENAME {}", "x".repeat(49));
        assert_eq!(
            encode(&line, Family::SolderV2),
            Err(EncodeError::PayloadTooLong {
                max: 48,
                actual: 49
            })
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(payload("M_W_POWERLIM 0x1F4", Family::SolderV2), vec![0xF4, 0x01]);
        assert!(matches!(
            encode("M_W_POWERLIM 70000", Family::SolderV2),
            Err(EncodeError::OutOfRange { value: 70000, .. })
        ));
        assert!(matches!(
            encode("M_W_BEEP on", Family::SolderV2),
            Err(EncodeError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_temperature_overflow() {
        assert!(matches!(
            encode("M_W_MAXTEMP 7282", Family::SolderV2),
            Err(EncodeError::OutOfRange { what: "temperature", value: 7282 })
        ));
        assert_eq!(payload("M_W_MAXTEMP 7281", Family::SolderV2), vec![0xF9, 0xFF]);
    }

    #[test]
    fn test_tool_mnemonics() {
        assert_eq!(
            payload("M_W_SLEEPTEMP 0 t245 150", Family::SolderV2),
            vec![0x46, 0x05, 0x00, 0x02]
        );
        assert_eq!(
            payload("M_W_SLEEPTEMP 0 NOTOOL 150", Family::SolderV2),
            vec![0x46, 0x05, 0x00, 0x00]
        );
        assert_eq!(
            payload("M_W_STARTMODE 0 TE 3", Family::HotAir),
            vec![0x03, 0x00, 0x02]
        );
    }

    #[test]
    fn test_negative_delta() {
        assert_eq!(
            payload("M_W_AJUSTTEMP 1 2 -10", Family::SolderV2),
            vec![0xA6, 0xFF, 0x01, 0x02]
        );
    }

    #[test]
    fn test_levels_temps_layout() {
        assert_eq!(
            payload("M_W_LEVELSTEMPS 1 T245 1 2 1 200 1 300 0 350", Family::SolderV2),
            vec![0x01, 0x02, 0x01, 0x08, 0x07, 0x01, 0x8C, 0x0A, 0x00, 0x4E, 0x0C, 0x01, 0x02]
        );
    }

    #[test]
    fn test_ip_config_defaults() {
        let bytes = payload(
            "M_W_ETH_TCPIPCONFIG 0 192.168.1.10 255.255.255.0 192.168.1.1",
            Family::SolderV2,
        );
        assert_eq!(bytes.len(), 19);
        assert_eq!(&bytes[..5], &[0, 192, 168, 1, 10]);
        assert_eq!(&bytes[13..], &[0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_ip_config_errors() {
        assert!(matches!(
            encode("M_W_ETH_TCPIPCONFIG 2 10.0.0.1 255.0.0.0 10.0.0.254", Family::SolderV2),
            Err(EncodeError::OutOfRange { what: "dhcp", .. })
        ));
        assert!(matches!(
            encode("M_W_ETH_TCPIPCONFIG 1 10.0.0.1", Family::SolderV2),
            Err(EncodeError::InvalidIpv4 { what: "mask", .. })
        ));
        assert!(matches!(
            encode("M_W_ETH_TCPIPCONFIG 1 10.0.0.1 255.0.0.0", Family::SolderV2),
            Err(EncodeError::InvalidIpv4 { what: "gateway", .. })
        ));
        assert!(matches!(
            encode("M_W_ETH_TCPIPCONFIG 1 10.0.0.256 255.0.0.0 10.0.0.1", Family::SolderV2),
            Err(EncodeError::InvalidIpv4 { what: "address", .. })
        ));
    }

    #[test]
    fn test_date_time() {
        assert_eq!(
            payload("M_W_DATETIME 2025 8 27 14 30 0", Family::HotAir),
            vec![0xE9, 0x07, 8, 27, 14, 30, 0]
        );
        assert!(matches!(
            encode("M_W_DATETIME 2025 13 27 14 30 0", Family::HotAir),
            Err(EncodeError::OutOfRange { what: "month", .. })
        ));
    }

    #[test]
    fn test_missing_arguments() {
        assert_eq!(
            encode("M_W_SELECTTEMP 0", Family::SolderV2),
            Err(EncodeError::MissingArguments {
                name: "M_W_SELECTTEMP",
                usage: "<port> <celsius>"
            })
        );
    }

    #[test]
    fn test_decode_arguments_console_order() {
        let args = decode_arguments(ArgFormat::WritePortToolTemp, &[0x46, 0x05, 0x01, 0x02]).unwrap();
        assert_eq!(
            args,
            vec![Argument::Port(1), Argument::Tool(2), Argument::Temperature(1350)]
        );
        let tokens: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        assert_eq!(tokens, ["1", "2", "150"]);
    }

    #[test]
    fn test_decode_arguments_length_checked() {
        assert_eq!(
            decode_arguments(ArgFormat::WritePortTemp, &[0x4E, 0x0C]),
            Err(EncodeError::LayoutMismatch {
                format: "W_PORT_TEMP",
                len: 2
            })
        );
        assert!(decode_arguments(ArgFormat::RawBytes, &[]).is_err());
    }

    #[test]
    fn test_fractional_temperature_display() {
        assert_eq!(Argument::Temperature(3154).to_string(), "350.4");
        assert_eq!(Argument::Temperature(-90).to_string(), "-10");
    }
}
