//! Argument format tags.
//!
//! A format tag selects how a console line is turned into wire bytes. Write
//! formats address a port (and often a tool) but put those selectors *after*
//! the value on the wire, so the encoder reorders while it packs.

use serde::{Deserialize, Serialize};

/// Byte-layout selector for a command's arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgFormat {
    /// No arguments.
    None,
    /// `port` → `[port]`
    Port,
    /// `port tool` → `[port, tool]`
    PortTool,
    /// `v` → `[v]`
    U8,
    /// `v` → `[v16]`
    U16,
    /// `°C` → `[uti16]`
    Temp,
    /// `a b` → `[a16, b16]`
    U16U16,
    /// `°C °C` → `[uti16, uti16]`
    TempTemp,
    /// Everything after the command name, as bytes.
    Text,
    /// Each token is one byte.
    RawBytes,
    /// `dhcp ip mask gw [dns] [port]`
    IpConfig,
    /// `port v` → `[v, port]`
    WritePortU8,
    /// `port v` → `[v16, port]`
    WritePortU16,
    /// `port °C` → `[uti16, port]`
    WritePortTemp,
    /// `port t1 t2 t3` → `[uti16 ×3, port]`
    WritePort3Temp,
    /// `port tool v` → `[v, port, tool]`
    WritePortToolU8,
    /// `port tool v` → `[v16, port, tool]`
    WritePortToolU16,
    /// `port tool °C` → `[uti16, port, tool]`
    WritePortToolTemp,
    /// `port tool t1 t2 t3` → `[uti16 ×3, port, tool]`
    WritePortTool3Temp,
    /// `port tool value onoff` → `[value, onoff, port, tool]`
    WritePortToolU8U8,
    /// `port tool onoff sel l1_on l1 l2_on l2 l3_on l3`
    WriteLevelsTemps,
    /// `port tool Δ°C` → `[i16(Δ·9), port, tool]`
    WritePortToolTempDelta,
    /// `yyyy mm dd HH MM SS` → `[year16, mm, dd, HH, MM, SS]`
    WriteDateTime,
}

impl ArgFormat {
    /// Every format, for table-driven tests and listings.
    pub const ALL: [ArgFormat; 23] = [
        ArgFormat::None,
        ArgFormat::Port,
        ArgFormat::PortTool,
        ArgFormat::U8,
        ArgFormat::U16,
        ArgFormat::Temp,
        ArgFormat::U16U16,
        ArgFormat::TempTemp,
        ArgFormat::Text,
        ArgFormat::RawBytes,
        ArgFormat::IpConfig,
        ArgFormat::WritePortU8,
        ArgFormat::WritePortU16,
        ArgFormat::WritePortTemp,
        ArgFormat::WritePort3Temp,
        ArgFormat::WritePortToolU8,
        ArgFormat::WritePortToolU16,
        ArgFormat::WritePortToolTemp,
        ArgFormat::WritePortTool3Temp,
        ArgFormat::WritePortToolU8U8,
        ArgFormat::WriteLevelsTemps,
        ArgFormat::WritePortToolTempDelta,
        ArgFormat::WriteDateTime,
    ];

    /// Short name used in listings and errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgFormat::None => "NONE",
            ArgFormat::Port => "PORT",
            ArgFormat::PortTool => "PORT_TOOL",
            ArgFormat::U8 => "U8",
            ArgFormat::U16 => "U16",
            ArgFormat::Temp => "TEMP",
            ArgFormat::U16U16 => "U16_U16",
            ArgFormat::TempTemp => "TEMP_TEMP",
            ArgFormat::Text => "STRING",
            ArgFormat::RawBytes => "RAWHEX",
            ArgFormat::IpConfig => "IPCFG",
            ArgFormat::WritePortU8 => "W_PORT_U8",
            ArgFormat::WritePortU16 => "W_PORT_U16",
            ArgFormat::WritePortTemp => "W_PORT_TEMP",
            ArgFormat::WritePort3Temp => "W_PORT_3TEMP",
            ArgFormat::WritePortToolU8 => "W_PORT_TOOL_U8",
            ArgFormat::WritePortToolU16 => "W_PORT_TOOL_U16",
            ArgFormat::WritePortToolTemp => "W_PORT_TOOL_TEMP",
            ArgFormat::WritePortTool3Temp => "W_PORT_TOOL_3TEMP",
            ArgFormat::WritePortToolU8U8 => "W_PORT_TOOL_U8_U8",
            ArgFormat::WriteLevelsTemps => "W_LEVELSTEMPS",
            ArgFormat::WritePortToolTempDelta => "W_TEMPDELTA",
            ArgFormat::WriteDateTime => "W_DT6",
        }
    }

    /// Argument list as typed on the console.
    pub fn usage(&self) -> &'static str {
        match self {
            ArgFormat::None => "",
            ArgFormat::Port => "<port>",
            ArgFormat::PortTool => "<port> <tool>",
            ArgFormat::U8 | ArgFormat::U16 => "<value>",
            ArgFormat::Temp => "<celsius>",
            ArgFormat::U16U16 => "<a> <b>",
            ArgFormat::TempTemp => "<celsius> <celsius>",
            ArgFormat::Text => "<text...>",
            ArgFormat::RawBytes => "<byte> [byte...]",
            ArgFormat::IpConfig => "<dhcp> <ip> <mask> <gateway> [dns] [port]",
            ArgFormat::WritePortU8 | ArgFormat::WritePortU16 => "<port> <value>",
            ArgFormat::WritePortTemp => "<port> <celsius>",
            ArgFormat::WritePort3Temp => "<port> <t1> <t2> <t3>",
            ArgFormat::WritePortToolU8 | ArgFormat::WritePortToolU16 => "<port> <tool> <value>",
            ArgFormat::WritePortToolTemp => "<port> <tool> <celsius>",
            ArgFormat::WritePortTool3Temp => "<port> <tool> <t1> <t2> <t3>",
            ArgFormat::WritePortToolU8U8 => "<port> <tool> <value> <onoff>",
            ArgFormat::WriteLevelsTemps => {
                "<port> <tool> <onoff> <sel> <l1_on> <l1> <l2_on> <l2> <l3_on> <l3>"
            }
            ArgFormat::WritePortToolTempDelta => "<port> <tool> <delta_celsius>",
            ArgFormat::WriteDateTime => "<yyyy> <mm> <dd> <HH> <MM> <SS>",
        }
    }

    /// Minimum argument tokens (command name excluded).
    pub fn min_args(&self) -> usize {
        match self {
            ArgFormat::None => 0,
            ArgFormat::Port
            | ArgFormat::U8
            | ArgFormat::U16
            | ArgFormat::Temp
            | ArgFormat::Text
            | ArgFormat::RawBytes => 1,
            ArgFormat::PortTool
            | ArgFormat::U16U16
            | ArgFormat::TempTemp
            | ArgFormat::WritePortU8
            | ArgFormat::WritePortU16
            | ArgFormat::WritePortTemp
            | ArgFormat::IpConfig => 2,
            ArgFormat::WritePortToolU8
            | ArgFormat::WritePortToolU16
            | ArgFormat::WritePortToolTemp
            | ArgFormat::WritePortToolTempDelta => 3,
            ArgFormat::WritePort3Temp | ArgFormat::WritePortToolU8U8 => 4,
            ArgFormat::WritePortTool3Temp => 5,
            ArgFormat::WriteDateTime => 6,
            ArgFormat::WriteLevelsTemps => 10,
        }
    }

    /// Whether the layout carries a port selector.
    pub fn has_port(&self) -> bool {
        !matches!(
            self,
            ArgFormat::None
                | ArgFormat::U8
                | ArgFormat::U16
                | ArgFormat::Temp
                | ArgFormat::U16U16
                | ArgFormat::TempTemp
                | ArgFormat::Text
                | ArgFormat::RawBytes
                | ArgFormat::IpConfig
                | ArgFormat::WriteDateTime
        )
    }
}

impl std::fmt::Display for ArgFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
