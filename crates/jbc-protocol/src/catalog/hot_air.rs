//! Hot air stations (`HA_02`).

use super::{cmd, known, CommandDescriptor};
use crate::format::ArgFormat::*;

pub(super) static COMMANDS: &[CommandDescriptor] = &[
    // Control
    known(0x00, "M_HS"),
    known(0x04, "M_EOT"),
    known(0x06, "M_ACK"),
    known(0x15, "M_NACK"),
    known(0x16, "M_SYN"),
    // Identity and firmware update
    cmd(0x1C, "M_R_DEVICEIDORIGINAL", None),
    cmd(0x1D, "M_R_DISCOVER", None),
    cmd(0x1E, "M_R_DEVICEID", None),
    // Stations have no factory id; the vendor software assigns one.
    cmd(0x1F, "M_W_DEVICEID", Text).untested(),
    known(0x20, "M_RESET"),
    cmd(0x21, "M_FIRMWARE", None),
    known(0x22, "M_CLEARMEMFLASH"),
    known(0x23, "M_SENDMEMADDRESS"),
    known(0x24, "M_SENDMEMDATA"),
    known(0x25, "M_ENDPROGR"),
    known(0x26, "M_ENDUPD"),
    known(0x27, "M_CONTINUEUPD"),
    known(0x28, "M_CLEARING"),
    known(0x29, "M_FORCEUPDATE"),
    // Port and tool parameters
    cmd(0x30, "M_INF_PORT", Port),
    known(0x31, "M_RESET_PORTTOOL"),
    cmd(0x32, "M_R_PROFILEMODE", Port),
    cmd(0x33, "M_W_PROFILEMODE", WritePortU8),
    cmd(0x34, "M_R_HEATERSTATUS", Port),
    cmd(0x35, "M_W_HEATERSTATUS", WritePortU8),
    cmd(0x36, "M_R_SUCTIONSTATUS", Port),
    cmd(0x37, "M_W_SUCTIONSTATUS", WritePortU8),
    cmd(0x38, "M_R_EXTTCMODE", PortTool),
    cmd(0x39, "M_W_EXTTCMODE", WritePortToolU8),
    cmd(0x3A, "M_R_LEVELSTEMPS", PortTool),
    cmd(0x3B, "M_W_LEVELSTEMPS", WritePort3Temp),
    cmd(0x3C, "M_R_AJUSTTEMP", PortTool),
    cmd(0x3D, "M_W_AJUSTTEMP", WritePortToolTempDelta),
    cmd(0x3E, "M_R_TIMETOSTOP", PortTool),
    cmd(0x3F, "M_W_TIMETOSTOP", WritePortToolU16),
    cmd(0x40, "M_R_STARTMODE", PortTool),
    cmd(0x41, "M_W_STARTMODE", WritePortToolU8),
    // Live port state
    cmd(0x50, "M_R_SELECTTEMP", Port),
    cmd(0x51, "M_W_SELECTTEMP", WritePortTemp),
    cmd(0x52, "M_R_AIRTEMP", Port),
    cmd(0x53, "M_R_POWER", Port),
    cmd(0x54, "M_R_CONNECTTOOL", Port),
    cmd(0x55, "M_R_TOOLERROR", Port),
    cmd(0x56, "M_R_STATUSTOOL", Port),
    cmd(0x57, "M_R_SELECTFLOW", Port),
    cmd(0x58, "M_W_SELECTFLOW", WritePortU16),
    cmd(0x59, "M_R_SELECTEXTTEMP", Port),
    cmd(0x5A, "M_W_SELECTEXTTEMP", WritePortTemp),
    cmd(0x5B, "M_R_AIRFLOW", Port),
    cmd(0x5C, "M_R_EXTTCTEMP", Port),
    // Modes
    cmd(0x60, "M_R_REMOTEMODE", None),
    cmd(0x61, "M_W_REMOTEMODE", U8),
    cmd(0x62, "M_R_CONTIMODE", None),
    cmd(0x63, "M_W_CONTIMODE", WritePortToolU8),
    cmd(0x64, "M_I_CONTIMODE", None),
    // Files
    known(0x70, "M_READSTARTFILE"),
    known(0x71, "M_READFILEBLOCK"),
    known(0x72, "M_READENDOFFILE"),
    known(0x73, "M_WRITESTARTFILE"),
    known(0x74, "M_WRITEFILEBLOCK"),
    known(0x75, "M_WRITEENDOFFILE"),
    known(0x76, "M_R_FILESCOUNT"),
    known(0x77, "M_R_GETFILENAME"),
    known(0x78, "M_DELETEFILE"),
    known(0x79, "M_R_SELECTEDFILENAME"),
    known(0x7A, "M_W_SELECTEDFILENAME"),
    // Station settings
    cmd(0x80, "M_R_TEMPUNIT", None),
    cmd(0x81, "M_W_TEMPUNIT", Text),
    cmd(0x82, "M_R_MAXMINTEMP", None),
    cmd(0x83, "M_W_MAXMINTEMP", TempTemp),
    cmd(0x84, "M_R_MAXMINFLOW", None),
    cmd(0x85, "M_W_MAXMINFLOW", U16U16),
    known(0x86, "M_R_MAXMINEXTTEMP"),
    cmd(0x87, "M_W_MAXMINEXTTEMP", TempTemp),
    cmd(0x88, "M_R_PINENABLED", None),
    cmd(0x89, "M_W_PINENABLED", U8),
    cmd(0x8A, "M_R_STATIONLOCKED", None),
    cmd(0x8B, "M_W_STATIONLOCKED", U8),
    cmd(0x8C, "M_R_PIN", None),
    cmd(0x8D, "M_W_PIN", Text),
    cmd(0x8E, "M_R_STATERROR", None),
    known(0x8F, "M_RESETSTATION"),
    cmd(0x90, "M_R_DEVICENAME", None),
    cmd(0x91, "M_W_DEVICENAME", Text),
    cmd(0x92, "M_R_BEEP", None),
    cmd(0x93, "M_W_BEEP", U8),
    cmd(0x94, "M_R_LANGUAGE", None),
    cmd(0x95, "M_W_LANGUAGE", U8),
    cmd(0x96, "M_R_DATETIME", None),
    cmd(0x97, "M_W_DATETIME", WriteDateTime),
    cmd(0x98, "M_R_THEME", None),
    cmd(0x99, "M_W_THEME", U8),
    // Counters
    cmd(0xA0, "M_R_PLUGTIME", Port),
    known(0xA1, "M_W_PLUGTIME"),
    cmd(0xA2, "M_R_WORKTIME", Port),
    known(0xA3, "M_W_WORKTIME"),
    cmd(0xA4, "M_R_WORKCYCLES", Port),
    known(0xA5, "M_W_WORKCYCLES"),
    cmd(0xA6, "M_R_SUCTIONCYCLES", Port),
    known(0xA7, "M_W_SUCTIONCYCLES"),
    cmd(0xB0, "M_R_PLUGTIMEP", Port),
    known(0xB1, "M_W_PLUGTIMEP"),
    cmd(0xB2, "M_R_WORKTIMEP", Port),
    known(0xB3, "M_W_WORKTIMEP"),
    cmd(0xB4, "M_R_WORKCYCLESP", Port),
    known(0xB5, "M_W_WORKCYCLESP"),
    cmd(0xB6, "M_R_SUCTIONCYCLESP", Port),
    known(0xB7, "M_W_SUCTIONCYCLESP"),
    // Connectivity
    cmd(0xE0, "M_R_USB_CONNECTSTATUS", None),
    cmd(0xE1, "M_W_USB_CONNECTSTATUS", Text),
    cmd(0xF0, "M_R_RBT_CONNCONFIG", None),
    known(0xF1, "M_W_RBT_CONNCONFIG"),
    cmd(0xF2, "M_R_RBT_CONNECTSTATUS", None),
    known(0xF3, "M_W_RBT_CONNECTSTATUS"),
];

pub(super) static ACKNOWLEDGED_WRITES: &[&str] = &[
    "M_W_DEVICEID",
    "M_W_DEVICENAME",
    "M_W_BEEP",
    "M_W_PIN",
    "M_W_PINENABLED",
    "M_W_STATIONLOCKED",
    "M_W_SELECTTEMP",
    "M_W_SELECTFLOW",
    "M_W_EXTTCMODE",
    "M_W_PROFILEMODE",
    "M_W_AJUSTTEMP",
    "M_W_SELECTEXTTEMP",
    "M_W_TIMETOSTOP",
    "M_W_STARTMODE",
    "M_W_REMOTEMODE",
    "M_W_TEMPUNIT",
    "M_W_LANGUAGE",
    "M_W_MAXMINTEMP",
    "M_W_MAXMINFLOW",
    "M_W_MAXMINEXTTEMP",
    "M_W_LEVELSTEMPS",
    "M_W_HEATERSTATUS",
    "M_W_SUCTIONSTATUS",
    "M_W_USB_CONNECTSTATUS",
    "M_W_DATETIME",
    "M_W_THEME",
];
