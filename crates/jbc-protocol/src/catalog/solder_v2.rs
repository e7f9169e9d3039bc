//! Second-generation soldering stations (`SOLD_02`).

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
    cmd(0x1F, "M_W_DEVICEID", RawBytes),
    known(0x20, "M_RESET"),
    cmd(0x21, "M_FIRMWARE", None),
    known(0x22, "M_CLEARMEMFLASH"),
    known(0x23, "M_SENDMEMADDRESS"),
    known(0x24, "M_SENDMEMDATA"),
    known(0x25, "M_ENDPROGR"),
    known(0x26, "M_ENDUPD"),
    known(0x27, "M_CONTINUEUPD"),
    known(0x28, "M_CLEARING"),
    // Port and tool parameters
    cmd(0x30, "M_INF_PORT", Port),
    known(0x31, "M_RESET_PORTTOOL"),
    cmd(0x33, "M_R_LEVELSTEMPS", PortTool),
    cmd(0x34, "M_W_LEVELSTEMPS", WriteLevelsTemps),
    cmd(0x35, "M_R_SLEEPDELAY", PortTool),
    cmd(0x36, "M_W_SLEEPDELAY", WritePortToolU8U8),
    cmd(0x37, "M_R_SLEEPTEMP", PortTool),
    cmd(0x38, "M_W_SLEEPTEMP", WritePortToolTemp),
    cmd(0x39, "M_R_HIBERDELAY", PortTool),
    cmd(0x3A, "M_W_HIBERDELAY", WritePortToolU8U8),
    cmd(0x3B, "M_R_AJUSTTEMP", PortTool),
    cmd(0x3C, "M_W_AJUSTTEMP", WritePortToolTempDelta),
    cmd(0x3D, "M_R_CARTRIDGE", PortTool),
    cmd(0x3E, "M_W_CARTRIDGE", RawBytes),
    // Live port state
    cmd(0x50, "M_R_SELECTTEMP", Port),
    cmd(0x51, "M_W_SELECTTEMP", WritePortTemp),
    cmd(0x52, "M_R_TIPTEMP", Port),
    cmd(0x53, "M_R_CURRENT", Port),
    cmd(0x54, "M_R_POWER", Port),
    cmd(0x55, "M_R_CONNECTTOOL", Port),
    cmd(0x56, "M_R_TOOLERROR", Port),
    cmd(0x57, "M_R_STATUSTOOL", Port),
    cmd(0x58, "M_W_SELECTTEMPVOLATILE", WritePortTemp),
    cmd(0x59, "M_R_MOSTEMP", Port),
    cmd(0x5A, "M_R_DELAYTIME", Port),
    // Modes and alarms
    cmd(0x60, "M_R_REMOTEMODE", None),
    cmd(0x61, "M_W_REMOTEMODE", U8),
    cmd(0x62, "M_R_CONTIMODE", None),
    cmd(0x63, "M_W_CONTIMODE", U8),
    cmd(0x64, "M_I_CONTIMODE", None),
    cmd(0x65, "M_R_ALARMMAXTEMP", Port),
    cmd(0x66, "M_W_ALARMMAXTEMP", WritePortTemp),
    cmd(0x67, "M_R_ALARMMINTEMP", Port),
    cmd(0x68, "M_W_ALARMMINTEMP", WritePortTemp),
    cmd(0x69, "M_R_ALARMTEMP", Port),
    cmd(0x6A, "M_R_LOCK_PORT", Port),
    cmd(0x6B, "M_W_LOCK_PORT", WritePortU8),
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
    cmd(0x7C, "M_R_QST_ACTIVATE", None),
    cmd(0x7D, "M_W_QST_ACTIVATE", U8),
    cmd(0x7E, "M_R_QST_STATUS", None),
    cmd(0x7F, "M_W_QST_STATUS", U8),
    // Station settings
    cmd(0x80, "M_R_TEMPUNIT", None),
    cmd(0x81, "M_W_TEMPUNIT", U8),
    cmd(0x82, "M_R_MAXTEMP", None),
    cmd(0x83, "M_W_MAXTEMP", Temp),
    cmd(0x84, "M_R_MINTEMP", None),
    cmd(0x85, "M_W_MINTEMP", Temp),
    cmd(0x86, "M_R_POWERLIM", None),
    cmd(0x87, "M_W_POWERLIM", U16),
    cmd(0x88, "M_R_PIN", None),
    cmd(0x89, "M_W_PIN", Text),
    cmd(0x8A, "M_R_STATERROR", None),
    cmd(0x8B, "M_R_TRAFOTEMP", None),
    known(0x8C, "M_RESETSTATION"),
    cmd(0x8D, "M_R_DEVICENAME", None),
    cmd(0x8E, "M_W_DEVICENAME", Text),
    cmd(0x8F, "M_R_BEEP", None),
    cmd(0x90, "M_W_BEEP", U8),
    cmd(0x91, "M_R_LANGUAGE", None),
    cmd(0x92, "M_W_LANGUAGE", U8),
    cmd(0x93, "M_W_TYPEOFGROUND", U8),
    cmd(0x94, "M_R_TYPEOFGROUND", None),
    // Counters
    cmd(0xA0, "M_R_PLUGTIME", Port),
    known(0xA1, "M_W_PLUGTIME"),
    cmd(0xA2, "M_R_WORKTIME", Port),
    known(0xA3, "M_W_WORKTIME"),
    cmd(0xA4, "M_R_SLEEPTIME", Port),
    known(0xA5, "M_W_SLEEPTIME"),
    cmd(0xA6, "M_R_HIBERTIME", Port),
    known(0xA7, "M_W_HIBERTIME"),
    cmd(0xA8, "M_R_NOTOOLTIME", Port),
    known(0xA9, "M_W_NOTOOLTIME"),
    cmd(0xAA, "M_R_SLEEPCYCLES", Port),
    known(0xAB, "M_W_SLEEPCYCLES"),
    cmd(0xAC, "M_R_DESOLCYCLES", Port),
    known(0xAD, "M_W_DESOLCYCLES"),
    cmd(0xAE, "M_W_RESETCOUNTERS", None).untested(),
    cmd(0xB0, "M_R_PLUGTIMEP", Port),
    known(0xB1, "M_W_PLUGTIMEP"),
    cmd(0xB2, "M_R_WORKTIMEP", Port),
    known(0xB3, "M_W_WORKTIMEP"),
    cmd(0xB4, "M_R_SLEEPTIMEP", Port),
    known(0xB5, "M_W_SLEEPTIMEP"),
    cmd(0xB6, "M_R_HIBERTIMEP", Port),
    known(0xB7, "M_W_HIBERTIMEP"),
    cmd(0xB8, "M_R_NOTOOLTIMEP", Port),
    known(0xB9, "M_W_NOTOOLTIMEP"),
    cmd(0xBA, "M_R_SLEEPCYCLESP", Port),
    known(0xBB, "M_W_SLEEPCYCLESP"),
    cmd(0xBC, "M_R_DESOLCYCLESP", Port),
    known(0xBD, "M_W_DESOLCYCLESP"),
    known(0xBE, "M_W_RESETCOUNTERSP"),
    // Connectivity
    cmd(0xE0, "M_R_USB_CONNECTSTATUS", None),
    cmd(0xE1, "M_W_USB_CONNECTSTATUS", Text),
    cmd(0xE2, "M_R_ETH_TCPIPCONFIG", None),
    cmd(0xE3, "M_W_ETH_TCPIPCONFIG", IpConfig),
    cmd(0xE4, "M_R_ETH_CONNECTSTATUS", None),
    cmd(0xE5, "M_W_ETH_CONNECTSTATUS", Text),
    cmd(0xF0, "M_R_RBT_CONNCONFIG", None),
    known(0xF1, "M_W_RBT_CONNCONFIG"),
    cmd(0xF2, "M_R_RBT_CONNECTSTATUS", None),
    known(0xF3, "M_W_RBT_CONNECTSTATUS"),
    // Peripherals
    cmd(0xF8, "M_R_PERIPHCOUNT", None),
    cmd(0xF9, "M_R_PERIPHCONFIG", Port),
    cmd(0xFA, "M_W_PERIPHCONFIG", RawBytes).untested(),
    cmd(0xFB, "M_R_PERIPHSTATUS", Port),
    cmd(0xFC, "M_W_PERIPHSTATUS", RawBytes).untested(),
];

pub(super) static ACKNOWLEDGED_WRITES: &[&str] = &[
    "M_W_DEVICEID",
    "M_W_DEVICENAME",
    "M_W_PIN",
    "M_W_BEEP",
    "M_W_LANGUAGE",
    "M_W_TEMPUNIT",
    "M_W_TYPEOFGROUND",
    "M_W_USB_CONNECTSTATUS",
    "M_W_ETH_TCPIPCONFIG",
    "M_W_ETH_CONNECTSTATUS",
    "M_W_LEVELSTEMPS",
    "M_W_SLEEPDELAY",
    "M_W_SLEEPTEMP",
    "M_W_HIBERDELAY",
    "M_W_AJUSTTEMP",
    "M_W_CARTRIDGE",
    "M_W_SELECTTEMP",
    "M_W_SELECTTEMPVOLATILE",
    "M_W_LOCK_PORT",
    "M_W_ALARMMAXTEMP",
    "M_W_ALARMMINTEMP",
    "M_W_POWERLIM",
    "M_W_QST_ACTIVATE",
    "M_W_QST_STATUS",
    "M_W_CONTIMODE",
    "M_W_REMOTEMODE",
    "M_W_PERIPHCONFIG",
    "M_W_PERIPHSTATUS",
    "M_W_RESETCOUNTERS",
    "M_W_MAXTEMP",
    "M_W_MINTEMP",
];
