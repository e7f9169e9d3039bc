//! Preheaters (`PH_02`).

use super::{cmd, known, CommandDescriptor};
use crate::format::ArgFormat::*;

pub(super) static COMMANDS: &[CommandDescriptor] = &[
    known(0x00, "M_HS"),
    known(0x04, "M_EOT"),
    known(0x06, "M_ACK"),
    known(0x15, "M_NACK"),
    known(0x16, "M_SYN"),
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
    known(0x29, "M_FORCEUPDATE"),
    cmd(0x30, "M_INF_PORT", Port),
    cmd(0x31, "M_R_WORKMODE", None),
    cmd(0x32, "M_W_WORKMODE", U8),
    cmd(0x33, "M_R_HEATERSTATUS", None),
    cmd(0x34, "M_W_HEATERSTATUS", U8),
    cmd(0x35, "M_R_EXTTCMODE", None),
    cmd(0x36, "M_W_EXTTCMODE", U8),
    cmd(0x37, "M_R_TIMETOSTOP", Port),
    cmd(0x38, "M_W_TIMETOSTOP", U16),
    cmd(0x50, "M_R_SELECTTEMP", Port),
    cmd(0x51, "M_W_SELECTTEMP", WritePortTemp),
    cmd(0x52, "M_R_SELECTPOWER", Port),
    cmd(0x53, "M_W_SELECTPOWER", WritePortU16),
    cmd(0x54, "M_R_WARNING", None),
    cmd(0x55, "M_R_ACTIVEZONES", None),
    cmd(0x56, "M_W_ACTIVEZONES", U8),
    cmd(0x57, "M_R_EXTTCTEMP", None),
    cmd(0x60, "M_R_REMOTEMODE", None),
    cmd(0x61, "M_W_REMOTEMODE", U8),
    cmd(0x62, "M_R_CONTIMODE", None),
    cmd(0x63, "M_W_CONTIMODE", U8),
    cmd(0x64, "M_I_CONTIMODE", None),
    cmd(0x65, "M_R_PROFILE", None),
    cmd(0x66, "M_W_PROFILE", U8),
    cmd(0x67, "M_R_SETTINGSPROFILE", None),
    cmd(0x68, "M_W_SETTINGSPROFILE", U8),
    cmd(0x69, "M_R_PROFILETEACH", None),
    cmd(0x6A, "M_W_PROFILETEACH", U8),
    cmd(0x80, "M_R_MAXMINPOWER", None),
    cmd(0x81, "M_W_MAXMINPOWER", U16U16),
    cmd(0x82, "M_R_MAXMINTEMP", None),
    cmd(0x83, "M_W_MAXMINTEMP", TempTemp),
    cmd(0x84, "M_R_PINENABLED", None),
    cmd(0x85, "M_W_PINENABLED", U8),
    cmd(0x86, "M_R_STATIONLOCKED", None),
    cmd(0x87, "M_W_STATIONLOCKED", U8),
    cmd(0x88, "M_R_PIN", None),
    cmd(0x89, "M_W_PIN", Text),
    cmd(0x8A, "M_R_STATERROR", None),
    known(0x8B, "M_RESETSTATION"),
    cmd(0x8C, "M_R_DEVICENAME", None),
    cmd(0x8D, "M_W_DEVICENAME", Text),
    cmd(0x8E, "M_R_BEEP", None),
    cmd(0x8F, "M_W_BEEP", U8),
    cmd(0xA0, "M_R_PLUGTIME", Port),
    known(0xA1, "M_W_PLUGTIME"),
    cmd(0xA2, "M_R_WORKTIME", Port),
    known(0xA3, "M_W_WORKTIME"),
    cmd(0xA4, "M_R_WORKCYCLES", Port),
    known(0xA5, "M_W_WORKCYCLES"),
    cmd(0xB0, "M_R_PLUGTIMEP", Port),
    known(0xB1, "M_W_PLUGTIMEP"),
    cmd(0xB2, "M_R_WORKTIMEP", Port),
    known(0xB3, "M_W_WORKTIMEP"),
    cmd(0xB4, "M_R_WORKCYCLESP", Port),
    known(0xB5, "M_W_WORKCYCLESP"),
    cmd(0xE0, "M_R_USB_CONNECTSTATUS", None),
    cmd(0xE1, "M_W_USB_CONNECTSTATUS", Text),
    known(0xF0, "M_R_RBT_CONNCONFIG"),
    known(0xF1, "M_W_RBT_CONNCONFIG"),
    known(0xF2, "M_R_RBT_CONNECTSTATUS"),
    known(0xF3, "M_W_RBT_CONNECTSTATUS"),
];

pub(super) static ACKNOWLEDGED_WRITES: &[&str] = &[
    "M_W_DEVICEID",
    "M_W_WORKMODE",
    "M_W_HEATERSTATUS",
    "M_W_EXTTCMODE",
    "M_W_TIMETOSTOP",
    "M_W_SELECTTEMP",
    "M_W_SELECTPOWER",
    "M_W_ACTIVEZONES",
    "M_W_REMOTEMODE",
    "M_W_CONTIMODE",
    "M_W_PROFILE",
    "M_W_SETTINGSPROFILE",
    "M_W_PROFILETEACH",
    "M_W_MAXMINPOWER",
    "M_W_MAXMINTEMP",
    "M_W_PINENABLED",
    "M_W_STATIONLOCKED",
    "M_W_PIN",
    "M_W_DEVICENAME",
    "M_W_BEEP",
    "M_W_USB_CONNECTSTATUS",
];
