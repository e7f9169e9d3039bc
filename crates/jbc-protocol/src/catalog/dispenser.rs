//! Solder feeders (`SF_02`).

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
    cmd(0x30, "M_R_DISPENSERMODE", None),
    cmd(0x31, "M_W_DISPENSERMODE", U8),
    cmd(0x32, "M_R_PROGRAM", None),
    cmd(0x33, "M_W_PROGRAM", U8),
    cmd(0x34, "M_R_PROGRAMLIST", None),
    cmd(0x35, "M_W_PROGRAMLIST", U8),
    cmd(0x36, "M_R_SPEED", None),
    cmd(0x37, "M_W_SPEED", U16),
    cmd(0x38, "M_R_LENGTH", None),
    cmd(0x39, "M_W_LENGTH", U16),
    cmd(0x3A, "M_R_STARTFEEDING", None),
    cmd(0x3B, "M_R_STOPTFEEDING", None),
    cmd(0x3C, "M_R_FEEDING", None),
    cmd(0x3D, "M_R_BACKWARDMODE", None),
    cmd(0x3E, "M_W_BACKWARDMODE", U8),
    known(0x80, "M_RESETSTATION"),
    cmd(0x81, "M_R_PIN", None),
    cmd(0x82, "M_W_PIN", U16),
    cmd(0x83, "M_R_STATIONLOCKED", None),
    cmd(0x84, "M_W_STATIONLOCKED", U8),
    cmd(0x85, "M_R_BEEP", None),
    cmd(0x86, "M_W_BEEP", U8),
    cmd(0x87, "M_R_LENGTHUNIT", None),
    cmd(0x88, "M_W_LENGTHUNIT", U8),
    cmd(0x89, "M_R_STATERROR", None),
    cmd(0x8A, "M_R_RESETERROR", None),
    cmd(0x8B, "M_R_DEVICENAME", None),
    cmd(0x8C, "M_W_DEVICENAME", Text),
    cmd(0x8D, "M_R_TOOLENABLED", None),
    cmd(0x8E, "M_W_TOOLENABLED", U8),
    cmd(0x8F, "M_R_PINENABLED", None),
    known(0x90, "M_W_PINENABLED"),
    cmd(0xA0, "M_R_COUNTERS", None),
    cmd(0xA1, "M_R_RESETCOUNTERS", None),
    cmd(0xA2, "M_R_COUNTERSP", None),
    cmd(0xA3, "M_R_RESETCOUNTERSP", None),
    cmd(0xE0, "M_R_USB_CONNECTSTATUS", None),
    cmd(0xE1, "M_W_USB_CONNECTSTATUS", Text),
    known(0xF0, "M_R_RBT_CONNCONFIG"),
    known(0xF1, "M_W_RBT_CONNCONFIG"),
    known(0xF2, "M_R_RBT_CONNECTSTATUS"),
    known(0xF3, "M_W_RBT_CONNECTSTATUS"),
];

pub(super) static ACKNOWLEDGED_WRITES: &[&str] = &[
    "M_W_DEVICEID",
    "M_W_DISPENSERMODE",
    "M_W_PROGRAM",
    "M_W_PROGRAMLIST",
    "M_W_SPEED",
    "M_W_LENGTH",
    "M_W_BACKWARDMODE",
    "M_W_PIN",
    "M_W_STATIONLOCKED",
    "M_W_BEEP",
    "M_W_LENGTHUNIT",
    "M_W_DEVICENAME",
    "M_W_TOOLENABLED",
    "M_W_USB_CONNECTSTATUS",
];
