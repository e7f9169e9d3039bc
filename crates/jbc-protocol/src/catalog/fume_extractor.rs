//! Fume extractors (`FE_02`). No port-info command; suction state is read
//! per station.

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
    cmd(0x30, "M_R_SUCTIONLEVEL", None),
    cmd(0x31, "M_W_SUCTIONLEVEL", U16),
    cmd(0x32, "M_R_FLOW", None),
    cmd(0x33, "M_R_SPEED", None),
    cmd(0x34, "M_R_SELECTFLOW", None),
    cmd(0x35, "M_W_SELECTFLOW", U16),
    cmd(0x36, "M_R_STANDINTAKES", None),
    cmd(0x37, "M_W_STANDINTAKES", U8),
    cmd(0x38, "M_R_INTAKEACTIVATION", None),
    cmd(0x39, "M_W_INTAKEACTIVATION", U8),
    cmd(0x3A, "M_R_SUCTIONDELAY", None),
    cmd(0x3B, "M_W_SUCTIONDELAY", U16),
    cmd(0x3C, "M_R_DELAYTIME", None),
    cmd(0x3D, "M_R_ACTIVATIONPEDAL", None),
    cmd(0x3E, "M_W_ACTIVATIONPEDAL", U8),
    cmd(0x3F, "M_R_PEDALMODE", None),
    cmd(0x40, "M_W_PEDALMODE", U8),
    cmd(0x41, "M_R_FILTERSTATUS", None),
    cmd(0x42, "M_R_RESETFILTER", None),
    cmd(0x43, "M_R_CONNECTEDPEDAL", None),
    known(0x80, "M_RESETSTATION"),
    cmd(0x81, "M_R_PIN", None),
    cmd(0x82, "M_W_PIN", U16),
    cmd(0x83, "M_R_STATIONLOCKED", None),
    cmd(0x84, "M_W_STATIONLOCKED", U8),
    cmd(0x85, "M_R_BEEP", None),
    cmd(0x86, "M_W_BEEP", U8),
    cmd(0x87, "M_R_CONTINUOUSSUCTION", None),
    cmd(0x88, "M_W_CONTINUOUSSUCTION", U8),
    cmd(0x89, "M_R_STATERROR", None),
    cmd(0x8A, "M_R_DEVICENAME", None),
    cmd(0x8B, "M_W_DEVICENAME", Text),
    cmd(0x8C, "M_R_PINENABLED", None),
    cmd(0x8D, "M_W_PINENABLED", U8),
    cmd(0x8E, "M_W_WORKINTAKES", U8),
    cmd(0xA0, "M_R_COUNTERS", None),
    cmd(0xA1, "M_R_RESETCOUNTERS", None),
    known(0xA2, "M_R_COUNTERSP"),
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
    "M_W_SUCTIONLEVEL",
    "M_W_SELECTFLOW",
    "M_W_STANDINTAKES",
    "M_W_INTAKEACTIVATION",
    "M_W_SUCTIONDELAY",
    "M_W_ACTIVATIONPEDAL",
    "M_W_PEDALMODE",
    "M_W_PIN",
    "M_W_STATIONLOCKED",
    "M_W_BEEP",
    "M_W_CONTINUOUSSUCTION",
    "M_W_DEVICENAME",
    "M_W_PINENABLED",
    "M_W_WORKINTAKES",
    "M_W_USB_CONNECTSTATUS",
];
