//! First-generation soldering stations (`SOLD_01`).
//!
//! This protocol predates the shared identity block, so its code layout
//! differs from the other families below 0x30. It has no write
//! acknowledgement allow-list.

use super::{cmd, known, CommandDescriptor};
use crate::format::ArgFormat::*;

pub(super) static COMMANDS: &[CommandDescriptor] = &[
    known(0x00, "M_NULL"),
    known(0x04, "M_EOT"),
    known(0x06, "M_ACK"),
    known(0x15, "M_NACK"),
    known(0x16, "M_SYN"),
    cmd(0x1D, "M_R_CONNECTSTATUS", None),
    cmd(0x1E, "M_W_CONNECTSTATUS", Text),
    known(0x20, "M_RESET"),
    cmd(0x21, "M_FIRMWARE", None),
    cmd(0x30, "M_INF_PORT", Port),
    cmd(0x31, "M_R_FIXTEMP", None),
    cmd(0x32, "M_W_FIXTEMP", WritePortTemp),
    known(0x33, "M_R_LEVELTEMP"),
    cmd(0x34, "M_W_LEVELTEMP", WritePortTemp),
    cmd(0x35, "M_R_LEVEL1", Port),
    cmd(0x36, "M_W_LEVEL1", WritePortTemp),
    cmd(0x37, "M_R_LEVEL2", Port),
    cmd(0x38, "M_W_LEVEL2", WritePortTemp),
    cmd(0x39, "M_R_LEVEL3", Port),
    cmd(0x3A, "M_W_LEVEL3", WritePortTemp),
    cmd(0x3B, "M_R_SLEEPDELAY", Port),
    cmd(0x3C, "M_W_SLEEPDELAY", WritePortU16),
    cmd(0x3D, "M_R_SLEEPTEMP", Port),
    cmd(0x3E, "M_W_SLEEPTEMP", WritePortTemp),
    cmd(0x3F, "M_R_HIBERDELAY", Port),
    cmd(0x40, "M_W_HIBERDELAY", WritePortU16),
    cmd(0x41, "M_R_AJUSTTEMP", Port),
    cmd(0x42, "M_W_AJUSTTEMP", WritePortToolTempDelta),
    cmd(0x50, "M_R_SELECTTEMP", Port),
    cmd(0x51, "M_W_SELECTTEMP", WritePortTemp),
    cmd(0x52, "M_R_TIPTEMP", Port),
    cmd(0x53, "M_R_CURRENT", Port),
    cmd(0x54, "M_R_POWER", Port),
    cmd(0x55, "M_R_CONNECTTOOL", Port),
    cmd(0x56, "M_R_TOOLERROR", Port),
    cmd(0x57, "M_R_STATUSTOOL", Port),
    cmd(0x58, "M_R_MOSTEMP", Port),
    cmd(0x59, "M_R_DELAYTIME", None),
    cmd(0x60, "M_R_REMOTEMODE", None),
    cmd(0x61, "M_W_REMOTEMODE", U8),
    cmd(0x62, "M_R_STATUSREMOTEMODE", None),
    cmd(0x63, "M_R_CONTIMODE", None),
    cmd(0x64, "M_W_CONTIMODE", U8),
    cmd(0x65, "M_I_CONTIMODE", None),
    cmd(0x80, "M_R_TEMPUNIT", None),
    cmd(0x81, "M_W_TEMPUNIT", U8),
    cmd(0x82, "M_R_MAXTEMP", None),
    // The vendor tooling sends these writes with the read codes.
    cmd(0x82, "M_W_MAXTEMP", Temp).alias(),
    cmd(0x84, "M_R_MINTEMP", None),
    cmd(0x84, "M_W_MINTEMP", Temp).alias(),
    cmd(0x86, "M_R_NITROMODE", None),
    cmd(0x87, "M_W_NITROMODE", U8),
    cmd(0x88, "M_R_HELPTEXT", None),
    cmd(0x89, "M_W_HELPTEXT", Text),
    cmd(0x8A, "M_R_POWERLIM", None),
    cmd(0x8B, "M_W_POWERLIM", U16),
    cmd(0x8C, "M_R_PIN", None),
    cmd(0x8D, "M_W_PIN", Text),
    cmd(0x8E, "M_R_STATERROR", None),
    cmd(0x8F, "M_R_TRAFOTEMP", None),
    known(0x90, "M_RESETSTATION"),
    cmd(0x91, "M_R_DEVICENAME", None),
    cmd(0x92, "M_W_DEVICENAME", Text),
    cmd(0x93, "M_R_BEEP", None),
    cmd(0x94, "M_W_BEEP", U8),
    cmd(0x95, "M_R_LANGUAGE", None),
    cmd(0x96, "M_W_LANGUAGE", U8),
    cmd(0x97, "M_R_TEMPERRORTRAFO", None),
    cmd(0x98, "M_R_TEMPERRORMOS", None),
    cmd(0x99, "M_R_DEVICEID", None),
    cmd(0x9A, "M_W_DEVICEID", RawBytes),
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
    cmd(0xB0, "M_R_QST_ACTIVATE", None),
    cmd(0xB1, "M_W_QST_ACTIVATE", U8),
    cmd(0xB2, "M_R_QST_STATUS", None),
    cmd(0xB3, "M_W_QST_STATUS", U8),
    cmd(0xB4, "M_R_LOCK_PORT", Port),
    cmd(0xB5, "M_W_LOCK_PORT", WritePortU8),
];
