//! IEEE 802.11 帧控制常量与分类
//!
//! 对应 Linux include/linux/ieee80211.h 中 IEEE80211_FTYPE_* / IEEE80211_STYPE_*。
//! 覆盖层本身不解析帧，这里只用于日志与测试。

use core::fmt;

/// frame_control 类型/子类型（小端 fc 的低字节）
pub mod fc {
    pub const TYPE_MASK: u16 = 0x000C;
    pub const SUBTYPE_MASK: u16 = 0x00F0;

    pub const TYPE_MGMT: u16 = 0x0000;
    pub const TYPE_CTL: u16 = 0x0004;
    pub const TYPE_DATA: u16 = 0x0008;
    pub const TYPE_EXT: u16 = 0x000C;

    pub const SUBTYPE_ASSOC_REQ: u16 = 0x0000;
    pub const SUBTYPE_ASSOC_RESP: u16 = 0x0010;
    pub const SUBTYPE_REASSOC_REQ: u16 = 0x0020;
    pub const SUBTYPE_REASSOC_RESP: u16 = 0x0030;
    pub const SUBTYPE_PROBE_REQ: u16 = 0x0040;
    pub const SUBTYPE_PROBE_RESP: u16 = 0x0050;
    pub const SUBTYPE_BEACON: u16 = 0x0080;
    pub const SUBTYPE_ATIM: u16 = 0x0090;
    pub const SUBTYPE_DISASSOC: u16 = 0x00A0;
    pub const SUBTYPE_AUTH: u16 = 0x00B0;
    pub const SUBTYPE_DEAUTH: u16 = 0x00C0;
    pub const SUBTYPE_ACTION: u16 = 0x00D0;
}

/// frame_control 的粗分类，仅用于日志
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    AssocReq,
    AssocResp,
    ReassocReq,
    ReassocResp,
    ProbeReq,
    ProbeResp,
    Beacon,
    Atim,
    Disassoc,
    Auth,
    Deauth,
    Action,
    /// 其它管理帧子类型（保留值等）
    OtherMgmt(u8),
    Control(u8),
    Data(u8),
    Extension(u8),
}

impl FrameKind {
    /// 按 fc 低字节分类
    pub const fn classify(fc: u16) -> Self {
        let subtype = ((fc & fc::SUBTYPE_MASK) >> 4) as u8;
        match fc & fc::TYPE_MASK {
            fc::TYPE_MGMT => match fc & fc::SUBTYPE_MASK {
                fc::SUBTYPE_ASSOC_REQ => FrameKind::AssocReq,
                fc::SUBTYPE_ASSOC_RESP => FrameKind::AssocResp,
                fc::SUBTYPE_REASSOC_REQ => FrameKind::ReassocReq,
                fc::SUBTYPE_REASSOC_RESP => FrameKind::ReassocResp,
                fc::SUBTYPE_PROBE_REQ => FrameKind::ProbeReq,
                fc::SUBTYPE_PROBE_RESP => FrameKind::ProbeResp,
                fc::SUBTYPE_BEACON => FrameKind::Beacon,
                fc::SUBTYPE_ATIM => FrameKind::Atim,
                fc::SUBTYPE_DISASSOC => FrameKind::Disassoc,
                fc::SUBTYPE_AUTH => FrameKind::Auth,
                fc::SUBTYPE_DEAUTH => FrameKind::Deauth,
                fc::SUBTYPE_ACTION => FrameKind::Action,
                _ => FrameKind::OtherMgmt(subtype),
            },
            fc::TYPE_CTL => FrameKind::Control(subtype),
            fc::TYPE_DATA => FrameKind::Data(subtype),
            _ => FrameKind::Extension(subtype),
        }
    }

    /// 用一个 i32 参数的低字节当作 fc 分类（C ABI 侧参数不透明，低字节可能是 fc）
    #[inline]
    pub const fn from_raw_arg(arg: i32) -> Self {
        Self::classify((arg as u32 & 0xFF) as u16)
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameKind::OtherMgmt(s) => write!(f, "mgmt/{:#x}", s),
            FrameKind::Control(s) => write!(f, "ctl/{:#x}", s),
            FrameKind::Data(s) => write!(f, "data/{:#x}", s),
            FrameKind::Extension(s) => write!(f, "ext/{:#x}", s),
            other => fmt::Debug::fmt(other, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deauth_byte_classifies_as_deauth() {
        assert_eq!(FrameKind::classify(fc::SUBTYPE_DEAUTH), FrameKind::Deauth);
        assert_eq!(FrameKind::from_raw_arg(0xC0), FrameKind::Deauth);
        // 高位字节忽略
        assert_eq!(FrameKind::from_raw_arg(0x7FFF_FFC0), FrameKind::Deauth);
        assert_eq!(FrameKind::classify(0x00A0), FrameKind::Disassoc);
    }

    #[test]
    fn non_mgmt_types() {
        // QoS data: type=data, subtype=8
        assert_eq!(FrameKind::classify(0x0088), FrameKind::Data(8));
        // ACK: type=ctl, subtype=0xd
        assert_eq!(FrameKind::classify(0x00D4), FrameKind::Control(0xd));
        assert_eq!(FrameKind::classify(0x00E0), FrameKind::OtherMgmt(0xe));
    }

    #[test]
    fn display_names() {
        assert_eq!(FrameKind::Deauth.to_string(), "Deauth");
        assert_eq!(FrameKind::Data(8).to_string(), "data/0x8");
    }
}
