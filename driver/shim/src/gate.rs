//! Rust 侧的 sanity check 接缝
//!
//! 没有链接器 `--wrap` 的平台上，由驱动集成层持有一个 [`FrameSanityCheck`]，
//! 在发送原始帧前调用；覆盖 = 注入 [`AcceptAll`]。

use ieee80211::FrameKind;

use crate::status::{SanityFn, SanityStatus};
use crate::wrap::raw_frame_sanity_check_override;

/// 原始帧 sanity check，参数语义属于被覆盖的驱动
pub trait FrameSanityCheck {
    fn check(&self, arg: i32, arg2: i32, arg3: i32) -> SanityStatus;
}

/// 全部放行
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl FrameSanityCheck for AcceptAll {
    #[inline]
    fn check(&self, arg: i32, arg2: i32, arg3: i32) -> SanityStatus {
        SanityStatus::from_raw(raw_frame_sanity_check_override(arg, arg2, arg3))
    }
}

/// 委托给一个 C ABI 例程（如 `__real_` 原实现）
#[derive(Clone, Copy)]
pub struct RawCheck(pub SanityFn);

impl RawCheck {
    pub const fn new(f: SanityFn) -> Self {
        Self(f)
    }
}

impl core::fmt::Debug for RawCheck {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "RawCheck({:p})", self.0 as *const ())
    }
}

impl FrameSanityCheck for RawCheck {
    #[inline]
    fn check(&self, arg: i32, arg2: i32, arg3: i32) -> SanityStatus {
        SanityStatus::from_raw((self.0)(arg, arg2, arg3))
    }
}

impl<G: FrameSanityCheck + ?Sized> FrameSanityCheck for &G {
    #[inline]
    fn check(&self, arg: i32, arg2: i32, arg3: i32) -> SanityStatus {
        (**self).check(arg, arg2, arg3)
    }
}

/// 调试用：委托后按 trace 级别记录帧类型与结果。会打日志，不要放进中断路径
#[derive(Debug, Clone, Copy)]
pub struct Traced<G> {
    inner: G,
    /// 哪个参数的低字节当 frame_control 解读（0..=2），None 表示不解读
    fc_arg: Option<u8>,
}

impl<G: FrameSanityCheck> Traced<G> {
    pub const fn new(inner: G) -> Self {
        Self { inner, fc_arg: None }
    }

    /// 指定用第 `index` 个参数（0 起）的低字节做帧分类；越界时不分类
    pub fn with_fc_arg(mut self, index: u8) -> Self {
        self.fc_arg = if index <= 2 { Some(index) } else { None };
        self
    }

    fn frame_kind(&self, args: [i32; 3]) -> Option<FrameKind> {
        self.fc_arg
            .map(|i| FrameKind::from_raw_arg(args[i as usize]))
    }
}

impl<G: FrameSanityCheck> FrameSanityCheck for Traced<G> {
    fn check(&self, arg: i32, arg2: i32, arg3: i32) -> SanityStatus {
        let status = self.inner.check(arg, arg2, arg3);
        match self.frame_kind([arg, arg2, arg3]) {
            Some(kind) => log::trace!(
                target: "shim::gate",
                "sanity check ({:#x}, {}, {}) kind={} -> {}",
                arg, arg2, arg3, kind, status
            ),
            None => log::trace!(
                target: "shim::gate",
                "sanity check ({:#x}, {}, {}) -> {}",
                arg, arg2, arg3, status
            ),
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    extern "C" fn reject_deauth(arg: i32, _arg2: i32, _arg3: i32) -> i32 {
        if FrameKind::from_raw_arg(arg) == FrameKind::Deauth {
            -1
        } else {
            0
        }
    }

    #[test]
    fn accept_all_ignores_type() {
        let gate = AcceptAll;
        assert_eq!(gate.check(0, 0, 0), SanityStatus::Accepted);
        assert_eq!(gate.check(0xC0, 24, 1), SanityStatus::Accepted);
        assert_eq!(gate.check(1, 0xC0, 24), SanityStatus::Accepted);
    }

    #[test]
    fn raw_check_delegates() {
        let gate = RawCheck::new(reject_deauth);
        assert_eq!(gate.check(0xC0, 24, 1), SanityStatus::Rejected(-1));
        assert_eq!(gate.check(0x80, 24, 1), SanityStatus::Accepted);
    }

    #[test]
    fn traced_keeps_inner_verdict() {
        let traced = Traced::new(RawCheck::new(reject_deauth)).with_fc_arg(0);
        assert_eq!(traced.check(0xC0, 24, 1), SanityStatus::Rejected(-1));
        let traced = Traced::new(AcceptAll).with_fc_arg(7);
        assert_eq!(traced.frame_kind([0xC0, 0, 0]), None);
        assert!(traced.check(0xC0, 24, 1).is_accepted());
    }

    #[test]
    fn gate_by_reference() {
        fn run<G: FrameSanityCheck>(g: G) -> SanityStatus {
            g.check(0xC0, 24, 1)
        }
        let gate = AcceptAll;
        assert!(run(&gate).is_accepted());
    }
}
