//! ESP32 原始帧 sanity check 覆盖层
//!
//! 整合两部分：
//! - shim: `__wrap_ieee80211_raw_frame_sanity_check` 覆盖入口、集成层接缝、运行时 hook、链接参数、配置
//! - ieee80211: frame_control 常量与分类（日志、测试用）
//!
//! 固件 bin 需自行带上链接参数（`.cargo/config.toml` 的 `rustflags`）：
//!
//! ```toml
//! [target.xtensa-esp32-espidf]
//! rustflags = ["-C", "link-arg=-Wl,--wrap=ieee80211_raw_frame_sanity_check"]
//! ```

#![cfg_attr(not(test), no_std)]

pub use ieee80211;
pub use shim;

use axerrno::AxResult;
use shim::{AcceptAll, FrameSanityCheck, OverridePolicy, RawCheck, SanityStatus, ShimConf, Traced};

/// 全局配置，shim_init 时写入一次
static SHIM_CONF: spin::Once<ShimConf> = spin::Once::new();

/// 按配置选出的 sanity check
#[derive(Debug, Clone, Copy)]
pub enum ShimGate {
    AcceptAll(AcceptAll),
    Delegate(RawCheck),
    Traced(Traced<RawCheck>),
}

impl FrameSanityCheck for ShimGate {
    #[inline]
    fn check(&self, arg: i32, arg2: i32, arg3: i32) -> SanityStatus {
        match self {
            ShimGate::AcceptAll(g) => g.check(arg, arg2, arg3),
            ShimGate::Delegate(g) => g.check(arg, arg2, arg3),
            ShimGate::Traced(g) => g.check(arg, arg2, arg3),
        }
    }
}

/// 驱动集成层上下文：配置 + sanity check
/// 原始帧发送路径持有它，发送前调用 `check`
pub struct SanityShim<G: FrameSanityCheck> {
    pub conf: &'static ShimConf,
    pub gate: G,
}

impl<G: FrameSanityCheck> SanityShim<G> {
    pub fn new(conf: &'static ShimConf, gate: G) -> Self {
        Self { conf, gate }
    }

    #[inline]
    pub fn check(&self, arg: i32, arg2: i32, arg3: i32) -> SanityStatus {
        self.gate.check(arg, arg2, arg3)
    }
}

/// 记录配置（只生效一次）；再次调用返回已记录的配置
///
/// 符号不是 `ieee80211_raw_frame_sanity_check` 时返回 `Unsupported`，非法标识符返回 `InvalidInput`。
pub fn shim_init(conf: ShimConf) -> AxResult<&'static ShimConf> {
    let link_arg = conf.link_arg()?;
    if let Some(existing) = SHIM_CONF.get() {
        log::debug!(target: "shim", "shim already initialized, keeping {:?}", existing);
        return Ok(existing);
    }
    let conf = SHIM_CONF.call_once(|| conf);
    log::info!(
        target: "shim",
        "sanity check override: symbol={} policy={:?} trace={} link_arg={}",
        conf.symbol, conf.policy, conf.trace, link_arg
    );
    Ok(conf)
}

/// 用默认配置初始化（accept_all、不 trace）
pub fn shim_init_stub() -> &'static ShimConf {
    SHIM_CONF.call_once(|| {
        log::info!(target: "shim", "sanity check override: init stub (accept_all)");
        ShimConf::default()
    })
}

/// 当前配置；未初始化时为 None
pub fn shim_conf() -> Option<&'static ShimConf> {
    SHIM_CONF.get()
}

/// 按配置选 gate
///
/// `Delegate` 需要 `link-wrap` 提供 `__real_` 原实现，否则退回 AcceptAll 并告警。
pub fn select_gate(conf: &ShimConf) -> ShimGate {
    let raw = match conf.policy {
        OverridePolicy::AcceptAll => None,
        OverridePolicy::Delegate => match shim::real_sanity_check() {
            Ok(f) => Some(RawCheck::new(f)),
            Err(e) => {
                log::warn!(
                    target: "shim",
                    "delegate policy needs __real_{} ({:?}), falling back to accept_all",
                    conf.symbol, e
                );
                None
            }
        },
    };
    match (raw, conf.trace) {
        (Some(g), false) => ShimGate::Delegate(g),
        (Some(g), true) => ShimGate::Traced(Traced::new(g).with_fc_arg(0)),
        (None, false) => ShimGate::AcceptAll(AcceptAll),
        (None, true) => ShimGate::Traced(
            Traced::new(RawCheck::new(shim::override_sanity_check())).with_fc_arg(0),
        ),
    }
}

/// 用全局配置构造集成层上下文；未初始化时先按默认配置初始化
pub fn sanity_shim() -> SanityShim<ShimGate> {
    let conf = shim_conf().unwrap_or_else(shim_init_stub);
    SanityShim::new(conf, select_gate(conf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axerrno::AxError;
    use ieee80211::fc;

    #[test]
    fn default_gate_accepts_everything() {
        let gate = select_gate(&ShimConf::default());
        assert!(matches!(gate, ShimGate::AcceptAll(_)));
        assert!(gate.check(0, 0, 0).is_accepted());
        assert!(gate.check(fc::SUBTYPE_DEAUTH as i32, 24, 1).is_accepted());
    }

    #[test]
    fn trace_gate_still_accepts() {
        let conf = ShimConf {
            trace: true,
            ..ShimConf::default()
        };
        let gate = select_gate(&conf);
        assert!(matches!(gate, ShimGate::Traced(_)));
        assert_eq!(gate.check(0xC0, 24, 1), SanityStatus::Accepted);
    }

    #[cfg(not(feature = "link-wrap"))]
    #[test]
    fn delegate_without_wrap_falls_back() {
        let conf = ShimConf {
            policy: OverridePolicy::Delegate,
            ..ShimConf::default()
        };
        assert!(matches!(select_gate(&conf), ShimGate::AcceptAll(_)));
    }

    #[test]
    fn init_once_and_context() {
        let conf = shim_init(ShimConf::default()).unwrap();
        let again = shim_init(ShimConf {
            trace: true,
            ..ShimConf::default()
        })
        .unwrap();
        assert!(core::ptr::eq(conf, again));
        assert!(core::ptr::eq(shim_init_stub(), conf));

        let ctx = sanity_shim();
        for i in 0..1000 {
            assert!(ctx.check(i & 0xFF, i, 1000 - i).is_accepted());
        }
    }

    #[test]
    fn init_rejects_bad_symbol() {
        let conf = ShimConf {
            symbol: "not a symbol".into(),
            ..ShimConf::default()
        };
        assert_eq!(shim_init(conf).err(), Some(AxError::InvalidInput));
        let conf = shim::parse_configfile(b"SYMBOL=my_check\nLINKER=ld\n").unwrap();
        assert_eq!(shim_init(conf).err(), Some(AxError::Unsupported));
    }

    // 主机上没有 libnet80211：给 --wrap 一个拒绝 deauth 的原函数
    #[cfg(feature = "link-wrap")]
    #[no_mangle]
    extern "C" fn ieee80211_raw_frame_sanity_check(arg: i32, _arg2: i32, _arg3: i32) -> i32 {
        if ieee80211::FrameKind::from_raw_arg(arg) == ieee80211::FrameKind::Deauth {
            -1
        } else {
            0
        }
    }

    #[cfg(feature = "link-wrap")]
    #[test]
    fn delegate_reaches_original() {
        let conf = ShimConf {
            policy: OverridePolicy::Delegate,
            ..ShimConf::default()
        };
        let gate = select_gate(&conf);
        assert!(matches!(gate, ShimGate::Delegate(_)));
        assert_eq!(gate.check(0xC0, 24, 1), SanityStatus::Rejected(-1));
        assert!(gate.check(0x80, 24, 1).is_accepted());
        assert_eq!(shim::__wrap_ieee80211_raw_frame_sanity_check(0xC0, 24, 1), 0);
    }
}
