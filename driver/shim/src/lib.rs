//! libnet80211 原始帧 sanity check 覆盖
//!
//! 对应 ESP32 libnet80211 中 `ieee80211_raw_frame_sanity_check`：`esp_wifi_80211_tx` 发送原始帧前
//! 用它过滤帧类型。本 crate 用链接器 `--wrap` 把它换成恒返回 0 的实现，并提供没有 `--wrap`
//! 时的替代接缝。
//!
//! 功能包括:
//! - 覆盖入口 `__wrap_ieee80211_raw_frame_sanity_check` (wrap)
//! - 返回码 (status)
//! - 驱动集成层的 sanity check trait 与实现 (gate)
//! - 运行时函数指针槽 (hook)
//! - `--wrap` 链接参数 (link)
//! - 配置解析 (cfgfile)

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod cfgfile;
mod gate;
mod hook;
mod link;
mod status;
mod symbols;
mod wrap;

pub use cfgfile::{parse_configfile, OverridePolicy, ShimConf};
pub use gate::{AcceptAll, FrameSanityCheck, RawCheck, Traced};
pub use hook::{sanity_hook_current, sanity_hook_install, sanity_hook_invoke, sanity_hook_restore};
pub use link::{
    real_symbol, validate_symbol, wrap_link_arg, wrap_symbol, REAL_PREFIX, WRAPPED_SYMBOL,
    WRAP_PREFIX,
};
pub use status::{SanityFn, SanityStatus, SANITY_ACCEPTED};
pub use wrap::{
    __wrap_ieee80211_raw_frame_sanity_check, override_sanity_check, raw_frame_sanity_check_override,
    real_sanity_check,
};
