//! `ieee80211_raw_frame_sanity_check` 覆盖
//!
//! 固件链接时带 `-Wl,--wrap=ieee80211_raw_frame_sanity_check`：libnet80211 里对该函数的调用
//! 全部落到 `__wrap_ieee80211_raw_frame_sanity_check`，原实现以 `__real_` 名保留。
//! 覆盖后 esp_wifi_80211_tx 不再拒绝任何帧类型（含 0xC0 deauth 等管理帧）。
//!
//! 导出函数不读写任何状态、不打日志，可在中断上下文并发调用。

#[cfg(not(feature = "link-wrap"))]
use axerrno::AxError;
use axerrno::AxResult;

use crate::status::{SanityFn, SANITY_ACCEPTED};

/// 覆盖实现：三个参数对这里不透明，恒返回“通过”
#[inline(always)]
pub const fn raw_frame_sanity_check_override(_arg: i32, _arg2: i32, _arg3: i32) -> i32 {
    SANITY_ACCEPTED
}

/// 链接器 `--wrap` 的替换入口
#[no_mangle]
pub extern "C" fn __wrap_ieee80211_raw_frame_sanity_check(arg: i32, arg2: i32, arg3: i32) -> i32 {
    raw_frame_sanity_check_override(arg, arg2, arg3)
}

#[cfg(feature = "link-wrap")]
extern "C" {
    fn __real_ieee80211_raw_frame_sanity_check(arg: i32, arg2: i32, arg3: i32) -> i32;
}

#[cfg(feature = "link-wrap")]
extern "C" fn call_real(arg: i32, arg2: i32, arg3: i32) -> i32 {
    // SAFETY: --wrap 保证 __real_ 解析到 libnet80211 原实现，签名一致
    unsafe { __real_ieee80211_raw_frame_sanity_check(arg, arg2, arg3) }
}

/// 原实现（`__real_ieee80211_raw_frame_sanity_check`），用于部分委托
#[cfg(feature = "link-wrap")]
pub fn real_sanity_check() -> AxResult<SanityFn> {
    Ok(call_real)
}

/// 未启用 `link-wrap` 时没有 `__real_` 符号可用
#[cfg(not(feature = "link-wrap"))]
pub fn real_sanity_check() -> AxResult<SanityFn> {
    Err(AxError::Unsupported)
}

/// 覆盖实现的函数指针形式，供 hook 槽与 `RawCheck` 使用
pub fn override_sanity_check() -> SanityFn {
    __wrap_ieee80211_raw_frame_sanity_check
}
