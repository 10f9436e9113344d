//! sanity check 返回码
//!
//! libnet80211 的 `ieee80211_raw_frame_sanity_check` 返回 int：0 表示通过，非 0 表示拒绝
//! （esp_wifi_80211_tx 随后返回 ESP_ERR_INVALID_ARG 之类）。

use core::fmt;

/// “通过”返回码
pub const SANITY_ACCEPTED: i32 = 0;

/// C ABI 签名：`int (*)(int32_t, int32_t, int32_t)`
pub type SanityFn = extern "C" fn(i32, i32, i32) -> i32;

/// 类型化的 sanity check 结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanityStatus {
    Accepted,
    /// 非 0 返回码原样保留
    Rejected(i32),
}

impl SanityStatus {
    #[inline]
    pub const fn from_raw(code: i32) -> Self {
        if code == SANITY_ACCEPTED {
            SanityStatus::Accepted
        } else {
            SanityStatus::Rejected(code)
        }
    }

    #[inline]
    pub const fn into_raw(self) -> i32 {
        match self {
            SanityStatus::Accepted => SANITY_ACCEPTED,
            SanityStatus::Rejected(code) => code,
        }
    }

    #[inline]
    pub const fn is_accepted(self) -> bool {
        matches!(self, SanityStatus::Accepted)
    }
}

impl From<i32> for SanityStatus {
    fn from(code: i32) -> Self {
        Self::from_raw(code)
    }
}

impl From<SanityStatus> for i32 {
    fn from(status: SanityStatus) -> i32 {
        status.into_raw()
    }
}

impl fmt::Display for SanityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanityStatus::Accepted => f.write_str("accepted"),
            SanityStatus::Rejected(code) => write!(f, "rejected({})", code),
        }
    }
}
