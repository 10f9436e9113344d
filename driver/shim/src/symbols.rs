// 被覆盖的 libnet80211 符号与 --wrap 前缀
// build.rs 通过 include! 共用，这里只放常量

/// 被覆盖的 libnet80211 符号
pub const WRAPPED_SYMBOL: &str = "ieee80211_raw_frame_sanity_check";
pub const WRAP_PREFIX: &str = "__wrap_";
pub const REAL_PREFIX: &str = "__real_";
