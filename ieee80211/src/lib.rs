//! # ieee80211 — 802.11 帧控制字段
//!
//! 只保留 sanity check 覆盖层需要的部分：frame_control 类型/子类型常量与分类，
//! 供 `shim::gate::Traced` 打日志、测试构造典型输入。
//!
//! | 模块      | 对应                       | 说明 |
//! |-----------|----------------------------|------|
//! | ieee80211 | include/linux/ieee80211.h  | frame_control 类型/子类型常量、`FrameKind` |

#![cfg_attr(not(test), no_std)]

pub mod ieee80211;

pub use ieee80211::{fc, FrameKind};
