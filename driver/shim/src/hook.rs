//! 运行时 hook 槽：无 `--wrap` 时的函数指针表改写方案
//!
//! 驱动集成层把对 sanity check 的调用改为 [`sanity_hook_invoke`]，槽里默认放覆盖实现。
//! 槽是一个原子指针，invoke 不加锁，可在中断上下文调用。

use core::ptr;
use core::sync::atomic::{AtomicPtr, Ordering};

use crate::status::SanityFn;
use crate::wrap::__wrap_ieee80211_raw_frame_sanity_check;

/// 空指针表示“默认覆盖实现”，避免在 static 初始化里做 fn→ptr 转换
static SANITY_HOOK: AtomicPtr<()> = AtomicPtr::new(ptr::null_mut());

#[inline]
fn encode(f: SanityFn) -> *mut () {
    f as *mut ()
}

#[inline]
fn decode(p: *mut ()) -> SanityFn {
    if p.is_null() {
        __wrap_ieee80211_raw_frame_sanity_check
    } else {
        // SAFETY: 槽里只会写入 encode() 得到的 SanityFn 指针
        unsafe { core::mem::transmute::<*mut (), SanityFn>(p) }
    }
}

/// 调用当前安装的 sanity check
#[inline]
pub fn sanity_hook_invoke(arg: i32, arg2: i32, arg3: i32) -> i32 {
    decode(SANITY_HOOK.load(Ordering::Acquire))(arg, arg2, arg3)
}

/// 当前安装的例程
pub fn sanity_hook_current() -> SanityFn {
    decode(SANITY_HOOK.load(Ordering::Acquire))
}

/// 安装 `f`，返回之前的例程
pub fn sanity_hook_install(f: SanityFn) -> SanityFn {
    let prev = decode(SANITY_HOOK.swap(encode(f), Ordering::AcqRel));
    log::info!(target: "shim::hook", "sanity hook installed: {:p} (prev {:p})", f as *const (), prev as *const ());
    prev
}

/// 恢复默认覆盖实现，返回之前的例程
pub fn sanity_hook_restore() -> SanityFn {
    let prev = decode(SANITY_HOOK.swap(ptr::null_mut(), Ordering::AcqRel));
    log::debug!(target: "shim::hook", "sanity hook restored to override (prev {:p})", prev as *const ());
    prev
}
