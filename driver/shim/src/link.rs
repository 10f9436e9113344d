//! 链接参数与 wrap 符号名
//!
//! GNU ld `--wrap=SYM`：未定义的 `SYM` 引用解析到 `__wrap_SYM`，`__real_SYM` 解析到原 `SYM`。
//! 经编译器驱动（xtensa-esp32-elf-gcc）链接时需写成 `-Wl,--wrap=SYM`。

use alloc::format;
use alloc::string::String;

use axerrno::{AxError, AxResult};

pub use crate::symbols::{REAL_PREFIX, WRAPPED_SYMBOL, WRAP_PREFIX};

/// 校验 C 标识符：非空、`[A-Za-z_][A-Za-z0-9_]*`，且不能已带 wrap/real 前缀
pub fn validate_symbol(sym: &str) -> AxResult<()> {
    let bytes = sym.as_bytes();
    let first = *bytes.first().ok_or(AxError::InvalidInput)?;
    if !(first.is_ascii_alphabetic() || first == b'_') {
        return Err(AxError::InvalidInput);
    }
    if !bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'_') {
        return Err(AxError::InvalidInput);
    }
    if sym.starts_with(WRAP_PREFIX) || sym.starts_with(REAL_PREFIX) {
        return Err(AxError::InvalidInput);
    }
    Ok(())
}

/// `__wrap_<sym>`
pub fn wrap_symbol(sym: &str) -> AxResult<String> {
    validate_symbol(sym)?;
    Ok(format!("{}{}", WRAP_PREFIX, sym))
}

/// `__real_<sym>`
pub fn real_symbol(sym: &str) -> AxResult<String> {
    validate_symbol(sym)?;
    Ok(format!("{}{}", REAL_PREFIX, sym))
}

/// 链接参数；`linker_driver` 为 true 时经 gcc 驱动传递（`-Wl,`），否则直接给 ld
pub fn wrap_link_arg(sym: &str, linker_driver: bool) -> AxResult<String> {
    validate_symbol(sym)?;
    if linker_driver {
        Ok(format!("-Wl,--wrap={}", sym))
    } else {
        Ok(format!("--wrap={}", sym))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_symbol_args() {
        assert_eq!(
            wrap_link_arg(WRAPPED_SYMBOL, true).unwrap(),
            "-Wl,--wrap=ieee80211_raw_frame_sanity_check"
        );
        assert_eq!(
            wrap_link_arg(WRAPPED_SYMBOL, false).unwrap(),
            "--wrap=ieee80211_raw_frame_sanity_check"
        );
        assert_eq!(
            wrap_symbol(WRAPPED_SYMBOL).unwrap(),
            "__wrap_ieee80211_raw_frame_sanity_check"
        );
        assert_eq!(
            real_symbol(WRAPPED_SYMBOL).unwrap(),
            "__real_ieee80211_raw_frame_sanity_check"
        );
    }

    #[test]
    fn bad_symbols_rejected() {
        for sym in ["", "1abc", "foo bar", "foo,--script=x", "__wrap_foo", "__real_foo", "a-b"] {
            assert_eq!(validate_symbol(sym), Err(AxError::InvalidInput), "{:?}", sym);
            assert!(wrap_link_arg(sym, true).is_err());
        }
        assert!(validate_symbol("_private_check2").is_ok());
    }
}
