//! 覆盖层配置解析
//!
//! 每行一个 `TAG=value`，未知行忽略，缺省 tag 取默认值：
//!
//! ```text
//! SYMBOL=ieee80211_raw_frame_sanity_check
//! POLICY=accept_all        # accept_all | delegate
//! TRACE=0                  # 0 | 1
//! LINKER=driver            # driver (-Wl,) | ld
//! ```
//!
//! 导出的覆盖入口只有 `__wrap_ieee80211_raw_frame_sanity_check`，`SYMBOL=` 只能取该符号；
//! 写成别的名字由 [`ShimConf::validate`] 报 `Unsupported`。

use alloc::string::{String, ToString};

use axerrno::{AxError, AxResult};

use crate::link::{validate_symbol, wrap_link_arg, WRAPPED_SYMBOL};

/// 覆盖策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverridePolicy {
    /// 恒返回通过
    #[default]
    AcceptAll,
    /// 交给 `__real_` 原实现（需要 `link-wrap`）
    Delegate,
}

/// 解析后的配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimConf {
    pub symbol: String,
    pub policy: OverridePolicy,
    pub trace: bool,
    /// true: 经 gcc 驱动链接（`-Wl,--wrap=`）
    pub linker_driver: bool,
}

impl Default for ShimConf {
    fn default() -> Self {
        Self {
            symbol: WRAPPED_SYMBOL.to_string(),
            policy: OverridePolicy::AcceptAll,
            trace: false,
            linker_driver: true,
        }
    }
}

impl ShimConf {
    /// 校验配置：符号必须是合法 C 标识符，且是本 crate 导出了覆盖入口的那个
    pub fn validate(&self) -> AxResult<()> {
        validate_symbol(&self.symbol)?;
        if self.symbol != WRAPPED_SYMBOL {
            return Err(AxError::Unsupported);
        }
        Ok(())
    }

    /// 固件 bin 需要的链接参数，按 `LINKER=` 选 `-Wl,--wrap=` 或 `--wrap=`
    pub fn link_arg(&self) -> AxResult<String> {
        self.validate()?;
        wrap_link_arg(&self.symbol, self.linker_driver)
    }
}

/// 查找 `tag_name` 开头的行，返回其后的值（去掉 `#` 注释与首尾空白）
fn find_tag<'a>(file_data: &'a [u8], tag_name: &str) -> Option<&'a [u8]> {
    let tag = tag_name.as_bytes();
    file_data
        .split(|b| *b == b'\n')
        .map(<[u8]>::trim_ascii)
        .find(|line| line.starts_with(tag))
        .map(|line| {
            let value = &line[tag.len()..];
            let end = value.iter().position(|b| *b == b'#').unwrap_or(value.len());
            value[..end].trim_ascii()
        })
}

fn parse_policy(v: &[u8]) -> AxResult<OverridePolicy> {
    match v {
        b"accept_all" => Ok(OverridePolicy::AcceptAll),
        b"delegate" => Ok(OverridePolicy::Delegate),
        _ => Err(AxError::InvalidInput),
    }
}

fn parse_bool01(v: &[u8]) -> AxResult<bool> {
    match v {
        b"0" => Ok(false),
        b"1" => Ok(true),
        _ => Err(AxError::InvalidInput),
    }
}

fn parse_linker(v: &[u8]) -> AxResult<bool> {
    match v {
        b"driver" => Ok(true),
        b"ld" => Ok(false),
        _ => Err(AxError::InvalidInput),
    }
}

/// 解析配置文本；出现但取值非法的 tag 返回 `InvalidInput`
pub fn parse_configfile(file_data: &[u8]) -> AxResult<ShimConf> {
    let mut conf = ShimConf::default();
    if let Some(v) = find_tag(file_data, "SYMBOL=") {
        let sym = core::str::from_utf8(v).map_err(|_| AxError::InvalidInput)?;
        validate_symbol(sym)?;
        conf.symbol = sym.to_string();
    }
    if let Some(v) = find_tag(file_data, "POLICY=") {
        conf.policy = parse_policy(v)?;
    }
    if let Some(v) = find_tag(file_data, "TRACE=") {
        conf.trace = parse_bool01(v)?;
    }
    if let Some(v) = find_tag(file_data, "LINKER=") {
        conf.linker_driver = parse_linker(v)?;
    }
    log::debug!(target: "shim", "parsed config: {:?}", conf);
    Ok(conf)
}
