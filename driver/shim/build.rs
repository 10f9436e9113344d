use std::env;

mod symbols {
    #![allow(dead_code)]
    include!("src/symbols.rs");
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/symbols.rs");
    println!("cargo:rerun-if-env-changed=SANITY_SHIM_LINKER");

    if env::var_os("CARGO_FEATURE_LINK_WRAP").is_none() {
        return;
    }

    // 只作用于本 crate 的 test/bin 目标；固件 bin 需在自己的 .cargo/config.toml 里加同样的参数
    let sym = symbols::WRAPPED_SYMBOL;
    let arg = match env::var("SANITY_SHIM_LINKER").as_deref() {
        Ok("ld") => format!("--wrap={sym}"),
        _ => format!("-Wl,--wrap={sym}"),
    };
    println!("cargo:rustc-link-arg={arg}");
}
