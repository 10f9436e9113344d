use std::env;

mod symbols {
    #![allow(dead_code)]
    include!("driver/shim/src/symbols.rs");
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=driver/shim/src/symbols.rs");

    // shim 的 build.rs 只管它自己的目标，本 crate 的测试二进制要单独加
    if env::var_os("CARGO_FEATURE_LINK_WRAP").is_some() {
        println!("cargo:rustc-link-arg=-Wl,--wrap={}", symbols::WRAPPED_SYMBOL);
    }
}
