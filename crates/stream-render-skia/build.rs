// File: crates/stream-render-skia/build.rs
// Summary: Links the extra Windows system libraries Skia/ICU expect when targeting Windows.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Query the target, not the host, so cross builds link correctly.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // RegOpenKeyExW, RegQueryInfoKeyW, ...
        println!("cargo:rustc-link-lib=advapi32");
    }
}
