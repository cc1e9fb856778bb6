// File: crates/stream-dioxus/src/bin/desktop_demo.rs
// Purpose: Minimal launcher for the Dioxus desktop streamgraph demo.

#[cfg(feature = "desktop")]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = stream_dioxus::ui::run_demo_ui() {
        eprintln!("stream-dioxus demo error: {e}");
    }
}

#[cfg(not(feature = "desktop"))]
fn main() {
    if let Err(e) = stream_dioxus::run_demo_ui() {
        eprintln!("{e}");
    }
}
