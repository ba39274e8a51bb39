//! Build script for embedding frontend assets.
//!
//! Release builds of the backend run Trunk so `dist/` holds the compiled
//! browser UI that rust-embed bakes into the `kb` binary. Debug builds read
//! `dist/` from disk at runtime and skip this step.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    #[cfg(not(debug_assertions))]
    build_frontend();
}

#[cfg(not(debug_assertions))]
fn build_frontend() {
    use std::process::Command;

    // The wasm build itself compiles this crate with the frontend feature only.
    if std::env::var_os("CARGO_FEATURE_BACKEND").is_none() {
        return;
    }

    println!("cargo:rerun-if-changed=src/frontend");
    println!("cargo:rerun-if-changed=src/view");
    println!("cargo:rerun-if-changed=index.html");
    println!("cargo:rerun-if-changed=Trunk.toml");

    let status = Command::new("trunk")
        .args(["build", "--release", "--dist", "dist"])
        .env("CARGO_TARGET_DIR", "target/trunk")
        .status();

    match status {
        Ok(status) if status.success() => {
            println!("cargo:warning=Frontend build completed successfully");
        }
        Ok(status) => println!(
            "cargo:warning=Trunk build failed with exit code {:?}; the binary will serve without a UI",
            status.code()
        ),
        Err(e) => println!(
            "cargo:warning=Could not run trunk ({}); the binary will serve without a UI",
            e
        ),
    }
}
