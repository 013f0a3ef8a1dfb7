// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Build script for the Cheshire firmware image
//!
//! Passes the linker script when building the bare-metal riscv64 binary.
//! Host builds (tests, tooling) link normally.

use std::env;
use std::path::PathBuf;

fn main() {
    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    if target_arch == "riscv64" && target_os == "none" {
        configure_linker_riscv64();
    }
}

fn configure_linker_riscv64() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let script = manifest_dir.join("link.ld");

    // Only the firmware binary needs the memory layout
    println!("cargo:rustc-link-arg-bins=-T{}", script.display());

    // Rebuild if the layout changes
    println!("cargo:rerun-if-changed={}", script.display());
    println!("cargo:rerun-if-changed=build.rs");
}
