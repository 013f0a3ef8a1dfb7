// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Cheshire Firmware - Main Entry Point
//!
//! `_start` sets up the stack and clears `.bss`, then `boot_main` brings the
//! platform up and hands over to the application.

#![no_std]
#![no_main]

use panic_halt as _;

use cheshire_init::config::CHESHIRE;
use cheshire_init::{debug, platform};

#[cfg(target_arch = "riscv64")]
core::arch::global_asm!(
    r#"
    .section .text.init, "ax"
    .global _start
_start:
    .option push
    .option norelax
    la gp, __global_pointer$
    .option pop
    la sp, __stack_top
    la t0, __bss_start
    la t1, __bss_end
1:
    bgeu t0, t1, 2f
    sd zero, 0(t0)
    addi t0, t0, 8
    j 1b
2:
    call boot_main
3:
    wfi
    j 3b
"#
);

/// Firmware entry point
///
/// Called from `_start` on the boot hart with a valid stack.
#[no_mangle]
pub extern "C" fn boot_main() -> ! {
    debug::init(CHESHIRE.log_level);

    // SAFETY: single-threaded boot, the Cheshire memory map is identity
    // mapped with paging off.
    unsafe { platform::initialize_platform() };

    if let Err(err) = CHESHIRE.validate() {
        log::error!("board configuration: {} (status {})", err, err.status());
    }

    if let Some(report) = platform::last_report() {
        log::info!("platform up: {}", report.descriptor());
    }

    app_main();

    halt()
}

/// Application entry
fn app_main() {
    log::info!("hello from cheshire");
    platform::with_board(|board| board.uart.flush());
}

fn halt() -> ! {
    loop {
        #[cfg(target_arch = "riscv64")]
        unsafe {
            core::arch::asm!("wfi", options(nomem, nostack));
        }
        #[cfg(not(target_arch = "riscv64"))]
        core::hint::spin_loop();
    }
}
