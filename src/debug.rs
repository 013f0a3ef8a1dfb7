// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Boot Logging
//!
//! A [`log`] backend that prints to the console UART with polled writes.
//!
//! # Features
//!
//! - **Log levels**: the standard `log` levels, filtered by `log::max_level`
//! - **Console gating**: records are dropped until a UART is attached, so
//!   logging before (or without) a console is harmless
//! - **Colors**: ANSI level tags with the `log-color` feature
//!
//! # Usage
//!
//! ```rust,ignore
//! debug::init(LevelFilter::Info);
//! // ... once the UART has been opened:
//! debug::attach_console(soc::UART_BASE);
//! log::info!("hw features: {}", descriptor);
//! ```

use core::fmt::{self, Write};
use core::sync::atomic::{AtomicUsize, Ordering};

use log::{Level, LevelFilter, Log, Metadata, Record};
use spin::{Mutex, Once};

use crate::dev::uart::ns16550;
use crate::reg::MmioRegisters;

/// Console UART base, zero while no console is attached
static CONSOLE_BASE: AtomicUsize = AtomicUsize::new(0);

/// Serializes console output
static CONSOLE_LOCK: Mutex<()> = Mutex::new(());

static LOGGER: ConsoleLogger = ConsoleLogger;

static LOGGER_INSTALLED: Once<bool> = Once::new();

/// Held by tests that touch the console or the global board
#[cfg(test)]
pub(crate) static TEST_CONSOLE: Mutex<()> = Mutex::new(());

// ============================================================================
// Console
// ============================================================================

/// Route log output to the UART at `base`.
///
/// Called once the UART driver has opened the device.
pub fn attach_console(base: usize) {
    CONSOLE_BASE.store(base, Ordering::Release);
}

pub fn detach_console() {
    CONSOLE_BASE.store(0, Ordering::Release);
}

/// Check if a console UART is attached
pub fn console_ready() -> bool {
    CONSOLE_BASE.load(Ordering::Acquire) != 0
}

/// Writer for the attached console
struct ConsoleWriter {
    regs: MmioRegisters,
}

impl Write for ConsoleWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        ns16550::poll_write_str(&self.regs, s);
        Ok(())
    }
}

// ============================================================================
// Logger
// ============================================================================

/// `log` backend printing `[LEVEL] target: message` lines.
pub struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let base = CONSOLE_BASE.load(Ordering::Acquire);
        if base == 0 {
            return;
        }

        let _guard = CONSOLE_LOCK.lock();
        // SAFETY: only an opened UART's base is ever attached.
        let mut console = ConsoleWriter { regs: unsafe { MmioRegisters::new(base) } };
        let _ = write_record(&mut console, record, cfg!(feature = "log-color"));
    }

    fn flush(&self) {}
}

/// Install the console logger and set the maximum level.
///
/// Returns false when another logger was already installed. Calling it
/// again only updates the level.
pub fn init(level: LevelFilter) -> bool {
    let installed = *LOGGER_INSTALLED.call_once(|| log::set_logger(&LOGGER).is_ok());
    log::set_max_level(level);
    installed
}

/// Level tag, padded to a fixed width.
fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN ",
        Level::Info => "INFO ",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

/// ANSI color for a level
fn level_color(level: Level) -> &'static str {
    match level {
        Level::Error => "\x1b[31m", // Red
        Level::Warn => "\x1b[33m",  // Yellow
        Level::Info => "\x1b[32m",  // Green
        Level::Debug => "\x1b[34m", // Blue
        Level::Trace => "\x1b[36m", // Cyan
    }
}

const ANSI_RESET: &str = "\x1b[0m";

fn write_record<W: Write>(out: &mut W, record: &Record, colors: bool) -> fmt::Result {
    let level = record.level();
    if colors {
        write!(out, "{}[{}]{} ", level_color(level), level_tag(level), ANSI_RESET)?;
    } else {
        write!(out, "[{}] ", level_tag(level))?;
    }
    writeln!(out, "{}: {}", record.target(), record.args())
}
