// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Platform Initialization
//!
//! Boot-time bring-up of the optional I/O blocks. The SoC reports which
//! blocks exist in the `HW_FEATURES` register; only those are opened.
//!
//! # Sequence
//!
//! 1. Read the feature descriptor (one load, never repeated)
//! 2. Walk the peripheral table in order
//! 3. Open each peripheral whose presence bit is 1, skip the rest
//!
//! The table is fixed at build time. Supporting another block means adding
//! one [`PeripheralEntry`]; it is tested against the same snapshot.
//!
//! Nothing is returned to the boot code: a driver that cannot open handles
//! that itself. The raw descriptor and every decision are logged so a
//! misconfigured build is visible on the console.

use spin::Mutex;

use crate::bits;
use crate::config::{self, PlatformConfig};
use crate::debug;
use crate::dev::uart::Ns16550;
use crate::err::PlatformError;
use crate::feature::FeatureDescriptor;
use crate::reg::{MmioRegisters, RegisterAccess};
use crate::soc;

// ============================================================================
// Peripheral Table
// ============================================================================

/// One optional peripheral: its presence bit and how to open it.
pub struct PeripheralEntry<D> {
    pub name: &'static str,

    /// Bit index in the feature descriptor
    pub bit: u32,

    /// Open routine, run against the board's driver set
    pub open: fn(&mut D),
}

/// Outcome of one bring-up pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformReport {
    descriptor: FeatureDescriptor,
    opened: u32,
}

impl PlatformReport {
    /// The snapshot every decision was made from.
    pub fn descriptor(&self) -> FeatureDescriptor {
        self.descriptor
    }

    /// Whether the entry with presence bit `bit` was opened.
    pub fn opened(&self, bit: u32) -> bool {
        bit < bits::REG_BITS && bits::is_bit_set(self.opened, bit)
    }

    /// Presence bits of every opened entry.
    pub fn opened_mask(&self) -> u32 {
        self.opened
    }

    pub fn opened_count(&self) -> u32 {
        self.opened.count_ones()
    }
}

/// Read the feature descriptor once and open every present peripheral
/// listed in `table`.
pub fn initialize_platform_with<R, D>(
    regs: &R,
    drivers: &mut D,
    table: &[PeripheralEntry<D>],
) -> PlatformReport
where
    R: RegisterAccess,
{
    let descriptor = FeatureDescriptor::read(regs);
    log::debug!("hw features: {}", descriptor);

    let mut opened = 0u32;
    for entry in table {
        match descriptor.bit(entry.bit) {
            Ok(true) => {
                (entry.open)(drivers);
                opened |= bits::bit_mask(entry.bit);
                log::info!("{}: present, opened", entry.name);
            }
            Ok(false) => {
                log::debug!("{}: absent", entry.name);
            }
            Err(err) => {
                log::warn!("{}: skipped, {}", entry.name, err);
            }
        }
    }

    PlatformReport { descriptor, opened }
}

// ============================================================================
// Cheshire Board
// ============================================================================

/// Drivers for the optional blocks of the Cheshire SoC.
pub struct Board {
    config: PlatformConfig,
    pub uart: Ns16550<MmioRegisters>,
}

impl Board {
    /// Drivers for the memory map in `config`. Nothing is touched until a
    /// driver is opened.
    pub const fn new(config: &PlatformConfig) -> Self {
        // SAFETY: the UART block is only accessed after its presence bit
        // has been seen, at the base the board configuration names.
        let uart_regs = unsafe { MmioRegisters::new(config.uart_base) };
        Self {
            config: *config,
            uart: Ns16550::new(uart_regs, config.uart),
        }
    }

    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }
}

fn open_uart(board: &mut Board) {
    board.uart.open();
    if board.uart.is_open() {
        debug::attach_console(board.uart.regs().base());
    }
}

/// Optional peripherals of the Cheshire SoC, in bring-up order.
pub static CHESHIRE_PERIPHERALS: [PeripheralEntry<Board>; 1] = [PeripheralEntry {
    name: "uart",
    bit: soc::HW_FEATURES_UART_BIT,
    open: open_uart,
}];

static BOARD: Mutex<Board> = Mutex::new(Board::new(&config::CHESHIRE));

static LAST_REPORT: Mutex<Option<PlatformReport>> = Mutex::new(None);

/// Bring up the optional peripherals of the Cheshire SoC.
///
/// # Safety
///
/// The SoC control register block and the UART block of the default memory
/// map must be mapped and accessible. Runs during single-threaded boot.
pub unsafe fn initialize_platform() {
    initialize_platform_from(&config::CHESHIRE)
}

/// [`initialize_platform`] for a board described by `config`.
///
/// # Safety
///
/// The register blocks named by `config` must be mapped and accessible.
/// A misaligned base is refused without touching either block.
pub unsafe fn initialize_platform_from(config: &PlatformConfig) {
    match config.validate() {
        Ok(()) => {}
        Err(err @ PlatformError::MisalignedOffset(_)) => {
            log::error!("platform: {} (status {}), bring-up skipped", err, err.status());
            return;
        }
        // The UART refuses to open on its own; the rest still comes up.
        Err(err) => log::warn!("platform: {} (status {})", err, err.status()),
    }

    let regs = MmioRegisters::new(config.regs_base);
    let report = {
        let mut board = BOARD.lock();
        if board.config != *config {
            *board = Board::new(config);
        }
        initialize_platform_with(&regs, &mut *board, &CHESHIRE_PERIPHERALS)
    };
    *LAST_REPORT.lock() = Some(report);
}

/// Report of the most recent [`initialize_platform`] pass.
pub fn last_report() -> Option<PlatformReport> {
    *LAST_REPORT.lock()
}

/// Run `f` with the board's drivers.
pub fn with_board<T>(f: impl FnOnce(&mut Board) -> T) -> T {
    f(&mut BOARD.lock())
}

// ============================================================================
// Tests
// ============================================================================
