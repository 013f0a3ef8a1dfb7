// Copyright 2025 The Rustux Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! NS16550-Compatible UART Driver
//!
//! Polled driver for the APB UART found on the Cheshire SoC. The register
//! layout is the classic 16550 one, with each 8-bit register occupying a
//! 32-bit slot.
//!
//! # Register Map
//!
//! | Offset | Name     | Description                              |
//! |--------|----------|------------------------------------------|
//! | 0x00   | RBR/THR  | Receive buffer / transmit holding (DLL)  |
//! | 0x04   | IER      | Interrupt enable (DLM when DLAB=1)       |
//! | 0x08   | IIR/FCR  | Interrupt identification / FIFO control  |
//! | 0x0C   | LCR      | Line control                             |
//! | 0x10   | MCR      | Modem control                            |
//! | 0x14   | LSR      | Line status                              |
//! | 0x18   | MSR      | Modem status                             |
//! | 0x1C   | SCR      | Scratch                                  |

use core::fmt;

use crate::config::UartConfig;
use crate::dev::Peripheral;
use crate::reg::RegisterAccess;

// ============================================================================
// Register Offsets
// ============================================================================

const UART_RBR: usize = 0x00; // Receive Buffer (read)
const UART_THR: usize = 0x00; // Transmit Holding (write)
const UART_DLL: usize = 0x00; // Divisor Latch LSB (DLAB=1)
const UART_IER: usize = 0x04; // Interrupt Enable
const UART_DLM: usize = 0x04; // Divisor Latch MSB (DLAB=1)
const UART_FCR: usize = 0x08; // FIFO Control
const UART_LCR: usize = 0x0C; // Line Control
const UART_MCR: usize = 0x10; // Modem Control
const UART_LSR: usize = 0x14; // Line Status

// ============================================================================
// Register Bits
// ============================================================================

const LCR_DLAB: u32 = 1 << 7;  // Divisor Latch Access
const LCR_8N1: u32 = 0x03;     // 8 data bits, no parity, 1 stop bit

const FCR_ENABLE: u32 = 1 << 0;     // FIFO Enable
const FCR_CLEAR_RX: u32 = 1 << 1;   // Clear RX FIFO
const FCR_CLEAR_TX: u32 = 1 << 2;   // Clear TX FIFO
const FCR_TRIGGER_14: u32 = 0b11 << 6; // RX trigger at 14 bytes

const MCR_AUTOFLOW: u32 = 1 << 5; // Hardware flow control

const LSR_DR: u32 = 1 << 0;   // Data Ready
const LSR_THRE: u32 = 1 << 5; // TX Holding Register Empty
const LSR_TEMT: u32 = 1 << 6; // Transmitter Empty

// ============================================================================
// Polled Primitives
// ============================================================================

/// Transmit one byte, spinning until the holding register is free.
pub fn poll_putc<R: RegisterAccess>(regs: &R, byte: u8) {
    while regs.read32(UART_LSR) & LSR_THRE == 0 {
        core::hint::spin_loop();
    }
    regs.write32(UART_THR, byte as u32);
}

/// Transmit a string, expanding `\n` to `\r\n`.
pub fn poll_write_str<R: RegisterAccess>(regs: &R, s: &str) {
    for byte in s.bytes() {
        if byte == b'\n' {
            poll_putc(regs, b'\r');
        }
        poll_putc(regs, byte);
    }
}

// ============================================================================
// Driver
// ============================================================================

/// A 16550-style UART behind a register accessor.
pub struct Ns16550<R> {
    regs: R,
    config: UartConfig,
    open: bool,
}

impl<R: RegisterAccess> Ns16550<R> {
    pub const fn new(regs: R, config: UartConfig) -> Self {
        Self { regs, config, open: false }
    }

    pub fn regs(&self) -> &R {
        &self.regs
    }

    pub fn config(&self) -> &UartConfig {
        &self.config
    }

    /// Program the line: interrupts off, baud divisor, 8N1, FIFOs on and
    /// cleared, hardware flow control.
    ///
    /// Reprogramming an open UART writes the same values again. A clock and
    /// baud pair with no valid divisor leaves the UART closed.
    pub fn open(&mut self) {
        let divisor = match self.config.divisor() {
            Ok(divisor) => divisor,
            Err(err) => {
                log::error!("uart: {}", err);
                return;
            }
        };

        let regs = &self.regs;
        regs.write32(UART_IER, 0);
        regs.write32(UART_LCR, LCR_DLAB);
        regs.write32(UART_DLL, (divisor & 0xFF) as u32);
        regs.write32(UART_DLM, (divisor >> 8) as u32);
        regs.write32(UART_LCR, LCR_8N1);
        regs.write32(UART_FCR, FCR_TRIGGER_14 | FCR_CLEAR_TX | FCR_CLEAR_RX | FCR_ENABLE);
        regs.write32(UART_MCR, MCR_AUTOFLOW);

        self.open = true;
        log::trace!("uart: divisor {} ({} baud)", divisor, self.config.baud);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Transmit one byte. Dropped while the UART is closed.
    pub fn putc(&mut self, byte: u8) {
        if self.open {
            poll_putc(&self.regs, byte);
        }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.putc(byte);
        }
    }

    /// Non-blocking receive.
    pub fn getc(&mut self) -> Option<u8> {
        if !self.open || self.regs.read32(UART_LSR) & LSR_DR == 0 {
            return None;
        }
        Some((self.regs.read32(UART_RBR) & 0xFF) as u8)
    }

    /// Wait until the transmitter has shifted out every queued byte.
    pub fn flush(&mut self) {
        if !self.open {
            return;
        }
        while self.regs.read32(UART_LSR) & LSR_TEMT == 0 {
            core::hint::spin_loop();
        }
    }
}

impl<R: RegisterAccess> Peripheral for Ns16550<R> {
    fn name(&self) -> &'static str {
        "uart"
    }

    fn open(&mut self) {
        Ns16550::open(self)
    }

    fn is_open(&self) -> bool {
        Ns16550::is_open(self)
    }
}

impl<R: RegisterAccess> fmt::Write for Ns16550<R> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.open {
            poll_write_str(&self.regs, s);
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::mock::MockRegisters;
    use core::fmt::Write;

    const CONFIG: UartConfig = UartConfig { core_freq_hz: 50_000_000, baud: 115_200 };

    fn ready_regs() -> MockRegisters {
        MockRegisters::with(UART_LSR, LSR_THRE | LSR_TEMT)
    }

    #[test]
    fn test_open_programs_line() {
        let regs = ready_regs();
        let mut uart = Ns16550::new(&regs, CONFIG);
        assert!(!uart.is_open());

        uart.open();

        assert!(uart.is_open());
        assert_eq!(
            regs.writes(),
            vec![
                (UART_IER, 0x00),
                (UART_LCR, 0x80),
                (UART_DLL, 27),
                (UART_DLM, 0),
                (UART_LCR, 0x03),
                (UART_FCR, 0xC7),
                (UART_MCR, 0x20),
            ]
        );
    }

    #[test]
    fn test_open_splits_divisor() {
        let regs = ready_regs();
        let mut uart = Ns16550::new(&regs, UartConfig { core_freq_hz: 100_000_000, baud: 9_600 });
        uart.open();
        // 100 MHz / (16 * 9600) = 651 = 0x28B
        // DLL shares 0x00 with THR, DLM shares 0x04 with IER (cleared first)
        assert_eq!(regs.writes_to(UART_DLL), vec![0x8B]);
        assert_eq!(regs.writes_to(UART_DLM), vec![0x00, 0x02]);
    }

    #[test]
    fn test_open_is_idempotent() {
        let regs = ready_regs();
        let mut uart = Ns16550::new(&regs, CONFIG);
        uart.open();
        let first = regs.writes();
        let state: Vec<u32> = (0..0x20).step_by(4).map(|o| regs.peek(o)).collect();

        regs.clear_log();
        uart.open();

        assert!(uart.is_open());
        assert_eq!(regs.writes(), first);
        let again: Vec<u32> = (0..0x20).step_by(4).map(|o| regs.peek(o)).collect();
        assert_eq!(again, state);
    }

    #[test]
    fn test_open_with_bad_clock_stays_closed() {
        let regs = ready_regs();
        let mut uart = Ns16550::new(&regs, UartConfig { core_freq_hz: 50_000_000, baud: 0 });
        uart.open();
        assert!(!uart.is_open());
        assert!(regs.writes().is_empty());
    }

    #[test]
    fn test_putc_dropped_while_closed() {
        let regs = ready_regs();
        let mut uart = Ns16550::new(&regs, CONFIG);
        uart.putc(b'x');
        uart.write_str("ignored").unwrap();
        assert!(regs.writes().is_empty());
        assert_eq!(uart.getc(), None);
    }

    #[test]
    fn test_putc_waits_for_holding_register() {
        let regs = ready_regs();
        let mut uart = Ns16550::new(&regs, CONFIG);
        uart.open();
        regs.clear_log();
        regs.queue_reads(UART_LSR, &[0, 0, LSR_THRE]);

        uart.putc(b'A');

        assert_eq!(regs.reads_of(UART_LSR), 3);
        assert_eq!(regs.writes(), vec![(UART_THR, b'A' as u32)]);
    }

    #[test]
    fn test_write_str_maps_newlines() {
        let regs = ready_regs();
        let mut uart = Ns16550::new(&regs, CONFIG);
        uart.open();
        regs.clear_log();

        write!(uart, "ok\n").unwrap();

        let sent: Vec<u8> = regs.writes_to(UART_THR).iter().map(|&v| v as u8).collect();
        assert_eq!(sent, b"ok\r\n");
    }

    #[test]
    fn test_write_bytes_is_raw() {
        let regs = ready_regs();
        let mut uart = Ns16550::new(&regs, CONFIG);
        uart.open();
        regs.clear_log();

        uart.write_bytes(b"a\nb");

        let sent: Vec<u8> = regs.writes_to(UART_THR).iter().map(|&v| v as u8).collect();
        assert_eq!(sent, b"a\nb");
    }

    #[test]
    fn test_getc() {
        let regs = ready_regs();
        let mut uart = Ns16550::new(&regs, CONFIG);
        uart.open();
        assert_eq!(uart.getc(), None);

        regs.poke(UART_LSR, LSR_THRE | LSR_DR);
        regs.poke(UART_RBR, 0x1_42);
        assert_eq!(uart.getc(), Some(b'B'));
    }

    #[test]
    fn test_flush_waits_for_transmitter_empty() {
        let regs = ready_regs();
        let mut uart = Ns16550::new(&regs, CONFIG);
        uart.open();
        regs.clear_log();
        regs.queue_reads(UART_LSR, &[LSR_THRE, LSR_THRE]);

        uart.flush();

        assert_eq!(regs.reads_of(UART_LSR), 3);
    }

    #[test]
    fn test_peripheral_surface() {
        let regs = ready_regs();
        let mut uart = Ns16550::new(&regs, CONFIG);
        let device: &mut dyn Peripheral = &mut uart;
        assert_eq!(device.name(), "uart");
        device.open();
        assert!(device.is_open());
    }
}
