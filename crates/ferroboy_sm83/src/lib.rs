//! Game Boy (DMG) SM83 CPU core.
//!
//! The crate models the processor, its interrupt controller and the
//! DIV/TIMA timers. Memory and I/O live behind the [`Bus`] trait the host
//! provides; [`Runner`] couples a CPU and timer pair over such a bus.
//!
//! Costs are reported in machine cycles: a quarter of the 4.194304 MHz
//! clock, so 1_048_576 per second.

pub mod cpu;
pub mod runner;
pub mod timer;

pub use cpu::interrupts::InterruptLine;
pub use cpu::{Bus, Cpu};
pub use runner::Runner;
pub use timer::Timer;

/// The DMG master clock, in T-cycles per second.
pub const CPU_FREQUENCY_HZ: u32 = 4_194_304;

/// Machine cycles per second; every cost in this crate is in this unit.
pub const MCYCLE_FREQUENCY_HZ: u32 = CPU_FREQUENCY_HZ / 4;
