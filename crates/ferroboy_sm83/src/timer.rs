//! DIV/TIMA timer subsystem.
//!
//! All four timer registers live on the bus; the struct itself only keeps
//! the sub-period cycle accumulators. Cycle counts are machine cycles
//! (1_048_576 per second), so DIV's 16384 Hz rate comes out to one
//! increment every 64 cycles.

use crate::cpu::interrupts::{self, InterruptLine};
use crate::cpu::Bus;

/// Divider register, free-running at 16384 Hz.
pub const DIV_ADDRESS: u16 = 0xFF04;
/// Timer counter.
pub const TIMA_ADDRESS: u16 = 0xFF05;
/// Timer modulo, reloaded into TIMA on overflow.
pub const TMA_ADDRESS: u16 = 0xFF06;
/// Timer control: bit 2 enables TIMA, bits 0-1 select its rate.
pub const TAC_ADDRESS: u16 = 0xFF07;

const DIV_PERIOD: u32 = 64;

/// TIMA period in machine cycles for a TAC rate selector:
/// 00 = 4096 Hz, 01 = 262144 Hz, 10 = 65536 Hz, 11 = 16384 Hz.
fn tima_period(tac: u8) -> u32 {
    match tac & 0x03 {
        0 => 256,
        1 => 4,
        2 => 16,
        _ => 64,
    }
}

#[derive(Clone, Debug, Default)]
pub struct Timer {
    div_counter: u32,
    tima_counter: u32,
}

impl Timer {
    pub fn new() -> Self {
        Timer::default()
    }

    /// Advance the timers by `cycles` machine cycles. Results depend only
    /// on the running total, not on how the caller chunks it.
    pub fn tick(&mut self, bus: &mut dyn Bus, cycles: u32) {
        self.div_counter += cycles;
        while self.div_counter >= DIV_PERIOD {
            self.div_counter -= DIV_PERIOD;
            let div = bus.read8(DIV_ADDRESS);
            bus.write8(DIV_ADDRESS, div.wrapping_add(1));
        }

        let tac = bus.read8(TAC_ADDRESS);
        if tac & 0x04 == 0 {
            // Disabled: TIMA holds, and no cycles accumulate toward the
            // next increment.
            return;
        }

        let period = tima_period(tac);
        self.tima_counter += cycles;
        while self.tima_counter >= period {
            self.tima_counter -= period;
            let tima = bus.read8(TIMA_ADDRESS);
            if tima == 0xFF {
                let tma = bus.read8(TMA_ADDRESS);
                bus.write8(TIMA_ADDRESS, tma);
                interrupts::request(bus, InterruptLine::Timer);
            } else {
                bus.write8(TIMA_ADDRESS, tima + 1);
            }
        }
    }
}
