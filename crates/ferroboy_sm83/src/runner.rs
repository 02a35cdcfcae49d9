//! Ties the CPU and timer together: one instruction, then the timers catch
//! up by however many cycles it took.

use crate::cpu::{Bus, Cpu};
use crate::timer::Timer;

#[derive(Clone, Debug, Default)]
pub struct Runner {
    pub cpu: Cpu,
    pub timer: Timer,
}

impl Runner {
    pub fn new() -> Self {
        Runner::default()
    }

    /// One instruction (or interrupt dispatch), timers included. Returns
    /// the machine cycles consumed.
    pub fn step(&mut self, bus: &mut dyn Bus, trace: bool) -> u32 {
        let cycles = self.cpu.step(bus, trace);
        self.timer.tick(bus, cycles);
        cycles
    }

    /// Step until at least `budget` machine cycles have elapsed. Returns
    /// the cycles actually consumed, which may overshoot by one
    /// instruction.
    pub fn run_for(&mut self, bus: &mut dyn Bus, budget: u32, trace: bool) -> u32 {
        let mut elapsed = 0;
        while elapsed < budget {
            elapsed += self.step(bus, trace);
        }
        elapsed
    }
}
