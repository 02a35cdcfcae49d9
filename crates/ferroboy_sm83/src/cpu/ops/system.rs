//! NOP, HALT, STOP, the IME instructions and the illegal-opcode handler.

use crate::cpu::{Bus, Cpu};

/// 0x00: NOP.
pub fn nop(_cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    1
}

/// 0x76: HALT. The CPU idles until an enabled interrupt line is requested.
pub fn halt(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.halted = true;
    1
}

/// 0x10: STOP. Consumes its padding byte and suspends until the host calls
/// `Cpu::resume`.
pub fn stop(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let _padding = cpu.fetch8(bus);
    cpu.stopped = true;
    1
}

/// 0xF3: DI. Immediate, and it also cancels a not-yet-landed EI.
pub fn di(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.ime = false;
    cpu.ime_enable_pending = false;
    1
}

/// 0xFB: EI. IME turns on only after the next instruction completes.
pub fn ei(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.ime_enable_pending = true;
    1
}

/// The 11 unassigned base-table slots. Logged and charged one cycle;
/// nothing else changes, so execution falls through to the next byte.
pub fn illegal(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) -> u32 {
    log::warn!(
        "illegal opcode {:#04X} at {:#06X}",
        opcode,
        cpu.regs.pc().wrapping_sub(1)
    );
    1
}
