//! PUSH/POP. The pair field decodes with AF in the 11 slot, unlike the
//! arithmetic families where 11 names SP.

use crate::cpu::regs::Reg16;
use crate::cpu::{Bus, Cpu};

/// 0xC5/0xD5/0xE5/0xF5: PUSH rr.
pub fn push_rr(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let pair = Reg16::from_pair_bits(opcode >> 4, true);
    let value = cpu.regs.read16(pair);
    cpu.push_u16(bus, value);
    4
}

/// 0xC1/0xD1/0xE1/0xF1: POP rr. POP AF drops the low nibble of F on the
/// way in, like every other write to F.
pub fn pop_rr(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let pair = Reg16::from_pair_bits(opcode >> 4, true);
    let value = cpu.pop_u16(bus);
    cpu.regs.write16(pair, value);
    3
}
