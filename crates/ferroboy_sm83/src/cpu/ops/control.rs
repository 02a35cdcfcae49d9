//! Control flow: absolute and relative jumps, calls, returns, RST.
//!
//! Conditional forms always consume their immediate bytes; only the jump
//! itself (and the extra stack traffic for CALL/RET) depends on the
//! condition, which is what makes the taken/not-taken cycle counts differ.

use crate::cpu::regs::{Flags, Reg16};
use crate::cpu::{Bus, Cpu};

/// Decode the 2-bit condition field (opcode bits 3-4): NZ, Z, NC, C.
fn condition_met(cpu: &Cpu, opcode: u8) -> bool {
    match (opcode >> 3) & 0x03 {
        0 => !cpu.regs.is_set_flag(Flags::Z),
        1 => cpu.regs.is_set_flag(Flags::Z),
        2 => !cpu.regs.is_set_flag(Flags::C),
        _ => cpu.regs.is_set_flag(Flags::C),
    }
}

/// 0xC3: JP a16.
pub fn jp_a16(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let target = cpu.fetch16(bus);
    cpu.regs.set_pc(target);
    4
}

/// 0xC2/0xCA/0xD2/0xDA: JP cc,a16. 4 cycles taken, 3 not.
pub fn jp_cc_a16(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let target = cpu.fetch16(bus);
    if condition_met(cpu, opcode) {
        cpu.regs.set_pc(target);
        4
    } else {
        3
    }
}

/// 0xE9: JP HL. No memory access, one cycle.
pub fn jp_hl(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let target = cpu.regs.read16(Reg16::HL);
    cpu.regs.set_pc(target);
    1
}

/// 0x18: JR r8. Offset is signed, relative to the byte after the operand.
pub fn jr_r8(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let offset = cpu.fetch8(bus) as i8;
    let target = cpu.regs.pc().wrapping_add(offset as u16);
    cpu.regs.set_pc(target);
    3
}

/// 0x20/0x28/0x30/0x38: JR cc,r8. 3 cycles taken, 2 not.
pub fn jr_cc_r8(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let offset = cpu.fetch8(bus) as i8;
    if condition_met(cpu, opcode) {
        let target = cpu.regs.pc().wrapping_add(offset as u16);
        cpu.regs.set_pc(target);
        3
    } else {
        2
    }
}

/// 0xCD: CALL a16. Pushes the address of the following instruction.
pub fn call_a16(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let target = cpu.fetch16(bus);
    let return_address = cpu.regs.pc();
    cpu.push_u16(bus, return_address);
    cpu.regs.set_pc(target);
    6
}

/// 0xC4/0xCC/0xD4/0xDC: CALL cc,a16. 6 cycles taken, 3 not.
pub fn call_cc_a16(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let target = cpu.fetch16(bus);
    if condition_met(cpu, opcode) {
        let return_address = cpu.regs.pc();
        cpu.push_u16(bus, return_address);
        cpu.regs.set_pc(target);
        6
    } else {
        3
    }
}

/// 0xC9: RET.
pub fn ret(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let target = cpu.pop_u16(bus);
    cpu.regs.set_pc(target);
    4
}

/// 0xC0/0xC8/0xD0/0xD8: RET cc. 5 cycles taken, 2 not.
pub fn ret_cc(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    if condition_met(cpu, opcode) {
        let target = cpu.pop_u16(bus);
        cpu.regs.set_pc(target);
        5
    } else {
        2
    }
}

/// 0xD9: RETI. Like RET but IME comes back on immediately, no EI delay.
pub fn reti(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let target = cpu.pop_u16(bus);
    cpu.regs.set_pc(target);
    cpu.ime = true;
    4
}

/// 0xC7..0xFF (every eighth): RST. The vector is opcode bits 3-5 times 8,
/// which is exactly `opcode & 0x38`.
pub fn rst(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let return_address = cpu.regs.pc();
    cpu.push_u16(bus, return_address);
    cpu.regs.set_pc((opcode & 0x38) as u16);
    4
}
