//! Load family: register moves, immediates, indirect and high-RAM forms.

use crate::cpu::regs::{Reg16, Reg8};
use crate::cpu::{operand_is_mem, Bus, Cpu};

/// 0x40-0x7F (minus 0x76): LD r,r'. Destination in bits 3-5, source in
/// bits 0-2; either side may be (HL).
pub fn ld_r_r(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let src = opcode & 0x07;
    let dst = (opcode >> 3) & 0x07;
    let value = cpu.read_operand(bus, src);
    cpu.write_operand(bus, dst, value);
    if operand_is_mem(src) || operand_is_mem(dst) {
        2
    } else {
        1
    }
}

/// LD r,d8 (0x06/0x0E/…/0x3E) and LD (HL),d8 (0x36).
pub fn ld_r_d8(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let dst = (opcode >> 3) & 0x07;
    let value = cpu.fetch8(bus);
    cpu.write_operand(bus, dst, value);
    if operand_is_mem(dst) {
        3
    } else {
        2
    }
}

/// LD rr,d16 (0x01/0x11/0x21/0x31). Pair in bits 4-5, pattern 11 = SP.
pub fn ld_rr_d16(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let pair = Reg16::from_pair_bits(opcode >> 4, false);
    let value = cpu.fetch16(bus);
    cpu.regs.write16(pair, value);
    3
}

/// Decode the indirect-target field of 0x02/0x12/0x22/0x32 (and the A-load
/// mirrors): BC, DE, HL with post-increment, HL with post-decrement.
fn indirect_address(cpu: &mut Cpu, opcode: u8) -> u16 {
    match (opcode >> 4) & 0x03 {
        0 => cpu.regs.read16(Reg16::BC),
        1 => cpu.regs.read16(Reg16::DE),
        2 => {
            let hl = cpu.regs.read16(Reg16::HL);
            cpu.regs.write16(Reg16::HL, hl.wrapping_add(1));
            hl
        }
        _ => {
            let hl = cpu.regs.read16(Reg16::HL);
            cpu.regs.write16(Reg16::HL, hl.wrapping_sub(1));
            hl
        }
    }
}

/// LD (BC),A / LD (DE),A / LD (HL+),A / LD (HL-),A.
pub fn ld_mem_rr_a(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let address = indirect_address(cpu, opcode);
    bus.write8(address, cpu.regs.a);
    2
}

/// LD A,(BC) / LD A,(DE) / LD A,(HL+) / LD A,(HL-).
pub fn ld_a_mem_rr(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let address = indirect_address(cpu, opcode);
    cpu.regs.a = bus.read8(address);
    2
}

/// 0xEA: LD (a16),A.
pub fn ld_a16_a(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let address = cpu.fetch16(bus);
    bus.write8(address, cpu.regs.a);
    4
}

/// 0xFA: LD A,(a16).
pub fn ld_a_a16(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let address = cpu.fetch16(bus);
    cpu.regs.a = bus.read8(address);
    4
}

/// 0xE0: LDH (a8),A, a write into the 0xFF00 page.
pub fn ldh_a8_a(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let offset = cpu.fetch8(bus);
    bus.write8(0xFF00 | offset as u16, cpu.regs.a);
    3
}

/// 0xF0: LDH A,(a8).
pub fn ldh_a_a8(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let offset = cpu.fetch8(bus);
    cpu.regs.a = bus.read8(0xFF00 | offset as u16);
    3
}

/// 0xE2: LD (C),A, the register-indexed high-RAM write.
pub fn ldh_c_a(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let address = 0xFF00 | cpu.regs.read8(Reg8::C) as u16;
    bus.write8(address, cpu.regs.a);
    2
}

/// 0xF2: LD A,(C).
pub fn ldh_a_c(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let address = 0xFF00 | cpu.regs.read8(Reg8::C) as u16;
    cpu.regs.a = bus.read8(address);
    2
}

/// 0x08: LD (a16),SP, little-endian.
pub fn ld_a16_sp(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let address = cpu.fetch16(bus);
    bus.write16(address, cpu.regs.sp());
    5
}

/// 0xF9: LD SP,HL.
pub fn ld_sp_hl(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let hl = cpu.regs.read16(Reg16::HL);
    cpu.regs.set_sp(hl);
    2
}

/// 0xF8: LD HL,SP+r8. Flags come from the low-byte addition.
pub fn ld_hl_sp_r8(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let offset = cpu.fetch8(bus);
    let (value, flags) = crate::cpu::alu::add16_signed(cpu.regs.sp(), offset);
    cpu.regs.write16(Reg16::HL, value);
    cpu.regs.set_flags(flags);
    3
}
