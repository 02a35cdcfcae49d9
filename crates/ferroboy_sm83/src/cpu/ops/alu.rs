//! Arithmetic family: the 0x80-0xBF accumulator block, immediates,
//! INC/DEC, 16-bit adds and the accumulator rotates.

use crate::cpu::alu;
use crate::cpu::regs::{Flags, Reg16};
use crate::cpu::{operand_is_mem, Bus, Cpu};

/// Apply one of the eight accumulator operations, selected by opcode
/// bits 3-5: ADD, ADC, SUB, SBC, AND, XOR, OR, CP.
fn apply_accumulator_op(cpu: &mut Cpu, family: u8, operand: u8) {
    let a = cpu.regs.a;
    let carry_in = cpu.regs.is_set_flag(Flags::C);
    let (value, flags) = match family & 0x07 {
        0 => alu::add(a, operand),
        1 => alu::adc(a, operand, carry_in),
        2 => alu::sub(a, operand),
        3 => alu::sbc(a, operand, carry_in),
        4 => alu::and(a, operand),
        5 => alu::xor(a, operand),
        6 => alu::or(a, operand),
        _ => (a, alu::cp(a, operand)),
    };
    cpu.regs.a = value;
    cpu.regs.set_flags(flags);
}

/// 0x80-0xBF: accumulator op against a register or (HL).
pub fn alu_a_r(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let src = opcode & 0x07;
    let operand = cpu.read_operand(bus, src);
    apply_accumulator_op(cpu, opcode >> 3, operand);
    if operand_is_mem(src) {
        2
    } else {
        1
    }
}

/// 0xC6/0xCE/0xD6/0xDE/0xE6/0xEE/0xF6/0xFE: accumulator op against d8.
pub fn alu_a_d8(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let operand = cpu.fetch8(bus);
    apply_accumulator_op(cpu, opcode >> 3, operand);
    2
}

/// INC r / INC (HL). Carry is untouched.
pub fn inc_r(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let dst = (opcode >> 3) & 0x07;
    let (value, flags) = alu::inc(cpu.read_operand(bus, dst), cpu.regs.flags());
    cpu.write_operand(bus, dst, value);
    cpu.regs.set_flags(flags);
    if operand_is_mem(dst) {
        3
    } else {
        1
    }
}

/// DEC r / DEC (HL). Carry is untouched.
pub fn dec_r(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let dst = (opcode >> 3) & 0x07;
    let (value, flags) = alu::dec(cpu.read_operand(bus, dst), cpu.regs.flags());
    cpu.write_operand(bus, dst, value);
    cpu.regs.set_flags(flags);
    if operand_is_mem(dst) {
        3
    } else {
        1
    }
}

/// 0x03/0x13/0x23/0x33: INC rr. No flags.
pub fn inc_rr(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) -> u32 {
    let pair = Reg16::from_pair_bits(opcode >> 4, false);
    let value = cpu.regs.read16(pair).wrapping_add(1);
    cpu.regs.write16(pair, value);
    2
}

/// 0x0B/0x1B/0x2B/0x3B: DEC rr. No flags.
pub fn dec_rr(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) -> u32 {
    let pair = Reg16::from_pair_bits(opcode >> 4, false);
    let value = cpu.regs.read16(pair).wrapping_sub(1);
    cpu.regs.write16(pair, value);
    2
}

/// 0x09/0x19/0x29/0x39: ADD HL,rr. Z survives, N clears, H/C from bits
/// 11 and 15.
pub fn add_hl_rr(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) -> u32 {
    let pair = Reg16::from_pair_bits(opcode >> 4, false);
    let hl = cpu.regs.read16(Reg16::HL);
    let (value, flags) = alu::add16(hl, cpu.regs.read16(pair), cpu.regs.flags());
    cpu.regs.write16(Reg16::HL, value);
    cpu.regs.set_flags(flags);
    2
}

/// 0xE8: ADD SP,r8. Flags from the low-byte addition, Z and N clear.
pub fn add_sp_r8(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let offset = cpu.fetch8(bus);
    let (value, flags) = alu::add16_signed(cpu.regs.sp(), offset);
    cpu.regs.set_sp(value);
    cpu.regs.set_flags(flags);
    4
}

/// 0x27: DAA.
pub fn daa(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let (value, flags) = alu::daa(cpu.regs.a, cpu.regs.flags());
    cpu.regs.a = value;
    cpu.regs.set_flags(flags);
    1
}

/// 0x2F: CPL. Sets N and H, leaves Z and C.
pub fn cpl(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.regs.a = !cpu.regs.a;
    cpu.regs.set_flag(Flags::N, true);
    cpu.regs.set_flag(Flags::H, true);
    1
}

/// 0x37: SCF.
pub fn scf(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.regs.set_flag(Flags::N, false);
    cpu.regs.set_flag(Flags::H, false);
    cpu.regs.set_flag(Flags::C, true);
    1
}

/// 0x3F: CCF.
pub fn ccf(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let carry = cpu.regs.is_set_flag(Flags::C);
    cpu.regs.set_flag(Flags::N, false);
    cpu.regs.set_flag(Flags::H, false);
    cpu.regs.set_flag(Flags::C, !carry);
    1
}

/// 0x07/0x0F/0x17/0x1F: the accumulator rotates. Same operations as the
/// CB forms but Z is always cleared.
pub fn rotate_a(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) -> u32 {
    let carry_in = cpu.regs.is_set_flag(Flags::C);
    let (value, flags) = match (opcode >> 3) & 0x03 {
        0 => alu::rlc(cpu.regs.a),
        1 => alu::rrc(cpu.regs.a),
        2 => alu::rl(cpu.regs.a, carry_in),
        _ => alu::rr(cpu.regs.a, carry_in),
    };
    cpu.regs.a = value;
    cpu.regs.set_flags(flags & Flags::C);
    1
}
