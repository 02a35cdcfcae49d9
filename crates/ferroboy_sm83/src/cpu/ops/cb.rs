//! The 0xCB-prefixed page: rotates/shifts over any register or (HL),
//! plus BIT/RES/SET.
//!
//! The (HL) forms are read-modify-write against memory; HL itself is only
//! the address. BIT is the exception: it reads without writing back.

use crate::cpu::alu;
use crate::cpu::opcodes;
use crate::cpu::regs::Flags;
use crate::cpu::{operand_is_mem, Bus, Cpu};

/// 0xCB: fetch the second opcode byte and dispatch it through the extended
/// table. The prefix fetch itself costs one cycle on top of the operation.
pub fn prefix(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let sub = cpu.fetch8(bus);
    let slot = &opcodes::EXTENDED[sub as usize];
    1 + (slot.exec)(cpu, bus, sub)
}

/// CB 0x00-0x3F: rotate/shift family, selected by bits 3-5
/// (RLC, RRC, RL, RR, SLA, SRA, SWAP, SRL), target in bits 0-2.
pub fn rot_r(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let target = opcode & 0x07;
    let operand = cpu.read_operand(bus, target);
    let carry_in = cpu.regs.is_set_flag(Flags::C);
    let (value, flags) = match (opcode >> 3) & 0x07 {
        0 => alu::rlc(operand),
        1 => alu::rrc(operand),
        2 => alu::rl(operand, carry_in),
        3 => alu::rr(operand, carry_in),
        4 => alu::sla(operand),
        5 => alu::sra(operand),
        6 => alu::swap(operand),
        _ => alu::srl(operand),
    };
    cpu.write_operand(bus, target, value);
    cpu.regs.set_flags(flags);
    if operand_is_mem(target) {
        3
    } else {
        1
    }
}

/// CB 0x40-0x7F: BIT n,r. Read-only, so the (HL) form is a cycle cheaper
/// than the mutating ones.
pub fn bit_n_r(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let target = opcode & 0x07;
    let n = (opcode >> 3) & 0x07;
    let operand = cpu.read_operand(bus, target);
    let flags = alu::bit(n, operand, cpu.regs.flags());
    cpu.regs.set_flags(flags);
    if operand_is_mem(target) {
        2
    } else {
        1
    }
}

/// CB 0x80-0xBF: RES n,r. No flags.
pub fn res_n_r(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let target = opcode & 0x07;
    let n = (opcode >> 3) & 0x07;
    let operand = cpu.read_operand(bus, target);
    cpu.write_operand(bus, target, operand & !(1 << n));
    if operand_is_mem(target) {
        3
    } else {
        1
    }
}

/// CB 0xC0-0xFF: SET n,r. No flags.
pub fn set_n_r(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let target = opcode & 0x07;
    let n = (opcode >> 3) & 0x07;
    let operand = cpu.read_operand(bus, target);
    cpu.write_operand(bus, target, operand | (1 << n));
    if operand_is_mem(target) {
        3
    } else {
        1
    }
}
