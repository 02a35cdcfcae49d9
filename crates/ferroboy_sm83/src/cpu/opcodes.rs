//! The two 256-entry dispatch tables: `BASE` for the primary opcode byte,
//! `EXTENDED` for the page behind the 0xCB prefix.
//!
//! Each slot carries the display mnemonic (with `d8`/`d16`/`a8`/`a16`/`r8`
//! placeholders the disassembler fills in), the instruction's byte length
//! and the handler function. The tables are plain data built once, so they
//! can be inspected as well as dispatched through. Unassigned base slots
//! keep the illegal-opcode handler; the extended page is fully populated.

use once_cell::sync::Lazy;

use super::ops::{alu, cb, control, ld, stack, system};
use super::{Bus, Cpu};

/// Handler signature. The opcode byte is passed back in so one handler can
/// serve a whole family by decoding register and condition fields.
pub type OpFn = fn(&mut Cpu, &mut dyn Bus, u8) -> u32;

#[derive(Clone, Copy)]
pub struct OpSlot {
    pub mnemonic: &'static str,
    pub length: u8,
    pub exec: OpFn,
}

/// Mnemonic shared by the 11 unassigned base-table slots.
pub const ILLEGAL_MNEMONIC: &str = "??";

const ILLEGAL: OpSlot = OpSlot {
    mnemonic: ILLEGAL_MNEMONIC,
    length: 1,
    exec: system::illegal,
};

pub static BASE: Lazy<[OpSlot; 256]> = Lazy::new(build_base);
pub static EXTENDED: Lazy<[OpSlot; 256]> = Lazy::new(build_extended);

fn set(table: &mut [OpSlot; 256], code: u8, mnemonic: &'static str, length: u8, exec: OpFn) {
    table[code as usize] = OpSlot {
        mnemonic,
        length,
        exec,
    };
}

/// Mnemonics for the LD block 0x40-0x7F, row = destination, column =
/// source, both in operand-bit order (B C D E H L (HL) A). Slot 0x76 is
/// HALT and is assigned separately.
#[rustfmt::skip]
const LD_BLOCK: [&str; 64] = [
    "LD B, B", "LD B, C", "LD B, D", "LD B, E", "LD B, H", "LD B, L", "LD B, (HL)", "LD B, A",
    "LD C, B", "LD C, C", "LD C, D", "LD C, E", "LD C, H", "LD C, L", "LD C, (HL)", "LD C, A",
    "LD D, B", "LD D, C", "LD D, D", "LD D, E", "LD D, H", "LD D, L", "LD D, (HL)", "LD D, A",
    "LD E, B", "LD E, C", "LD E, D", "LD E, E", "LD E, H", "LD E, L", "LD E, (HL)", "LD E, A",
    "LD H, B", "LD H, C", "LD H, D", "LD H, E", "LD H, H", "LD H, L", "LD H, (HL)", "LD H, A",
    "LD L, B", "LD L, C", "LD L, D", "LD L, E", "LD L, H", "LD L, L", "LD L, (HL)", "LD L, A",
    "LD (HL), B", "LD (HL), C", "LD (HL), D", "LD (HL), E", "LD (HL), H", "LD (HL), L", "HALT", "LD (HL), A",
    "LD A, B", "LD A, C", "LD A, D", "LD A, E", "LD A, H", "LD A, L", "LD A, (HL)", "LD A, A",
];

/// Mnemonics for the accumulator block 0x80-0xBF, row = operation,
/// column = source operand.
#[rustfmt::skip]
const ALU_BLOCK: [&str; 64] = [
    "ADD A, B", "ADD A, C", "ADD A, D", "ADD A, E", "ADD A, H", "ADD A, L", "ADD A, (HL)", "ADD A, A",
    "ADC A, B", "ADC A, C", "ADC A, D", "ADC A, E", "ADC A, H", "ADC A, L", "ADC A, (HL)", "ADC A, A",
    "SUB B", "SUB C", "SUB D", "SUB E", "SUB H", "SUB L", "SUB (HL)", "SUB A",
    "SBC A, B", "SBC A, C", "SBC A, D", "SBC A, E", "SBC A, H", "SBC A, L", "SBC A, (HL)", "SBC A, A",
    "AND B", "AND C", "AND D", "AND E", "AND H", "AND L", "AND (HL)", "AND A",
    "XOR B", "XOR C", "XOR D", "XOR E", "XOR H", "XOR L", "XOR (HL)", "XOR A",
    "OR B", "OR C", "OR D", "OR E", "OR H", "OR L", "OR (HL)", "OR A",
    "CP B", "CP C", "CP D", "CP E", "CP H", "CP L", "CP (HL)", "CP A",
];

fn build_base() -> [OpSlot; 256] {
    let mut t = [ILLEGAL; 256];

    set(&mut t, 0x00, "NOP", 1, system::nop);
    set(&mut t, 0x01, "LD BC, d16", 3, ld::ld_rr_d16);
    set(&mut t, 0x02, "LD (BC), A", 1, ld::ld_mem_rr_a);
    set(&mut t, 0x03, "INC BC", 1, alu::inc_rr);
    set(&mut t, 0x04, "INC B", 1, alu::inc_r);
    set(&mut t, 0x05, "DEC B", 1, alu::dec_r);
    set(&mut t, 0x06, "LD B, d8", 2, ld::ld_r_d8);
    set(&mut t, 0x07, "RLCA", 1, alu::rotate_a);
    set(&mut t, 0x08, "LD (a16), SP", 3, ld::ld_a16_sp);
    set(&mut t, 0x09, "ADD HL, BC", 1, alu::add_hl_rr);
    set(&mut t, 0x0A, "LD A, (BC)", 1, ld::ld_a_mem_rr);
    set(&mut t, 0x0B, "DEC BC", 1, alu::dec_rr);
    set(&mut t, 0x0C, "INC C", 1, alu::inc_r);
    set(&mut t, 0x0D, "DEC C", 1, alu::dec_r);
    set(&mut t, 0x0E, "LD C, d8", 2, ld::ld_r_d8);
    set(&mut t, 0x0F, "RRCA", 1, alu::rotate_a);

    set(&mut t, 0x10, "STOP", 2, system::stop);
    set(&mut t, 0x11, "LD DE, d16", 3, ld::ld_rr_d16);
    set(&mut t, 0x12, "LD (DE), A", 1, ld::ld_mem_rr_a);
    set(&mut t, 0x13, "INC DE", 1, alu::inc_rr);
    set(&mut t, 0x14, "INC D", 1, alu::inc_r);
    set(&mut t, 0x15, "DEC D", 1, alu::dec_r);
    set(&mut t, 0x16, "LD D, d8", 2, ld::ld_r_d8);
    set(&mut t, 0x17, "RLA", 1, alu::rotate_a);
    set(&mut t, 0x18, "JR r8", 2, control::jr_r8);
    set(&mut t, 0x19, "ADD HL, DE", 1, alu::add_hl_rr);
    set(&mut t, 0x1A, "LD A, (DE)", 1, ld::ld_a_mem_rr);
    set(&mut t, 0x1B, "DEC DE", 1, alu::dec_rr);
    set(&mut t, 0x1C, "INC E", 1, alu::inc_r);
    set(&mut t, 0x1D, "DEC E", 1, alu::dec_r);
    set(&mut t, 0x1E, "LD E, d8", 2, ld::ld_r_d8);
    set(&mut t, 0x1F, "RRA", 1, alu::rotate_a);

    set(&mut t, 0x20, "JR NZ, r8", 2, control::jr_cc_r8);
    set(&mut t, 0x21, "LD HL, d16", 3, ld::ld_rr_d16);
    set(&mut t, 0x22, "LD (HL+), A", 1, ld::ld_mem_rr_a);
    set(&mut t, 0x23, "INC HL", 1, alu::inc_rr);
    set(&mut t, 0x24, "INC H", 1, alu::inc_r);
    set(&mut t, 0x25, "DEC H", 1, alu::dec_r);
    set(&mut t, 0x26, "LD H, d8", 2, ld::ld_r_d8);
    set(&mut t, 0x27, "DAA", 1, alu::daa);
    set(&mut t, 0x28, "JR Z, r8", 2, control::jr_cc_r8);
    set(&mut t, 0x29, "ADD HL, HL", 1, alu::add_hl_rr);
    set(&mut t, 0x2A, "LD A, (HL+)", 1, ld::ld_a_mem_rr);
    set(&mut t, 0x2B, "DEC HL", 1, alu::dec_rr);
    set(&mut t, 0x2C, "INC L", 1, alu::inc_r);
    set(&mut t, 0x2D, "DEC L", 1, alu::dec_r);
    set(&mut t, 0x2E, "LD L, d8", 2, ld::ld_r_d8);
    set(&mut t, 0x2F, "CPL", 1, alu::cpl);

    set(&mut t, 0x30, "JR NC, r8", 2, control::jr_cc_r8);
    set(&mut t, 0x31, "LD SP, d16", 3, ld::ld_rr_d16);
    set(&mut t, 0x32, "LD (HL-), A", 1, ld::ld_mem_rr_a);
    set(&mut t, 0x33, "INC SP", 1, alu::inc_rr);
    set(&mut t, 0x34, "INC (HL)", 1, alu::inc_r);
    set(&mut t, 0x35, "DEC (HL)", 1, alu::dec_r);
    set(&mut t, 0x36, "LD (HL), d8", 2, ld::ld_r_d8);
    set(&mut t, 0x37, "SCF", 1, alu::scf);
    set(&mut t, 0x38, "JR C, r8", 2, control::jr_cc_r8);
    set(&mut t, 0x39, "ADD HL, SP", 1, alu::add_hl_rr);
    set(&mut t, 0x3A, "LD A, (HL-)", 1, ld::ld_a_mem_rr);
    set(&mut t, 0x3B, "DEC SP", 1, alu::dec_rr);
    set(&mut t, 0x3C, "INC A", 1, alu::inc_r);
    set(&mut t, 0x3D, "DEC A", 1, alu::dec_r);
    set(&mut t, 0x3E, "LD A, d8", 2, ld::ld_r_d8);
    set(&mut t, 0x3F, "CCF", 1, alu::ccf);

    for code in 0x40..=0x7Fu8 {
        set(&mut t, code, LD_BLOCK[(code - 0x40) as usize], 1, ld::ld_r_r);
    }
    set(&mut t, 0x76, "HALT", 1, system::halt);

    for code in 0x80..=0xBFu8 {
        set(&mut t, code, ALU_BLOCK[(code - 0x80) as usize], 1, alu::alu_a_r);
    }

    set(&mut t, 0xC0, "RET NZ", 1, control::ret_cc);
    set(&mut t, 0xC1, "POP BC", 1, stack::pop_rr);
    set(&mut t, 0xC2, "JP NZ, a16", 3, control::jp_cc_a16);
    set(&mut t, 0xC3, "JP a16", 3, control::jp_a16);
    set(&mut t, 0xC4, "CALL NZ, a16", 3, control::call_cc_a16);
    set(&mut t, 0xC5, "PUSH BC", 1, stack::push_rr);
    set(&mut t, 0xC6, "ADD A, d8", 2, alu::alu_a_d8);
    set(&mut t, 0xC7, "RST 00H", 1, control::rst);
    set(&mut t, 0xC8, "RET Z", 1, control::ret_cc);
    set(&mut t, 0xC9, "RET", 1, control::ret);
    set(&mut t, 0xCA, "JP Z, a16", 3, control::jp_cc_a16);
    set(&mut t, 0xCB, "PREFIX CB", 2, cb::prefix);
    set(&mut t, 0xCC, "CALL Z, a16", 3, control::call_cc_a16);
    set(&mut t, 0xCD, "CALL a16", 3, control::call_a16);
    set(&mut t, 0xCE, "ADC A, d8", 2, alu::alu_a_d8);
    set(&mut t, 0xCF, "RST 08H", 1, control::rst);

    set(&mut t, 0xD0, "RET NC", 1, control::ret_cc);
    set(&mut t, 0xD1, "POP DE", 1, stack::pop_rr);
    set(&mut t, 0xD2, "JP NC, a16", 3, control::jp_cc_a16);
    set(&mut t, 0xD4, "CALL NC, a16", 3, control::call_cc_a16);
    set(&mut t, 0xD5, "PUSH DE", 1, stack::push_rr);
    set(&mut t, 0xD6, "SUB d8", 2, alu::alu_a_d8);
    set(&mut t, 0xD7, "RST 10H", 1, control::rst);
    set(&mut t, 0xD8, "RET C", 1, control::ret_cc);
    set(&mut t, 0xD9, "RETI", 1, control::reti);
    set(&mut t, 0xDA, "JP C, a16", 3, control::jp_cc_a16);
    set(&mut t, 0xDC, "CALL C, a16", 3, control::call_cc_a16);
    set(&mut t, 0xDE, "SBC A, d8", 2, alu::alu_a_d8);
    set(&mut t, 0xDF, "RST 18H", 1, control::rst);

    set(&mut t, 0xE0, "LDH (a8), A", 2, ld::ldh_a8_a);
    set(&mut t, 0xE1, "POP HL", 1, stack::pop_rr);
    set(&mut t, 0xE2, "LD (C), A", 1, ld::ldh_c_a);
    set(&mut t, 0xE5, "PUSH HL", 1, stack::push_rr);
    set(&mut t, 0xE6, "AND d8", 2, alu::alu_a_d8);
    set(&mut t, 0xE7, "RST 20H", 1, control::rst);
    set(&mut t, 0xE8, "ADD SP, r8", 2, alu::add_sp_r8);
    set(&mut t, 0xE9, "JP HL", 1, control::jp_hl);
    set(&mut t, 0xEA, "LD (a16), A", 3, ld::ld_a16_a);
    set(&mut t, 0xEE, "XOR d8", 2, alu::alu_a_d8);
    set(&mut t, 0xEF, "RST 28H", 1, control::rst);

    set(&mut t, 0xF0, "LDH A, (a8)", 2, ld::ldh_a_a8);
    set(&mut t, 0xF1, "POP AF", 1, stack::pop_rr);
    set(&mut t, 0xF2, "LD A, (C)", 1, ld::ldh_a_c);
    set(&mut t, 0xF3, "DI", 1, system::di);
    set(&mut t, 0xF5, "PUSH AF", 1, stack::push_rr);
    set(&mut t, 0xF6, "OR d8", 2, alu::alu_a_d8);
    set(&mut t, 0xF7, "RST 30H", 1, control::rst);
    set(&mut t, 0xF8, "LD HL, SP+r8", 2, ld::ld_hl_sp_r8);
    set(&mut t, 0xF9, "LD SP, HL", 1, ld::ld_sp_hl);
    set(&mut t, 0xFA, "LD A, (a16)", 3, ld::ld_a_a16);
    set(&mut t, 0xFB, "EI", 1, system::ei);
    set(&mut t, 0xFE, "CP d8", 2, alu::alu_a_d8);
    set(&mut t, 0xFF, "RST 38H", 1, control::rst);

    // 0xD3 0xDB 0xDD 0xE3 0xE4 0xEB 0xEC 0xED 0xF4 0xFC 0xFD keep the
    // illegal-opcode handler the array was seeded with.
    t
}

/// Mnemonics for the CB rotate/shift block 0x00-0x3F.
#[rustfmt::skip]
const ROT_BLOCK: [&str; 64] = [
    "RLC B", "RLC C", "RLC D", "RLC E", "RLC H", "RLC L", "RLC (HL)", "RLC A",
    "RRC B", "RRC C", "RRC D", "RRC E", "RRC H", "RRC L", "RRC (HL)", "RRC A",
    "RL B", "RL C", "RL D", "RL E", "RL H", "RL L", "RL (HL)", "RL A",
    "RR B", "RR C", "RR D", "RR E", "RR H", "RR L", "RR (HL)", "RR A",
    "SLA B", "SLA C", "SLA D", "SLA E", "SLA H", "SLA L", "SLA (HL)", "SLA A",
    "SRA B", "SRA C", "SRA D", "SRA E", "SRA H", "SRA L", "SRA (HL)", "SRA A",
    "SWAP B", "SWAP C", "SWAP D", "SWAP E", "SWAP H", "SWAP L", "SWAP (HL)", "SWAP A",
    "SRL B", "SRL C", "SRL D", "SRL E", "SRL H", "SRL L", "SRL (HL)", "SRL A",
];

/// Mnemonics for CB 0x40-0xFF: BIT, RES, SET over each bit and target.
#[rustfmt::skip]
const BIT_BLOCK: [&str; 64] = [
    "BIT 0, B", "BIT 0, C", "BIT 0, D", "BIT 0, E", "BIT 0, H", "BIT 0, L", "BIT 0, (HL)", "BIT 0, A",
    "BIT 1, B", "BIT 1, C", "BIT 1, D", "BIT 1, E", "BIT 1, H", "BIT 1, L", "BIT 1, (HL)", "BIT 1, A",
    "BIT 2, B", "BIT 2, C", "BIT 2, D", "BIT 2, E", "BIT 2, H", "BIT 2, L", "BIT 2, (HL)", "BIT 2, A",
    "BIT 3, B", "BIT 3, C", "BIT 3, D", "BIT 3, E", "BIT 3, H", "BIT 3, L", "BIT 3, (HL)", "BIT 3, A",
    "BIT 4, B", "BIT 4, C", "BIT 4, D", "BIT 4, E", "BIT 4, H", "BIT 4, L", "BIT 4, (HL)", "BIT 4, A",
    "BIT 5, B", "BIT 5, C", "BIT 5, D", "BIT 5, E", "BIT 5, H", "BIT 5, L", "BIT 5, (HL)", "BIT 5, A",
    "BIT 6, B", "BIT 6, C", "BIT 6, D", "BIT 6, E", "BIT 6, H", "BIT 6, L", "BIT 6, (HL)", "BIT 6, A",
    "BIT 7, B", "BIT 7, C", "BIT 7, D", "BIT 7, E", "BIT 7, H", "BIT 7, L", "BIT 7, (HL)", "BIT 7, A",
];

#[rustfmt::skip]
const RES_BLOCK: [&str; 64] = [
    "RES 0, B", "RES 0, C", "RES 0, D", "RES 0, E", "RES 0, H", "RES 0, L", "RES 0, (HL)", "RES 0, A",
    "RES 1, B", "RES 1, C", "RES 1, D", "RES 1, E", "RES 1, H", "RES 1, L", "RES 1, (HL)", "RES 1, A",
    "RES 2, B", "RES 2, C", "RES 2, D", "RES 2, E", "RES 2, H", "RES 2, L", "RES 2, (HL)", "RES 2, A",
    "RES 3, B", "RES 3, C", "RES 3, D", "RES 3, E", "RES 3, H", "RES 3, L", "RES 3, (HL)", "RES 3, A",
    "RES 4, B", "RES 4, C", "RES 4, D", "RES 4, E", "RES 4, H", "RES 4, L", "RES 4, (HL)", "RES 4, A",
    "RES 5, B", "RES 5, C", "RES 5, D", "RES 5, E", "RES 5, H", "RES 5, L", "RES 5, (HL)", "RES 5, A",
    "RES 6, B", "RES 6, C", "RES 6, D", "RES 6, E", "RES 6, H", "RES 6, L", "RES 6, (HL)", "RES 6, A",
    "RES 7, B", "RES 7, C", "RES 7, D", "RES 7, E", "RES 7, H", "RES 7, L", "RES 7, (HL)", "RES 7, A",
];

#[rustfmt::skip]
const SET_BLOCK: [&str; 64] = [
    "SET 0, B", "SET 0, C", "SET 0, D", "SET 0, E", "SET 0, H", "SET 0, L", "SET 0, (HL)", "SET 0, A",
    "SET 1, B", "SET 1, C", "SET 1, D", "SET 1, E", "SET 1, H", "SET 1, L", "SET 1, (HL)", "SET 1, A",
    "SET 2, B", "SET 2, C", "SET 2, D", "SET 2, E", "SET 2, H", "SET 2, L", "SET 2, (HL)", "SET 2, A",
    "SET 3, B", "SET 3, C", "SET 3, D", "SET 3, E", "SET 3, H", "SET 3, L", "SET 3, (HL)", "SET 3, A",
    "SET 4, B", "SET 4, C", "SET 4, D", "SET 4, E", "SET 4, H", "SET 4, L", "SET 4, (HL)", "SET 4, A",
    "SET 5, B", "SET 5, C", "SET 5, D", "SET 5, E", "SET 5, H", "SET 5, L", "SET 5, (HL)", "SET 5, A",
    "SET 6, B", "SET 6, C", "SET 6, D", "SET 6, E", "SET 6, H", "SET 6, L", "SET 6, (HL)", "SET 6, A",
    "SET 7, B", "SET 7, C", "SET 7, D", "SET 7, E", "SET 7, H", "SET 7, L", "SET 7, (HL)", "SET 7, A",
];

fn build_extended() -> [OpSlot; 256] {
    let mut t = [ILLEGAL; 256];
    for code in 0x00..=0x3Fu8 {
        set(&mut t, code, ROT_BLOCK[code as usize], 2, cb::rot_r);
    }
    for code in 0x40..=0x7Fu8 {
        set(&mut t, code, BIT_BLOCK[(code - 0x40) as usize], 2, cb::bit_n_r);
    }
    for code in 0x80..=0xBFu8 {
        set(&mut t, code, RES_BLOCK[(code - 0x80) as usize], 2, cb::res_n_r);
    }
    for code in 0xC0..=0xFFu8 {
        set(&mut t, code, SET_BLOCK[(code - 0xC0) as usize], 2, cb::set_n_r);
    }
    t
}
