use super::interrupts::{IE_ADDRESS, IF_ADDRESS};
use super::regs::{Flags, Reg16};
use super::{disasm, opcodes, Bus, Cpu};

struct TestBus {
    memory: [u8; 0x10000],
}

impl TestBus {
    fn with_program(program: &[u8]) -> Self {
        let mut memory = [0; 0x10000];
        memory[..program.len()].copy_from_slice(program);
        TestBus { memory }
    }
}

impl Bus for TestBus {
    fn read8(&mut self, address: u16) -> u8 {
        self.memory[address as usize]
    }

    fn write8(&mut self, address: u16, value: u8) {
        self.memory[address as usize] = value;
    }
}

#[test]
fn ld_between_registers() {
    let mut bus = TestBus::with_program(&[0x41]); // LD B, C
    let mut cpu = Cpu::new();
    cpu.regs.c = 0x7E;

    let cycles = cpu.step(&mut bus, false);
    assert_eq!(cycles, 1);
    assert_eq!(cpu.regs.b, 0x7E);
    assert_eq!(cpu.regs.pc(), 1);
}

#[test]
fn ld_through_hl() {
    let mut bus = TestBus::with_program(&[0x46, 0x70]); // LD B,(HL); LD (HL),B
    let mut cpu = Cpu::new();
    cpu.regs.write16(Reg16::HL, 0xC000);
    bus.write8(0xC000, 0x99);

    assert_eq!(cpu.step(&mut bus, false), 2);
    assert_eq!(cpu.regs.b, 0x99);

    bus.write8(0xC000, 0x00);
    assert_eq!(cpu.step(&mut bus, false), 2);
    assert_eq!(bus.read8(0xC000), 0x99);
}

#[test]
fn ld_immediates() {
    // LD BC,0x1234; LD A,0x42; LD (HL),0x55
    let mut bus = TestBus::with_program(&[0x01, 0x34, 0x12, 0x3E, 0x42, 0x36, 0x55]);
    let mut cpu = Cpu::new();
    cpu.regs.write16(Reg16::HL, 0xC000);

    assert_eq!(cpu.step(&mut bus, false), 3);
    assert_eq!(cpu.regs.read16(Reg16::BC), 0x1234);

    assert_eq!(cpu.step(&mut bus, false), 2);
    assert_eq!(cpu.regs.a, 0x42);

    assert_eq!(cpu.step(&mut bus, false), 3);
    assert_eq!(bus.read8(0xC000), 0x55);
    assert_eq!(cpu.regs.pc(), 7);
}

#[test]
fn high_ram_loads() {
    // LDH (0x80),A; LDH A,(0x81); LD (C),A
    let mut bus = TestBus::with_program(&[0xE0, 0x80, 0xF0, 0x81, 0xE2]);
    let mut cpu = Cpu::new();
    cpu.regs.a = 0x11;
    bus.write8(0xFF81, 0x22);

    assert_eq!(cpu.step(&mut bus, false), 3);
    assert_eq!(bus.read8(0xFF80), 0x11);

    assert_eq!(cpu.step(&mut bus, false), 3);
    assert_eq!(cpu.regs.a, 0x22);

    cpu.regs.c = 0x90;
    assert_eq!(cpu.step(&mut bus, false), 2);
    assert_eq!(bus.read8(0xFF90), 0x22);
}

#[test]
fn hl_post_increment_and_decrement() {
    let mut bus = TestBus::with_program(&[0x22, 0x3A]); // LD (HL+),A; LD A,(HL-)
    let mut cpu = Cpu::new();
    cpu.regs.a = 0x5A;
    cpu.regs.write16(Reg16::HL, 0xC000);

    cpu.step(&mut bus, false);
    assert_eq!(bus.read8(0xC000), 0x5A);
    assert_eq!(cpu.regs.read16(Reg16::HL), 0xC001);

    bus.write8(0xC001, 0xA5);
    cpu.step(&mut bus, false);
    assert_eq!(cpu.regs.a, 0xA5);
    assert_eq!(cpu.regs.read16(Reg16::HL), 0xC000);
}

#[test]
fn store_sp_to_memory() {
    let mut bus = TestBus::with_program(&[0x08, 0x00, 0xC0]); // LD (0xC000),SP
    let mut cpu = Cpu::new();
    cpu.regs.set_sp(0xBEEF);

    assert_eq!(cpu.step(&mut bus, false), 5);
    assert_eq!(bus.read8(0xC000), 0xEF);
    assert_eq!(bus.read8(0xC001), 0xBE);
}

#[test]
fn accumulator_block() {
    // ADD A,B; ADC A,C; SUB D; CP E
    let mut bus = TestBus::with_program(&[0x80, 0x89, 0x92, 0xBB]);
    let mut cpu = Cpu::new();
    cpu.regs.a = 0xFF;
    cpu.regs.b = 0x01;
    cpu.regs.c = 0x0F;
    cpu.regs.d = 0x05;
    cpu.regs.e = 0x0B;

    // 0xFF + 0x01 = 0x00, Z H C
    cpu.step(&mut bus, false);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.flags(), Flags::Z | Flags::H | Flags::C);

    // 0x00 + 0x0F + carry = 0x10, H
    cpu.step(&mut bus, false);
    assert_eq!(cpu.regs.a, 0x10);
    assert_eq!(cpu.regs.flags(), Flags::H);

    // 0x10 - 0x05 = 0x0B, N H
    cpu.step(&mut bus, false);
    assert_eq!(cpu.regs.a, 0x0B);
    assert_eq!(cpu.regs.flags(), Flags::N | Flags::H);

    // CP 0x0B: equal, A untouched
    cpu.step(&mut bus, false);
    assert_eq!(cpu.regs.a, 0x0B);
    assert_eq!(cpu.regs.flags(), Flags::Z | Flags::N);
}

#[test]
fn alu_against_hl_costs_two_cycles() {
    let mut bus = TestBus::with_program(&[0x86]); // ADD A,(HL)
    let mut cpu = Cpu::new();
    cpu.regs.write16(Reg16::HL, 0xC000);
    bus.write8(0xC000, 0x20);
    cpu.regs.a = 0x22;

    assert_eq!(cpu.step(&mut bus, false), 2);
    assert_eq!(cpu.regs.a, 0x42);
}

#[test]
fn inc_keeps_carry_dec_keeps_carry() {
    let mut bus = TestBus::with_program(&[0x3C, 0x3D]); // INC A; DEC A
    let mut cpu = Cpu::new();
    cpu.regs.set_flag(Flags::C, true);
    cpu.regs.a = 0xFF;

    cpu.step(&mut bus, false);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.flags(), Flags::Z | Flags::H | Flags::C);

    cpu.step(&mut bus, false);
    assert_eq!(cpu.regs.a, 0xFF);
    assert_eq!(cpu.regs.flags(), Flags::N | Flags::H | Flags::C);
}

#[test]
fn inc_hl_is_memory_and_three_cycles() {
    let mut bus = TestBus::with_program(&[0x34]); // INC (HL)
    let mut cpu = Cpu::new();
    cpu.regs.write16(Reg16::HL, 0xC000);
    bus.write8(0xC000, 0x41);

    assert_eq!(cpu.step(&mut bus, false), 3);
    assert_eq!(bus.read8(0xC000), 0x42);
    assert_eq!(cpu.regs.read16(Reg16::HL), 0xC000);
}

#[test]
fn sixteen_bit_adds() {
    let mut bus = TestBus::with_program(&[0x19, 0xE8, 0x10]); // ADD HL,DE; ADD SP,0x10
    let mut cpu = Cpu::new();
    cpu.regs.write16(Reg16::HL, 0x0FFF);
    cpu.regs.write16(Reg16::DE, 0x0001);
    cpu.regs.set_flag(Flags::Z, true);

    assert_eq!(cpu.step(&mut bus, false), 2);
    assert_eq!(cpu.regs.read16(Reg16::HL), 0x1000);
    // Z survives a 16-bit add, H from bit 11.
    assert_eq!(cpu.regs.flags(), Flags::Z | Flags::H);

    cpu.regs.set_sp(0x00F8);
    assert_eq!(cpu.step(&mut bus, false), 4);
    assert_eq!(cpu.regs.sp(), 0x0108);
    // 0xF8 + 0x10 carries out of bit 7 but not bit 3.
    assert_eq!(cpu.regs.flags(), Flags::C);
}

#[test]
fn ld_hl_sp_plus_offset() {
    let mut bus = TestBus::with_program(&[0xF8, 0xFE]); // LD HL,SP-2
    let mut cpu = Cpu::new();
    cpu.regs.set_sp(0xFFFE);

    assert_eq!(cpu.step(&mut bus, false), 3);
    assert_eq!(cpu.regs.read16(Reg16::HL), 0xFFFC);
    // Low-byte addition 0xFE + 0xFE carries out of bits 3 and 7.
    assert_eq!(cpu.regs.flags(), Flags::H | Flags::C);
}

#[test]
fn daa_after_bcd_addition() {
    // LD A,0x0F; ADD A,0x01; DAA
    let mut bus = TestBus::with_program(&[0x3E, 0x0F, 0xC6, 0x01, 0x27]);
    let mut cpu = Cpu::new();

    cpu.step(&mut bus, false);
    cpu.step(&mut bus, false);
    assert_eq!(cpu.regs.a, 0x10);
    cpu.step(&mut bus, false);
    assert_eq!(cpu.regs.a, 0x16);
}

#[test]
fn jump_costs_depend_on_condition() {
    // JP NZ,0x0010 with Z set: not taken.
    let mut bus = TestBus::with_program(&[0xC2, 0x10, 0x00]);
    let mut cpu = Cpu::new();
    cpu.regs.set_flag(Flags::Z, true);
    assert_eq!(cpu.step(&mut bus, false), 3);
    assert_eq!(cpu.regs.pc(), 3);

    // Same opcode with Z clear: taken.
    let mut bus = TestBus::with_program(&[0xC2, 0x10, 0x00]);
    let mut cpu = Cpu::new();
    assert_eq!(cpu.step(&mut bus, false), 4);
    assert_eq!(cpu.regs.pc(), 0x0010);
}

#[test]
fn relative_jumps() {
    let mut bus = TestBus::with_program(&[0x18, 0x05]); // JR +5
    let mut cpu = Cpu::new();
    assert_eq!(cpu.step(&mut bus, false), 3);
    assert_eq!(cpu.regs.pc(), 0x0007);

    // JR NZ,-2 with Z set: falls through in 2 cycles.
    let mut bus = TestBus::with_program(&[0x20, 0xFE]);
    let mut cpu = Cpu::new();
    cpu.regs.set_flag(Flags::Z, true);
    assert_eq!(cpu.step(&mut bus, false), 2);
    assert_eq!(cpu.regs.pc(), 2);

    // Taken backwards: lands on itself.
    let mut bus = TestBus::with_program(&[0x20, 0xFE]);
    let mut cpu = Cpu::new();
    assert_eq!(cpu.step(&mut bus, false), 3);
    assert_eq!(cpu.regs.pc(), 0);
}

#[test]
fn jp_hl_is_one_cycle() {
    let mut bus = TestBus::with_program(&[0xE9]);
    let mut cpu = Cpu::new();
    cpu.regs.write16(Reg16::HL, 0x4000);
    assert_eq!(cpu.step(&mut bus, false), 1);
    assert_eq!(cpu.regs.pc(), 0x4000);
}

#[test]
fn call_and_ret_roundtrip() {
    let mut bus = TestBus::with_program(&[0xCD, 0x34, 0x12]); // CALL 0x1234
    bus.write8(0x1234, 0xC9); // RET
    let mut cpu = Cpu::new();
    cpu.regs.set_sp(0xFFFE);

    assert_eq!(cpu.step(&mut bus, false), 6);
    assert_eq!(cpu.regs.pc(), 0x1234);
    assert_eq!(cpu.regs.sp(), 0xFFFC);
    assert_eq!(bus.read8(0xFFFC), 0x03);
    assert_eq!(bus.read8(0xFFFD), 0x00);

    assert_eq!(cpu.step(&mut bus, false), 4);
    assert_eq!(cpu.regs.pc(), 0x0003);
    assert_eq!(cpu.regs.sp(), 0xFFFE);
}

#[test]
fn conditional_call_still_consumes_operands() {
    let mut bus = TestBus::with_program(&[0xC4, 0x34, 0x12]); // CALL NZ with Z set
    let mut cpu = Cpu::new();
    cpu.regs.set_sp(0xFFFE);
    cpu.regs.set_flag(Flags::Z, true);

    assert_eq!(cpu.step(&mut bus, false), 3);
    assert_eq!(cpu.regs.pc(), 3);
    assert_eq!(cpu.regs.sp(), 0xFFFE);
}

#[test]
fn conditional_ret_costs() {
    let mut bus = TestBus::with_program(&[0xC8]); // RET Z, not taken
    let mut cpu = Cpu::new();
    assert_eq!(cpu.step(&mut bus, false), 2);
    assert_eq!(cpu.regs.pc(), 1);

    let mut bus = TestBus::with_program(&[0xC8]);
    let mut cpu = Cpu::new();
    cpu.regs.set_flag(Flags::Z, true);
    cpu.regs.set_sp(0xFFFC);
    bus.write8(0xFFFC, 0x00);
    bus.write8(0xFFFD, 0x80);
    assert_eq!(cpu.step(&mut bus, false), 5);
    assert_eq!(cpu.regs.pc(), 0x8000);
}

#[test]
fn rst_jumps_to_fixed_vector() {
    let mut bus = TestBus::with_program(&[0xEF]); // RST 28H
    let mut cpu = Cpu::new();
    cpu.regs.set_sp(0xFFFE);

    assert_eq!(cpu.step(&mut bus, false), 4);
    assert_eq!(cpu.regs.pc(), 0x0028);
    assert_eq!(bus.read8(0xFFFC), 0x01);
}

#[test]
fn push_pop_roundtrip() {
    let mut bus = TestBus::with_program(&[0xC5, 0xD1]); // PUSH BC; POP DE
    let mut cpu = Cpu::new();
    cpu.regs.set_sp(0xFFFE);
    cpu.regs.write16(Reg16::BC, 0xABCD);

    assert_eq!(cpu.step(&mut bus, false), 4);
    assert_eq!(cpu.step(&mut bus, false), 3);
    assert_eq!(cpu.regs.read16(Reg16::DE), 0xABCD);
    assert_eq!(cpu.regs.sp(), 0xFFFE);
}

#[test]
fn pop_af_masks_flag_low_nibble() {
    let mut bus = TestBus::with_program(&[0xF1]); // POP AF
    let mut cpu = Cpu::new();
    cpu.regs.set_sp(0x8000);
    bus.write8(0x8000, 0xFF);
    bus.write8(0x8001, 0x12);

    cpu.step(&mut bus, false);
    assert_eq!(cpu.regs.read16(Reg16::AF), 0x12F0);
}

#[test]
fn interrupt_dispatch() {
    let mut bus = TestBus::with_program(&[0x00]);
    let mut cpu = Cpu::new();
    cpu.ime = true;
    cpu.regs.set_pc(0x0150);
    cpu.regs.set_sp(0xFFFE);
    bus.write8(IE_ADDRESS, 0x04);
    bus.write8(IF_ADDRESS, 0x04);

    let cycles = cpu.step(&mut bus, false);
    assert_eq!(cycles, 5);
    assert_eq!(cpu.regs.pc(), 0x0050);
    assert!(!cpu.ime);
    assert_eq!(bus.read8(IF_ADDRESS), 0x00);
    // Return address on the stack.
    assert_eq!(bus.read8(0xFFFC), 0x50);
    assert_eq!(bus.read8(0xFFFD), 0x01);
}

#[test]
fn vblank_wins_interrupt_priority() {
    let mut bus = TestBus::with_program(&[0x00]);
    let mut cpu = Cpu::new();
    cpu.ime = true;
    cpu.regs.set_sp(0xFFFE);
    bus.write8(IE_ADDRESS, 0x1F);
    bus.write8(IF_ADDRESS, 0x05); // VBlank and Timer

    cpu.step(&mut bus, false);
    assert_eq!(cpu.regs.pc(), 0x0040);
    assert_eq!(bus.read8(IF_ADDRESS), 0x04); // Timer still pending
}

#[test]
fn masked_interrupt_is_not_taken() {
    let mut bus = TestBus::with_program(&[0x00]);
    let mut cpu = Cpu::new();
    cpu.ime = true;
    bus.write8(IE_ADDRESS, 0x01);
    bus.write8(IF_ADDRESS, 0x04); // requested but not enabled

    assert_eq!(cpu.step(&mut bus, false), 1);
    assert_eq!(cpu.regs.pc(), 1);
}

#[test]
fn halt_idles_until_a_line_is_pending() {
    let mut bus = TestBus::with_program(&[0x76, 0x04]); // HALT; INC B
    let mut cpu = Cpu::new();

    cpu.step(&mut bus, false);
    assert!(cpu.halted);

    // Nothing pending: 1-cycle idle, PC does not move.
    assert_eq!(cpu.step(&mut bus, false), 1);
    assert_eq!(cpu.regs.pc(), 1);

    // Pending enabled line with IME off: wakes and resumes execution
    // without dispatching.
    bus.write8(IE_ADDRESS, 0x04);
    bus.write8(IF_ADDRESS, 0x04);
    cpu.step(&mut bus, false);
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.b, 1);
    assert_eq!(bus.read8(IF_ADDRESS), 0x04); // not acknowledged
}

#[test]
fn halt_with_ime_services_the_interrupt() {
    let mut bus = TestBus::with_program(&[0x76]);
    let mut cpu = Cpu::new();
    cpu.ime = true;
    cpu.regs.set_sp(0xFFFE);

    cpu.step(&mut bus, false);
    bus.write8(IE_ADDRESS, 0x01);
    bus.write8(IF_ADDRESS, 0x01);

    assert_eq!(cpu.step(&mut bus, false), 5);
    assert_eq!(cpu.regs.pc(), 0x0040);
}

#[test]
fn ei_takes_effect_one_instruction_late() {
    let mut bus = TestBus::with_program(&[0xFB, 0x00, 0x00]); // EI; NOP; NOP
    let mut cpu = Cpu::new();
    cpu.regs.set_sp(0xFFFE);
    bus.write8(IE_ADDRESS, 0x01);
    bus.write8(IF_ADDRESS, 0x01);

    cpu.step(&mut bus, false); // EI
    assert!(!cpu.ime);

    cpu.step(&mut bus, false); // the shadowed instruction still runs
    assert!(cpu.ime);
    assert_eq!(cpu.regs.pc(), 2);

    assert_eq!(cpu.step(&mut bus, false), 5); // now the dispatch
    assert_eq!(cpu.regs.pc(), 0x0040);
}

#[test]
fn di_cancels_a_pending_ei() {
    let mut bus = TestBus::with_program(&[0xFB, 0xF3, 0x00]); // EI; DI; NOP
    let mut cpu = Cpu::new();

    cpu.step(&mut bus, false);
    cpu.step(&mut bus, false);
    cpu.step(&mut bus, false);
    assert!(!cpu.ime);
}

#[test]
fn reti_restores_ime_immediately() {
    let mut bus = TestBus::with_program(&[0xD9]); // RETI
    let mut cpu = Cpu::new();
    cpu.regs.set_sp(0xFFFC);
    bus.write8(0xFFFC, 0x50);
    bus.write8(0xFFFD, 0x01);
    bus.write8(IE_ADDRESS, 0x01);
    bus.write8(IF_ADDRESS, 0x01);

    assert_eq!(cpu.step(&mut bus, false), 4);
    assert_eq!(cpu.regs.pc(), 0x0150);
    assert!(cpu.ime);

    // No EI-style delay: the very next step dispatches.
    assert_eq!(cpu.step(&mut bus, false), 5);
    assert_eq!(cpu.regs.pc(), 0x0040);
}

#[test]
fn stop_suspends_until_resumed() {
    let mut bus = TestBus::with_program(&[0x10, 0x00, 0x04]); // STOP; INC B
    let mut cpu = Cpu::new();

    cpu.step(&mut bus, false);
    assert!(cpu.stopped);
    assert_eq!(cpu.regs.pc(), 2); // padding byte consumed

    assert_eq!(cpu.step(&mut bus, false), 1);
    assert_eq!(cpu.regs.pc(), 2);

    cpu.resume();
    cpu.step(&mut bus, false);
    assert_eq!(cpu.regs.b, 1);
}

#[test]
fn illegal_opcode_is_a_logged_one_cycle_skip() {
    let mut bus = TestBus::with_program(&[0xD3, 0x04]); // illegal; INC B
    let mut cpu = Cpu::new();

    assert_eq!(cpu.step(&mut bus, false), 1);
    assert_eq!(cpu.regs.pc(), 1);
    assert!(!cpu.halted);

    cpu.step(&mut bus, false);
    assert_eq!(cpu.regs.b, 1);
}

#[test]
fn cb_register_forms() {
    let mut bus = TestBus::with_program(&[0xCB, 0x11, 0xCB, 0x40]); // RL C; BIT 0,B
    let mut cpu = Cpu::new();
    cpu.regs.c = 0x80;

    assert_eq!(cpu.step(&mut bus, false), 2);
    assert_eq!(cpu.regs.c, 0x00);
    assert_eq!(cpu.regs.flags(), Flags::Z | Flags::C);

    cpu.regs.b = 0x01;
    assert_eq!(cpu.step(&mut bus, false), 2);
    // Bit set: Z clear, H set, C preserved from RL above.
    assert_eq!(cpu.regs.flags(), Flags::H | Flags::C);
}

#[test]
fn cb_hl_forms_touch_memory_not_hl() {
    // SET 7,(HL); SLA (HL); BIT 7,(HL)
    let mut bus = TestBus::with_program(&[0xCB, 0xFE, 0xCB, 0x26, 0xCB, 0x7E]);
    let mut cpu = Cpu::new();
    cpu.regs.write16(Reg16::HL, 0xC000);
    bus.write8(0xC000, 0x01);

    assert_eq!(cpu.step(&mut bus, false), 4);
    assert_eq!(bus.read8(0xC000), 0x81);
    assert_eq!(cpu.regs.read16(Reg16::HL), 0xC000);

    assert_eq!(cpu.step(&mut bus, false), 4);
    assert_eq!(bus.read8(0xC000), 0x02);
    assert!(cpu.regs.is_set_flag(Flags::C));

    // BIT only reads, so it is a cycle cheaper.
    assert_eq!(cpu.step(&mut bus, false), 3);
    assert!(cpu.regs.is_set_flag(Flags::Z));
    assert_eq!(bus.read8(0xC000), 0x02);
}

#[test]
fn accumulator_rotates_clear_z() {
    let mut bus = TestBus::with_program(&[0x17]); // RLA
    let mut cpu = Cpu::new();
    cpu.regs.a = 0x80;

    cpu.step(&mut bus, false);
    assert_eq!(cpu.regs.a, 0x00);
    // Result is zero but RLA never sets Z.
    assert_eq!(cpu.regs.flags(), Flags::C);
}

#[test]
fn base_table_shape() {
    assert_eq!(opcodes::BASE[0x00].mnemonic, "NOP");
    assert_eq!(opcodes::BASE[0x76].mnemonic, "HALT");

    let illegal: Vec<usize> = (0..256)
        .filter(|&code| opcodes::BASE[code].mnemonic == opcodes::ILLEGAL_MNEMONIC)
        .collect();
    assert_eq!(
        illegal,
        vec![0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD]
    );

    // The CB page has no unassigned slots.
    assert!((0..256).all(|code| opcodes::EXTENDED[code].mnemonic != opcodes::ILLEGAL_MNEMONIC));
}

#[test]
fn disassembly_fills_immediates() {
    let mut bus = TestBus::with_program(&[0xC3, 0x34, 0x12]);
    assert_eq!(disasm::render(&mut bus, 0), "JP 0x1234");

    let mut bus = TestBus::with_program(&[0x3E, 0x42]);
    assert_eq!(disasm::render(&mut bus, 0), "LD A, 0x42");

    let mut bus = TestBus::with_program(&[0x18, 0xFE]);
    assert_eq!(disasm::render(&mut bus, 0), "JR -2");

    let mut bus = TestBus::with_program(&[0xCB, 0x37]);
    assert_eq!(disasm::render(&mut bus, 0), "SWAP A");

    let mut bus = TestBus::with_program(&[0xD3]);
    assert_eq!(disasm::render(&mut bus, 0), "??");
}

#[test]
fn post_boot_register_state() {
    let mut cpu = Cpu::new();
    cpu.apply_post_boot_state();

    assert_eq!(cpu.regs.read16(Reg16::AF), 0x01B0);
    assert_eq!(cpu.regs.read16(Reg16::BC), 0x0013);
    assert_eq!(cpu.regs.read16(Reg16::DE), 0x00D8);
    assert_eq!(cpu.regs.read16(Reg16::HL), 0x014D);
    assert_eq!(cpu.regs.sp(), 0xFFFE);
    assert_eq!(cpu.regs.pc(), 0x0100);
}

#[test]
fn reset_returns_to_power_on() {
    let mut cpu = Cpu::new();
    cpu.apply_post_boot_state();
    cpu.ime = true;
    cpu.halted = true;

    cpu.reset();
    assert_eq!(cpu.regs, Default::default());
    assert!(!cpu.ime);
    assert!(!cpu.halted);
}
