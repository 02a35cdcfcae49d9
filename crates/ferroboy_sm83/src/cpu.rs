//! The SM83 CPU core.
//!
//! `Cpu` owns the register file and the interrupt-enable state; everything
//! else (memory, I/O registers, the interrupt flag bytes) sits behind the
//! [`Bus`] trait. One call to [`Cpu::step`] fetches, decodes and executes a
//! single instruction, or services one interrupt, and reports its cost in
//! machine cycles.

pub mod alu;
pub mod disasm;
pub mod interrupts;
pub mod opcodes;
pub mod ops;
pub mod regs;

#[cfg(test)]
mod tests;

use interrupts::InterruptLine;
use regs::{Reg16, Reg8, Registers};

/// Memory and I/O as seen by the CPU. Byte access is the primitive; the
/// 16-bit forms are little-endian compositions of it.
pub trait Bus {
    fn read8(&mut self, address: u16) -> u8;
    fn write8(&mut self, address: u16, value: u8);

    fn read16(&mut self, address: u16) -> u16 {
        let lo = self.read8(address);
        let hi = self.read8(address.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    fn write16(&mut self, address: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(address, lo);
        self.write8(address.wrapping_add(1), hi);
    }
}

/// Documented DMG post-boot register values, applied by
/// [`Cpu::apply_post_boot_state`].
const POST_BOOT_AF: u16 = 0x01B0;
const POST_BOOT_BC: u16 = 0x0013;
const POST_BOOT_DE: u16 = 0x00D8;
const POST_BOOT_HL: u16 = 0x014D;
const POST_BOOT_SP: u16 = 0xFFFE;
const POST_BOOT_PC: u16 = 0x0100;

#[derive(Clone, Debug, Default)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable. Gates servicing, not HALT wakeup.
    pub ime: bool,
    /// EI takes effect one instruction late; this is the armed delay.
    ime_enable_pending: bool,
    pub halted: bool,
    pub stopped: bool,
}

impl Cpu {
    pub fn new() -> Self {
        Cpu::default()
    }

    /// Back to power-on: all registers zero, IME off, not halted.
    pub fn reset(&mut self) {
        *self = Cpu::default();
    }

    /// Set the register values the DMG boot ROM leaves behind
    /// (AF=0x01B0, BC=0x0013, DE=0x00D8, HL=0x014D, SP=0xFFFE, PC=0x0100).
    pub fn apply_post_boot_state(&mut self) {
        self.regs.write16(Reg16::AF, POST_BOOT_AF);
        self.regs.write16(Reg16::BC, POST_BOOT_BC);
        self.regs.write16(Reg16::DE, POST_BOOT_DE);
        self.regs.write16(Reg16::HL, POST_BOOT_HL);
        self.regs.set_sp(POST_BOOT_SP);
        self.regs.set_pc(POST_BOOT_PC);
    }

    /// Leave STOP mode. On hardware a joypad edge does this; here the host
    /// decides when.
    pub fn resume(&mut self) {
        self.stopped = false;
    }

    /// Execute one instruction (or service one interrupt) and return the
    /// cost in machine cycles. Never fails: illegal opcodes are logged and
    /// charged one cycle.
    ///
    /// With `trace` set, each executed instruction is also emitted through
    /// `log::trace!` in disassembled form.
    pub fn step(&mut self, bus: &mut dyn Bus, trace: bool) -> u32 {
        if self.stopped {
            return 1;
        }

        if self.halted {
            // Wakeup needs an enabled, requested line; IME only decides
            // whether the line is then serviced.
            if interrupts::pending_mask(bus) != 0 {
                self.halted = false;
            } else {
                return 1;
            }
        }

        if self.ime {
            if let Some(line) = interrupts::highest_pending(bus) {
                return self.service_interrupt(bus, line);
            }
        }

        if trace && log::log_enabled!(log::Level::Trace) {
            let pc = self.regs.pc();
            log::trace!("{:#06X}  {}", pc, disasm::render(bus, pc));
        }

        let ei_armed = self.ime_enable_pending;
        let opcode = self.fetch8(bus);
        let slot = &opcodes::BASE[opcode as usize];
        let cycles = (slot.exec)(self, bus, opcode);

        // EI from the *previous* instruction lands now, unless this
        // instruction was DI and already disarmed it.
        if ei_armed && self.ime_enable_pending {
            self.ime = true;
            self.ime_enable_pending = false;
        }

        cycles
    }

    /// Jump to the line's vector: IME off, bit acknowledged in IF, return
    /// address pushed. Costs 5 machine cycles.
    fn service_interrupt(&mut self, bus: &mut dyn Bus, line: InterruptLine) -> u32 {
        self.ime = false;
        self.ime_enable_pending = false;
        let flags = bus.read8(interrupts::IF_ADDRESS);
        bus.write8(interrupts::IF_ADDRESS, flags & !line.bit());
        let return_address = self.regs.pc();
        self.push_u16(bus, return_address);
        self.regs.set_pc(line.vector());
        5
    }

    pub(crate) fn fetch8(&mut self, bus: &mut dyn Bus) -> u8 {
        let byte = bus.read8(self.regs.pc());
        self.regs.increment_pc();
        byte
    }

    pub(crate) fn fetch16(&mut self, bus: &mut dyn Bus) -> u16 {
        let lo = self.fetch8(bus);
        let hi = self.fetch8(bus);
        u16::from_le_bytes([lo, hi])
    }

    pub(crate) fn push_u16(&mut self, bus: &mut dyn Bus, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    pub(crate) fn pop_u16(&mut self, bus: &mut dyn Bus) -> u16 {
        let lo = bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        u16::from_be_bytes([hi, lo])
    }

    /// Read the operand named by a 3-bit register field; pattern 110 is the
    /// byte at (HL).
    pub(crate) fn read_operand(&mut self, bus: &mut dyn Bus, bits: u8) -> u8 {
        match Reg8::from_operand_bits(bits) {
            Some(reg) => self.regs.read8(reg),
            None => {
                let address = self.regs.read16(Reg16::HL);
                bus.read8(address)
            }
        }
    }

    pub(crate) fn write_operand(&mut self, bus: &mut dyn Bus, bits: u8, value: u8) {
        match Reg8::from_operand_bits(bits) {
            Some(reg) => self.regs.write8(reg, value),
            None => {
                let address = self.regs.read16(Reg16::HL);
                bus.write8(address, value);
            }
        }
    }
}

/// True when a 3-bit register field names (HL) rather than a register.
#[inline]
pub(crate) fn operand_is_mem(bits: u8) -> bool {
    bits & 0x07 == 6
}
