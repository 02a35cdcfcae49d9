use bitflags::bitflags;

/// Register file for the Game Boy CPU (SM83).
///
/// Eight 8-bit slots (A, F, B, C, D, E, H, L) addressable individually or
/// as the big-endian pairs AF/BC/DE/HL, plus the 16-bit SP and PC. The low
/// nibble of F is hardwired to zero; every write path masks it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

bitflags! {
    /// Flag bits in the F register (upper nibble only).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Flags: u8 {
        /// Zero: the last result was 0.
        const Z = 0b1000_0000;
        /// Subtract: the last operation was a subtraction (used by DAA).
        const N = 0b0100_0000;
        /// Half carry: carry out of bit 3 (bit 11 for 16-bit adds).
        const H = 0b0010_0000;
        /// Carry: carry/borrow out of bit 7 (bit 15 for 16-bit adds).
        const C = 0b0001_0000;
    }
}

/// One of the eight 8-bit register slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg8 {
    A,
    F,
    B,
    C,
    D,
    E,
    H,
    L,
}

impl Reg8 {
    /// Decode a 3-bit operand field from an opcode.
    ///
    /// The encoding is the standard one shared by the LD/ALU/CB blocks:
    /// 000→B, 001→C, 010→D, 011→E, 100→H, 101→L, 111→A. Pattern 110 names
    /// the byte at (HL), which is not a register; callers special-case it.
    #[inline]
    pub fn from_operand_bits(bits: u8) -> Option<Reg8> {
        match bits & 0x07 {
            0 => Some(Reg8::B),
            1 => Some(Reg8::C),
            2 => Some(Reg8::D),
            3 => Some(Reg8::E),
            4 => Some(Reg8::H),
            5 => Some(Reg8::L),
            7 => Some(Reg8::A),
            _ => None,
        }
    }
}

/// A 16-bit register pair (or SP, which several opcode families address
/// alongside the pairs).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg16 {
    AF,
    BC,
    DE,
    HL,
    SP,
}

impl Reg16 {
    /// Decode the 2-bit pair field (opcode bits 4-5).
    ///
    /// Pattern 11 names SP in the arithmetic/load families and AF in the
    /// PUSH/POP family; `use_af` selects between the two.
    #[inline]
    pub fn from_pair_bits(bits: u8, use_af: bool) -> Reg16 {
        match bits & 0x03 {
            0 => Reg16::BC,
            1 => Reg16::DE,
            2 => Reg16::HL,
            _ => {
                if use_af {
                    Reg16::AF
                } else {
                    Reg16::SP
                }
            }
        }
    }
}

impl Registers {
    #[inline]
    pub fn read8(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::A => self.a,
            Reg8::F => self.f & 0xF0,
            Reg8::B => self.b,
            Reg8::C => self.c,
            Reg8::D => self.d,
            Reg8::E => self.e,
            Reg8::H => self.h,
            Reg8::L => self.l,
        }
    }

    #[inline]
    pub fn write8(&mut self, reg: Reg8, value: u8) {
        match reg {
            Reg8::A => self.a = value,
            // Lower 4 bits of F always read as zero.
            Reg8::F => self.f = value & 0xF0,
            Reg8::B => self.b = value,
            Reg8::C => self.c = value,
            Reg8::D => self.d = value,
            Reg8::E => self.e = value,
            Reg8::H => self.h = value,
            Reg8::L => self.l = value,
        }
    }

    #[inline]
    pub fn read16(&self, pair: Reg16) -> u16 {
        match pair {
            Reg16::AF => u16::from_be_bytes([self.a, self.f & 0xF0]),
            Reg16::BC => u16::from_be_bytes([self.b, self.c]),
            Reg16::DE => u16::from_be_bytes([self.d, self.e]),
            Reg16::HL => u16::from_be_bytes([self.h, self.l]),
            Reg16::SP => self.sp,
        }
    }

    #[inline]
    pub fn write16(&mut self, pair: Reg16, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        match pair {
            Reg16::AF => {
                self.a = hi;
                self.f = lo & 0xF0;
            }
            Reg16::BC => {
                self.b = hi;
                self.c = lo;
            }
            Reg16::DE => {
                self.d = hi;
                self.e = lo;
            }
            Reg16::HL => {
                self.h = hi;
                self.l = lo;
            }
            Reg16::SP => self.sp = value,
        }
    }

    #[inline]
    pub fn pc(&self) -> u16 {
        self.pc
    }

    #[inline]
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    #[inline]
    pub fn increment_pc(&mut self) {
        self.pc = self.pc.wrapping_add(1);
    }

    #[inline]
    pub fn sp(&self) -> u16 {
        self.sp
    }

    #[inline]
    pub fn set_sp(&mut self, value: u16) {
        self.sp = value;
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        Flags::from_bits_truncate(self.f)
    }

    #[inline]
    pub fn set_flags(&mut self, flags: Flags) {
        self.f = flags.bits();
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        let mut flags = self.flags();
        flags.set(flag, value);
        self.f = flags.bits();
    }

    #[inline]
    pub fn is_set_flag(&self, flag: Flags) -> bool {
        self.flags().contains(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_big_endian() {
        let mut regs = Registers::default();
        regs.write16(Reg16::BC, 0x1234);
        assert_eq!(regs.b, 0x12);
        assert_eq!(regs.c, 0x34);
        assert_eq!(regs.read16(Reg16::BC), 0x1234);

        regs.write16(Reg16::HL, 0xBEEF);
        assert_eq!(regs.h, 0xBE);
        assert_eq!(regs.l, 0xEF);
    }

    #[test]
    fn f_low_nibble_is_masked() {
        let mut regs = Registers::default();
        regs.write8(Reg8::F, 0xFF);
        assert_eq!(regs.read8(Reg8::F), 0xF0);

        regs.write16(Reg16::AF, 0x12BD);
        assert_eq!(regs.read16(Reg16::AF), 0x12B0);
    }

    #[test]
    fn flag_accessors() {
        let mut regs = Registers::default();
        regs.set_flag(Flags::Z, true);
        regs.set_flag(Flags::C, true);
        assert!(regs.is_set_flag(Flags::Z));
        assert!(!regs.is_set_flag(Flags::N));
        assert!(regs.is_set_flag(Flags::C));
        assert_eq!(regs.f, 0x90);

        regs.set_flag(Flags::Z, false);
        assert!(!regs.is_set_flag(Flags::Z));
        assert_eq!(regs.f, 0x10);
    }

    #[test]
    fn operand_bit_decode() {
        assert_eq!(Reg8::from_operand_bits(0), Some(Reg8::B));
        assert_eq!(Reg8::from_operand_bits(5), Some(Reg8::L));
        assert_eq!(Reg8::from_operand_bits(7), Some(Reg8::A));
        // 110 names (HL), which has no register.
        assert_eq!(Reg8::from_operand_bits(6), None);
    }

    #[test]
    fn pair_bit_decode() {
        assert_eq!(Reg16::from_pair_bits(0, false), Reg16::BC);
        assert_eq!(Reg16::from_pair_bits(3, false), Reg16::SP);
        assert_eq!(Reg16::from_pair_bits(3, true), Reg16::AF);
    }
}
