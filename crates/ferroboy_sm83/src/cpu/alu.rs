//! Arithmetic/logic unit: pure functions from operands (and incoming carry)
//! to a result plus the four status flags.
//!
//! Carries are extracted with the XOR trick: for `r = a op b`,
//! `carry_bits = a ^ b ^ r` has bit 4 set exactly when there was a carry or
//! borrow out of bit 3, and bit 8 when there was one out of bit 7. Operands
//! are widened through `i8` so the same masks work for additions and
//! subtractions. 16-bit adds use the same technique against bits 12 and 16.

use super::regs::Flags;

#[inline]
fn carry_flags8(carry_bits: i32, value: u8, subtract: bool) -> Flags {
    let mut flags = Flags::empty();
    if value == 0 {
        flags |= Flags::Z;
    }
    if subtract {
        flags |= Flags::N;
    }
    if carry_bits & 0x10 != 0 {
        flags |= Flags::H;
    }
    if carry_bits & 0x100 != 0 {
        flags |= Flags::C;
    }
    flags
}

#[inline]
fn add_impl(a: u8, b: u8, carry_in: bool) -> (u8, Flags) {
    let a = a as i8 as i32;
    let b = b as i8 as i32;
    let cin = carry_in as i32;
    let res = a + b + cin;
    let carry_bits = a ^ b ^ cin ^ res;
    let value = res as u8;
    (value, carry_flags8(carry_bits, value, false))
}

#[inline]
fn sub_impl(a: u8, b: u8, carry_in: bool) -> (u8, Flags) {
    let a = a as i8 as i32;
    let b = b as i8 as i32;
    let cin = carry_in as i32;
    let res = a - b - cin;
    let carry_bits = a ^ b ^ cin ^ res;
    let value = res as u8;
    (value, carry_flags8(carry_bits, value, true))
}

pub fn add(a: u8, b: u8) -> (u8, Flags) {
    add_impl(a, b, false)
}

pub fn adc(a: u8, b: u8, carry_in: bool) -> (u8, Flags) {
    add_impl(a, b, carry_in)
}

pub fn sub(a: u8, b: u8) -> (u8, Flags) {
    sub_impl(a, b, false)
}

pub fn sbc(a: u8, b: u8, carry_in: bool) -> (u8, Flags) {
    sub_impl(a, b, carry_in)
}

/// Flags of `a - b`; the result byte is discarded.
pub fn cp(a: u8, b: u8) -> Flags {
    sub_impl(a, b, false).1
}

pub fn and(a: u8, b: u8) -> (u8, Flags) {
    let value = a & b;
    let mut flags = Flags::H;
    if value == 0 {
        flags |= Flags::Z;
    }
    (value, flags)
}

pub fn or(a: u8, b: u8) -> (u8, Flags) {
    let value = a | b;
    let flags = if value == 0 { Flags::Z } else { Flags::empty() };
    (value, flags)
}

pub fn xor(a: u8, b: u8) -> (u8, Flags) {
    let value = a ^ b;
    let flags = if value == 0 { Flags::Z } else { Flags::empty() };
    (value, flags)
}

/// 8-bit increment. C is left as it was.
pub fn inc(value: u8, flags: Flags) -> (u8, Flags) {
    let (result, mut out) = add_impl(value, 1, false);
    out.remove(Flags::C);
    out |= flags & Flags::C;
    (result, out)
}

/// 8-bit decrement. C is left as it was.
pub fn dec(value: u8, flags: Flags) -> (u8, Flags) {
    let (result, mut out) = sub_impl(value, 1, false);
    out.remove(Flags::C);
    out |= flags & Flags::C;
    (result, out)
}

/// 16-bit add used by `ADD HL,rr`. Z is left as it was; N is cleared.
pub fn add16(a: u16, b: u16, flags: Flags) -> (u16, Flags) {
    let a = a as i32;
    let b = b as i32;
    let res = a + b;
    let carry_bits = a ^ b ^ res;
    let mut out = flags & Flags::Z;
    if carry_bits & 0x1000 != 0 {
        out |= Flags::H;
    }
    if carry_bits & 0x10000 != 0 {
        out |= Flags::C;
    }
    (res as u16, out)
}

/// Signed-immediate 16-bit add used by `ADD SP,r8` and `LD HL,SP+r8`.
///
/// Z and N are cleared; H and C come from the low byte of the addition.
pub fn add16_signed(base: u16, offset: u8) -> (u16, Flags) {
    let base = base as i32;
    let offset = offset as i8 as i32;
    let res = base + offset;
    let carry_bits = base ^ offset ^ (res & 0xFFFF);
    let mut flags = Flags::empty();
    if carry_bits & 0x10 != 0 {
        flags |= Flags::H;
    }
    if carry_bits & 0x100 != 0 {
        flags |= Flags::C;
    }
    ((res & 0xFFFF) as u16, flags)
}

/// Decimal adjust after a BCD addition or subtraction.
///
/// Two-stage correction: the low nibble is fixed up first (±0x06 when it
/// overflowed 9 or H is set), then the high nibble (±0x60 when the whole
/// byte overflowed 0x99 or C is set). N selects add vs subtract; C is set
/// by a high correction and never cleared; H is always cleared; Z tracks
/// the adjusted result.
pub fn daa(a: u8, flags: Flags) -> (u8, Flags) {
    let mut value = a as i32;
    if !flags.contains(Flags::N) {
        if (value & 0x0F) > 0x09 || flags.contains(Flags::H) {
            value += 0x06;
        }
        if value > 0x9F || flags.contains(Flags::C) {
            value += 0x60;
        }
    } else {
        if flags.contains(Flags::H) {
            value = (value - 0x06) & 0xFF;
        }
        if flags.contains(Flags::C) {
            value -= 0x60;
        }
    }

    let mut out = flags & (Flags::N | Flags::C);
    if value & 0x100 == 0x100 {
        out |= Flags::C;
    }
    let value = (value & 0xFF) as u8;
    if value == 0 {
        out |= Flags::Z;
    }
    (value, out)
}

#[inline]
fn shift_flags(value: u8, carry_out: bool) -> Flags {
    let mut flags = Flags::empty();
    if value == 0 {
        flags |= Flags::Z;
    }
    if carry_out {
        flags |= Flags::C;
    }
    flags
}

/// Rotate left; bit 7 goes to both C and bit 0.
pub fn rlc(value: u8) -> (u8, Flags) {
    let carry = value & 0x80 != 0;
    let result = value.rotate_left(1);
    (result, shift_flags(result, carry))
}

/// Rotate right; bit 0 goes to both C and bit 7.
pub fn rrc(value: u8) -> (u8, Flags) {
    let carry = value & 0x01 != 0;
    let result = value.rotate_right(1);
    (result, shift_flags(result, carry))
}

/// Rotate left through carry: C feeds bit 0, bit 7 feeds C.
pub fn rl(value: u8, carry_in: bool) -> (u8, Flags) {
    let carry = value & 0x80 != 0;
    let result = (value << 1) | carry_in as u8;
    (result, shift_flags(result, carry))
}

/// Rotate right through carry: C feeds bit 7, bit 0 feeds C.
pub fn rr(value: u8, carry_in: bool) -> (u8, Flags) {
    let carry = value & 0x01 != 0;
    let result = (value >> 1) | ((carry_in as u8) << 7);
    (result, shift_flags(result, carry))
}

/// Arithmetic shift left; bit 7 to C, bit 0 becomes 0.
pub fn sla(value: u8) -> (u8, Flags) {
    let carry = value & 0x80 != 0;
    let result = value << 1;
    (result, shift_flags(result, carry))
}

/// Arithmetic shift right; bit 0 to C, bit 7 is duplicated.
pub fn sra(value: u8) -> (u8, Flags) {
    let carry = value & 0x01 != 0;
    let result = (value >> 1) | (value & 0x80);
    (result, shift_flags(result, carry))
}

/// Logical shift right; bit 0 to C, bit 7 becomes 0.
pub fn srl(value: u8) -> (u8, Flags) {
    let carry = value & 0x01 != 0;
    let result = value >> 1;
    (result, shift_flags(result, carry))
}

/// Swap nibbles. C is always cleared.
pub fn swap(value: u8) -> (u8, Flags) {
    let result = (value << 4) | (value >> 4);
    (result, shift_flags(result, false))
}

/// Flags for `BIT n,r`: Z from the complement of the tested bit, H set,
/// N cleared, C untouched. Not AND's flag policy.
pub fn bit(n: u8, value: u8, flags: Flags) -> Flags {
    let mut out = (flags & Flags::C) | Flags::H;
    if value & (1 << n) == 0 {
        out |= Flags::Z;
    }
    out
}
