//! Maskable interrupt controller.
//!
//! Two memory-mapped registers drive everything: IF (0xFF0F) holds the
//! pending request bits, IE (0xFFFF) the enable mask. Both live on the bus,
//! not in the CPU, so peripherals can raise requests by writing IF.

use super::Bus;

/// Interrupt flag register (pending requests).
pub const IF_ADDRESS: u16 = 0xFF0F;
/// Interrupt enable register.
pub const IE_ADDRESS: u16 = 0xFFFF;

const LINE_MASK: u8 = 0x1F;

/// The five interrupt lines, in priority order (VBlank wins ties).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterruptLine {
    VBlank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl InterruptLine {
    pub const ALL: [InterruptLine; 5] = [
        InterruptLine::VBlank,
        InterruptLine::LcdStat,
        InterruptLine::Timer,
        InterruptLine::Serial,
        InterruptLine::Joypad,
    ];

    /// Bit position shared by IF and IE.
    #[inline]
    pub fn bit(self) -> u8 {
        match self {
            InterruptLine::VBlank => 0x01,
            InterruptLine::LcdStat => 0x02,
            InterruptLine::Timer => 0x04,
            InterruptLine::Serial => 0x08,
            InterruptLine::Joypad => 0x10,
        }
    }

    /// Fixed handler entry point.
    #[inline]
    pub fn vector(self) -> u16 {
        match self {
            InterruptLine::VBlank => 0x0040,
            InterruptLine::LcdStat => 0x0048,
            InterruptLine::Timer => 0x0050,
            InterruptLine::Serial => 0x0058,
            InterruptLine::Joypad => 0x0060,
        }
    }
}

/// Raise a request: set the line's bit in IF.
pub fn request(bus: &mut dyn Bus, line: InterruptLine) {
    let flags = bus.read8(IF_ADDRESS);
    bus.write8(IF_ADDRESS, flags | line.bit());
}

/// Requested-and-enabled lines, as a bit mask. Nonzero wakes a halted CPU
/// whether or not IME allows servicing.
pub fn pending_mask(bus: &mut dyn Bus) -> u8 {
    let enabled = bus.read8(IE_ADDRESS);
    let requested = bus.read8(IF_ADDRESS);
    enabled & requested & LINE_MASK
}

/// Highest-priority line that is both requested and enabled.
pub fn highest_pending(bus: &mut dyn Bus) -> Option<InterruptLine> {
    let mask = pending_mask(bus);
    InterruptLine::ALL.into_iter().find(|line| mask & line.bit() != 0)
}
