//! Renders the instruction at an address as text, by filling the immediate
//! placeholders in the table mnemonics. Reads go through the bus, so a bus
//! with read side effects should not be traced.

use super::opcodes::{BASE, EXTENDED};
use super::Bus;

/// Disassemble the instruction at `pc`.
pub fn render(bus: &mut dyn Bus, pc: u16) -> String {
    let opcode = bus.read8(pc);
    if opcode == 0xCB {
        let sub = bus.read8(pc.wrapping_add(1));
        return EXTENDED[sub as usize].mnemonic.to_string();
    }

    let slot = &BASE[opcode as usize];
    let mut text = slot.mnemonic.to_string();
    match slot.length {
        2 => {
            let byte = bus.read8(pc.wrapping_add(1));
            if text.contains("r8") {
                // Relative offsets read better signed.
                text = text.replace("r8", &format!("{}", byte as i8));
            } else {
                for token in ["d8", "a8"] {
                    if text.contains(token) {
                        text = text.replace(token, &format!("{byte:#04X}"));
                    }
                }
            }
        }
        3 => {
            let lo = bus.read8(pc.wrapping_add(1));
            let hi = bus.read8(pc.wrapping_add(2));
            let word = u16::from_le_bytes([lo, hi]);
            for token in ["d16", "a16"] {
                if text.contains(token) {
                    text = text.replace(token, &format!("{word:#06X}"));
                }
            }
        }
        _ => {}
    }
    text
}
