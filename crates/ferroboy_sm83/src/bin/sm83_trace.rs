//! Tracing harness: load a flat 64 KiB memory image, apply the post-boot
//! register state and step a bounded number of instructions with the
//! disassembly trace on.
//!
//! Usage: `sm83_trace <image> [steps]`. Logging defaults to trace level;
//! override with RUST_LOG as usual.

use anyhow::{bail, Context, Result};
use ferroboy_sm83::{Bus, Runner};

struct FlatBus {
    memory: Box<[u8; 0x10000]>,
}

impl FlatBus {
    fn from_image(image: &[u8]) -> Self {
        let mut memory = Box::new([0u8; 0x10000]);
        memory[..image.len()].copy_from_slice(image);
        FlatBus { memory }
    }
}

impl Bus for FlatBus {
    fn read8(&mut self, address: u16) -> u8 {
        self.memory[address as usize]
    }

    fn write8(&mut self, address: u16, value: u8) {
        self.memory[address as usize] = value;
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace")).init();

    let mut args = std::env::args().skip(1);
    let path = args.next().context("usage: sm83_trace <image> [steps]")?;
    let steps: u64 = match args.next() {
        Some(raw) => raw.parse().context("step count must be a number")?,
        None => 100,
    };

    let image = std::fs::read(&path).with_context(|| format!("reading {path}"))?;
    if image.len() > 0x10000 {
        bail!("image is {} bytes, larger than the 64 KiB address space", image.len());
    }

    let mut bus = FlatBus::from_image(&image);
    let mut runner = Runner::new();
    runner.cpu.apply_post_boot_state();

    let mut cycles: u64 = 0;
    for _ in 0..steps {
        cycles += u64::from(runner.step(&mut bus, true));
    }
    log::info!("{steps} steps, {cycles} machine cycles");

    Ok(())
}
