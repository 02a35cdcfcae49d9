//! Instruction bodies, grouped by opcode family. Every function here has
//! the dispatch-table signature: it receives the CPU, the bus and the
//! opcode byte (several handlers decode register fields out of the opcode
//! at run time) and returns the cost in machine cycles.

pub mod alu;
pub mod cb;
pub mod control;
pub mod ld;
pub mod stack;
pub mod system;
