//! Design compilation: folding a hull and its assignments into one record.

mod compiled;
mod compiler;

pub use compiled::{BombingStats, ComponentUsage, CompiledShipStats, MassDriverStats};
pub use compiler::{compile, compile_design, compile_with_rules};
