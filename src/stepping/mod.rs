//! Step generation primitives shared with the step interrupt.

mod blocks;
mod engine;
mod timer;

pub use blocks::StepBlocks;
pub use engine::StepEngine;
pub use timer::{StepCallback, StepTimer, StepTimerHardware};
