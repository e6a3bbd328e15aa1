//! Domain models for the pillbox engine.

mod datefmt;
mod medication;
mod reminder;
mod schedule;

pub use datefmt::*;
pub use medication::*;
pub use reminder::*;
pub use schedule::*;
