//! Command implementations for upwatch CLI

mod misc;
mod sites;

pub use misc::*;
pub use sites::*;
