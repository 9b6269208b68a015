//! Library components of the entry validator CLI.

pub mod logging;
pub mod pipeline;
