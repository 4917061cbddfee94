//! Domain models for the AgroMap client

mod analysis;
mod city;
mod crop;
mod report;
mod soil;
mod weather;

pub use analysis::*;
pub use city::*;
pub use crop::*;
pub use report::*;
pub use soil::*;
pub use weather::*;
