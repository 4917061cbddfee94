//! External service clients

pub mod analysis;
