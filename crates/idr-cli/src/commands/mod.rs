//! Command implementations for the IDR CLI

pub mod extract;
pub mod fetch;
pub mod run;
