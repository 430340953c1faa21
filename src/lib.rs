// src/lib.rs — Library root for secret-santa

pub mod cli;
pub mod core;
pub mod infra;
pub mod input;
pub mod output;
