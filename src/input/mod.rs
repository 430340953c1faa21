// src/input/mod.rs

pub mod loader;
