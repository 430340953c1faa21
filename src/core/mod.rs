// src/core/mod.rs

pub mod controller;
pub mod draw;
pub mod finalizer;
pub mod generator;
pub mod registry;
pub mod types;
pub mod validator;
