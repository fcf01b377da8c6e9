// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod controller;
pub mod core;
pub mod csv;
pub mod file;
pub mod filter;
pub mod gui;
pub mod loader;
pub mod log;
pub mod progress;
pub mod record;
pub mod render;

#[cfg(feature = "cli")]
pub mod cli;
