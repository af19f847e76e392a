// src/predictions/systems/mod.rs

pub mod logic;
