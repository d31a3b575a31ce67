// src/models/mod.rs

pub mod completion;
pub mod page;
pub mod quiz;
pub mod user;
