// src/services/mod.rs

pub mod quiz_service;
pub mod user_service;
