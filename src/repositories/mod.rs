// src/repositories/mod.rs
//
// Data access for the three tables. Every function accepts any SQLite
// executor so callers can run it on the pool or inside a transaction.

pub mod completion_repository;
pub mod quiz_repository;
pub mod user_repository;
