// src/server/handlers/mod.rs
//! HTTP request handlers

pub mod recipes;
