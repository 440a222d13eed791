//! Core crate-wide configuration

pub mod config;
