//! DEMATEL Engine - Fuzzy linguistic cause-effect analysis
//!
//! This crate ranks alternatives by running the DEMATEL method over a square
//! matrix of linguistic influence assessments, and serves the analysis over
//! a small HTTP API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
