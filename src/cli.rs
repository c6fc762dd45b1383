//! CLI infrastructure for the gridplay toolkit
//!
//! This module provides the command-line interface for self-play between
//! search strategies and for interactive games against them.

pub mod commands;
pub mod config;
pub mod output;
