//! CLI infrastructure for the chomp analyzer
//!
//! This module provides the command-line interface for solving single
//! positions and summarizing whole reachable state spaces.

pub mod commands;
pub mod output;
