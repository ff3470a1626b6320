//! CLI infrastructure for the oxo toolkit
//!
//! This module provides the command-line interface for playing against the
//! engine, analyzing positions, evaluating the engine against baselines,
//! and exporting the optimal policy.

pub mod commands;
pub mod output;
