//! Centralized theme system for the primer screen.
//!
//! This module provides:
//! - `palette` — Raw color constants
//! - `styles` — Semantic style builder functions
//! - `icons` — Glyph constants with ASCII fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
