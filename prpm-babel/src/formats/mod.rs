//! Format implementations
//!
//! This module contains all ecosystem implementations that convert between
//! the canonical model and native editor file formats.

pub mod canonical;
pub mod copilot;
pub mod cursor;
pub mod kiro;

pub use canonical::CanonicalFormat;
pub use copilot::CopilotFormat;
pub use cursor::CursorFormat;
pub use kiro::KiroFormat;
