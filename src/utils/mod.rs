//! # Utility Modules
//!
//! This module contains constants and validators shared across the service.
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Result-code catalog and fixed values
//! - **Validators** (`validator`) - Result-code classification

pub mod constant;
pub mod validator;
