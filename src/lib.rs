//! fg2gen: Code generation utilities for the libfg2 frame grabber library
//!
//! This crate backs two small maintenance tools for libfg2:
//! `controlgen`, which emits C getter/setter accessor text for the fixed
//! table of hardware controls, and `strip-header`, which cleans comments
//! and blank lines out of a C header.
//!
//! # Features
//! - Static control table with sorted enumeration
//! - Pure accessor rendering (prototypes and implementations)
//! - Line-by-line header comment stripping
//! - Optional TOML configuration for generator output
//!
//! # Usage
//! ```rust
//! use fg2gen::controls;
//! use fg2gen::emit::{render, AccessorKind};
//!
//! for entry in controls::all() {
//!     print!("{}", render(AccessorKind::GetterProto, &entry));
//! }
//! ```
pub mod config;
pub mod controls;
pub mod emit;
pub mod errors;
pub mod strip;

// Re-exports for convenience
pub use config::GenConfig;
pub use controls::ControlEntry;
pub use emit::AccessorKind;
pub use errors::CodegenError;

/// Initialize logging for the generator tools
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "fg2gen=info");
    }
    let _ = env_logger::try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[cfg(test)]
mod lib_tests {
    use super::*;

    #[test]
    fn test_crate_metadata() {
        assert_eq!(NAME, "fg2gen");
        assert!(!VERSION.is_empty());
        assert!(!DESCRIPTION.is_empty());
    }

    #[test]
    fn test_init_logging_is_reentrant() {
        init_logging();
        init_logging();
    }
}
