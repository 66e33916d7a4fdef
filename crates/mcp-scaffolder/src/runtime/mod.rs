//! Toolchain detection
//!
//! Advisory only: reports whether Node.js and the chosen package manager are
//! installed so the user knows the next steps will work.

pub mod check;

pub use check::{
    check_node, check_package_manager, check_toolchain, detect_toolchain, RuntimeInfo,
    ToolchainReport,
};
