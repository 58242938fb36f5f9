//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared context and input helpers (config, dates, JSON inputs)
//! - `summary` - Monthly summary and goal feasibility check
//! - `plan` - Daily plan commands (save, show, overspend)
//! - `goals` - Combined goals view
//! - `spin` - Reward wheel

pub mod core;
pub mod goals;
pub mod plan;
pub mod spin;
pub mod summary;

// Re-export command functions for main.rs
pub use self::core::*;
pub use goals::*;
pub use plan::*;
pub use spin::*;
pub use summary::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
