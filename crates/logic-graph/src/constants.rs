//! Crate-wide constants
//!
//! Single source of truth for defaults and stable diagnostic codes.

/// Default values for descriptors and editor configuration
pub mod defaults {
    /// Version assigned to node types that do not declare one
    pub const NODE_VERSION: u32 = 1;
    /// Snapshots kept by the undo stack
    pub const MAX_UNDO_SNAPSHOTS: usize = 100;
    /// zstd level used for undo snapshots
    pub const UNDO_COMPRESSION_LEVEL: i32 = 3;
    /// Forward diagnostics to the `log` facade
    pub const LOG_DIAGNOSTICS: bool = true;
}

/// Structural limits enforced by the editor
pub mod limits {
    /// Outputs an extensible node must keep once created
    pub const MIN_DYNAMIC_OUTPUTS: usize = 1;
    /// Highest zstd compression level accepted by configuration
    pub const MAX_COMPRESSION_LEVEL: i32 = 22;
}

/// Stable message codes surfaced to hosts
pub mod codes {
    pub const SINGLETON_VIOLATION: &str = "SINGLETON_VIOLATION";
    pub const MINIMUM_CARDINALITY_VIOLATION: &str = "MINIMUM_CARDINALITY_VIOLATION";
}
