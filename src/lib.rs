// Malaysia TIN Validator - Core Library
// Exposes all modules for use in the CLI and tests

pub mod classifier; // Format rules + General TIN registry
pub mod session;    // Bounded history + statistics
pub mod bulk;       // Multi-line batch validation
pub mod export;     // CSV history export
pub mod generator;  // Random sample TINs for demos

// Re-export commonly used types
pub use classifier::{
    classify, normalize,
    ClassificationOutcome, TinType, TinCategory, GeneralTin, GENERAL_TINS,
};
pub use session::{
    HistoryEntry, SessionSnapshot, SessionTracker, Statistics, HISTORY_CAPACITY,
};
pub use bulk::{bulk_validate, BulkReport, BulkResult};
pub use export::{export_history, history_to_csv};
pub use generator::random_tin;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
