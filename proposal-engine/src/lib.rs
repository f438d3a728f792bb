//! Proposal Engine - event-staffing cost proposals
//!
//! # Overview
//!
//! - **Pricing** (`pricing`): service calculator, proposal aggregator and
//!   change tracker
//! - **Proposals** (`proposals`): draft creation, edits and their diffs
//! - **CLI** (`cli`): JSON in, JSON out
//!
//! # Layout
//!
//! ```text
//! proposal-engine/src/
//! ├── core/          # configuration
//! ├── pricing/       # calculation core
//! ├── proposals/     # proposal lifecycle
//! ├── utils/         # logging
//! └── cli.rs         # command-line front end
//! ```

pub mod cli;
pub mod core;
pub mod pricing;
pub mod proposals;
pub mod utils;

// Re-export public types
pub use core::Config;
pub use pricing::{
    ServiceResults, calculate_changes, calculate_service_results, into_recalculated,
    prepare_proposal_from_calculation, recalculate_service_totals,
};
pub use proposals::{apply_edit, generate_proposal, proposal_changes};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
