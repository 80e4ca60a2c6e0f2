//! Core business logic - framework-agnostic collection storage, statistics and
//! the feature areas built on them.

/// Dashboard summary across all collections
pub mod dashboard;
/// Event calendar with derived status
pub mod events;
/// Income and expense ledger
pub mod finance;
/// Groups, including first-run seeding
pub mod groups;
/// Member directory
pub mod members;
/// Generated-report catalog
pub mod reports;
/// Preferences bundle
pub mod settings;
/// Staff roster
pub mod staff;
/// Pure statistics over loaded collections
pub mod stats;
/// The load / mutate / save collection store
pub mod store;
