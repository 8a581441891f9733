//! Engine Stats Refresh
//!
//! Connects the evaluator to the host: resolves baselines per vehicle owner,
//! lets override hooks veto, defers evaluation to the next tick and writes the
//! results back.

mod hook;
mod host;
mod service;

pub use hook::{HookRegistry, OverrideDecision, OverrideHook};
pub use host::{EngineHost, EngineId, EngineReport};
pub use service::{EngineStatsService, PendingRefresh, RefreshOutcome};
