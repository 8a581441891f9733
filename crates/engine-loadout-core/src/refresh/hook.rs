//! Override hooks
//!
//! Other systems may claim an engine's stats for themselves. Before a refresh is
//! scheduled every registered hook is consulted, and any veto skips the refresh.

use super::EngineId;

/// Answer of an override hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideDecision {
    /// Let the refresh go ahead
    Proceed,
    /// Leave the engine's stats alone
    Veto,
}

/// A hook consulted before overriding an engine's stats
pub trait OverrideHook {
    /// Name used in logs
    fn name(&self) -> &str {
        "anonymous"
    }

    /// Decide whether the engine's stats may be overridden
    fn on_engine_stats_override(&self, engine: EngineId) -> OverrideDecision;
}

impl<F> OverrideHook for F
where
    F: Fn(EngineId) -> OverrideDecision,
{
    fn on_engine_stats_override(&self, engine: EngineId) -> OverrideDecision {
        self(engine)
    }
}

/// Registered override hooks, consulted in registration order
#[derive(Default)]
pub struct HookRegistry {
    hooks: Vec<Box<dyn OverrideHook>>,
}

impl HookRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook
    pub fn register(&mut self, hook: impl OverrideHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// Number of registered hooks
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Check if no hooks are registered
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Consult hooks in order; the first veto wins
    pub fn check(&self, engine: EngineId) -> OverrideDecision {
        for hook in &self.hooks {
            if hook.on_engine_stats_override(engine) == OverrideDecision::Veto {
                tracing::debug!(%engine, hook = hook.name(), "Engine stats override vetoed");
                return OverrideDecision::Veto;
            }
        }
        OverrideDecision::Proceed
    }
}
