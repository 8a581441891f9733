//! Engine stats refresh service
//!
//! Refreshes are requested when the host signals that an engine's stats are
//! stale. The baseline is resolved and override hooks consulted immediately,
//! but evaluation is queued until the host's next tick: an engine's storage
//! container may not exist yet at the moment it spawns.

use std::collections::VecDeque;

use super::{EngineHost, EngineId, EngineReport, HookRegistry, OverrideDecision};
use crate::config::Configuration;
use crate::preset::{GrantCheck, GrantError, OwnerId};
use crate::stats::StatProfile;

/// Result of a refresh request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Evaluation queued for the next tick
    Scheduled,
    /// An override hook claimed the engine
    Vetoed,
}

/// A refresh waiting for the next tick
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRefresh {
    /// Engine to refresh
    pub engine: EngineId,
    /// Baseline resolved when the refresh was requested
    pub baseline: StatProfile,
}

/// Resolves baselines, honours override hooks and applies engine stats
pub struct EngineStatsService<G> {
    config: Configuration,
    grants: G,
    hooks: HookRegistry,
    pending: VecDeque<PendingRefresh>,
}

impl<G: GrantCheck> EngineStatsService<G> {
    /// Create a service with no hooks and an empty queue
    pub fn new(config: Configuration, grants: G) -> Self {
        Self {
            config,
            grants,
            hooks: HookRegistry::new(),
            pending: VecDeque::new(),
        }
    }

    /// Current configuration
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Replace the configuration. Queued refreshes keep the baseline they were
    /// scheduled with.
    pub fn reload_config(&mut self, config: Configuration) {
        self.config = config;
    }

    /// Grant lookup used for preset resolution
    pub fn grants(&self) -> &G {
        &self.grants
    }

    /// Mutable grant lookup, for hosts that keep grants in the service
    pub fn grants_mut(&mut self) -> &mut G {
        &mut self.grants
    }

    /// Override hooks
    pub fn hooks_mut(&mut self) -> &mut HookRegistry {
        &mut self.hooks
    }

    /// Number of refreshes waiting for the next tick
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Refreshes waiting for the next tick, oldest first
    pub fn pending(&self) -> impl Iterator<Item = &PendingRefresh> {
        self.pending.iter()
    }

    /// Resolve the baseline profile for a vehicle owner
    pub fn determine_baseline(&self, owner: Option<OwnerId>) -> Result<StatProfile, GrantError> {
        self.config
            .resolve_baseline(owner, &self.grants)
            .cloned()
    }

    /// Handle a stats refresh signal for one engine
    ///
    /// # Errors
    /// Grant lookup failures are returned and nothing is queued.
    pub fn request_refresh<H: EngineHost + ?Sized>(
        &mut self,
        host: &H,
        engine: EngineId,
    ) -> Result<RefreshOutcome, GrantError> {
        let baseline = self.determine_baseline(host.vehicle_owner(engine))?;

        if self.hooks.check(engine) == OverrideDecision::Veto {
            return Ok(RefreshOutcome::Vetoed);
        }

        tracing::debug!(
            %engine,
            preset = baseline.name.as_deref().unwrap_or("default"),
            "Engine stats refresh scheduled"
        );
        self.pending.push_back(PendingRefresh { engine, baseline });
        Ok(RefreshOutcome::Scheduled)
    }

    /// Request a refresh for every engine the host knows about
    ///
    /// Returns the number of refreshes scheduled.
    pub fn refresh_all<H: EngineHost + ?Sized>(&mut self, host: &H) -> Result<usize, GrantError> {
        let mut scheduled = 0;
        for engine in host.engine_ids() {
            if self.request_refresh(host, engine)? == RefreshOutcome::Scheduled {
                scheduled += 1;
            }
        }
        Ok(scheduled)
    }

    /// Handle server start-up.
    ///
    /// Engines spawned during an initial boot request their own refresh; after a
    /// reload the existing engines are refreshed here.
    pub fn on_server_initialized<H: EngineHost + ?Sized>(
        &mut self,
        host: &H,
        initial_boot: bool,
    ) -> Result<usize, GrantError> {
        if initial_boot {
            return Ok(0);
        }
        self.refresh_all(host)
    }

    /// Run queued refreshes (the host's next tick)
    ///
    /// Engines whose storage or health is unavailable are skipped. Returns the
    /// number of engines updated.
    pub fn run_pending<H: EngineHost + ?Sized>(&mut self, host: &mut H) -> usize {
        let mut applied = 0;

        while let Some(PendingRefresh { engine, baseline }) = self.pending.pop_front() {
            let Some(health) = host.health_fraction(engine) else {
                tracing::debug!(%engine, "Engine no longer exists; skipping refresh");
                continue;
            };
            let Some(slots) = host.engine_slots(engine) else {
                tracing::debug!(%engine, "Engine storage not available; skipping refresh");
                continue;
            };

            let report = EngineReport::compute(&baseline, slots, health);
            host.apply_engine_stats(engine, &report);
            applied += 1;
        }

        applied
    }
}
