// src/server/metrics.rs
//! Server metrics tracking
//!
//! Simple atomic counters for the recipe endpoints, surfaced through the
//! `/metrics` endpoint in Prometheus text format and the `/health` probe.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

/// Metrics collector for the recipe service
///
/// Counts cover the `/recipes` surface only; health and metrics probes are
/// not counted.
#[derive(Default)]
pub struct ServerMetrics {
    /// Total recipe requests handled
    requests_total: AtomicU64,
    /// Recipes created via POST
    recipes_created: AtomicU64,
    /// Recipes replaced via PUT
    recipes_replaced: AtomicU64,
    /// Recipes actually removed via DELETE
    recipes_deleted: AtomicU64,
    /// Requests rejected by body validation
    validation_failures: AtomicU64,
    /// Replace requests addressed to an absent recipe
    not_found: AtomicU64,
    /// Server start time
    start_time: OnceLock<Instant>,
}

impl ServerMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        let metrics = Self::default();
        let _ = metrics.start_time.set(Instant::now());
        metrics
    }

    /// Record a list request
    pub fn record_list(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful create
    pub fn record_create(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.recipes_created.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful replace
    pub fn record_replace(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.recipes_replaced.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a delete request; `removed` says whether a record was
    /// actually dropped (deletes of absent ids still succeed)
    pub fn record_delete(&self, removed: bool) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        if removed {
            self.recipes_deleted.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a request rejected by body validation
    pub fn record_validation_failure(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a replace addressed to an absent recipe
    pub fn record_not_found(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        let uptime = self
            .start_time
            .get()
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO);

        MetricsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            recipes_created: self.recipes_created.load(Ordering::Relaxed),
            recipes_replaced: self.recipes_replaced.load(Ordering::Relaxed),
            recipes_deleted: self.recipes_deleted.load(Ordering::Relaxed),
            validation_failures: self.validation_failures.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            uptime_secs: uptime.as_secs(),
        }
    }
}

/// Snapshot of current metrics
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    /// Total recipe requests processed
    pub requests_total: u64,
    /// Recipes created
    pub recipes_created: u64,
    /// Recipes replaced
    pub recipes_replaced: u64,
    /// Recipes removed
    pub recipes_deleted: u64,
    /// Requests rejected by validation
    pub validation_failures: u64,
    /// Replace requests for absent recipes
    pub not_found: u64,
    /// Server uptime in seconds
    pub uptime_secs: u64,
}
