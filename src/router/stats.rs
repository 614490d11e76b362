//! Process-wide routing statistics
//!
//! The only mutable state the router owns. Counters are atomic so
//! concurrent `route()` calls never lose updates; everything read out is a
//! point-in-time snapshot.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::response::RoutingStatus;

/// Shared counters owned by a long-lived router instance.
#[derive(Debug, Default)]
pub struct RoutingStats {
    query_count: AtomicU64,
    high_confidence_count: AtomicU64,
    clarification_count: AtomicU64,
    error_count: AtomicU64,
    total_processing_micros: AtomicU64,
}

impl RoutingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one completed decision. Called only after the decision is
    /// fully built, so a cancelled query is never counted as processed.
    pub fn record_decision(&self, status: RoutingStatus, elapsed: Duration) {
        self.query_count.fetch_add(1, Ordering::Relaxed);
        match status {
            RoutingStatus::HighConfidence => {
                self.high_confidence_count.fetch_add(1, Ordering::Relaxed);
            }
            RoutingStatus::RequiresClarification => {
                self.clarification_count.fetch_add(1, Ordering::Relaxed);
            }
        }
        self.total_processing_micros
            .fetch_add(elapsed.as_micros() as u64, Ordering::Relaxed);
    }

    /// Count one failed `route()` call (input or upstream failure).
    pub fn record_error(&self) {
        self.error_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Zero every counter.
    pub fn reset(&self) {
        self.query_count.store(0, Ordering::Relaxed);
        self.high_confidence_count.store(0, Ordering::Relaxed);
        self.clarification_count.store(0, Ordering::Relaxed);
        self.error_count.store(0, Ordering::Relaxed);
        self.total_processing_micros.store(0, Ordering::Relaxed);
    }

    /// Point-in-time view of the counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        let query_count = self.query_count.load(Ordering::Relaxed);
        let total_ms =
            self.total_processing_micros.load(Ordering::Relaxed) as f64 / 1000.0;
        StatsSnapshot {
            query_count,
            high_confidence_count: self.high_confidence_count.load(Ordering::Relaxed),
            clarification_count: self.clarification_count.load(Ordering::Relaxed),
            error_count: self.error_count.load(Ordering::Relaxed),
            total_processing_ms: total_ms,
            average_processing_ms: if query_count > 0 {
                total_ms / query_count as f64
            } else {
                0.0
            },
            captured_at: Utc::now(),
        }
    }
}

/// Serializable counter snapshot, also served as the analytics summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub query_count: u64,
    pub high_confidence_count: u64,
    pub clarification_count: u64,
    pub error_count: u64,
    pub total_processing_ms: f64,
    pub average_processing_ms: f64,
    pub captured_at: DateTime<Utc>,
}

/// Full statistics response: configuration, catalog shape, and counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingStatistics {
    pub routing_system_info: RoutingSystemInfo,
    pub index_statistics: IndexStatistics,
    pub counters: StatsSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingSystemInfo {
    pub confidence_threshold: f32,
    pub available_domains_count: usize,
    /// Constant 2 — the gate is binary by design.
    pub routing_decision_levels: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStatistics {
    pub total_capabilities: usize,
    pub capabilities_per_domain: BTreeMap<String, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_decision_updates_counters() {
        let stats = RoutingStats::new();
        stats.record_decision(RoutingStatus::HighConfidence, Duration::from_micros(1500));
        stats.record_decision(
            RoutingStatus::RequiresClarification,
            Duration::from_micros(500),
        );

        let snap = stats.snapshot();
        assert_eq!(snap.query_count, 2);
        assert_eq!(snap.high_confidence_count, 1);
        assert_eq!(snap.clarification_count, 1);
        assert_eq!(snap.error_count, 0);
        assert!((snap.total_processing_ms - 2.0).abs() < 1e-9);
        assert!((snap.average_processing_ms - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_errors_do_not_count_as_processed() {
        let stats = RoutingStats::new();
        stats.record_error();
        let snap = stats.snapshot();
        assert_eq!(snap.query_count, 0);
        assert_eq!(snap.error_count, 1);
        assert_eq!(snap.average_processing_ms, 0.0);
    }

    #[test]
    fn test_reset_zeroes_everything() {
        let stats = RoutingStats::new();
        stats.record_decision(RoutingStatus::HighConfidence, Duration::from_micros(100));
        stats.record_error();
        stats.reset();

        let snap = stats.snapshot();
        assert_eq!(snap.query_count, 0);
        assert_eq!(snap.high_confidence_count, 0);
        assert_eq!(snap.clarification_count, 0);
        assert_eq!(snap.error_count, 0);
        assert_eq!(snap.total_processing_ms, 0.0);
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        use std::sync::Arc;

        let stats = Arc::new(RoutingStats::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let stats = Arc::clone(&stats);
            handles.push(std::thread::spawn(move || {
                for _ in 0..1000 {
                    stats.record_decision(
                        RoutingStatus::HighConfidence,
                        Duration::from_micros(1),
                    );
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let snap = stats.snapshot();
        assert_eq!(snap.query_count, 8000);
        assert_eq!(snap.high_confidence_count, 8000);
    }
}
