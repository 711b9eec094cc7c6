//! Persisted visit calendar.
//!
//! The planner never writes here on its own; visits are appended only when
//! the user confirms an itinerary or adds a single monument.

mod json_file;
mod memory;

pub use json_file::JsonFileVisitStore;
pub use memory::MemoryVisitStore;

use crate::error::{AppError, Result};
use crate::models::{VisitRecord, VisitStatus};
use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use time::Date;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Get/put access to the whole visit list.
#[async_trait]
pub trait VisitStore: Send + Sync {
    async fn load(&self) -> Result<Vec<VisitRecord>>;

    async fn save(&self, visits: &[VisitRecord]) -> Result<()>;

    fn backend_name(&self) -> &'static str;
}

/// Planned/completed counts for one calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub planned: usize,
    pub completed: usize,
}

/// Calendar operations over a [`VisitStore`].
///
/// Clones share one update lock, so load-modify-save sequences never
/// interleave and no write is lost.
#[derive(Clone)]
pub struct VisitCalendar {
    store: Arc<dyn VisitStore>,
    update_lock: Arc<Mutex<()>>,
}

impl VisitCalendar {
    pub fn new(store: Arc<dyn VisitStore>) -> Self {
        Self {
            store,
            update_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Append visits after the existing ones; returns how many were added.
    pub async fn append_visits(&self, new_visits: Vec<VisitRecord>) -> Result<usize> {
        let _guard = self.update_lock.lock().await;
        let added = new_visits.len();
        let mut visits = self.store.load().await?;
        visits.extend(new_visits);
        self.store.save(&visits).await?;

        tracing::info!(
            backend = self.store.backend_name(),
            added = added,
            total = visits.len(),
            "Appended {} visit(s) to calendar",
            added
        );
        Ok(added)
    }

    pub async fn all(&self) -> Result<Vec<VisitRecord>> {
        self.store.load().await
    }

    /// Visits on `date`, in itinerary order where one applies.
    pub async fn visits_on(&self, date: Date) -> Result<Vec<VisitRecord>> {
        let mut visits: Vec<VisitRecord> = self
            .store
            .load()
            .await?
            .into_iter()
            .filter(|v| v.date == date)
            .collect();
        // Stable: ad-hoc visits (no order) stay in insertion order after ordered ones
        visits.sort_by_key(|v| v.order.unwrap_or(u32::MAX));
        Ok(visits)
    }

    /// Flip a visit between planned and completed; returns the new status.
    pub async fn toggle_status(&self, id: Uuid) -> Result<VisitStatus> {
        let _guard = self.update_lock.lock().await;
        let mut visits = self.store.load().await?;
        let visit = visits
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| AppError::NotFound(format!("visit {}", id)))?;

        visit.status = visit.status.toggled();
        let status = visit.status;
        self.store.save(&visits).await?;

        tracing::debug!(visit = %id, status = ?status, "Toggled visit status");
        Ok(status)
    }

    pub async fn remove(&self, id: Uuid) -> Result<()> {
        let _guard = self.update_lock.lock().await;
        let mut visits = self.store.load().await?;
        let before = visits.len();
        visits.retain(|v| v.id != id);
        if visits.len() == before {
            return Err(AppError::NotFound(format!("visit {}", id)));
        }
        self.store.save(&visits).await?;

        tracing::debug!(visit = %id, "Removed visit");
        Ok(())
    }

    /// Per-day counts for every date that has at least one visit.
    pub async fn day_summaries(&self) -> Result<BTreeMap<Date, DaySummary>> {
        let mut days: BTreeMap<Date, DaySummary> = BTreeMap::new();
        for visit in self.store.load().await? {
            let day = days.entry(visit.date).or_default();
            match visit.status {
                VisitStatus::Planned => day.planned += 1,
                VisitStatus::Completed => day.completed += 1,
            }
        }
        Ok(days)
    }
}
