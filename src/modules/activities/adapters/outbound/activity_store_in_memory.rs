// In memory activity registry.
//
// Purpose
// - Hold the seeded activity catalog for the lifetime of the process.
//
// Responsibilities
// - Keep activities in seed order.
// - Enforce optimistic concurrency on participant writes by checking the expected version.
// - Serve the list query.

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::catalog::seed_activities;
use crate::modules::activities::core::ports::{ActivityStore, LoadedActivity, StoreError};
use crate::modules::activities::use_cases::list_activities::projection::ActivityView;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct StoredActivity {
    activity: Activity,
    version: u64,
}

#[derive(Default)]
pub struct InMemoryActivityStore {
    activities: RwLock<Vec<StoredActivity>>,
    is_offline: bool,
    delay_save_ms: AtomicU64,
}

impl InMemoryActivityStore {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities: RwLock::new(Self::stored(activities)),
            ..Self::default()
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    /// Drops every participant change and version, restoring `activities`.
    pub async fn reset(&self, activities: Vec<Activity>) {
        *self.activities.write().await = Self::stored(activities);
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_save_ms(&self, ms: u64) {
        self.delay_save_ms.store(ms, Ordering::Relaxed);
    }

    fn stored(activities: Vec<Activity>) -> Vec<StoredActivity> {
        activities
            .into_iter()
            .map(|activity| StoredActivity {
                activity,
                version: 0,
            })
            .collect()
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Activity store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn load(&self, activity_name: &str) -> Result<Option<LoadedActivity>, StoreError> {
        self.ensure_online()?;
        let guard = self.activities.read().await;
        Ok(guard
            .iter()
            .find(|stored| stored.activity.name == activity_name)
            .map(|stored| LoadedActivity {
                activity: stored.activity.clone(),
                version: stored.version,
            }))
    }

    async fn save_participants(
        &self,
        activity_name: &str,
        expected_version: u64,
        participants: Vec<String>,
    ) -> Result<(), StoreError> {
        self.ensure_online()?;
        let delay = self.delay_save_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.activities.write().await;
        let stored = guard
            .iter_mut()
            .find(|stored| stored.activity.name == activity_name)
            .ok_or_else(|| StoreError::UnknownActivity(activity_name.to_string()))?;
        if stored.version != expected_version {
            return Err(StoreError::VersionMismatch {
                expected: expected_version,
                actual: stored.version,
            });
        }
        stored.activity.participants = participants;
        stored.version += 1;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryActivityStore {
    async fn list_activities(&self) -> anyhow::Result<Vec<ActivityView>> {
        self.ensure_online()?;
        let guard = self.activities.read().await;
        Ok(guard
            .iter()
            .map(|stored| ActivityView::from(stored.activity.clone()))
            .collect())
    }
}
