// Ports the activity use cases need from the outside world.
//
// Adapters implement these in the adapters layer; tests and local runs use the
// in memory store.

use crate::modules::activities::core::activity::Activity;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown activity: {0}")]
    UnknownActivity(String),

    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: u64, actual: u64 },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
pub struct LoadedActivity {
    pub activity: Activity,
    /// Number of participant-list writes applied since seeding.
    pub version: u64,
}

#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn load(&self, activity_name: &str) -> Result<Option<LoadedActivity>, StoreError>;

    /// Replaces the participant list if the stored version still equals `expected_version`.
    async fn save_participants(
        &self,
        activity_name: &str,
        expected_version: u64,
        participants: Vec<String>,
    ) -> Result<(), StoreError>;
}
