use crate::modules::activities::use_cases::list_activities::projection::ActivityView;
use async_trait::async_trait;

#[async_trait]
pub trait ActivityQueries {
    /// Every activity, in catalog order.
    async fn list_activities(&self) -> anyhow::Result<Vec<ActivityView>>;
}
