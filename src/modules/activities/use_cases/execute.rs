// Shared write path of the participant use cases: load, decide, evolve, save.
//
// Saves are optimistic. When another writer got there first the activity is
// reloaded and the decision is taken again against the fresh participant list.
// A version mismatch means some other write landed, so retrying is unbounded
// and a valid request never fails because of contention.

use crate::modules::activities::core::{
    activity::Activity, decision::Decision, evolve::evolve, ports::ActivityStore,
    ports::StoreError,
};
use crate::modules::activities::use_cases::errors::ApplicationError;

pub async fn decide_and_save<TStore, TReason, F>(
    store: &TStore,
    activity_name: &str,
    decide: F,
) -> Result<Activity, ApplicationError>
where
    TStore: ActivityStore + ?Sized,
    ApplicationError: From<TReason>,
    F: Fn(&Activity) -> Decision<TReason>,
{
    let mut attempt = 1;
    loop {
        let Some(loaded) = store.load(activity_name).await? else {
            return Err(ApplicationError::ActivityNotFound {
                activity_name: activity_name.to_string(),
            });
        };

        let events = match decide(&loaded.activity) {
            Decision::Accepted { events } => events,
            Decision::Rejected { reason } => return Err(reason.into()),
        };
        let activity = events.into_iter().fold(loaded.activity, evolve);

        match store
            .save_participants(activity_name, loaded.version, activity.participants.clone())
            .await
        {
            Ok(()) => return Ok(activity),
            Err(StoreError::VersionMismatch { expected, actual }) => {
                tracing::debug!(
                    activity = activity_name,
                    expected,
                    actual,
                    attempt,
                    "participant list changed concurrently, retrying"
                );
                attempt += 1;
            }
            Err(StoreError::UnknownActivity(_)) => {
                return Err(ApplicationError::ActivityNotFound {
                    activity_name: activity_name.to_string(),
                });
            }
            Err(err) => return Err(err.into()),
        }
    }
}
