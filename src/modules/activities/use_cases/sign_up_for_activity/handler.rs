use crate::modules::activities::core::ports::ActivityStore;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::execute::decide_and_save;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decide::decide_sign_up;
use std::sync::Arc;

pub struct SignUpForActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SignUpForActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Returns the confirmation message echoed back to the caller.
    pub async fn handle(&self, command: SignUpForActivity) -> Result<String, ApplicationError> {
        let activity = decide_and_save(&*self.store, &command.activity_name, |activity| {
            decide_sign_up(activity, &command)
        })
        .await?;

        if activity.is_over_capacity() {
            tracing::warn!(
                activity = %activity.name,
                participants = activity.participants.len(),
                max_participants = activity.max_participants,
                "activity is over capacity"
            );
        }
        tracing::info!(activity = %activity.name, email = %command.email, "participant signed up");

        Ok(format!(
            "Signed up {} for {}",
            command.email, command.activity_name
        ))
    }
}
