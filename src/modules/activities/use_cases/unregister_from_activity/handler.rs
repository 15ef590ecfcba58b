use crate::modules::activities::core::ports::ActivityStore;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::execute::decide_and_save;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::decide::decide_unregister;
use std::sync::Arc;

pub struct UnregisterFromActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UnregisterFromActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: UnregisterFromActivity,
    ) -> Result<String, ApplicationError> {
        decide_and_save(&*self.store, &command.activity_name, |activity| {
            decide_unregister(activity, &command)
        })
        .await?;

        tracing::info!(activity = %command.activity_name, email = %command.email, "participant unregistered");

        Ok(format!(
            "Unregistered {} from {}",
            command.email, command.activity_name
        ))
    }
}
