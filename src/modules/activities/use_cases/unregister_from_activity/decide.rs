use crate::modules::activities::core::{
    activity::Activity, decision::Decision, events::ActivityEvent, state::RegistrationState,
};
use crate::modules::activities::use_cases::unregister_from_activity::{
    command::UnregisterFromActivity, decision::UnregisterRejected,
};

pub fn decide_unregister(
    activity: &Activity,
    command: &UnregisterFromActivity,
) -> Decision<UnregisterRejected> {
    match RegistrationState::of(activity, &command.email) {
        RegistrationState::Registered => Decision::Accepted {
            events: vec![ActivityEvent::ParticipantUnregistered {
                activity_name: activity.name.clone(),
                email: command.email.clone(),
            }],
        },
        RegistrationState::NotRegistered => Decision::Rejected {
            reason: UnregisterRejected::NotRegistered,
        },
    }
}
