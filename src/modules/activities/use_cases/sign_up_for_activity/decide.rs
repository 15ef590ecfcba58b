use crate::modules::activities::core::{
    activity::Activity, decision::Decision, events::ActivityEvent, state::RegistrationState,
};
use crate::modules::activities::use_cases::sign_up_for_activity::{
    command::SignUpForActivity, decision::SignUpRejected,
};

pub fn decide_sign_up(
    activity: &Activity,
    command: &SignUpForActivity,
) -> Decision<SignUpRejected> {
    match RegistrationState::of(activity, &command.email) {
        RegistrationState::NotRegistered => Decision::Accepted {
            events: vec![ActivityEvent::ParticipantSignedUp {
                activity_name: activity.name.clone(),
                email: command.email.clone(),
            }],
        },
        RegistrationState::Registered => Decision::Rejected {
            reason: SignUpRejected::AlreadySignedUp,
        },
    }
}
