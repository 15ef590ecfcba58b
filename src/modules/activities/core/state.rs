use crate::modules::activities::core::activity::Activity;

/// Registration state of one (activity, email) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationState {
    NotRegistered,
    Registered,
}

impl RegistrationState {
    pub fn of(activity: &Activity, email: &str) -> Self {
        if activity.has_participant(email) {
            RegistrationState::Registered
        } else {
            RegistrationState::NotRegistered
        }
    }
}
