#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityEvent {
    ParticipantSignedUp { activity_name: String, email: String },
    ParticipantUnregistered { activity_name: String, email: String },
}
