#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UnregisterRejected {
    #[error("Student is not registered for this activity")]
    NotRegistered,
}
