#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignUpRejected {
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,
}
