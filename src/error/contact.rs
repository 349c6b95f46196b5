use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("a submission is already in progress")]
    AlreadySubmitting,
    #[error("no submission is in progress")]
    NotSubmitting,
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),
    #[error("message must not be empty")]
    EmptyMessage,
}

