use thiserror::Error;

use super::fields::FormField;

/// Why a single field was rejected. `Display` is the text shown under it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{label} is required")]
    RequiredFieldMissing { label: &'static str },
    #[error("Please enter a valid mobile number")]
    InvalidFormat,
    #[error("Name must be at least {min} characters long")]
    TooShort { min: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("could not build webhook request: {0}")]
    Request(String),
    #[error("webhook request failed: {0}")]
    Network(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("lead tracking failed: {0}")]
pub struct TrackingError(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("{} field(s) need attention", .0.len())]
    ValidationFailed(Vec<(FormField, FieldError)>),
    #[error("webhook answered with status {status}")]
    Rejected { status: u16 },
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

impl SubmissionError {
    /// Text for the form-level banner.
    pub fn banner_text(&self) -> &'static str {
        match self {
            SubmissionError::ValidationFailed(_) => "Please fix the errors above",
            SubmissionError::Rejected { .. } | SubmissionError::Transport(_) => {
                "Submission failed. Please try again."
            }
            SubmissionError::AlreadySubmitting => "Please wait, your details are being sent.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_what_the_form_shows() {
        let missing = FieldError::RequiredFieldMissing { label: FormField::FullName.label() };
        assert_eq!(missing.to_string(), "Full Name is required");
        assert_eq!(
            FieldError::TooShort { min: 2 }.to_string(),
            "Name must be at least 2 characters long"
        );
        assert_eq!(
            SubmissionError::Rejected { status: 500 }.banner_text(),
            "Submission failed. Please try again."
        );
    }
}
