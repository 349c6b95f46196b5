use crate::error::ContactError;
use super::delivery::SubmissionOutcome;
use super::form::ContactFormData;
use super::notice::Notice;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    /// Only reachable through a delivery that can fail; the simulated one never does.
    Failed(String),
}

/// Contact form contents plus where the current attempt stands.
///
/// ```text
/// Idle | Failed --begin--> Submitting --resolve(Success)--> Idle     (fields cleared)
///                                     --resolve(Failure)--> Failed   (fields kept)
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactSubmission {
    form: ContactFormData,
    status: SubmissionStatus,
}

impl ContactSubmission {
    pub fn new(form: ContactFormData) -> Self {
        Self {
            form,
            status: SubmissionStatus::Idle,
        }
    }

    pub fn form(&self) -> &ContactFormData {
        &self.form
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn update_field(&mut self, field_name: &str, value: &str) {
        self.form = self.form.update_field(field_name, value);
    }

    /// Move to `Submitting` and hand back the message to deliver.
    ///
    /// A second submit while one is in flight is rejected and changes nothing.
    pub fn begin(&mut self) -> Result<ContactFormData, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::AlreadySubmitting);
        }
        self.status = SubmissionStatus::Submitting;
        log::info!("Contact form submitting");
        Ok(self.form.clone())
    }

    /// Settle the in-flight attempt and return the notice to show.
    pub fn resolve(&mut self, outcome: SubmissionOutcome) -> Result<Notice, ContactError> {
        if !self.is_submitting() {
            return Err(ContactError::NotSubmitting);
        }
        match outcome {
            SubmissionOutcome::Success => {
                self.form.clear();
                self.status = SubmissionStatus::Idle;
                log::info!("Contact form submitted");
                Ok(Notice::message_sent())
            }
            SubmissionOutcome::Failure(reason) => {
                log::warn!("Contact form submission failed: {}", reason);
                let notice = Notice::message_failed(&reason);
                self.status = SubmissionStatus::Failed(reason);
                Ok(notice)
            }
        }
    }
}
