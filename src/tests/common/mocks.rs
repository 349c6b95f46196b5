use std::cell::{ Cell, RefCell };
use std::rc::Rc;
use futures_util::future::{ FutureExt, LocalBoxFuture };
use crate::contact::{ ContactDelivery, ContactFormData, SubmissionOutcome };
use crate::error::ThemeError;
use crate::theme::PreferenceStore;

/// Store whose reads and writes always fail.
#[derive(Default)]
pub struct BrokenStore {
    pub save_attempts: Cell<usize>,
}

impl PreferenceStore for BrokenStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Err(ThemeError::Read {
            key: key.to_string(),
            reason: "SecurityError".to_string(),
        })
    }

    fn save(&self, _key: &str, _value: &str) -> Result<(), ThemeError> {
        self.save_attempts.set(self.save_attempts.get() + 1);
        Err(ThemeError::StorageUnavailable)
    }
}

/// Resolves immediately with a fixed outcome and remembers what it was given.
#[derive(Clone)]
pub struct RecordingDelivery {
    outcome: SubmissionOutcome,
    pub received: Rc<RefCell<Vec<ContactFormData>>>,
}

impl RecordingDelivery {
    pub fn succeeding() -> Self {
        Self::with_outcome(SubmissionOutcome::Success)
    }

    pub fn failing(reason: &str) -> Self {
        Self::with_outcome(SubmissionOutcome::Failure(reason.to_string()))
    }

    fn with_outcome(outcome: SubmissionOutcome) -> Self {
        Self {
            outcome,
            received: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl ContactDelivery for RecordingDelivery {
    fn deliver(&self, message: ContactFormData) -> LocalBoxFuture<'static, SubmissionOutcome> {
        self.received.borrow_mut().push(message);
        let outcome = self.outcome.clone();
        (async move { outcome }).boxed_local()
    }
}
