use std::rc::Rc;
use std::time::Duration;
use futures_util::future::{ FutureExt, LocalBoxFuture };
use crate::configs::{ DeliveryMode, SiteConfig };
use crate::utils::sleep;
use super::form::ContactFormData;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(String),
}

/// Where a submitted contact message goes.
pub trait ContactDelivery {
    fn deliver(&self, message: ContactFormData) -> LocalBoxFuture<'static, SubmissionOutcome>;
}

/// Pretends to send: waits `delay`, then reports success.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatedDelivery {
    pub delay: Duration,
}

impl SimulatedDelivery {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedDelivery {
    fn default() -> Self {
        Self::new(SiteConfig::default().submit_delay)
    }
}

impl ContactDelivery for SimulatedDelivery {
    fn deliver(&self, message: ContactFormData) -> LocalBoxFuture<'static, SubmissionOutcome> {
        let delay = self.delay;
        (async move {
            log::debug!("Simulating delivery from {:?} ({}ms)", message.email, delay.as_millis());
            sleep(delay).await;
            SubmissionOutcome::Success
        }).boxed_local()
    }
}

/// Sends through the `deliver_contact_message` server function.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerDelivery;

impl ContactDelivery for ServerDelivery {
    fn deliver(&self, message: ContactFormData) -> LocalBoxFuture<'static, SubmissionOutcome> {
        use dioxus::prelude::ServerFnError;
        use crate::server::deliver_contact_message;

        (async move {
            match deliver_contact_message(message).await {
                Ok(()) => SubmissionOutcome::Success,
                Err(ServerFnError::ServerError(reason)) => SubmissionOutcome::Failure(reason),
                Err(e) => SubmissionOutcome::Failure(e.to_string()),
            }
        }).boxed_local()
    }
}

/// Shared delivery for the Dioxus context.
#[derive(Clone)]
pub struct DeliveryHandle(Rc<dyn ContactDelivery>);

impl DeliveryHandle {
    pub fn new(delivery: impl ContactDelivery + 'static) -> Self {
        Self(Rc::new(delivery))
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        match config.delivery {
            DeliveryMode::Simulated => Self::new(SimulatedDelivery::new(config.submit_delay)),
            DeliveryMode::Server => Self::new(ServerDelivery),
        }
    }

    pub fn deliver(&self, message: ContactFormData) -> LocalBoxFuture<'static, SubmissionOutcome> {
        self.0.deliver(message)
    }
}
