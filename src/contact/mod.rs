mod delivery;
mod form;
mod notice;
mod submission;

pub use delivery::{ ContactDelivery, DeliveryHandle, ServerDelivery, SimulatedDelivery, SubmissionOutcome };
pub use form::{ ContactField, ContactFormData };
pub use notice::{ Notice, NoticeKind, NoticeQueue, QueuedNotice };
pub use submission::{ ContactSubmission, SubmissionStatus };
