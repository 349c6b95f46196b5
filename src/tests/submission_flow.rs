use std::cell::RefCell;
use std::rc::Rc;
use std::time::{ Duration, Instant };
use dioxus::dioxus_core::{ NoOpMutations, VirtualDom };
use dioxus::prelude::*;
use futures::executor::block_on;
use crate::contact::{
    ContactFormData,
    ContactSubmission,
    DeliveryHandle,
    NoticeQueue,
    SimulatedDelivery,
    SubmissionStatus,
};
use crate::error::ContactError;
use crate::views::start_submission;
use super::common::{ self, jane };

const NOTICE_DURATION: Duration = Duration::from_millis(40);

#[derive(Clone, Debug, PartialEq)]
struct Snapshot {
    status: SubmissionStatus,
    form: ContactFormData,
    notices: usize,
}

/// What the harness saw on each render.
#[derive(Clone, Default)]
struct Recorder {
    snapshots: Rc<RefCell<Vec<Snapshot>>>,
    second_attempt: Rc<RefCell<Option<Result<(), ContactError>>>>,
}

impl Recorder {
    fn last(&self) -> Option<Snapshot> {
        self.snapshots.borrow().last().cloned()
    }
}

#[component]
fn SubmitHarness() -> Element {
    let recorder = use_context::<Recorder>();
    let submission = use_signal(|| ContactSubmission::new(jane()));
    let notices = use_signal(|| NoticeQueue::new(5));
    let delivery = use_hook(|| DeliveryHandle::new(SimulatedDelivery::new(Duration::ZERO)));

    use_hook(|| {
        if let Err(e) = start_submission(submission, &delivery, notices, NOTICE_DURATION) {
            panic!("first submit rejected: {}", e);
        }
        let second = start_submission(submission, &delivery, notices, NOTICE_DURATION);
        *recorder.second_attempt.borrow_mut() = Some(second);
    });

    recorder.snapshots.borrow_mut().push(Snapshot {
        status: submission.read().status().clone(),
        form: submission.read().form().clone(),
        notices: notices.read().len(),
    });

    rsx! { div {} }
}

/// Run the dom until a render satisfies `done`.
fn pump(dom: &mut VirtualDom, recorder: &Recorder, done: impl Fn(&Snapshot) -> bool) -> Snapshot {
    for _ in 0..50 {
        if let Some(snapshot) = recorder.last().filter(|s| done(s)) {
            return snapshot;
        }
        block_on(dom.wait_for_work());
        dom.render_immediate(&mut NoOpMutations);
    }
    panic!("state never reached; saw {:?}", recorder.snapshots.borrow());
}

#[test]
fn test_submit_in_component_clears_form_and_notice_expires() {
    common::setup();
    let recorder = Recorder::default();
    let mut dom = VirtualDom::new(SubmitHarness).with_root_context(recorder.clone());
    dom.rebuild_in_place();

    let first = recorder.last().expect("harness rendered");
    assert_eq!(first.status, SubmissionStatus::Submitting);
    assert_eq!(first.form, jane());
    assert_eq!(first.notices, 0);
    assert_eq!(*recorder.second_attempt.borrow(), Some(Err(ContactError::AlreadySubmitting)));

    let started = Instant::now();
    let settled = pump(&mut dom, &recorder, |s| s.status == SubmissionStatus::Idle && s.notices > 0);
    assert_eq!(settled.form, ContactFormData::default());
    assert_eq!(settled.notices, 1);

    let expired = pump(&mut dom, &recorder, |s| s.status == SubmissionStatus::Idle && s.notices == 0);
    assert!(started.elapsed() >= NOTICE_DURATION);
    assert!(expired.form.is_empty());

    let most_notices = recorder.snapshots.borrow().iter().map(|s| s.notices).max();
    assert_eq!(most_notices, Some(1));
}
