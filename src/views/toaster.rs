use std::time::Duration;
use dioxus::prelude::*;
use crate::components::{ Icon, IconKind };
use crate::contact::{ Notice, NoticeKind, NoticeQueue };
use crate::utils::sleep;

/// Show `notice` until it is closed or `duration` passes.
pub async fn show_notice(mut queue: Signal<NoticeQueue>, notice: Notice, duration: Duration) {
    let id = queue.write().push(notice);
    sleep(duration).await;
    queue.write().dismiss(id);
}

fn toast_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "toast relative mb-2 rounded-md border bg-background p-4 pr-8 shadow-lg",
        NoticeKind::Error =>
            "toast relative mb-2 rounded-md border border-destructive bg-destructive text-destructive-foreground p-4 pr-8 shadow-lg",
    }
}

#[component]
pub fn Toaster() -> Element {
    let mut queue = use_context::<Signal<NoticeQueue>>();

    rsx! {
        div {
            class: "fixed bottom-0 right-0 z-[100] flex max-h-screen w-full flex-col-reverse p-4 sm:max-w-[420px]",
            for queued in queue.read().iter().cloned() {
                div {
                    key: "{queued.id}",
                    class: toast_class(queued.notice.kind),
                    div { class: "text-sm font-semibold", {queued.notice.title.clone()} }
                    div { class: "text-sm opacity-90", {queued.notice.description.clone()} }
                    button {
                        class: "absolute right-2 top-2 rounded-md p-1 opacity-70 hover:opacity-100",
                        title: "Close",
                        onclick: move |_| {
                            queue.write().dismiss(queued.id);
                        },
                        Icon { kind: IconKind::Close, class: "h-4 w-4" }
                    }
                }
            }
        }
    }
}
