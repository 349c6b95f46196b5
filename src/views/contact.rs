use std::time::Duration;
use dioxus::prelude::*;
use crate::components::{ Icon, IconKind };
use crate::configs::SiteConfig;
use crate::contact::{ ContactField, ContactSubmission, DeliveryHandle, NoticeQueue, SubmissionStatus };
use crate::content::{ Profile, PROFILE };
use crate::error::ContactError;
use super::toaster::show_notice;

/// Begin a submission and settle it on a spawned task: the status flips to
/// `Submitting` now, and the resolve plus its notice land when `delivery`
/// finishes. Must run inside a Dioxus scope.
pub fn start_submission(
    mut submission: Signal<ContactSubmission>,
    delivery: &DeliveryHandle,
    notices: Signal<NoticeQueue>,
    notice_duration: Duration
) -> Result<(), ContactError> {
    let message = submission.write().begin()?;
    let pending = delivery.deliver(message);
    spawn(async move {
        let outcome = pending.await;
        let resolved = submission.write().resolve(outcome);
        match resolved {
            Ok(notice) => show_notice(notices, notice, notice_duration).await,
            Err(e) => log::error!("Submission settled twice: {}", e),
        }
    });
    Ok(())
}

#[component]
pub fn ContactSection(#[props(default = PROFILE)] profile: Profile) -> Element {
    let submission = use_signal(ContactSubmission::default);
    let delivery = use_context::<DeliveryHandle>();
    let notices = use_context::<Signal<NoticeQueue>>();
    let notice_duration = use_context::<SiteConfig>().notice_duration;

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Err(e) = start_submission(submission, &delivery, notices, notice_duration) {
            log::debug!("Submit ignored: {}", e);
        }
    };

    let is_submitting = submission.read().is_submitting();
    let failure = match submission.read().status() {
        SubmissionStatus::Failed(reason) => Some(reason.clone()),
        _ => None,
    };
    let socials = profile.socials;

    rsx! {
        div {
            class: "px-4 md:px-8 bg-background",
            div {
                class: "container mx-auto max-w-3xl",
                div {
                    class: "text-center mb-12",
                    h2 { class: "text-3xl md:text-4xl font-bold mb-4", "Get In Touch" }
                    p {
                        class: "text-muted-foreground max-w-2xl mx-auto",
                        "Have a project in mind or want to discuss potential opportunities? Feel free to reach out through my contact information or social media below."
                    }
                }

                div {
                    class: "flex flex-col md:flex-row gap-8 justify-center items-stretch",
                    div {
                        class: "card shadow-md flex-1 max-w-md mx-auto p-6 w-full",
                        h3 { class: "text-xl font-semibold", "Contact Information" }
                        p { class: "text-sm text-muted-foreground mb-4", "Alternative ways to reach me" }
                        div {
                            class: "space-y-4",
                            div {
                                class: "flex items-center gap-3",
                                Icon { kind: IconKind::Mail, class: "h-5 w-5 text-primary" }
                                span { {profile.contact_email} }
                            }
                            div {
                                class: "flex items-center gap-3",
                                Icon { kind: IconKind::Phone, class: "h-5 w-5 text-primary" }
                                span { {profile.phone} }
                            }
                            a {
                                class: "flex items-center gap-2 text-primary hover:underline",
                                href: profile.whatsapp_url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                Icon { kind: IconKind::WhatsApp }
                                "WhatsApp"
                            }
                        }

                        h3 { class: "text-lg font-semibold mt-8 mb-2", "Connect With Me" }
                        div {
                            class: "flex flex-wrap gap-4",
                            if let Some(href) = socials.github {
                                a { class: "btn btn-outline btn-icon", href, target: "_blank", rel: "noopener noreferrer", title: "GitHub",
                                    Icon { kind: IconKind::Github }
                                }
                            }
                            if let Some(href) = socials.linkedin {
                                a { class: "btn btn-outline btn-icon", href, target: "_blank", rel: "noopener noreferrer", title: "LinkedIn",
                                    Icon { kind: IconKind::Linkedin }
                                }
                            }
                            if let Some(href) = socials.facebook {
                                a { class: "btn btn-outline btn-icon", href, target: "_blank", rel: "noopener noreferrer", title: "Facebook",
                                    Icon { kind: IconKind::Facebook }
                                }
                            }
                        }
                    }

                    form {
                        class: "card shadow-md flex-1 max-w-md mx-auto p-6 w-full space-y-4",
                        onsubmit: onsubmit,
                        h3 { class: "text-xl font-semibold", "Send a Message" }
                        FormField { submission, field: ContactField::Name, label: "Name", placeholder: "Your name" }
                        FormField { submission, field: ContactField::Email, label: "Email", input_type: "email", placeholder: "you@example.com" }
                        FormField { submission, field: ContactField::Subject, label: "Subject", placeholder: "What is this about?" }
                        FormField { submission, field: ContactField::Message, label: "Message", placeholder: "Your message", multiline: true }
                        if let Some(reason) = failure {
                            p { class: "text-sm text-destructive", "Could not send: {reason}" }
                        }
                        button {
                            class: if is_submitting { "btn btn-primary w-full opacity-50 cursor-not-allowed" } else { "btn btn-primary w-full" },
                            r#type: "submit",
                            disabled: is_submitting,
                            if is_submitting {
                                "Sending..."
                            } else {
                                Icon { kind: IconKind::Send, class: "mr-2 h-4 w-4" }
                                "Send Message"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FormField(
    submission: Signal<ContactSubmission>,
    field: ContactField,
    label: &'static str,
    #[props(default = "text")] input_type: &'static str,
    #[props(default = "")] placeholder: &'static str,
    #[props(default = false)] multiline: bool
) -> Element {
    let mut submission = submission;
    let key = field.key();
    let value = submission.read().form().get(field).to_string();

    rsx! {
        div {
            class: "space-y-2",
            label { class: "text-sm font-medium", r#for: key, {label} }
            if multiline {
                textarea {
                    class: "input min-h-[120px]",
                    id: key,
                    name: key,
                    placeholder,
                    rows: "5",
                    value: "{value}",
                    oninput: move |evt: FormEvent| submission.write().update_field(key, &evt.value()),
                }
            } else {
                input {
                    class: "input",
                    id: key,
                    name: key,
                    r#type: input_type,
                    placeholder,
                    value: "{value}",
                    oninput: move |evt: FormEvent| submission.write().update_field(key, &evt.value()),
                }
            }
        }
    }
}
