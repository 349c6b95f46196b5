use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    ArrowDown,
    ChevronUp,
    Close,
    Database,
    Download,
    ExternalLink,
    Facebook,
    Github,
    Laptop,
    Linkedin,
    Mail,
    Menu,
    Moon,
    Phone,
    Send,
    Server,
    Sun,
    Twitter,
    WhatsApp,
    Wrench,
}

impl IconKind {
    fn view_box(self) -> &'static str {
        match self {
            IconKind::WhatsApp => "0 0 32 32",
            _ => "0 0 24 24",
        }
    }

    /// Brand marks are filled; everything else is a stroked outline.
    fn filled(self) -> bool {
        matches!(self, IconKind::Facebook | IconKind::WhatsApp)
    }

    fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::ArrowDown => &["M12 5v14", "m19 12-7 7-7-7"],
            IconKind::ChevronUp => &["m18 15-6-6-6 6"],
            IconKind::Close => &["M18 6 6 18", "m6 6 12 12"],
            IconKind::Database =>
                &[
                    "M3 5a9 3 0 1 0 18 0a9 3 0 1 0-18 0",
                    "M3 5V19A9 3 0 0 0 21 19V5",
                    "M3 12A9 3 0 0 0 21 12",
                ],
            IconKind::Download =>
                &["M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4", "m7 10 5 5 5-5", "M12 15V3"],
            IconKind::ExternalLink =>
                &[
                    "M15 3h6v6",
                    "M10 14 21 3",
                    "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
                ],
            IconKind::Facebook =>
                &[
                    "M22.675 0h-21.35C.595 0 0 .592 0 1.326v21.348C0 23.408.595 24 1.325 24h11.495v-9.294H9.692v-3.622h3.128V8.413c0-3.1 1.893-4.788 4.659-4.788 1.325 0 2.463.099 2.797.143v3.24l-1.918.001c-1.504 0-1.797.715-1.797 1.763v2.313h3.587l-.467 3.622h-3.12V24h6.116C23.406 24 24 23.408 24 22.674V1.326C24 .592 23.406 0 22.675 0",
                ],
            IconKind::Github =>
                &[
                    "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                    "M9 18c-4.51 2-5-2-7-2",
                ],
            IconKind::Laptop =>
                &[
                    "M20 16V7a2 2 0 0 0-2-2H6a2 2 0 0 0-2 2v9m16 0H4m16 0 1.28 2.55a1 1 0 0 1-.9 1.45H3.62a1 1 0 0 1-.9-1.45L4 16",
                ],
            IconKind::Linkedin =>
                &[
                    "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                    "M2 9h4v12H2z",
                    "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
                ],
            IconKind::Mail =>
                &[
                    "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                    "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
                ],
            IconKind::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            IconKind::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            IconKind::Phone =>
                &[
                    "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
                ],
            IconKind::Send => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
            IconKind::Server =>
                &[
                    "M4 2h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                    "M4 14h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2z",
                    "M6 6h.01",
                    "M6 18h.01",
                ],
            IconKind::Sun =>
                &[
                    "M16 12a4 4 0 1 1-8 0a4 4 0 1 1 8 0",
                    "M12 2v2",
                    "M12 20v2",
                    "m4.93 4.93 1.41 1.41",
                    "m17.66 17.66 1.41 1.41",
                    "M2 12h2",
                    "M20 12h2",
                    "m6.34 17.66-1.41 1.41",
                    "m19.07 4.93-1.41 1.41",
                ],
            IconKind::Twitter =>
                &[
                    "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
                ],
            IconKind::WhatsApp =>
                &[
                    "M16 3C9.373 3 4 8.373 4 15c0 2.637.86 5.08 2.34 7.09L4 29l7.18-2.31C13.09 27.14 14.51 27.5 16 27.5c6.627 0 12-5.373 12-12S22.627 3 16 3zm0 22c-1.34 0-2.64-.26-3.85-.76l-.27-.11-4.27 1.37 1.4-4.13-.18-.28C7.26 18.01 7 16.53 7 15c0-5.06 4.13-9.18 9.18-9.18S25.36 9.94 25.36 15c0 5.06-4.13 9.18-9.18 9.18zm5.09-6.41c-.28-.14-1.65-.81-1.9-.9-.25-.09-.43-.14-.61.14-.18.28-.7.9-.86 1.08-.16.18-.32.2-.6.07-.28-.14-1.18-.44-2.25-1.41-.83-.74-1.39-1.65-1.55-1.93-.16-.28-.02-.43.12-.57.13-.13.28-.34.42-.51.14-.17.18-.29.28-.48.09-.18.05-.34-.02-.48-.07-.14-.61-1.47-.84-2.01-.22-.53-.45-.46-.62-.47-.16-.01-.34-.01-.52-.01-.18 0-.48.07-.73.34-.25.27-.97.95-.97 2.32 0 1.37.99 2.7 1.13 2.89.14.18 1.95 2.98 4.74 4.06.66.28 1.18.45 1.58.58.66.21 1.26.18 1.73.11.53-.08 1.65-.67 1.88-1.32.23-.65.23-1.2.16-1.32-.07-.12-.25-.19-.53-.33z",
                ],
            IconKind::Wrench =>
                &[
                    "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z",
                ],
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, #[props(default = "h-5 w-5")] class: &'static str) -> Element {
    let filled = kind.filled();

    rsx! {
        svg {
            class: "{class}",
            view_box: kind.view_box(),
            fill: if filled { "currentColor" } else { "none" },
            stroke: if filled { "none" } else { "currentColor" },
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for d in kind.paths() {
                path { d: *d }
            }
        }
    }
}
