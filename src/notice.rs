//! Message channel shown to the user in place of blocking alert dialogs.
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

/// Handle to the current notice, shared through Leptos context.
#[derive(Debug, Clone, Copy)]
pub struct Notices(RwSignal<Option<Notice>>);

impl Notices {
    /// Creates the channel and registers it for descendants.
    pub fn provide() -> Self {
        let notices = Notices(create_rw_signal(None));
        provide_context(notices);
        notices
    }

    pub fn info(&self, text: impl Into<String>) {
        self.publish(NoticeLevel::Info, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.publish(NoticeLevel::Error, text.into());
    }

    pub fn clear(&self) {
        self.0.set(None);
    }

    pub fn current(&self) -> Option<Notice> {
        self.0.get()
    }

    fn publish(&self, level: NoticeLevel, text: String) {
        self.0.set(Some(Notice { level, text }));
    }
}

/// The notices in scope, or a fresh channel when none was provided.
pub fn use_notices() -> Notices {
    use_context::<Notices>().unwrap_or_else(Notices::provide)
}

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notices = use_notices();

    let class = move || match notices.current().map(|n| n.level) {
        Some(NoticeLevel::Error) => "notice error",
        Some(NoticeLevel::Info) => "notice info",
        None => "notice",
    };

    view! {
        <div id="notice" role="alert" class=class hidden=move || notices.current().is_none()>
            <span>{move || notices.current().map(|n| n.text).unwrap_or_default()}</span>
            <button type="button" on:click=move |_| notices.clear()>{ "Dismiss" }</button>
        </div>
    }
}
