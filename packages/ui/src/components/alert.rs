//! Transient success/error popup.

use std::time::Duration;

use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaXmark};
use crate::Icon;

const AUTO_DISMISS: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// Message shown by [`Alert`].
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: AlertKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

/// Renders the notice held in `notice` and clears it after a few seconds
/// or when closed.
#[component]
pub fn Alert(notice: Signal<Option<Notice>>) -> Element {
    let mut notice = notice;

    use_effect(move || {
        if notice.read().is_none() {
            return;
        }
        let shown = notice.peek().clone();
        spawn(async move {
            sleep(AUTO_DISMISS).await;
            // Only clear the notice this timer was started for.
            if *notice.peek() == shown {
                notice.set(None);
            }
        });
    });

    let Some(current) = notice() else {
        return rsx! {};
    };
    let class = match current.kind {
        AlertKind::Success => "alert alert-success",
        AlertKind::Error => "alert alert-error",
    };

    rsx! {
        div {
            class: "{class}",
            role: "alert",
            match current.kind {
                AlertKind::Success => rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
                AlertKind::Error => rsx! { Icon { icon: FaCircleExclamation, width: 16, height: 16 } },
            }
            span { class: "alert-message", "{current.message}" }
            button {
                class: "alert-close",
                title: "Close",
                onclick: move |_| notice.set(None),
                Icon { icon: FaXmark, width: 14, height: 14 }
            }
        }
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
