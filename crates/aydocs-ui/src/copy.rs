//! Copy-to-clipboard button with transient feedback.

use std::time::Duration;

use aydocs_core::{CopyFeedback, CopyStatus};
use leptos::{prelude::*, task::spawn_local};

use crate::dom;

/// Text shown under the button for a given status.
pub fn feedback_message(status: &CopyStatus) -> Option<String> {
    match status {
        CopyStatus::Idle => None,
        CopyStatus::Copied => Some("Copied to clipboard!".to_string()),
        CopyStatus::Failed(reason) => Some(format!("Copy failed: {reason}")),
    }
}

/// Button that copies `text` and reports the outcome for `feedback_ms`.
#[component]
pub fn CopyButton(
    /// Text placed on the clipboard.
    #[prop(into)]
    text: String,
    /// Button caption.
    #[prop(optional, into)]
    label: Option<String>,
    /// How long the outcome stays visible.
    #[prop(default = 2000)]
    feedback_ms: u64,
) -> impl IntoView {
    let feedback = RwSignal::new(CopyFeedback::default());
    let label = label.unwrap_or_else(|| "Copy".to_string());

    let on_click = move |_| {
        let text = text.clone();
        spawn_local(async move {
            let outcome = dom::copy_to_clipboard(&text).await;
            // The button may have been unmounted while the write was pending.
            let Some(generation) = feedback.try_update(|f| match outcome {
                Ok(()) => f.copied(),
                Err(reason) => f.failed(reason),
            }) else {
                return;
            };

            set_timeout(
                move || {
                    feedback.try_maybe_update(|f| (f.dismiss(generation), ()));
                },
                Duration::from_millis(feedback_ms),
            );
        });
    };

    let message = move || feedback.with(|f| feedback_message(f.status()));
    let failed = move || feedback.with(|f| matches!(f.status(), CopyStatus::Failed(_)));

    view! {
      <div class="aydocs-copy">
        <button type="button" class="aydocs-copy-button" on:click=on_click>
          {label}
        </button>
        <p class="aydocs-copy-feedback" class:failed=failed role="status" aria-live="polite">
          {message}
        </p>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_message() {
        assert_eq!(feedback_message(&CopyStatus::Idle), None);
        assert_eq!(
            feedback_message(&CopyStatus::Copied).as_deref(),
            Some("Copied to clipboard!")
        );
        assert_eq!(
            feedback_message(&CopyStatus::Failed("denied".into())).as_deref(),
            Some("Copy failed: denied")
        );
    }
}
