//! Transient inline feedback for the copy-to-clipboard button.

/// What the copy button shows next to itself.
///
/// Every `copied`/`failed` call bumps a generation counter. The auto-dismiss
/// timer captures the generation it was armed for, so a timer left over from
/// an earlier click cannot clear a newer message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    status: CopyStatus,
    generation: u64,
}

/// Visible status of the copy button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed(String),
}

impl CopyFeedback {
    pub fn status(&self) -> &CopyStatus {
        &self.status
    }

    /// Record a successful copy. Returns the generation to dismiss later.
    pub fn copied(&mut self) -> u64 {
        self.show(CopyStatus::Copied)
    }

    /// Record a failed copy. Returns the generation to dismiss later.
    pub fn failed(&mut self, message: impl Into<String>) -> u64 {
        let message = message.into();
        tracing::warn!(%message, "copy to clipboard failed");
        self.show(CopyStatus::Failed(message))
    }

    /// Clear the message if it is still the one armed as `generation`.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.status == CopyStatus::Idle {
            return false;
        }
        self.status = CopyStatus::Idle;
        true
    }

    fn show(&mut self, status: CopyStatus) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.status = status;
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copied_then_dismissed() {
        let mut feedback = CopyFeedback::default();
        let generation = feedback.copied();
        assert_eq!(feedback.status(), &CopyStatus::Copied);

        assert!(feedback.dismiss(generation));
        assert_eq!(feedback.status(), &CopyStatus::Idle);
    }

    #[test]
    fn test_stale_timer_does_not_clear_newer_message() {
        let mut feedback = CopyFeedback::default();
        let first = feedback.copied();
        let second = feedback.failed("permission denied");

        assert!(!feedback.dismiss(first));
        assert_eq!(
            feedback.status(),
            &CopyStatus::Failed("permission denied".to_string())
        );
        assert!(feedback.dismiss(second));
    }

    #[test]
    fn test_dismiss_when_idle() {
        let mut feedback = CopyFeedback::default();
        assert!(!feedback.dismiss(0));
    }
}
