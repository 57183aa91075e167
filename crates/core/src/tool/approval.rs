use std::fmt::{self, Debug, Display};

#[derive(Debug)]
pub(crate) struct ApprovalResult {
    pub approved: bool,
    pub why: Option<String>,
}

/// Approval for a tool call request.
///
/// The approval must be consumed by either [`Approval::approve`] or
/// [`Approval::reject`]. Dropping it without a decision rejects the call.
pub struct Approval {
    what: String,
    justification: String,
    pub(crate) on_result: Option<Box<dyn FnOnce(ApprovalResult) + Send>>,
}

impl Approval {
    /// Creates a new approval.
    #[inline]
    pub fn new<S1: Into<String>, S2: Into<String>>(
        what: S1,
        justification: S2,
    ) -> Self {
        Self {
            what: what.into(),
            justification: justification.into(),
            on_result: None,
        }
    }

    /// Returns what the approval is for.
    #[inline]
    pub fn what(&self) -> &str {
        &self.what
    }

    /// Returns the justification for the approval.
    #[inline]
    pub fn justification(&self) -> &str {
        &self.justification
    }

    /// Approves the request.
    #[inline]
    pub fn approve(self) {
        self.resolve(true, None);
    }

    /// Rejects the request with an optional reason.
    #[inline]
    pub fn reject(self, reason: Option<String>) {
        self.resolve(false, reason);
    }

    fn resolve(self, approved: bool, why: Option<String>) {
        let Some(on_result) = self.on_result else {
            return;
        };
        (on_result)(ApprovalResult { approved, why });
    }
}

impl Debug for Approval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Approval")
            .field("what", &self.what)
            .field("justification", &self.justification)
            .finish_non_exhaustive()
    }
}

impl Display for Approval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{} ({})", self.what, self.justification))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn recording_approval() -> (Approval, Arc<Mutex<Option<ApprovalResult>>>)
    {
        let slot = Arc::new(Mutex::new(None));
        let mut approval = Approval::new("rm -r x", "Agent wants to clean up");
        approval.on_result = Some(Box::new({
            let slot = Arc::clone(&slot);
            move |result| {
                *slot.lock().unwrap() = Some(result);
            }
        }));
        (approval, slot)
    }

    #[test]
    fn test_display() {
        let approval = Approval::new("a.txt", "Agent wants to delete a file");
        assert_eq!(
            approval.to_string(),
            "a.txt (Agent wants to delete a file)"
        );
    }

    #[test]
    fn test_approve_and_reject() {
        let (approval, slot) = recording_approval();
        approval.approve();
        let result = slot.lock().unwrap().take().unwrap();
        assert!(result.approved);
        assert!(result.why.is_none());

        let (approval, slot) = recording_approval();
        approval.reject(Some("not now".to_owned()));
        let result = slot.lock().unwrap().take().unwrap();
        assert!(!result.approved);
        assert_eq!(result.why.as_deref(), Some("not now"));
    }

    #[test]
    fn test_without_callback() {
        // Nothing is listening, both decisions are no-ops.
        Approval::new("x", "y").approve();
        Approval::new("x", "y").reject(None);
    }
}
