//! Component state for the job submission workspace.
//!
//! This module defines the state struct that holds the workspace's runtime
//! data (extracted CSV headers, the selected file, the current job and its
//! observed lifecycle phase, the poll timer handle, and DOM refs for the
//! form controls), along with the small state-machine helpers used by the
//! view and update logic.

use gloo_timers::callback::Interval;
use yew::prelude::*;

use common::jobs::{STATUS_COMPLETE, STATUS_FAILED};
use common::model::scenario::Scenario;
use common::model::station::PreviewData;

/// Client-side view of a job's lifecycle.
///
/// The backend owns the authoritative status; this phase only tracks what
/// the client has observed so far and gates the poll loop. `Complete` and
/// `Failed` are terminal: once reached, no further status request is issued
/// for that job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobPhase {
    /// No job in flight for the current session.
    Idle,
    /// A job was accepted and its status endpoint is being polled.
    Polling,
    /// The backend reported `complete`; the result download is available.
    Complete,
    /// The backend reported `failed`.
    Failed,
}

impl JobPhase {
    /// Maps a raw backend status value onto a terminal phase, if it is one.
    /// Every other value means the job is still in progress.
    pub fn after_status(status: &str) -> Option<JobPhase> {
        match status {
            STATUS_COMPLETE => Some(JobPhase::Complete),
            STATUS_FAILED => Some(JobPhase::Failed),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, JobPhase::Complete | JobPhase::Failed)
    }
}

/// Main state container for the `JobSubmissionComponent`.
///
/// Everything here is UI-local derived state scoped to one
/// submission-to-completion cycle; nothing survives a reload and nothing
/// mirrors server-side state beyond the last observed snapshot.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct JobSubmissionComponent {
    /// Column names extracted from the first line of the selected CSV.
    /// Feeds all three column selectors with the same option set.
    pub headers: Vec<String>,

    /// The CSV file picked in the file input. Kept so a later submission
    /// can build the multipart payload without re-touching the DOM.
    pub csv_file: Option<web_sys::File>,

    /// Currently selected interpolation scenario.
    pub scenario: Scenario,

    /// Identifier of the job created by the last accepted submission.
    pub job_id: Option<String>,

    /// Observed lifecycle phase of the current job.
    pub phase: JobPhase,

    /// Last raw status value received from the backend, shown verbatim.
    pub status_text: Option<String>,

    /// Measured/generated stations fetched once per job.
    pub preview: Option<PreviewData>,

    /// Handle of the active poll interval. Dropping it cancels the
    /// interval, so `None` doubles as "polling stopped".
    pub poll_timer: Option<Interval>,

    /// True between sending the submission request and its response.
    pub submitting: bool,

    /// Reference to the x-column `<select>`.
    pub x_select_ref: NodeRef,

    /// Reference to the y-column `<select>`.
    pub y_select_ref: NodeRef,

    /// Reference to the value-column `<select>`.
    pub value_select_ref: NodeRef,

    /// Reference to the output-spacing `<input>`.
    pub spacing_input_ref: NodeRef,
}

impl JobSubmissionComponent {
    pub fn new() -> Self {
        Self {
            headers: Vec::new(),
            csv_file: None,
            scenario: Scenario::SparseOnly,
            job_id: None,
            phase: JobPhase::Idle,
            status_text: None,
            preview: None,
            poll_timer: None,
            submitting: false,
            x_select_ref: Default::default(),
            y_select_ref: Default::default(),
            value_select_ref: Default::default(),
            spacing_input_ref: Default::default(),
        }
    }

    /// Discards the previous job cycle before a new submission starts.
    ///
    /// Cancels the poll timer (by dropping it) and clears the job id,
    /// phase, status text and preview. Loaded headers and the selected
    /// file are kept: they belong to the dataset, not the job.
    pub fn reset_session(&mut self) {
        self.poll_timer = None;
        self.job_id = None;
        self.phase = JobPhase::Idle;
        self.status_text = None;
        self.preview = None;
    }

    /// Whether the submit control should accept a click right now.
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.phase != JobPhase::Polling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_complete_and_failed_are_terminal() {
        assert_eq!(JobPhase::after_status("complete"), Some(JobPhase::Complete));
        assert_eq!(JobPhase::after_status("failed"), Some(JobPhase::Failed));
        assert_eq!(JobPhase::after_status("accepted"), None);
        assert_eq!(JobPhase::after_status("inferencing"), None);
        assert_eq!(JobPhase::after_status("not_found"), None);
        assert_eq!(JobPhase::after_status(""), None);
        assert!(JobPhase::Complete.is_terminal());
        assert!(JobPhase::Failed.is_terminal());
        assert!(!JobPhase::Polling.is_terminal());
    }

    #[test]
    fn test_reset_session_clears_the_job_but_not_the_dataset() {
        let mut component = JobSubmissionComponent::new();
        component.headers = vec!["lon".to_string(), "lat".to_string()];
        component.job_id = Some("gaia-0123456789ab".to_string());
        component.phase = JobPhase::Polling;
        component.status_text = Some("processing".to_string());
        component.preview = Some(Default::default());

        component.reset_session();

        assert!(component.job_id.is_none());
        assert_eq!(component.phase, JobPhase::Idle);
        assert!(component.status_text.is_none());
        assert!(component.preview.is_none());
        assert!(component.poll_timer.is_none());
        assert_eq!(component.headers.len(), 2);
    }

    #[test]
    fn test_submission_is_blocked_while_a_job_is_in_flight() {
        let mut component = JobSubmissionComponent::new();
        assert!(component.can_submit());

        component.submitting = true;
        assert!(!component.can_submit());

        component.submitting = false;
        component.phase = JobPhase::Polling;
        assert!(!component.can_submit());

        component.phase = JobPhase::Complete;
        assert!(component.can_submit());
        component.phase = JobPhase::Failed;
        assert!(component.can_submit());
    }
}
