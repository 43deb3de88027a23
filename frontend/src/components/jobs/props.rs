//! Defines the properties for the `JobSubmissionComponent`.

use yew::prelude::*;

/// Properties for the `JobSubmissionComponent`.
///
/// Both fields exist so a hosting page can point the workspace at a
/// different backend mount or slow the poll cadence down; the defaults
/// match the backend contract.
#[derive(Properties, PartialEq, Clone)]
pub struct JobSubmissionProps {
    /// Base path of the jobs API. Submission posts here and the status,
    /// preview and result URLs are derived from it.
    #[prop_or_else(default_api_base)]
    pub api_base: String,

    /// Milliseconds between two status polls for an accepted job.
    #[prop_or(3000)]
    pub poll_interval_ms: u32,
}

fn default_api_base() -> String {
    "/jobs".to_string()
}
