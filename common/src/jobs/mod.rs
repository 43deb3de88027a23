use serde::{Deserialize, Serialize};

/// Terminal status value reported once a job has finished successfully.
pub const STATUS_COMPLETE: &str = "complete";
/// Terminal status value reported once a job has failed on the backend.
pub const STATUS_FAILED: &str = "failed";

/// Body of a successful `POST /jobs` response.
///
/// The id is opaque to the client and keys every follow-up request
/// (status polls, the geometry preview and the result download). The
/// accompanying status is the job's initial lifecycle value, usually
/// `accepted`.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct JobResponse {
    pub job_id: String,
    pub status: String,
}

/// Body of a `GET /jobs/{id}/status` response.
///
/// The status set is open ended: the backend walks through values such as
/// `accepted`, `processing`, `inferencing` and `merging` before settling
/// on [`STATUS_COMPLETE`] or [`STATUS_FAILED`]. Clients must treat every
/// unrecognized value as "still in progress".
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct JobStatusResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_response_wire_format() {
        let response: JobResponse =
            serde_json::from_str(r#"{"job_id":"gaia-0123456789ab","status":"accepted"}"#).unwrap();
        assert_eq!(response.job_id, "gaia-0123456789ab");
        assert_eq!(response.status, "accepted");
    }

    #[test]
    fn test_status_response_accepts_unknown_values() {
        let response: JobStatusResponse =
            serde_json::from_str(r#"{"status":"inferencing"}"#).unwrap();
        assert_eq!(response.status, "inferencing");
    }
}
