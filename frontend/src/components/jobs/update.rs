//! Update function for the job submission component.
//!
//! This module contains a single `update` function following an Elm-style
//! architecture: it receives the current `JobSubmissionComponent` state,
//! the `Context`, and a `Msg`, mutates the state accordingly, and returns
//! a `bool` indicating whether the view should re-render.
//!
//! Key behaviors
//! - Reading the selected CSV and extracting its header columns.
//! - Validating the form against the scenario rules before any request is
//!   sent; failures surface as toasts and never reach the network.
//! - Submitting the multipart payload; on acceptance, firing the geometry
//!   preview fetch and starting the status poller without waiting on each
//!   other.
//! - Polling on a fixed interval until a terminal status arrives, then
//!   dropping the interval handle to cancel it.
//! - Resubmission resets the session first, so at most one poller is ever
//!   live.

use gloo_console::{error, log, warn};
use gloo_file::{futures::read_as_text, Blob};
use gloo_net::http::Request;
use gloo_timers::callback::Interval;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::jobs::{JobResponse, JobStatusResponse};
use common::model::station::PreviewData;

use super::csv::extract_headers;
use super::helpers::{input_value, select_value, show_toast};
use super::messages::Msg;
use super::request;
use super::state::{JobPhase, JobSubmissionComponent};

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` (e.g., async callbacks).
/// - Returns `true` to re-render the view, `false` to short-circuit when
///   only side effects occur.
pub fn update(
    component: &mut JobSubmissionComponent,
    ctx: &Context<JobSubmissionComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::FileSelected(file) => {
            component.csv_file = Some(file.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                match read_as_text(&Blob::from(file)).await {
                    Ok(text) => link.send_message(Msg::CsvLoaded(text)),
                    Err(err) => {
                        error!("could not read the selected file:", err.to_string());
                        show_toast("Could not read the selected file.");
                    }
                }
            });
            true
        }
        Msg::CsvLoaded(text) => {
            component.headers = extract_headers(&text);
            true
        }
        Msg::ScenarioChanged(scenario) => {
            component.scenario = scenario;
            true
        }
        Msg::Submit => {
            let x_column = select_value(&component.x_select_ref);
            let y_column = select_value(&component.y_select_ref);
            let value_column = select_value(&component.value_select_ref);
            let spacing = input_value(&component.spacing_input_ref);

            let params = match request::validate(
                component.csv_file.is_some(),
                component.scenario,
                &x_column,
                &y_column,
                &value_column,
                &spacing,
            ) {
                Ok(params) => params,
                Err(message) => {
                    show_toast(&message);
                    return false;
                }
            };
            let Some(file) = component.csv_file.clone() else {
                return false;
            };

            // A resubmission must never leave the previous poller running.
            component.reset_session();
            component.submitting = true;

            let form = match request::to_form_data(&params, &file) {
                Ok(form) => form,
                Err(err) => {
                    component.submitting = false;
                    error!("could not assemble the submission payload:", err);
                    show_toast("Could not assemble the submission payload.");
                    return true;
                }
            };

            let link = ctx.link().clone();
            let url = ctx.props().api_base.clone();
            spawn_local(async move {
                let request = match Request::post(&url).body(form) {
                    Ok(request) => request,
                    Err(err) => {
                        link.send_message(Msg::SubmitFailed(err.to_string()));
                        return;
                    }
                };
                match request.send().await {
                    Ok(response) if response.ok() => match response.json::<JobResponse>().await {
                        Ok(job) => link.send_message(Msg::SubmitSucceeded {
                            job_id: job.job_id,
                            status: job.status,
                        }),
                        Err(err) => link.send_message(Msg::SubmitFailed(err.to_string())),
                    },
                    // The backend answers rejections with a human-readable
                    // plain-text body; surface it verbatim.
                    Ok(response) => {
                        let body = response.text().await.unwrap_or_default();
                        link.send_message(Msg::SubmitFailed(body));
                    }
                    Err(err) => link.send_message(Msg::SubmitFailed(err.to_string())),
                }
            });
            true
        }
        Msg::SubmitSucceeded { job_id, status } => {
            log!("job accepted:", job_id.clone());
            component.submitting = false;
            component.job_id = Some(job_id.clone());
            component.phase = JobPhase::Polling;
            component.status_text = Some(status);

            // Preview fetch and poller start together; neither waits on
            // the other.
            let link = ctx.link().clone();
            let preview_url = format!("{}/{}/preview", ctx.props().api_base, job_id);
            let preview_job_id = job_id.clone();
            spawn_local(async move {
                match Request::get(&preview_url).send().await {
                    Ok(response) if response.ok() => {
                        match response.json::<PreviewData>().await {
                            Ok(preview) => link.send_message(Msg::PreviewLoaded {
                                job_id: preview_job_id,
                                preview,
                            }),
                            Err(err) => warn!("unreadable preview payload:", err.to_string()),
                        }
                    }
                    Ok(response) => warn!("no preview available, status", response.status()),
                    Err(err) => warn!("preview request failed:", err.to_string()),
                }
            });

            let link = ctx.link().clone();
            component.poll_timer = Some(Interval::new(ctx.props().poll_interval_ms, move || {
                link.send_message(Msg::PollTick)
            }));
            true
        }
        Msg::SubmitFailed(message) => {
            component.submitting = false;
            error!("job submission failed:", message.clone());
            show_toast(&format!("Job submission failed: {}", message));
            true
        }
        Msg::PollTick => {
            if component.phase != JobPhase::Polling {
                return false;
            }
            let Some(job_id) = component.job_id.clone() else {
                return false;
            };
            let link = ctx.link().clone();
            let status_url = format!("{}/{}/status", ctx.props().api_base, job_id);
            spawn_local(async move {
                match Request::get(&status_url).send().await {
                    Ok(response) if response.ok() => {
                        match response.json::<JobStatusResponse>().await {
                            Ok(body) => link.send_message(Msg::StatusReceived {
                                job_id,
                                status: body.status,
                            }),
                            Err(err) => log!("skipping malformed status body:", err.to_string()),
                        }
                    }
                    // Transient; the next tick retries.
                    Ok(response) => log!("skipping status poll, got", response.status()),
                    Err(err) => log!("skipping status poll:", err.to_string()),
                }
            });
            false
        }
        Msg::StatusReceived { job_id, status } => {
            // An in-flight poll can resolve after the phase turned
            // terminal, or after a resubmission replaced the job; both are
            // stale and ignored.
            if component.phase != JobPhase::Polling
                || component.job_id.as_deref() != Some(job_id.as_str())
            {
                return false;
            }
            component.status_text = Some(status.clone());
            if let Some(terminal) = JobPhase::after_status(&status) {
                component.phase = terminal;
                component.poll_timer = None;
                if terminal == JobPhase::Failed {
                    show_toast("The job failed on the backend.");
                }
            }
            true
        }
        Msg::PreviewLoaded { job_id, preview } => {
            // Drop previews that belong to a superseded submission.
            if component.job_id.as_deref() != Some(job_id.as_str()) {
                return false;
            }
            component.preview = Some(preview);
            true
        }
    }
}
