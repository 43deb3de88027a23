//! View rendering for the job submission component.
//!
//! One column of form controls (dataset, scenario, column mapping,
//! submission) next to the status line and the geometry preview plot.
//! Every control carries a stable id so the surrounding page can style or
//! script it without touching component internals.

use web_sys::{Event, HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::scenario::Scenario;

use super::messages::Msg;
use super::state::{JobPhase, JobSubmissionComponent};
use crate::components::plot::GeometryPlot;

/// Main view function for the job submission component.
pub fn view(component: &JobSubmissionComponent, ctx: &Context<JobSubmissionComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="job-workspace">
            { build_dataset_row(component, link) }
            { build_column_row(component) }
            { build_submit_row(component, link) }
            { build_status_panel(component, ctx) }
            { build_preview(component) }
        </div>
    }
}

/// Builds the file input and the scenario selector.
fn build_dataset_row(component: &JobSubmissionComponent, link: &Scope<JobSubmissionComponent>) -> Html {
    html! {
        <div class="field-row">
            <label for="csv-file">{"Station CSV"}</label>
            <input
                id="csv-file"
                type="file"
                accept=".csv,text/csv"
                onchange={link.batch_callback(|e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    // Closing the picker without choosing keeps the
                    // previously loaded headers.
                    match input.files().and_then(|files| files.get(0)) {
                        Some(file) => vec![Msg::FileSelected(file)],
                        None => vec![],
                    }
                })}
            />
            <label for="scenario">{"Scenario"}</label>
            <select
                id="scenario"
                onchange={link.batch_callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Scenario::parse(&select.value()).map(Msg::ScenarioChanged)
                })}
            >
                { for Scenario::ALL.iter().map(|scenario| html! {
                    <option
                        value={scenario.as_str()}
                        selected={*scenario == component.scenario}
                    >
                        { scenario.label() }
                    </option>
                }) }
            </select>
        </div>
    }
}

/// Builds the three column selectors and the spacing input. All three
/// selectors are fed the same header list; the value column and the
/// spacing only matter for `sparse_only` submissions.
fn build_column_row(component: &JobSubmissionComponent) -> Html {
    html! {
        <div class="field-row">
            <label for="x-column">{"X column"}</label>
            <select id="x-column" ref={component.x_select_ref.clone()}>
                { column_options(&component.headers) }
            </select>
            <label for="y-column">{"Y column"}</label>
            <select id="y-column" ref={component.y_select_ref.clone()}>
                { column_options(&component.headers) }
            </select>
            <label for="value-column">{"Value column"}</label>
            <select id="value-column" ref={component.value_select_ref.clone()}>
                { column_options(&component.headers) }
            </select>
            <label for="output-spacing">{"Output spacing"}</label>
            <input
                id="output-spacing"
                type="number"
                step="any"
                placeholder="e.g. 10"
                ref={component.spacing_input_ref.clone()}
            />
        </div>
    }
}

/// One option per extracted header, in header order.
fn column_options(headers: &[String]) -> Html {
    headers
        .iter()
        .map(|name| html! { <option value={name.clone()}>{ name.clone() }</option> })
        .collect::<Html>()
}

/// Builds the submit button. Disabled while a submission or its poll
/// cycle is in flight.
fn build_submit_row(component: &JobSubmissionComponent, link: &Scope<JobSubmissionComponent>) -> Html {
    html! {
        <div class="field-row">
            <button
                id="submit-job"
                disabled={!component.can_submit()}
                onclick={link.callback(|_| Msg::Submit)}
            >
                {"Submit job"}
            </button>
        </div>
    }
}

/// Builds the status line and, for completed jobs, the result download
/// link. The status text is the backend's raw value.
fn build_status_panel(
    component: &JobSubmissionComponent,
    ctx: &Context<JobSubmissionComponent>,
) -> Html {
    let phase_class = match component.phase {
        JobPhase::Idle => "idle",
        JobPhase::Polling => "polling",
        JobPhase::Complete => "complete",
        JobPhase::Failed => "failed",
    };
    let status_text = component
        .status_text
        .clone()
        .unwrap_or_else(|| "no job submitted".to_string());

    html! {
        <div class="job-status-panel">
            <span id="job-status" class={classes!("job-status", phase_class)}>
                { status_text }
            </span>
            {
                match (&component.phase, &component.job_id) {
                    (JobPhase::Complete, Some(job_id)) => html! {
                        <a
                            id="result-download"
                            href={format!("{}/{}/result", ctx.props().api_base, job_id)}
                        >
                            {"Download result"}
                        </a>
                    },
                    _ => html! {},
                }
            }
        </div>
    }
}

/// Builds the geometry preview plot. Renders an empty plot until the
/// preview for the current job has arrived.
fn build_preview(component: &JobSubmissionComponent) -> Html {
    let (measured, generated) = match &component.preview {
        Some(preview) => (preview.measured.clone(), preview.generated.clone()),
        None => (Vec::new(), Vec::new()),
    };
    html! {
        <GeometryPlot {measured} {generated} />
    }
}
