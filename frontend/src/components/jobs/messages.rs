use common::model::scenario::Scenario;
use common::model::station::PreviewData;

#[derive(Clone)]
pub enum Msg {
    FileSelected(web_sys::File),
    CsvLoaded(String),
    ScenarioChanged(Scenario),
    Submit,
    SubmitSucceeded { job_id: String, status: String },
    SubmitFailed(String),
    PollTick,
    StatusReceived { job_id: String, status: String },
    PreviewLoaded { job_id: String, preview: PreviewData },
}
