use crate::components::jobs::JobSubmissionComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-root">
                <h1>{"GAIA interpolation"}</h1>
                <JobSubmissionComponent />
            </div>
        }
    }
}
