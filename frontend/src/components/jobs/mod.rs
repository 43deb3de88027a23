//! Job submission workspace: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `JobSubmissionProps`, `JobSubmissionComponent`).
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//!
//! The component walks one dataset through the whole job lifecycle: CSV
//! header extraction, scenario-driven validation, multipart submission,
//! status polling on a fixed cadence, and the geometry preview handed to
//! `components::plot`.

use yew::prelude::*;

mod csv;
mod helpers;
mod messages;
mod props;
mod request;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::JobSubmissionProps;
pub use state::JobSubmissionComponent;

impl Component for JobSubmissionComponent {
    type Message = Msg;
    type Properties = JobSubmissionProps;

    fn create(_ctx: &Context<Self>) -> Self {
        JobSubmissionComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
