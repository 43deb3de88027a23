//! SVG plot of a job's geometry preview.
//!
//! Renders measured and generated stations into a fixed logical canvas.
//! The component is stateless: every render projects the current props
//! from scratch, so updated previews fully replace the marker set.

mod project;

use yew::{html, Component, Context, Html, Properties};

use common::model::station::Station;

use project::{Projection, MARKER_RADIUS, VIEW_HEIGHT, VIEW_WIDTH};

#[derive(Properties, PartialEq)]
pub struct GeometryPlotProps {
    #[prop_or_default]
    pub measured: Vec<Station>,
    #[prop_or_default]
    pub generated: Vec<Station>,
}

pub struct GeometryPlot;

impl Component for GeometryPlot {
    type Message = ();
    type Properties = GeometryPlotProps;

    fn create(_ctx: &Context<Self>) -> Self {
        GeometryPlot
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let projection = Projection::fit(props.measured.iter().chain(props.generated.iter()));

        html! {
            <svg
                id="geometry-plot"
                class="geometry-plot"
                viewBox={format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)}
                preserveAspectRatio="xMidYMid meet"
            >
                { for props.measured.iter().map(|station| marker(&projection, station, "station-measured")) }
                { for props.generated.iter().map(|station| marker(&projection, station, "station-generated")) }
            </svg>
        }
    }
}

fn marker(projection: &Projection, station: &Station, class: &'static str) -> Html {
    let (cx, cy) = projection.project(station);
    html! {
        <circle
            class={class}
            cx={cx.to_string()}
            cy={cy.to_string()}
            r={MARKER_RADIUS.to_string()}
        />
    }
}
