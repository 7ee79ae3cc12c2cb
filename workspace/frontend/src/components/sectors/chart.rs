use common::SectorPerformance;
use plotly::common::Marker;
use plotly::layout::Axis;
use plotly::{Bar, Layout};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

const BAR_COLOR: &str = "#10b981";

#[derive(Properties, PartialEq)]
pub struct SectorBarChartProps {
    pub rows: Vec<SectorPerformance>,
}

/// Bar chart over the same rows the list shows: sector names on the x axis,
/// parsed percentage change on the y axis, hover tooltip from Plotly's
/// defaults.
#[function_component(SectorBarChart)]
pub fn sector_bar_chart(props: &SectorBarChartProps) -> Html {
    let container_ref = use_node_ref();
    let rows = props.rows.clone();

    use_effect_with((container_ref.clone(), rows), move |(container_ref, rows)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id("sector-performance-chart");

            let sectors: Vec<String> = rows.iter().map(|r| r.sector.clone()).collect();
            let changes: Vec<f64> = rows.iter().map(|r| r.change().unwrap_or(0.0)).collect();

            let trace = Bar::new(sectors, changes).marker(Marker::new().color(BAR_COLOR));

            let layout = Layout::new()
                .x_axis(Axis::new().show_grid(false))
                .y_axis(Axis::new().show_grid(true).grid_color("#eeeeee"))
                .height(320);

            // Serialize trace and layout to JSON and parse as JS objects
            let trace_json = serde_json::to_string(&trace).unwrap();
            let trace_js = js_sys::JSON::parse(&trace_json).unwrap();

            let data_js = js_sys::Array::new();
            data_js.push(&trace_js);

            let layout_json = serde_json::to_string(&layout).unwrap();
            let layout_js = js_sys::JSON::parse(&layout_json).unwrap();

            newPlot("sector-performance-chart", data_js.into(), layout_js);
        }
        || ()
    });

    html! {
        <div ref={container_ref} style="width:100%; height:320px;"></div>
    }
}
