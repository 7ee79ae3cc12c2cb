use yew::prelude::*;

use common::{format_change, with_average_row, ChangeDirection, SectorPerformance};

use crate::api_client::sectors::get_sector_performance;
use crate::components::common::error::ErrorDisplay;
use crate::components::common::loading::LoadingSpinner;
use crate::components::sectors::chart::SectorBarChart;
use crate::hooks::{use_fetch_once, FetchState};

/// Sector performance overview: one fetch through the backend proxy feeds
/// both the badge list and the bar chart. The "All sectors" average row is
/// prepended before anything renders, so both representations share the
/// exact same array.
#[function_component(SectorOverview)]
pub fn sector_overview() -> Html {
    let state = use_fetch_once(|| async {
        let records = get_sector_performance().await?;
        // No average exists for an empty payload; that is an error state.
        with_average_row(&records).ok_or_else(|| "No sector data found".to_string())
    });

    html! {
        <div class="space-y-6">
            <h2 class="text-xl font-bold">{"Sector Performance"}</h2>
            {match &*state {
                FetchState::Loading => html! {
                    <LoadingSpinner text={"Loading sector performance...".to_string()} />
                },
                FetchState::Error(message) => html! {
                    <ErrorDisplay message={message.clone()} />
                },
                FetchState::Success(rows) => html! {
                    <>
                        <SectorList rows={rows.clone()} />
                        <SectorBarChart rows={rows.clone()} />
                    </>
                },
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectorListProps {
    rows: Vec<SectorPerformance>,
}

#[function_component(SectorList)]
fn sector_list(props: &SectorListProps) -> Html {
    html! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
            { for props.rows.iter().map(sector_row) }
        </div>
    }
}

fn sector_row(row: &SectorPerformance) -> Html {
    // Gain styling needs a strictly positive change; zero renders as loss.
    let badge_class = match row.direction() {
        ChangeDirection::Gain => "badge badge-success w-16 justify-end",
        ChangeDirection::Loss => "badge badge-error w-16 justify-end",
    };
    let label = row
        .change()
        .map(format_change)
        .unwrap_or_else(|| row.changes_percentage.clone());

    html! {
        <div
            key={row.sector.clone()}
            class="flex w-full flex-row items-center justify-between text-sm"
        >
            <span class="font-medium">{&row.sector}</span>
            <span class={badge_class}>{label}</span>
        </div>
    }
}
