use yew::prelude::*;
use yew_router::prelude::*;

pub mod api_client;
mod components;
pub mod hooks;
pub mod settings;

use components::layout::Layout;
use components::sectors::SectorOverview;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            html! { <Layout title="Sector Performance"><SectorOverview /></Layout> }
        }
        Route::About => {
            html! {
                <Layout title="About">
                    <p>{"Market sector performance, proxied from Financial Modeling Prep."}</p>
                </Layout>
            }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== SectorPulse Frontend Starting ===");
    log::debug!("API base URL: {}", settings.api_base_url());

    yew::Renderer::<App>::new().render();
}
