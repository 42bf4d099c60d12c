use yew::prelude::*;

use crate::config::AppConfig;
use crate::route::{Route, current_route};
use crate::util::init_logging;

use super::grid::Grid;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(|| {
        let config = AppConfig::load();
        init_logging(config.env);
        config
    });
    let route = use_state(current_route);

    match *route {
        Route::Game => html! {
            <Grid size={config.default_size} init={config.init} seed={config.seed} />
        },
    }
}
