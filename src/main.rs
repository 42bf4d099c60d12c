mod components;
mod config;
mod error;
mod model;
mod palette;
mod random;
mod render;
mod route;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
