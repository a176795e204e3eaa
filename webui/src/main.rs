#[macro_export]
macro_rules! log {
    ($($t:tt)*) => {
        web_sys::console::log_1(&format!($($t)*).into());
    };
}

mod api;
mod app;
mod prelude;
mod state;
mod util;

#[path = "components/search_form/search_form.rs"]
mod search_form;
#[path = "components/series_card/series_card.rs"]
mod series_card;

use crate::prelude::*;

fn main() {
    yew::Renderer::<App>::new().render();
}
