pub use crate::{api::*, app::*, search_form::*, series_card::*, state::*, util::*};
pub use wasm_bindgen::{JsCast, JsValue};
pub use wasm_bindgen_futures::{spawn_local, JsFuture};
pub use yew::prelude::*;
pub use web_sys::HtmlInputElement;
pub use serde::{Serialize, de::DeserializeOwned};
pub use seriefind_common::*;
