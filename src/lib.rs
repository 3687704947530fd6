//! House Hisab: a three-fund household ledger dashboard.
//!
//! Client-side Yew app over the `/api/v1` ledger backend. Lists, filters
//! and edits transactions; on phones each row swipes left to reveal
//! edit/delete actions.

pub mod api;
pub mod components;
pub mod config;
pub mod model;
pub mod money;
pub mod pages;
pub mod prefs;
pub mod router;
pub mod state;
pub mod util;

use components::App;

pub fn run_app() {
    util::init_logging();
    log::info!("house hisab starting, api base {:?}", config::api_base());
    yew::Renderer::<App>::new().render();
}
