use crate::pages::{AddEntry, Dashboard, EditTxn, Transactions};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/transactions")]
    Transactions,
    #[at("/transactions/:id/edit")]
    EditTxn { id: String },
    #[at("/add")]
    Add,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <Dashboard /> },
        Route::Transactions => html! { <Transactions /> },
        Route::EditTxn { id } => html! { <EditTxn {id} /> },
        Route::Add => html! { <AddEntry /> },
        Route::NotFound => html! { <h1 style="font-size:24px;">{ "Page not found" }</h1> },
    }
}
