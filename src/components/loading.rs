use yew::prelude::*;

#[function_component(Loading)]
pub fn loading() -> Html {
    html! { <div style="padding:16px; color:#475569;">{ "Loading…" }</div> }
}
