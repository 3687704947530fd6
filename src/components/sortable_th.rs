use crate::state::{SortKey, SortState};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SortableThProps {
    pub column: SortKey,
    pub label: AttrValue,
    pub sort: SortState,
    pub on_sort: Callback<SortKey>,
}

#[function_component(SortableTh)]
pub fn sortable_th(props: &SortableThProps) -> Html {
    let active = props.sort.key == props.column;
    let onclick = {
        let cb = props.on_sort.clone();
        let column = props.column;
        Callback::from(move |_: MouseEvent| cb.emit(column))
    };
    let style = format!(
        "display:inline-flex; align-items:center; gap:4px; background:none; border:none; padding:0; cursor:pointer; font:inherit; {}",
        if active { "text-decoration:underline;" } else { "" }
    );
    html! {
        <th style="padding:8px; user-select:none; text-align:left;">
            <button {onclick} {style}>
                { props.label.clone() }
                if active {
                    <span>{ props.sort.dir.arrow() }</span>
                }
            </button>
        </th>
    }
}
