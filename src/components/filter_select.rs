use crate::util::select_value;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FilterSelectProps {
    pub label: AttrValue,
    pub value: String,
    /// `(value, text)` pairs; an "Any" option with value `""` is prepended.
    pub options: Vec<(String, String)>,
    pub on_change: Callback<String>,
}

#[function_component(FilterSelect)]
pub fn filter_select(props: &FilterSelectProps) -> Html {
    let onchange = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| cb.emit(select_value(&e)))
    };
    html! {
        <div>
            <label style="display:block; font-size:12px; color:#475569;">{ props.label.clone() }</label>
            <select {onchange} style="border:1px solid #cbd5e1; border-radius:4px; padding:4px 8px;">
                <option value="" selected={props.value.is_empty()}>{ "Any" }</option>
                { for props.options.iter().map(|(value, text)| html! {
                    <option key={value.clone()} value={value.clone()} selected={*value == props.value}>{ text }</option>
                }) }
            </select>
        </div>
    }
}
