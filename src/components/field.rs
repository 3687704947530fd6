use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FieldProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    html! {
        <div>
            <label style="display:block; font-size:12px; color:#475569; margin-bottom:4px;">{ props.label.clone() }</label>
            { props.children.clone() }
        </div>
    }
}
