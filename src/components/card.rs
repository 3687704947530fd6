use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CardProps {
    pub title: AttrValue,
    /// Headline figure shown under the title.
    #[prop_or_default]
    pub value: Option<String>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class="card" style="border:1px solid #e2e8f0; border-radius:6px; background:#fff; padding:12px; box-shadow:0 1px 2px rgba(0,0,0,0.05);">
            <div style="font-size:14px; color:#475569;">{ props.title.clone() }</div>
            if let Some(v) = &props.value {
                <div style="font-size:20px; font-weight:600;">{ v }</div>
            }
            { props.children.clone() }
        </div>
    }
}
