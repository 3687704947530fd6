use crate::api::ApiError;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorBannerProps {
    pub error: ApiError,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div role="alert" style="padding:12px; border-radius:6px; background:#fee2e2; border:1px solid #fca5a5; color:#7f1d1d; white-space:pre-wrap;">
            { props.error.to_string() }
        </div>
    }
}
