use crate::state::{SwipeAction, SwipeState};
use web_sys::{MouseEvent, TouchEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SwipeableRowProps {
    #[prop_or_default]
    pub children: Children,
    /// Controls revealed behind the row when swiped left (edit/delete).
    pub actions: Html,
    #[prop_or_default]
    pub class: Classes,
}

fn first_touch_x(e: &TouchEvent) -> Option<f64> {
    e.touches().get(0).map(|t| t.client_x() as f64)
}

/// Row that slides left under the finger to uncover `actions`.
#[function_component(SwipeableRow)]
pub fn swipeable_row(props: &SwipeableRowProps) -> Html {
    let swipe = use_reducer_eq(SwipeState::default);

    let on_touch_start = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                swipe.dispatch(SwipeAction::Begin(x));
            }
        })
    };
    let on_touch_move = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                swipe.dispatch(SwipeAction::Update(x));
            }
        })
    };
    let on_touch_end = {
        let swipe = swipe.clone();
        Callback::from(move |_: TouchEvent| swipe.dispatch(SwipeAction::End))
    };
    let on_touch_cancel = {
        let swipe = swipe.clone();
        Callback::from(move |_: TouchEvent| swipe.dispatch(SwipeAction::Cancel))
    };
    // Propagation is left alone so a link inside still navigates.
    let on_click = {
        let swipe = swipe.clone();
        Callback::from(move |_: MouseEvent| swipe.dispatch(SwipeAction::Close))
    };

    html! {
        <div class={classes!("swipe-row", props.class.clone())}
            style="position:relative; overflow:hidden; user-select:none; -webkit-user-select:none;">
            <div class="swipe-row-actions"
                style="position:absolute; top:0; bottom:0; right:0; display:flex; align-items:stretch; gap:4px; padding:0 8px 0 16px;">
                { props.actions.clone() }
            </div>
            <div class="swipe-row-content"
                style={swipe.foreground_style()}
                ontouchstart={on_touch_start}
                ontouchmove={on_touch_move}
                ontouchend={on_touch_end}
                ontouchcancel={on_touch_cancel}
                onclick={on_click}>
                { props.children.clone() }
            </div>
        </div>
    }
}
