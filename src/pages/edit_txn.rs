use crate::api::{ApiClient, ApiError, Remote};
use crate::components::{ErrorBanner, FormMode, Loading, TxnForm};
use crate::model::{Category, Person, Txn};
use crate::router::Route;
use crate::state::{DraftAction, TxnDraft};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EditTxnProps {
    pub id: String,
}

#[function_component(EditTxn)]
pub fn edit_txn(props: &EditTxnProps) -> Html {
    let navigator = use_navigator();
    let txn = use_state(|| Remote::<Txn>::Loading);
    let draft = use_reducer(|| TxnDraft::new(String::new()));
    let people = use_state(Vec::<Person>::new);
    let categories = use_state(Vec::<Category>::new);
    let error = use_state(|| None::<ApiError>);
    let busy = use_state(|| false);

    {
        let txn = txn.clone();
        let draft = draft.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            txn.set(Remote::Loading);
            spawn_local(async move {
                let result = ApiClient::get_txn(&id).await;
                match &result {
                    Ok(t) => draft.dispatch(DraftAction::Replace(TxnDraft::from_txn(t))),
                    Err(e) => log::warn!("loading transaction {id} failed: {e}"),
                }
                txn.set(result.into());
            });
            || ()
        });
    }
    {
        let people = people.clone();
        let categories = categories.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Ok(list) = ApiClient::people().await {
                    people.set(list);
                }
            });
            spawn_local(async move {
                if let Ok(list) = ApiClient::categories().await {
                    categories.set(list);
                }
            });
            || ()
        });
    }

    let on_action = {
        let draft = draft.clone();
        Callback::from(move |action: DraftAction| draft.dispatch(action))
    };

    let save = {
        let id = props.id.clone();
        let draft = draft.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |_: MouseEvent| {
            let id = id.clone();
            let payload = draft.payload();
            let error = error.clone();
            let busy = busy.clone();
            let navigator = navigator.clone();
            busy.set(true);
            spawn_local(async move {
                match ApiClient::update_txn(&id, &payload).await {
                    Ok(_) => {
                        log::info!("updated transaction {id}");
                        if let Some(nav) = navigator {
                            nav.push(&Route::Transactions);
                        }
                    }
                    Err(e) => {
                        log::warn!("updating transaction {id} failed: {e}");
                        error.set(Some(e));
                    }
                }
                busy.set(false);
            });
        })
    };

    let body = match &*txn {
        Remote::Loading => html! { <Loading /> },
        Remote::Failed(e) => html! { <ErrorBanner error={e.clone()} /> },
        Remote::Ready(_) => html! {
            <>
                <TxnForm draft={(*draft).clone()} {on_action} mode={FormMode::Edit}
                    people={(*people).clone()} categories={(*categories).clone()} />
                if let Some(e) = (*error).clone() {
                    <ErrorBanner error={e} />
                }
                <div>
                    <button onclick={save} disabled={*busy}
                        style="background:#2563eb; color:#fff; border:none; border-radius:4px; padding:8px 16px;">
                        { "Save" }
                    </button>
                </div>
            </>
        },
    };

    html! {
        <div style="display:flex; flex-direction:column; gap:16px;">
            <h1 style="font-size:24px; font-weight:600; margin:0;">{ "Edit Transaction" }</h1>
            { body }
        </div>
    }
}
