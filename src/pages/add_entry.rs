use crate::api::{ApiClient, ApiError};
use crate::components::{ErrorBanner, FormMode, TxnForm};
use crate::model::{Category, Person};
use crate::money::format_paise_inr;
use crate::state::{DraftAction, TxnDraft};
use crate::util::today_iso;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(AddEntry)]
pub fn add_entry() -> Html {
    let draft = use_reducer(|| TxnDraft::new(today_iso()));
    let people = use_state(Vec::<Person>::new);
    let categories = use_state(Vec::<Category>::new);
    let error = use_state(|| None::<ApiError>);
    let saved = use_state(|| None::<String>);
    let busy = use_state(|| false);

    {
        let people = people.clone();
        let categories = categories.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match ApiClient::people().await {
                    Ok(list) => people.set(list),
                    Err(e) => log::warn!("loading people failed: {e}"),
                }
            });
            spawn_local(async move {
                match ApiClient::categories().await {
                    Ok(list) => categories.set(list),
                    Err(e) => log::warn!("loading categories failed: {e}"),
                }
            });
            || ()
        });
    }

    let on_action = {
        let draft = draft.clone();
        let saved = saved.clone();
        Callback::from(move |action: DraftAction| {
            saved.set(None);
            draft.dispatch(action);
        })
    };

    let submit = {
        let draft = draft.clone();
        let error = error.clone();
        let saved = saved.clone();
        let busy = busy.clone();
        Callback::from(move |_: MouseEvent| {
            let payload = draft.visible_payload();
            let draft = draft.clone();
            let error = error.clone();
            let saved = saved.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                match ApiClient::create_txn(&payload).await {
                    Ok(txn) => {
                        log::info!("created transaction {}", txn.id);
                        error.set(None);
                        saved.set(Some(format!(
                            "Saved {} of {}",
                            txn.txn_type,
                            format_paise_inr(txn.amount_paise)
                        )));
                        draft.dispatch(DraftAction::ClearAfterCreate);
                    }
                    Err(e) => {
                        log::warn!("creating transaction failed: {e}");
                        error.set(Some(e));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div style="display:flex; flex-direction:column; gap:16px;">
            <h1 style="font-size:24px; font-weight:600; margin:0;">{ "Add Entry" }</h1>
            <TxnForm draft={(*draft).clone()} {on_action} mode={FormMode::Add}
                people={(*people).clone()} categories={(*categories).clone()} />
            if let Some(e) = (*error).clone() {
                <ErrorBanner error={e} />
            }
            if let Some(msg) = (*saved).clone() {
                <div role="status" style="padding:12px; border-radius:6px; background:#dcfce7; border:1px solid #86efac; color:#14532d;">{ msg }</div>
            }
            <div>
                <button onclick={submit} disabled={*busy}
                    style="background:#2563eb; color:#fff; border:none; border-radius:4px; padding:8px 16px;">
                    { "Create" }
                </button>
            </div>
        </div>
    }
}
