use crate::api::{ApiClient, ApiError, Remote};
use crate::components::{ErrorBanner, FilterSelect, Loading, SortableTh, SwipeableRow};
use crate::model::{Fund, Txn, TxnType};
use crate::money::format_paise_inr;
use crate::prefs::ListPrefs;
use crate::router::Route;
use crate::state::{SortKey, TxnFilter, sort_txns};
use crate::util::input_value;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// Text shown in a desktop table cell.
fn column_text(t: &Txn, key: SortKey) -> String {
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();
    let fund = |f: Option<Fund>| f.map(|f| f.as_str().to_string()).unwrap_or_default();
    match key {
        SortKey::Date => t.date.clone(),
        SortKey::TxnType => t.txn_type.as_str().to_string(),
        SortKey::AmountPaise => format_paise_inr(t.amount_paise),
        SortKey::FundFrom => fund(t.fund_from),
        SortKey::FundTo => fund(t.fund_to),
        SortKey::PersonId => opt(&t.person_id),
        SortKey::CategoryId => opt(&t.category_id),
        SortKey::Party => opt(&t.party),
        SortKey::Notes => opt(&t.notes),
        SortKey::Posting => t.posting.to_string(),
    }
}

fn options<T: Copy>(all: &[T], as_str: fn(T) -> &'static str) -> Vec<(String, String)> {
    all.iter()
        .map(|v| (as_str(*v).to_string(), as_str(*v).to_string()))
        .collect()
}

#[function_component(Transactions)]
pub fn transactions() -> Html {
    let prefs = use_state(ListPrefs::load);
    let txns = use_state(|| Remote::<Vec<Txn>>::Loading);
    let reload = use_state(|| 0u32);
    let action_error = use_state(|| None::<ApiError>);
    // Only the newest list request may write its result.
    let latest = use_mut_ref(|| 0u64);

    {
        let txns = txns.clone();
        let latest = latest.clone();
        use_effect_with((prefs.filter.clone(), *reload), move |(filter, _)| {
            let filter = filter.clone();
            let ticket = {
                let mut l = latest.borrow_mut();
                *l += 1;
                *l
            };
            spawn_local(async move {
                let result = ApiClient::list_txns(&filter).await;
                if *latest.borrow() != ticket {
                    log::debug!("dropping stale transactions response #{ticket}");
                    return;
                }
                if let Err(e) = &result {
                    log::warn!("listing transactions failed: {e}");
                }
                txns.set(result.into());
            });
            || ()
        });
    }
    {
        use_effect_with((*prefs).clone(), |p| {
            p.save();
            || ()
        });
    }

    let update_filter = |apply: fn(&mut TxnFilter, String)| {
        let prefs = prefs.clone();
        Callback::from(move |value: String| {
            let mut next = (*prefs).clone();
            apply(&mut next.filter, value);
            prefs.set(next);
        })
    };
    let on_type = update_filter(|f, v| f.txn_type = v.parse().ok());
    let on_fund = update_filter(|f, v| f.fund = v.parse().ok());
    let on_posting = update_filter(|f, v| f.posting = v.parse().ok());
    let on_search = {
        let cb = update_filter(|f, v| f.q = v);
        Callback::from(move |e: InputEvent| cb.emit(input_value(&e)))
    };
    let on_sort = {
        let prefs = prefs.clone();
        Callback::from(move |key: SortKey| {
            let mut next = (*prefs).clone();
            next.sort = next.sort.toggle(key);
            prefs.set(next);
        })
    };
    let on_delete = {
        let reload = reload.clone();
        let action_error = action_error.clone();
        Callback::from(move |id: String| {
            let reload = reload.clone();
            let action_error = action_error.clone();
            let next = *reload + 1;
            spawn_local(async move {
                match ApiClient::delete_txn(&id).await {
                    Ok(()) => {
                        log::info!("deleted transaction {id}");
                        action_error.set(None);
                        reload.set(next);
                    }
                    Err(e) => {
                        log::warn!("deleting transaction {id} failed: {e}");
                        action_error.set(Some(e));
                    }
                }
            });
        })
    };

    let filter = &prefs.filter;
    let sort = prefs.sort;
    let mut rows: Vec<Txn> = txns.ready().cloned().unwrap_or_default();
    sort_txns(&mut rows, sort);

    let delete_button = |id: &str, style: &'static str| {
        let on_delete = on_delete.clone();
        let id = id.to_string();
        let onclick = Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()));
        html! { <button {onclick} {style}>{ "Delete" }</button> }
    };

    let mobile_rows = rows.iter().map(|t| {
        let edit = Route::EditTxn { id: t.id.clone() };
        let actions = html! {
            <div style="display:flex; gap:8px; align-items:center;">
                <Link<Route> to={edit.clone()} classes={classes!("btn", "btn-primary")}>{ "Edit" }</Link<Route>>
                { delete_button(&t.id, "background:#dc2626; color:#fff; border:none; border-radius:4px; padding:8px 12px;") }
            </div>
        };
        html! {
            <SwipeableRow key={t.id.clone()} {actions} class={classes!("txn-row")}>
                <Link<Route> to={edit} classes={classes!("row-link")}>
                    <div style="display:flex; justify-content:space-between; font-size:14px;">
                        <div style="font-weight:500;">{ format!("{} • {}", t.txn_type, t.subject()) }</div>
                        <div>{ format_paise_inr(t.amount_paise) }</div>
                    </div>
                    <div style="font-size:12px; color:#475569;">{ format!("{} • {}", t.date, t.fund_route()) }</div>
                    if let Some(notes) = t.notes.as_ref().filter(|n| !n.is_empty()) {
                        <div style="font-size:12px; margin-top:4px;">{ notes }</div>
                    }
                </Link<Route>>
            </SwipeableRow>
        }
    });

    let table_rows = rows.iter().map(|t| {
        html! {
            <tr key={t.id.clone()} style="border-top:1px solid #e2e8f0;">
                { for SortKey::COLUMNS.iter().map(|(key, _)| html! {
                    <td style="padding:8px;">{ column_text(t, *key) }</td>
                }) }
                <td style="padding:8px; text-align:right;">
                    <div style="display:flex; gap:8px; justify-content:flex-end;">
                        <Link<Route> to={Route::EditTxn { id: t.id.clone() }}>{ "Edit" }</Link<Route>>
                        { delete_button(&t.id, "color:#dc2626; background:none; border:none; cursor:pointer;") }
                    </div>
                </td>
            </tr>
        }
    });

    let list = match &*txns {
        Remote::Loading => html! { <Loading /> },
        Remote::Failed(e) => html! { <ErrorBanner error={e.clone()} /> },
        Remote::Ready(_) if rows.is_empty() => html! {
            <div style="padding:16px; color:#475569;">{ "No transactions match these filters." }</div>
        },
        Remote::Ready(_) => html! {
            <>
                <div class="mobile-only" style="border:1px solid #e2e8f0; border-radius:6px; background:#fff;">
                    { for mobile_rows }
                </div>
                <div class="desktop-only" style="border:1px solid #e2e8f0; border-radius:6px; background:#fff;">
                    <table style="width:100%; font-size:14px; border-collapse:collapse;">
                        <thead>
                            <tr style="background:#f8fafc;">
                                { for SortKey::COLUMNS.iter().map(|(key, label)| html! {
                                    <SortableTh column={*key} label={*label} {sort} on_sort={on_sort.clone()} />
                                }) }
                                <th style="padding:8px;"></th>
                            </tr>
                        </thead>
                        <tbody>{ for table_rows }</tbody>
                    </table>
                </div>
            </>
        },
    };

    html! {
        <div style="display:flex; flex-direction:column; gap:16px;">
            <h1 style="font-size:24px; font-weight:600; margin:0;">{ "Transactions" }</h1>
            <div style="display:flex; flex-wrap:wrap; gap:8px; align-items:flex-end;">
                <FilterSelect label="Type"
                    value={filter.txn_type.map(|t| t.as_str().to_string()).unwrap_or_default()}
                    options={options(&TxnType::ALL, TxnType::as_str)}
                    on_change={on_type} />
                <FilterSelect label="Fund"
                    value={filter.fund.map(|f| f.as_str().to_string()).unwrap_or_default()}
                    options={options(&Fund::ALL, Fund::as_str)}
                    on_change={on_fund} />
                <FilterSelect label="Posting"
                    value={filter.posting.map(|p| p.to_string()).unwrap_or_default()}
                    options={vec![("true".to_string(), "true".to_string()), ("false".to_string(), "false".to_string())]}
                    on_change={on_posting} />
                <div style="flex:1; min-width:160px;">
                    <label style="display:block; font-size:12px; color:#475569;">{ "Search" }</label>
                    <input value={filter.q.clone()} oninput={on_search} placeholder="notes/party"
                        style="width:100%; border:1px solid #cbd5e1; border-radius:4px; padding:8px 12px; box-sizing:border-box;" />
                </div>
            </div>
            if let Some(e) = (*action_error).clone() {
                <ErrorBanner error={e} />
            }
            { list }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_cells_format_amounts_and_blanks() {
        let t = Txn {
            id: "t1".into(),
            date: "2024-04-01".into(),
            txn_type: TxnType::Transfer,
            amount_paise: 150_000,
            fund_from: Some(Fund::OnlineY),
            fund_to: Some(Fund::Cash),
            person_id: None,
            category_id: None,
            party: None,
            notes: None,
            posting: false,
        };
        assert_eq!(column_text(&t, SortKey::AmountPaise), "₹1,500.00");
        assert_eq!(column_text(&t, SortKey::FundFrom), "ONLINE_Y");
        assert_eq!(column_text(&t, SortKey::Party), "");
        assert_eq!(column_text(&t, SortKey::Posting), "false");
    }

    #[test]
    fn filter_options_use_wire_names() {
        let o = options(&Fund::ALL, Fund::as_str);
        assert_eq!(o[1], ("ONLINE_A".to_string(), "ONLINE_A".to_string()));
        assert_eq!(options(&TxnType::ALL, TxnType::as_str).len(), 4);
    }
}
