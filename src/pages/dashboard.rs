use crate::api::{ApiClient, Remote};
use crate::components::{BarChart, BarDatum, Card, ErrorBanner};
use crate::config::DASHBOARD_POSTING;
use crate::model::{FundBalances, Summary, TopEntry};
use crate::money::format_paise_inr;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const MISSING: &str = "—";

fn bars(entries: &[TopEntry]) -> Vec<BarDatum> {
    entries
        .iter()
        .map(|e| BarDatum { label: e.label().to_string(), value: e.total_paise })
        .collect()
}

fn amount_or_dash(v: Option<i64>) -> String {
    v.map(format_paise_inr).unwrap_or_else(|| MISSING.to_string())
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let funds = use_state(|| Remote::<FundBalances>::Loading);
    let summary = use_state(|| Remote::<Summary>::Loading);
    let top_categories = use_state(|| Remote::<Vec<TopEntry>>::Loading);
    let top_people = use_state(|| Remote::<Vec<TopEntry>>::Loading);

    {
        let funds = funds.clone();
        let summary = summary.clone();
        let top_categories = top_categories.clone();
        let top_people = top_people.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                funds.set(ApiClient::funds().await.into());
            });
            spawn_local(async move {
                summary.set(ApiClient::summary(DASHBOARD_POSTING).await.into());
            });
            spawn_local(async move {
                top_categories.set(ApiClient::top_categories(DASHBOARD_POSTING).await.into());
            });
            spawn_local(async move {
                top_people.set(ApiClient::top_people(DASHBOARD_POSTING).await.into());
            });
            || ()
        });
    }

    let f = funds.ready().copied();
    let s = summary.ready().copied();
    let error = [
        match &*funds { Remote::Failed(e) => Some(e.clone()), _ => None },
        match &*summary { Remote::Failed(e) => Some(e.clone()), _ => None },
    ]
    .into_iter()
    .flatten()
    .next();
    if let Some(e) = &error {
        log::warn!("dashboard load failed: {e}");
    }

    let format_value = Callback::from(format_paise_inr);
    let chart = |remote: &Remote<Vec<TopEntry>>| match remote.ready() {
        Some(entries) => html! { <BarChart data={bars(entries)} format_value={Some(format_value.clone())} /> },
        None => html! { <div>{ MISSING }</div> },
    };

    html! {
        <div style="display:flex; flex-direction:column; gap:24px;">
            if let Some(e) = error {
                <ErrorBanner error={e} />
            }
            <div class="grid-4" style="display:grid; gap:16px;">
                <Card title="Cash" value={amount_or_dash(f.map(|f| f.cash))} />
                <Card title="Online A" value={amount_or_dash(f.map(|f| f.online_a))} />
                <Card title="Online Y" value={amount_or_dash(f.map(|f| f.online_y))} />
                <Card title="Total Funds" value={amount_or_dash(f.map(|f| f.total))} />
            </div>

            if let Some(d) = s.map(|s| s.discrepancy).filter(|d| *d != 0) {
                <div role="status" style="padding:12px; border-radius:6px; background:#fef3c7; border:1px solid #fcd34d; color:#78350f;">
                    { format!("Equation discrepancy detected: {}", format_paise_inr(d)) }
                </div>
            }

            <div class="grid-3" style="display:grid; gap:16px;">
                <Card title="Totals">
                    <ul style="list-style:none; margin:0; padding:0; display:flex; flex-direction:column; gap:4px;">
                        <li>{ format!("Contributions: {}", amount_or_dash(s.map(|s| s.total_contributions))) }</li>
                        <li>{ format!("Income: {}", amount_or_dash(s.map(|s| s.total_income))) }</li>
                        <li>{ format!("Expenses: {}", amount_or_dash(s.map(|s| s.total_expenses))) }</li>
                    </ul>
                </Card>
                <Card title="Top Categories">{ chart(&*top_categories) }</Card>
                <Card title="Top People">{ chart(&*top_people) }</Card>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unnamed_entries_chart_as_unknown() {
        let entries = vec![
            TopEntry { id: Some("c1".into()), name: Some("Food".into()), total_paise: 500 },
            TopEntry { id: None, name: None, total_paise: 20 },
        ];
        let d = bars(&entries);
        assert_eq!(d[0].label, "Food");
        assert_eq!(d[1], BarDatum { label: "Unknown".into(), value: 20 });
    }

    #[test]
    fn missing_amounts_render_dash() {
        assert_eq!(amount_or_dash(None), "—");
        assert_eq!(amount_or_dash(Some(12_345)), "₹123.45");
    }
}
