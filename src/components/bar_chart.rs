use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: i64,
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub data: Vec<BarDatum>,
    #[prop_or_default]
    pub format_value: Option<Callback<i64, String>>,
}

/// Bar length relative to the largest value; a floor of 1 keeps
/// all-zero data from dividing by zero.
pub fn bar_width_percent(value: i64, data: &[BarDatum]) -> f64 {
    let max = data.iter().map(|d| d.value).max().unwrap_or(0).max(1);
    (value.max(0) as f64 / max as f64) * 100.0
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px; overflow:hidden;";
    let label_style = "min-width:0; flex:1; white-space:nowrap; overflow:hidden; text-overflow:ellipsis; font-size:14px;";
    let track_style = "flex:1; background:#e2e8f0; height:12px; border-radius:4px; overflow:hidden;";
    let value_style = "flex-shrink:0; text-align:right; font-size:14px; font-variant-numeric:tabular-nums; white-space:nowrap;";
    html! {
        <div style="display:flex; flex-direction:column; gap:8px;">
            { for props.data.iter().enumerate().map(|(i, d)| {
                let width = bar_width_percent(d.value, &props.data);
                let shown = match &props.format_value {
                    Some(f) => f.emit(d.value),
                    None => d.value.to_string(),
                };
                html! {
                    <div key={format!("{i}:{}", d.label)} style={row_style}>
                        <div style={label_style} title={d.label.clone()}>{ &d.label }</div>
                        <div style={track_style}>
                            <div style={format!("background:#2563eb; height:12px; width:{width}%;")}></div>
                        </div>
                        <div style={value_style}>{ shown }</div>
                    </div>
                }
            }) }
        </div>
    }
}
