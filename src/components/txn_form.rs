use super::Field;
use crate::model::{Category, Fund, Person, TxnType};
use crate::state::{DraftAction, DraftField, TxnDraft};
use crate::util::{input_checked, input_value, select_value};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    /// Shows only the selectors the chosen type needs.
    Add,
    /// Shows every field so any stored value can be corrected.
    Edit,
}

#[derive(Properties, PartialEq, Clone)]
pub struct TxnFormProps {
    pub draft: TxnDraft,
    pub on_action: Callback<DraftAction>,
    pub mode: FormMode,
    #[prop_or_default]
    pub people: Vec<Person>,
    #[prop_or_default]
    pub categories: Vec<Category>,
}

const INPUT_STYLE: &str = "border:1px solid #cbd5e1; border-radius:4px; padding:4px 8px;";

fn choice_list(current: &str, placeholder: &str, options: Vec<(String, String)>) -> Html {
    let known = options.iter().any(|(v, _)| v == current);
    html! {
        <>
            <option value="" selected={current.is_empty()}>{ placeholder.to_string() }</option>
            // Keep an id the lists don't know about so editing doesn't silently drop it.
            if !current.is_empty() && !known {
                <option value={current.to_string()} selected={true}>{ current.to_string() }</option>
            }
            { for options.into_iter().map(|(value, text)| {
                let selected = value == current;
                let key = value.clone();
                html! { <option key={key} {value} {selected}>{ text }</option> }
            }) }
        </>
    }
}

fn fund_options() -> Vec<(String, String)> {
    Fund::ALL
        .iter()
        .map(|f| (f.as_str().to_string(), f.as_str().to_string()))
        .collect()
}

#[function_component(TxnForm)]
pub fn txn_form(props: &TxnFormProps) -> Html {
    let draft = &props.draft;
    let typed = |field: DraftField| {
        let cb = props.on_action.clone();
        Callback::from(move |e: InputEvent| cb.emit(DraftAction::Set(field, input_value(&e))))
    };
    let chosen = |field: DraftField| {
        let cb = props.on_action.clone();
        Callback::from(move |e: Event| cb.emit(DraftAction::Set(field, select_value(&e))))
    };
    let on_posting = {
        let cb = props.on_action.clone();
        Callback::from(move |e: Event| cb.emit(DraftAction::SetPosting(input_checked(&e))))
    };

    let (show_from, show_to, show_person, show_category) = match props.mode {
        FormMode::Edit => (true, true, true, true),
        FormMode::Add => {
            let req = draft.requirements();
            (req.fund_from, req.fund_to, req.person, req.category)
        }
    };
    let placeholder = |add: &'static str| match props.mode {
        FormMode::Add => add,
        FormMode::Edit => "—",
    };

    let people: Vec<(String, String)> = props
        .people
        .iter()
        .map(|p| (p.id.clone(), p.name.clone()))
        .collect();
    let categories: Vec<(String, String)> = props
        .categories
        .iter()
        .map(|c| (c.id.clone(), c.name.clone()))
        .collect();

    html! {
        <div class="form-grid" style="display:grid; gap:16px;">
            <Field label="Type">
                <select style={INPUT_STYLE} onchange={chosen(DraftField::TxnType)}>
                    { for TxnType::ALL.iter().map(|t| html! {
                        <option key={t.as_str()} value={t.as_str()} selected={*t == draft.txn_type}>{ t.as_str() }</option>
                    }) }
                </select>
            </Field>
            <Field label="Amount (₹)">
                <input style={INPUT_STYLE} inputmode="decimal" placeholder="1,50,000"
                    value={draft.amount.clone()} oninput={typed(DraftField::Amount)} />
            </Field>
            <Field label="Date">
                <input style={INPUT_STYLE} type="date" value={draft.date.clone()} oninput={typed(DraftField::Date)} />
            </Field>
            <Field label="Posting">
                <label style="display:inline-flex; align-items:center; gap:8px;">
                    <input type="checkbox" checked={draft.posting} onchange={on_posting} />
                    <span>{ "posting" }</span>
                </label>
            </Field>
            if show_person {
                <Field label="Person">
                    <select style={INPUT_STYLE} onchange={chosen(DraftField::Person)}>
                        { choice_list(&draft.person_id, placeholder("Select person"), people) }
                    </select>
                </Field>
            }
            if show_category {
                <Field label="Category">
                    <select style={INPUT_STYLE} onchange={chosen(DraftField::Category)}>
                        { choice_list(&draft.category_id, placeholder("Select category"), categories) }
                    </select>
                </Field>
            }
            if show_from {
                <Field label="Fund From">
                    <select style={INPUT_STYLE} onchange={chosen(DraftField::FundFrom)}>
                        { choice_list(&draft.fund_from, placeholder("Select fund"), fund_options()) }
                    </select>
                </Field>
            }
            if show_to {
                <Field label="Fund To">
                    <select style={INPUT_STYLE} onchange={chosen(DraftField::FundTo)}>
                        { choice_list(&draft.fund_to, placeholder("Select fund"), fund_options()) }
                    </select>
                </Field>
            }
            <Field label="Party/Vendor (optional)">
                <input style={INPUT_STYLE} value={draft.party.clone()} oninput={typed(DraftField::Party)} />
            </Field>
            <Field label="Notes">
                <input style={INPUT_STYLE} value={draft.notes.clone()} oninput={typed(DraftField::Notes)} />
            </Field>
        </div>
    }
}
