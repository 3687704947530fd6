// Add/edit form draft. Inputs stay as raw strings until submit.
use crate::model::{FieldRequirements, Fund, Txn, TxnPayload, TxnType};
use crate::money::{paise_to_input, parse_inr_to_paise};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, PartialEq)]
pub struct TxnDraft {
    pub txn_type: TxnType,
    pub amount: String,
    pub date: String,
    pub posting: bool,
    /// Empty string means "not selected" for the text-backed inputs below.
    pub fund_from: String,
    pub fund_to: String,
    pub person_id: String,
    pub category_id: String,
    pub party: String,
    pub notes: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    TxnType,
    Amount,
    Date,
    FundFrom,
    FundTo,
    Person,
    Category,
    Party,
    Notes,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DraftAction {
    Set(DraftField, String),
    SetPosting(bool),
    Replace(TxnDraft),
    /// Keep type, date, funds and links for rapid consecutive entry.
    ClearAfterCreate,
}

impl TxnDraft {
    pub fn new(today: String) -> Self {
        Self {
            txn_type: TxnType::Contribution,
            amount: String::new(),
            date: today,
            posting: true,
            fund_from: String::new(),
            fund_to: String::new(),
            person_id: String::new(),
            category_id: String::new(),
            party: String::new(),
            notes: String::new(),
        }
    }

    pub fn from_txn(t: &Txn) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        let fund = |f: Option<Fund>| f.map(|f| f.as_str().to_string()).unwrap_or_default();
        Self {
            txn_type: t.txn_type,
            amount: paise_to_input(t.amount_paise),
            date: t.date.clone(),
            posting: t.posting,
            fund_from: fund(t.fund_from),
            fund_to: fund(t.fund_to),
            person_id: text(&t.person_id),
            category_id: text(&t.category_id),
            party: text(&t.party),
            notes: text(&t.notes),
        }
    }

    pub fn requirements(&self) -> FieldRequirements {
        self.txn_type.requirements(self.posting)
    }

    pub fn amount_paise(&self) -> i64 {
        parse_inr_to_paise(&self.amount)
    }

    /// Every field as entered.
    pub fn payload(&self) -> TxnPayload {
        fn opt(s: &str) -> Option<String> {
            let s = s.trim();
            if s.is_empty() { None } else { Some(s.to_string()) }
        }
        TxnPayload {
            txn_type: self.txn_type,
            amount_paise: self.amount_paise(),
            date: self.date.clone(),
            posting: self.posting,
            fund_from: self.fund_from.parse().ok(),
            fund_to: self.fund_to.parse().ok(),
            person_id: opt(&self.person_id),
            category_id: opt(&self.category_id),
            party: opt(&self.party),
            notes: opt(&self.notes),
        }
    }

    /// Like `payload`, but drops selections the form is currently hiding
    /// so a stale choice from another type is not sent.
    pub fn visible_payload(&self) -> TxnPayload {
        let req = self.requirements();
        let mut p = self.payload();
        if !req.fund_from {
            p.fund_from = None;
        }
        if !req.fund_to {
            p.fund_to = None;
        }
        if !req.person {
            p.person_id = None;
        }
        if !req.category {
            p.category_id = None;
        }
        p
    }

    pub fn apply(mut self, action: DraftAction) -> Self {
        match action {
            DraftAction::Set(field, value) => match field {
                DraftField::TxnType => {
                    if let Ok(t) = value.parse() {
                        self.txn_type = t;
                    }
                }
                DraftField::Amount => self.amount = value,
                DraftField::Date => self.date = value,
                DraftField::FundFrom => self.fund_from = value,
                DraftField::FundTo => self.fund_to = value,
                DraftField::Person => self.person_id = value,
                DraftField::Category => self.category_id = value,
                DraftField::Party => self.party = value,
                DraftField::Notes => self.notes = value,
            },
            DraftAction::SetPosting(p) => self.posting = p,
            DraftAction::Replace(d) => self = d,
            DraftAction::ClearAfterCreate => {
                self.amount.clear();
                self.party.clear();
                self.notes.clear();
            }
        }
        self
    }
}

impl Reducible for TxnDraft {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(d: TxnDraft, field: DraftField, v: &str) -> TxnDraft {
        d.apply(DraftAction::Set(field, v.to_string()))
    }

    #[test]
    fn new_draft_defaults() {
        let d = TxnDraft::new("2024-05-06".into());
        assert_eq!(d.txn_type, TxnType::Contribution);
        assert!(d.posting);
        assert_eq!(d.date, "2024-05-06");
        assert_eq!(d.amount_paise(), 0);
    }

    #[test]
    fn payload_parses_amount_and_blanks_to_none() {
        let d = TxnDraft::new("2024-05-06".into());
        let d = set(d, DraftField::TxnType, "EXPENSE");
        let d = set(d, DraftField::Amount, "1,250.50");
        let d = set(d, DraftField::FundFrom, "CASH");
        let d = set(d, DraftField::Category, "c_food");
        let d = set(d, DraftField::Party, "   ");
        let p = d.payload();
        assert_eq!(p.txn_type, TxnType::Expense);
        assert_eq!(p.amount_paise, 125_050);
        assert_eq!(p.fund_from, Some(Fund::Cash));
        assert_eq!(p.category_id.as_deref(), Some("c_food"));
        assert_eq!(p.party, None);
    }

    #[test]
    fn unknown_type_is_ignored() {
        let d = set(TxnDraft::new(String::new()), DraftField::TxnType, "REFUND");
        assert_eq!(d.txn_type, TxnType::Contribution);
    }

    #[test]
    fn visible_payload_masks_hidden_selectors() {
        let d = TxnDraft::new("2024-05-06".into());
        let d = set(d, DraftField::TxnType, "TRANSFER");
        let d = set(d, DraftField::FundFrom, "CASH");
        let d = set(d, DraftField::FundTo, "ONLINE_Y");
        let d = set(d, DraftField::TxnType, "INCOME");
        let p = d.visible_payload();
        assert_eq!(p.fund_from, None);
        assert_eq!(p.fund_to, Some(Fund::OnlineY));
        assert_eq!(d.payload().fund_from, Some(Fund::Cash));

        let p = d.apply(DraftAction::SetPosting(false)).visible_payload();
        assert_eq!((p.fund_from, p.fund_to), (None, None));
    }

    #[test]
    fn from_txn_prefills_everything() {
        let t = Txn {
            id: "t1".into(),
            date: "2024-02-29".into(),
            txn_type: TxnType::Contribution,
            amount_paise: 15_000_000,
            fund_from: None,
            fund_to: Some(Fund::OnlineA),
            person_id: Some("p_asha".into()),
            category_id: None,
            party: None,
            notes: Some("monthly".into()),
            posting: true,
        };
        let d = TxnDraft::from_txn(&t);
        assert_eq!(d.amount, "150000");
        assert_eq!(d.fund_to, "ONLINE_A");
        assert_eq!(d.fund_from, "");
        assert_eq!(d.notes, "monthly");
        let p = d.payload();
        assert_eq!(p.amount_paise, t.amount_paise);
        assert_eq!(p.person_id, t.person_id);
    }

    #[test]
    fn clear_after_create_keeps_context() {
        let d = TxnDraft::new("2024-05-06".into());
        let d = set(d, DraftField::Amount, "500");
        let d = set(d, DraftField::Notes, "x");
        let d = set(d, DraftField::FundTo, "CASH");
        let d = d.apply(DraftAction::ClearAfterCreate);
        assert!(d.amount.is_empty() && d.notes.is_empty());
        assert_eq!(d.fund_to, "CASH");
        assert_eq!(d.date, "2024-05-06");
    }
}
