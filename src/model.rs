//! Ledger data as served by the `/api/v1` backend.
//! Amounts are integer paise throughout.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Fund {
    Cash,
    OnlineA,
    OnlineY,
}

impl Fund {
    pub const ALL: [Fund; 3] = [Fund::Cash, Fund::OnlineA, Fund::OnlineY];

    pub fn as_str(self) -> &'static str {
        match self {
            Fund::Cash => "CASH",
            Fund::OnlineA => "ONLINE_A",
            Fund::OnlineY => "ONLINE_Y",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Fund::Cash => "Cash",
            Fund::OnlineA => "Online A",
            Fund::OnlineY => "Online Y",
        }
    }
}

impl fmt::Display for Fund {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Fund {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fund::ALL.into_iter().find(|f| f.as_str() == s).ok_or(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxnType {
    Contribution,
    Income,
    Expense,
    Transfer,
}

impl TxnType {
    pub const ALL: [TxnType; 4] = [
        TxnType::Contribution,
        TxnType::Income,
        TxnType::Expense,
        TxnType::Transfer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TxnType::Contribution => "CONTRIBUTION",
            TxnType::Income => "INCOME",
            TxnType::Expense => "EXPENSE",
            TxnType::Transfer => "TRANSFER",
        }
    }

    /// Which optional inputs the entry form should offer.
    pub fn requirements(self, posting: bool) -> FieldRequirements {
        if !posting {
            return FieldRequirements::default();
        }
        use TxnType::*;
        FieldRequirements {
            fund_from: matches!(self, Expense | Transfer),
            fund_to: matches!(self, Contribution | Income | Transfer),
            person: matches!(self, Contribution),
            category: matches!(self, Expense),
        }
    }
}

impl fmt::Display for TxnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxnType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TxnType::ALL.into_iter().find(|t| t.as_str() == s).ok_or(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldRequirements {
    pub fund_from: bool,
    pub fund_to: bool,
    pub person: bool,
    pub category: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Txn {
    pub id: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub txn_type: TxnType,
    pub amount_paise: i64,
    #[serde(default)]
    pub fund_from: Option<Fund>,
    #[serde(default)]
    pub fund_to: Option<Fund>,
    #[serde(default)]
    pub person_id: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub posting: bool,
}

impl Txn {
    /// Short subject for list rows: category, else person, else party.
    pub fn subject(&self) -> &str {
        [&self.category_id, &self.person_id, &self.party]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.is_empty())
            .unwrap_or("—")
    }

    /// `CASH → ONLINE_A`, or whichever side is present.
    pub fn fund_route(&self) -> String {
        match (self.fund_from, self.fund_to) {
            (Some(from), Some(to)) => format!("{from} → {to}"),
            (Some(f), None) | (None, Some(f)) => f.to_string(),
            (None, None) => String::new(),
        }
    }
}

/// Body for create and update; the server assigns ids on create.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TxnPayload {
    pub txn_type: TxnType,
    pub amount_paise: i64,
    pub date: String,
    pub posting: bool,
    pub fund_from: Option<Fund>,
    pub fund_to: Option<Fund>,
    pub person_id: Option<String>,
    pub category_id: Option<String>,
    pub party: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundBalances {
    pub cash: i64,
    pub online_a: i64,
    pub online_y: i64,
    pub total: i64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_contributions: i64,
    pub total_income: i64,
    pub total_expenses: i64,
    pub stored_total_funds: i64,
    /// Stored balances minus what the transactions imply; non-zero means drift.
    pub discrepancy: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopEntry {
    pub id: Option<String>,
    pub name: Option<String>,
    pub total_paise: i64,
}

impl TopEntry {
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn txn() -> Txn {
        Txn {
            id: "t1".into(),
            date: "2024-03-01".into(),
            txn_type: TxnType::Expense,
            amount_paise: 12_500,
            fund_from: Some(Fund::Cash),
            fund_to: None,
            person_id: None,
            category_id: None,
            party: Some("Grocer".into()),
            notes: None,
            posting: true,
        }
    }

    #[test]
    fn decodes_backend_json() {
        let raw = json!({
            "id": "t00000042",
            "date": "2024-03-01",
            "txn_type": "TRANSFER",
            "amount_paise": 500000,
            "fund_from": "ONLINE_A",
            "fund_to": "CASH",
            "person_id": null,
            "category_id": null,
            "party": null,
            "notes": "atm",
            "posting": true
        });
        let t: Txn = serde_json::from_value(raw).unwrap();
        assert_eq!(t.txn_type, TxnType::Transfer);
        assert_eq!(t.fund_from, Some(Fund::OnlineA));
        assert_eq!(t.fund_route(), "ONLINE_A → CASH");
    }

    #[test]
    fn missing_optionals_default_to_none() {
        let raw = json!({
            "id": "x", "date": "2024-01-01", "txn_type": "INCOME",
            "amount_paise": 1, "posting": false
        });
        let t: Txn = serde_json::from_value(raw).unwrap();
        assert_eq!(t.fund_to, None);
        assert_eq!(t.subject(), "—");
        assert_eq!(t.fund_route(), "");
    }

    #[test]
    fn payload_sends_nulls() {
        let p = TxnPayload {
            txn_type: TxnType::Income,
            amount_paise: 100,
            date: "2024-01-01".into(),
            posting: true,
            fund_from: None,
            fund_to: Some(Fund::OnlineY),
            person_id: None,
            category_id: None,
            party: None,
            notes: None,
        };
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["txn_type"], "INCOME");
        assert_eq!(v["fund_to"], "ONLINE_Y");
        assert!(v["fund_from"].is_null());
    }

    #[test]
    fn subject_prefers_category_then_person_then_party() {
        let mut t = txn();
        assert_eq!(t.subject(), "Grocer");
        t.person_id = Some("p_ravi".into());
        assert_eq!(t.subject(), "p_ravi");
        t.category_id = Some("c_food".into());
        assert_eq!(t.subject(), "c_food");
    }

    #[test]
    fn requirements_follow_type_and_posting() {
        let r = TxnType::Contribution.requirements(true);
        assert_eq!(
            r,
            FieldRequirements { fund_from: false, fund_to: true, person: true, category: false }
        );
        let r = TxnType::Expense.requirements(true);
        assert!(r.fund_from && r.category && !r.fund_to && !r.person);
        let r = TxnType::Transfer.requirements(true);
        assert!(r.fund_from && r.fund_to && !r.person && !r.category);
        let r = TxnType::Income.requirements(true);
        assert!(r.fund_to && !r.fund_from && !r.person && !r.category);
        for t in TxnType::ALL {
            assert_eq!(t.requirements(false), FieldRequirements::default());
        }
    }

    #[test]
    fn enum_strings_round_trip() {
        for f in Fund::ALL {
            assert_eq!(f.as_str().parse::<Fund>(), Ok(f));
        }
        for t in TxnType::ALL {
            assert_eq!(t.as_str().parse::<TxnType>(), Ok(t));
        }
        assert!("SAVINGS".parse::<Fund>().is_err());
    }

    #[test]
    fn top_entry_without_name_is_unknown() {
        let e = TopEntry { id: None, name: None, total_paise: 3 };
        assert_eq!(e.label(), "Unknown");
    }
}
