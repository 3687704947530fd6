// Sorting and filtering for the transactions list.
use crate::model::{Fund, Txn, TxnType};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Date,
    TxnType,
    AmountPaise,
    FundFrom,
    FundTo,
    PersonId,
    CategoryId,
    Party,
    Notes,
    Posting,
}

impl SortKey {
    /// Table columns, left to right.
    pub const COLUMNS: [(SortKey, &'static str); 10] = [
        (SortKey::Date, "Date"),
        (SortKey::TxnType, "Type"),
        (SortKey::AmountPaise, "Amount"),
        (SortKey::FundFrom, "From"),
        (SortKey::FundTo, "To"),
        (SortKey::PersonId, "Person"),
        (SortKey::CategoryId, "Category"),
        (SortKey::Party, "Party"),
        (SortKey::Notes, "Notes"),
        (SortKey::Posting, "Posting"),
    ];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    pub fn flipped(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDir::Asc => "▲",
            SortDir::Desc => "▼",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub dir: SortDir,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::CategoryId,
            dir: SortDir::Asc,
        }
    }
}

impl SortState {
    /// Clicking the active column flips direction; a new column starts ascending.
    pub fn toggle(self, key: SortKey) -> Self {
        if key == self.key {
            Self { key, dir: self.dir.flipped() }
        } else {
            Self { key, dir: SortDir::Asc }
        }
    }
}

enum SortValue<'a> {
    Num(i64),
    Text(&'a str),
}

fn sort_value(t: &Txn, key: SortKey) -> SortValue<'_> {
    fn opt(s: &Option<String>) -> SortValue<'_> {
        SortValue::Text(s.as_deref().unwrap_or(""))
    }
    fn fund(f: Option<Fund>) -> SortValue<'static> {
        SortValue::Text(f.map(Fund::as_str).unwrap_or(""))
    }
    match key {
        SortKey::Date => SortValue::Text(&t.date),
        SortKey::TxnType => SortValue::Text(t.txn_type.as_str()),
        SortKey::AmountPaise => SortValue::Num(t.amount_paise),
        SortKey::FundFrom => fund(t.fund_from),
        SortKey::FundTo => fund(t.fund_to),
        SortKey::PersonId => opt(&t.person_id),
        SortKey::CategoryId => opt(&t.category_id),
        SortKey::Party => opt(&t.party),
        SortKey::Notes => opt(&t.notes),
        SortKey::Posting => SortValue::Num(t.posting as i64),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Stable in-place sort of the fetched page.
pub fn sort_txns(txns: &mut [Txn], sort: SortState) {
    txns.sort_by(|a, b| {
        let ord = match (sort_value(a, sort.key), sort_value(b, sort.key)) {
            (SortValue::Num(x), SortValue::Num(y)) => x.cmp(&y),
            (SortValue::Text(x), SortValue::Text(y)) => compare_text(x, y),
            // Keys never mix kinds.
            (SortValue::Num(_), SortValue::Text(_)) => Ordering::Less,
            (SortValue::Text(_), SortValue::Num(_)) => Ordering::Greater,
        };
        match sort.dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
}

/// Server-side list filters, mirrored into the `GET /transactions` query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxnFilter {
    pub txn_type: Option<TxnType>,
    pub fund: Option<Fund>,
    pub posting: Option<bool>,
    /// Substring match on notes/party.
    pub q: String,
    pub category_id: Option<String>,
    pub person_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub page: Option<u32>,
}

impl TxnFilter {
    /// Only the set parameters, URL-encoded; empty when nothing is set.
    pub fn to_query(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(t) = self.txn_type {
            pairs.push(("type", t.as_str().to_string()));
        }
        if let Some(f) = self.fund {
            pairs.push(("fund", f.as_str().to_string()));
        }
        if let Some(p) = self.posting {
            pairs.push(("posting", p.to_string()));
        }
        if !self.q.is_empty() {
            pairs.push(("q", self.q.clone()));
        }
        let optional = [
            ("category_id", &self.category_id),
            ("person_id", &self.person_id),
            ("from", &self.from),
            ("to", &self.to),
        ];
        for (name, value) in optional {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                pairs.push((name, v.to_string()));
            }
        }
        if let Some(page) = self.page.filter(|p| *p > 1) {
            pairs.push(("page", page.to_string()));
        }
        pairs
            .into_iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(&v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(id: &str, amount: i64, category: Option<&str>, posting: bool) -> Txn {
        Txn {
            id: id.into(),
            date: format!("2024-01-0{}", id.len()),
            txn_type: TxnType::Expense,
            amount_paise: amount,
            fund_from: Some(Fund::Cash),
            fund_to: None,
            person_id: None,
            category_id: category.map(str::to_string),
            party: None,
            notes: None,
            posting,
        }
    }

    fn ids(txns: &[Txn]) -> Vec<&str> {
        txns.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn amounts_sort_numerically() {
        let mut v = vec![txn("a", 900, None, true), txn("b", 10_000, None, true), txn("c", 95, None, true)];
        sort_txns(&mut v, SortState { key: SortKey::AmountPaise, dir: SortDir::Asc });
        assert_eq!(ids(&v), ["c", "a", "b"]);
        sort_txns(&mut v, SortState { key: SortKey::AmountPaise, dir: SortDir::Desc });
        assert_eq!(ids(&v), ["b", "a", "c"]);
    }

    #[test]
    fn missing_text_sorts_first_ascending() {
        let mut v = vec![
            txn("a", 1, Some("rent"), true),
            txn("b", 1, None, true),
            txn("c", 1, Some("Food"), true),
        ];
        sort_txns(&mut v, SortState::default());
        assert_eq!(ids(&v), ["b", "c", "a"]);
    }

    #[test]
    fn posting_sorts_false_before_true() {
        let mut v = vec![txn("a", 1, None, true), txn("b", 1, None, false)];
        sort_txns(&mut v, SortState { key: SortKey::Posting, dir: SortDir::Asc });
        assert_eq!(ids(&v), ["b", "a"]);
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let mut v = vec![txn("x", 5, None, true), txn("y", 5, None, true), txn("z", 5, None, true)];
        sort_txns(&mut v, SortState { key: SortKey::AmountPaise, dir: SortDir::Desc });
        assert_eq!(ids(&v), ["x", "y", "z"]);
    }

    #[test]
    fn toggle_flips_or_resets() {
        let s = SortState::default();
        assert_eq!(s.key, SortKey::CategoryId);
        let s = s.toggle(SortKey::CategoryId);
        assert_eq!(s.dir, SortDir::Desc);
        let s = s.toggle(SortKey::Date);
        assert_eq!(s, SortState { key: SortKey::Date, dir: SortDir::Asc });
    }

    #[test]
    fn empty_filter_has_empty_query() {
        assert_eq!(TxnFilter::default().to_query(), "");
    }

    #[test]
    fn query_includes_only_set_fields_in_order() {
        let f = TxnFilter {
            txn_type: Some(TxnType::Expense),
            fund: Some(Fund::OnlineA),
            posting: Some(false),
            q: "milk & eggs".into(),
            ..Default::default()
        };
        assert_eq!(f.to_query(), "type=EXPENSE&fund=ONLINE_A&posting=false&q=milk%20%26%20eggs");
    }

    #[test]
    fn query_carries_range_and_page() {
        let f = TxnFilter {
            from: Some("2024-01-01".into()),
            to: Some(String::new()),
            page: Some(2),
            ..Default::default()
        };
        assert_eq!(f.to_query(), "from=2024-01-01&page=2");
    }
}
