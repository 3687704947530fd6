pub mod form;
pub mod swipe;
pub mod txn_list;

pub use form::{DraftAction, DraftField, TxnDraft};
pub use swipe::{SwipeAction, SwipeState};
pub use txn_list::{SortDir, SortKey, SortState, TxnFilter, sort_txns};
