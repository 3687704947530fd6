pub mod add_entry;
pub mod dashboard;
pub mod edit_txn;
pub mod transactions;

pub use add_entry::AddEntry;
pub use dashboard::Dashboard;
pub use edit_txn::EditTxn;
pub use transactions::Transactions;
