pub mod app;
pub mod bar_chart;
pub mod card;
pub mod error_banner;
pub mod field;
pub mod filter_select;
pub mod loading;
pub mod sortable_th;
pub mod swipeable_row;
pub mod txn_form;

pub use app::App;
pub use bar_chart::{BarChart, BarDatum};
pub use card::Card;
pub use error_banner::ErrorBanner;
pub use field::Field;
pub use filter_select::FilterSelect;
pub use loading::Loading;
pub use sortable_th::SortableTh;
pub use swipeable_row::SwipeableRow;
pub use txn_form::{FormMode, TxnForm};
