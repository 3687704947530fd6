//! Transactions-list preferences kept in `localStorage` between visits.

use crate::config::PREFS_KEY;
use crate::state::{SortState, TxnFilter};
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListPrefs {
    pub sort: SortState,
    pub filter: TxnFilter,
}

impl ListPrefs {
    /// Stored prefs, or defaults if absent or written by an older build.
    pub fn load() -> Self {
        match LocalStorage::get::<ListPrefs>(PREFS_KEY) {
            Ok(p) => p,
            Err(e) => {
                log::debug!("no stored list prefs: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        if let Err(e) = LocalStorage::set(PREFS_KEY, self) {
            log::warn!("could not persist list prefs: {e}");
        }
    }
}
