use serde::Serialize;

use crate::{Action, Icon};

#[derive(Serialize, Debug)]
pub struct ResultItem {
    pub id: String,
    pub icon: Icon,
    pub primary_text: String,
    pub secondary_text: String,
    /// Text the host may use to complete the query input
    /// when this item is selected.
    pub completion: Option<String>,
    pub actions: Vec<Action>,
    pub score: u16,
}
