//! Which stock the dashboard is currently showing.

use serde::Serialize;

use crate::models::StockQuote;

/// Current selection: nothing yet, or one symbol.
///
/// An explicit `select` always wins. A market load only fills an empty
/// selection, with the first listed stock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    selected: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// User picked a stock.
    pub fn select(&mut self, code: impl Into<String>) {
        self.selected = Some(code.into());
    }

    /// Market list finished loading. Returns `true` if this adopted a
    /// default selection.
    pub fn on_market_loaded(&mut self, quotes: &[StockQuote]) -> bool {
        if self.selected.is_some() {
            return false;
        }
        match quotes.first() {
            Some(first) => {
                self.selected = Some(first.code.clone());
                true
            }
            None => false,
        }
    }
}
