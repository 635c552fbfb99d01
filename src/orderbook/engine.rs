//! Symbol administration and the top-level façade that routes API calls to
//! the right [`SymbolHandler`].
//!
//! The original design kept the order registry and the symbol table behind
//! process-wide statics. Here both live inside one explicit `Engine` value
//! instead, so nothing is shared outside of what the caller passes around —
//! two `Engine`s never interfere, which is what makes this trivial to test.

use super::error::RejectReason;
use super::handler::SymbolHandler;
use super::registry::OrderRegistry;
use super::snapshot::LevelView;
use super::types::{OrderId, Price, Quantity, Side, SymbolId};
use std::collections::HashMap;
use tracing::trace;

/// Owns the symbol bijection, every symbol's [`SymbolHandler`], and the
/// single cross-symbol [`OrderRegistry`]. This is the entry point embedding
/// code talks to.
#[derive(Debug, Default)]
pub struct Engine {
    registry: OrderRegistry,
    handlers: HashMap<SymbolId, SymbolHandler>,
    name_to_id: HashMap<String, SymbolId>,
    id_to_name: HashMap<SymbolId, String>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new symbol. `false` (no state change) if `symbol_id` is
    /// already registered.
    pub fn add_symbol(&mut self, symbol_id: SymbolId, name: impl Into<String>) -> bool {
        self.add_symbol_detailed(symbol_id, name).is_ok()
    }

    pub fn add_symbol_detailed(
        &mut self,
        symbol_id: SymbolId,
        name: impl Into<String>,
    ) -> Result<(), RejectReason> {
        if self.id_to_name.contains_key(&symbol_id) {
            trace!(%symbol_id, "reject add_symbol: duplicate id");
            return Err(RejectReason::DuplicateSymbolId(symbol_id));
        }
        let name = name.into();
        self.name_to_id.insert(name.clone(), symbol_id);
        self.id_to_name.insert(symbol_id, name);
        self.handlers
            .insert(symbol_id, SymbolHandler::new(symbol_id));
        trace!(%symbol_id, "add_symbol");
        Ok(())
    }

    pub fn symbol_id_of(&self, name: &str) -> Option<SymbolId> {
        self.name_to_id.get(name).copied()
    }

    pub fn name_of(&self, symbol_id: SymbolId) -> Option<&str> {
        self.id_to_name.get(&symbol_id).map(String::as_str)
    }

    pub fn symbol_count(&self) -> usize {
        self.id_to_name.len()
    }

    pub fn symbol_handler(&self, symbol_id: SymbolId) -> Option<&SymbolHandler> {
        self.handlers.get(&symbol_id)
    }

    pub fn symbol_handler_mut(&mut self, symbol_id: SymbolId) -> Option<&mut SymbolHandler> {
        self.handlers.get_mut(&symbol_id)
    }

    /// `false` if `symbol_id` is unregistered or the order id already
    /// exists.
    pub fn add_order(
        &mut self,
        symbol_id: SymbolId,
        order_id: OrderId,
        px: Price,
        qty: Quantity,
        side: Side,
    ) -> bool {
        match self.handlers.get_mut(&symbol_id) {
            Some(handler) => handler.add_order(&mut self.registry, order_id, px, qty, side),
            None => false,
        }
    }

    /// Looks the order up globally, then dispatches to its own symbol's
    /// handler — callers don't need to know which symbol an order id
    /// belongs to in order to cancel it.
    pub fn remove_order(&mut self, order_id: OrderId) -> bool {
        let symbol = match self.registry.get(order_id) {
            Some(record) => record.symbol,
            None => return false,
        };
        match self.handlers.get_mut(&symbol) {
            Some(handler) => handler.remove_order(&mut self.registry, order_id),
            None => false,
        }
    }

    pub fn modify_order(&mut self, order_id: OrderId, px: Price, qty: Quantity) -> bool {
        let symbol = match self.registry.get(order_id) {
            Some(record) => record.symbol,
            None => return false,
        };
        match self.handlers.get_mut(&symbol) {
            Some(handler) => handler.modify_order(&mut self.registry, order_id, px, qty),
            None => false,
        }
    }

    pub fn query_top(&self, symbol_id: SymbolId, depth: usize, side: Side) -> Vec<(Price, Quantity)> {
        match self.handlers.get(&symbol_id) {
            Some(handler) => handler.query_top(depth, side),
            None => Vec::new(),
        }
    }

    pub fn query_top_full(&self, symbol_id: SymbolId, depth: usize, side: Side) -> Vec<LevelView> {
        match self.handlers.get(&symbol_id) {
            Some(handler) => handler.query_top_full(depth, side),
            None => Vec::new(),
        }
    }
}
