//! Coordinates one symbol's two books with the shared order registry.
//!
//! This is where the order index (keyed by id) and the book index (keyed by
//! price, per side) are kept consistent through add/remove/modify. Every
//! method here takes the engine's [`OrderRegistry`] by `&mut` reference
//! rather than reaching for a global — see the design notes on why the
//! engine carries its registries explicitly instead of through statics.

use super::book::Book;
use super::error::{invariant_violation, RejectReason};
use super::price_map::{Ask, Bid};
use super::registry::{OrderRecord, OrderRegistry};
use super::snapshot::LevelView;
use super::types::{OrderId, Price, Quantity, Side, SymbolId};
use tracing::trace;

/// The two order books (bid and ask) for one symbol, plus add/remove/modify
/// and depth-query operations over their resting orders.
#[derive(Debug)]
pub struct SymbolHandler {
    symbol: SymbolId,
    bids: Book<Bid>,
    asks: Book<Ask>,
}

impl SymbolHandler {
    pub fn new(symbol: SymbolId) -> Self {
        SymbolHandler {
            symbol,
            bids: Book::new(symbol),
            asks: Book::new(symbol),
        }
    }

    pub fn symbol(&self) -> SymbolId {
        self.symbol
    }

    /// Adds a fresh order from its raw fields. `false` (no state change) if
    /// `order_id` already exists.
    pub fn add_order(
        &mut self,
        registry: &mut OrderRegistry,
        order_id: OrderId,
        px: Price,
        qty: Quantity,
        side: Side,
    ) -> bool {
        self.add_order_detailed(registry, order_id, px, qty, side)
            .is_ok()
    }

    pub fn add_order_detailed(
        &mut self,
        registry: &mut OrderRegistry,
        order_id: OrderId,
        px: Price,
        qty: Quantity,
        side: Side,
    ) -> Result<(), RejectReason> {
        if registry.contains(order_id) {
            trace!(%order_id, "reject add_order: duplicate id");
            return Err(RejectReason::DuplicateOrderId(order_id));
        }

        let slot = match side {
            Side::Buy => self.bids.level_or_create(px).append(order_id, qty),
            Side::Sell => self.asks.level_or_create(px).append(order_id, qty),
        };

        let inserted = registry.insert(OrderRecord {
            id: order_id,
            symbol: self.symbol,
            side,
            px,
            qty,
            slot,
        });
        if !inserted {
            invariant_violation(format!(
                "order {order_id} passed the duplicate check but registry.insert rejected it"
            ));
        }

        trace!(%order_id, %px, %qty, %side, "add_order");
        Ok(())
    }

    /// Adds a pre-built order record (e.g. handed in by an upstream
    /// collaborator). Rejects duplicates and cross-symbol records.
    pub fn add_order_record(&mut self, registry: &mut OrderRegistry, record: OrderRecord) -> bool {
        if record.symbol != self.symbol {
            trace!(order_id = %record.id, "reject add_order record: symbol mismatch");
            return false;
        }
        self.add_order(registry, record.id, record.px, record.qty, record.side)
    }

    /// `false` (no state change) if `order_id` is unknown, or if it belongs
    /// to a different symbol than this handler's.
    pub fn remove_order(&mut self, registry: &mut OrderRegistry, order_id: OrderId) -> bool {
        self.remove_order_detailed(registry, order_id).is_ok()
    }

    pub fn remove_order_detailed(
        &mut self,
        registry: &mut OrderRegistry,
        order_id: OrderId,
    ) -> Result<(), RejectReason> {
        let record = match registry.get(order_id) {
            Some(record) => *record,
            None => {
                trace!(%order_id, "reject remove_order: unknown id");
                return Err(RejectReason::UnknownOrderId(order_id));
            }
        };
        if record.symbol != self.symbol {
            trace!(%order_id, "reject remove_order: symbol mismatch");
            return Err(RejectReason::SymbolMismatch {
                order: record.symbol,
                handler: self.symbol,
            });
        }

        self.level_mut(record.side, record.px).tombstone(record.slot);

        if !registry.erase(order_id) {
            invariant_violation(format!(
                "order {order_id} was present during lookup but registry.erase failed"
            ));
        }
        trace!(%order_id, "remove_order");
        Ok(())
    }

    /// Same-price modifies adjust the resting slot in place, preserving
    /// time priority. Price-changing modifies remove and re-append under
    /// the same id, which loses time priority — see the spec's design
    /// notes for why that's the correct policy.
    pub fn modify_order(
        &mut self,
        registry: &mut OrderRegistry,
        order_id: OrderId,
        new_px: Price,
        new_qty: Quantity,
    ) -> bool {
        self.modify_order_detailed(registry, order_id, new_px, new_qty)
            .is_ok()
    }

    pub fn modify_order_detailed(
        &mut self,
        registry: &mut OrderRegistry,
        order_id: OrderId,
        new_px: Price,
        new_qty: Quantity,
    ) -> Result<(), RejectReason> {
        let record = match registry.get(order_id) {
            Some(record) => *record,
            None => {
                trace!(%order_id, "reject modify_order: unknown id");
                return Err(RejectReason::UnknownOrderId(order_id));
            }
        };
        if record.symbol != self.symbol {
            trace!(%order_id, "reject modify_order: symbol mismatch");
            return Err(RejectReason::SymbolMismatch {
                order: record.symbol,
                handler: self.symbol,
            });
        }

        if new_px == record.px {
            self.level_mut(record.side, record.px)
                .resize(record.slot, new_qty);
            let stored = registry
                .get_mut(order_id)
                .unwrap_or_else(|| invariant_violation("order vanished between get and get_mut"));
            stored.qty = new_qty;
            trace!(%order_id, %new_qty, "modify_order: in-place");
            return Ok(());
        }

        // Price change: re-append under the same id, losing time priority.
        self.remove_order_detailed(registry, order_id)?;
        self.add_order_detailed(registry, order_id, new_px, new_qty, record.side)?;
        trace!(%order_id, %new_px, %new_qty, "modify_order: price change");
        Ok(())
    }

    fn level_mut(&mut self, side: Side, px: Price) -> &mut super::level::Level {
        match side {
            Side::Buy => self.bids.level_mut(px),
            Side::Sell => self.asks.level_mut(px),
        }
    }

    /// Up to `depth` best non-empty levels on `side`, best-to-worst, as
    /// `(price, aggregate_qty)` pairs.
    pub fn query_top(&self, depth: usize, side: Side) -> Vec<(Price, Quantity)> {
        self.non_empty_levels(side)
            .take(depth)
            .map(|l| (l.px, l.qty))
            .collect()
    }

    /// Up to `depth` best non-empty levels on `side`, best-to-worst, as full
    /// [`LevelView`]s including each live order's id and quantity.
    pub fn query_top_full(&self, depth: usize, side: Side) -> Vec<LevelView> {
        self.non_empty_levels(side)
            .take(depth)
            .map(LevelView::from_level)
            .collect()
    }

    fn non_empty_levels(&self, side: Side) -> Box<dyn Iterator<Item = &super::level::Level> + '_> {
        match side {
            Side::Buy => Box::new(self.bids.non_empty_levels()),
            Side::Sell => Box::new(self.asks.non_empty_levels()),
        }
    }
}
