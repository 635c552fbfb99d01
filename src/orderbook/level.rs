//! Aggregate state for one price on one side of one symbol.

use super::types::{OrderId, Price, Quantity, Side, SlotIndex, SymbolId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One resident order inside a [`Level`]'s slot list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderSlot {
    pub order_id: OrderId,
    pub qty: Quantity,
}

/// All resting orders at one price on one side of one symbol.
///
/// `orders` is append-only: a cancelled or price-amended order leaves a
/// tombstone (`None`) behind rather than shifting later slots, so that slot
/// indices handed out by [`Level::append`] stay valid for the life of the
/// level.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Level {
    pub symbol: SymbolId,
    pub side: Side,
    pub px: Price,
    /// Count of live (non-tombstone) orders.
    pub num: u32,
    /// Sum of live orders' quantities.
    pub qty: Quantity,
    orders: Vec<Option<OrderSlot>>,
}

impl Level {
    pub fn new(symbol: SymbolId, side: Side, px: Price) -> Self {
        Level {
            symbol,
            side,
            px,
            num: 0,
            qty: Quantity(0),
            orders: Vec::new(),
        }
    }

    /// `num == 0` levels are skipped by depth queries; empty is the only
    /// state that's queryable-but-uninteresting (a level is never erased
    /// from its book just because it emptied out, see design notes).
    pub fn is_empty(&self) -> bool {
        self.num == 0
    }

    /// Appends a new live order, returning its slot index. `num`/`qty` grow.
    pub fn append(&mut self, order_id: OrderId, qty: Quantity) -> SlotIndex {
        let slot = self.orders.len();
        self.orders.push(Some(OrderSlot { order_id, qty }));
        self.num += 1;
        self.qty = self.qty.checked_add(qty);
        slot
    }

    /// Clears a slot, turning it into a tombstone, and shrinks `num`/`qty`
    /// by the quantity that was resting there.
    pub fn tombstone(&mut self, slot: SlotIndex) {
        let removed = self.orders[slot]
            .take()
            .expect("tombstone of an already-tombstoned or out-of-range slot");
        self.num -= 1;
        self.qty = self.qty.checked_sub(removed.qty);
    }

    /// In-place quantity change for a live slot (same-price modify); the
    /// slot index, and therefore time priority, is untouched.
    pub fn resize(&mut self, slot: SlotIndex, new_qty: Quantity) {
        let entry = self.orders[slot]
            .as_mut()
            .expect("resize of a tombstoned or out-of-range slot");
        let old_qty = entry.qty;
        entry.qty = new_qty;
        self.qty = if new_qty >= old_qty {
            self.qty.checked_add(Quantity(new_qty.0 - old_qty.0))
        } else {
            self.qty.checked_sub(Quantity(old_qty.0 - new_qty.0))
        };
    }

    /// Live orders in arrival order, slot index included, tombstones skipped.
    pub fn live_orders(&self) -> impl Iterator<Item = (SlotIndex, OrderSlot)> + '_ {
        self.orders
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|s| (i, s)))
    }
}
