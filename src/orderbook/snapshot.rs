//! Read-only views returned by depth queries.

use super::level::Level;
use super::types::{OrderId, Price, Quantity, Side, SymbolId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One live order within a [`LevelView`], in arrival (time-priority) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderView {
    pub order_id: OrderId,
    pub qty: Quantity,
}

/// A snapshot of one non-empty price level, as returned by
/// `query_top_full`. Tombstoned slots are never included in `orders`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LevelView {
    pub symbol: SymbolId,
    pub side: Side,
    pub px: Price,
    pub qty: Quantity,
    pub num: u32,
    pub orders: Vec<OrderView>,
}

impl LevelView {
    pub(crate) fn from_level(level: &Level) -> Self {
        LevelView {
            symbol: level.symbol,
            side: level.side,
            px: level.px,
            qty: level.qty,
            num: level.num,
            orders: level
                .live_orders()
                .map(|(_, slot)| OrderView {
                    order_id: slot.order_id,
                    qty: slot.qty,
                })
                .collect(),
        }
    }
}
