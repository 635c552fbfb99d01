//! One side of one symbol's resting orders.

use super::level::Level;
use super::price_map::{DualIndexedPriceMap, SideMarker};
use super::types::{Price, SymbolId};

/// Binds a side's price-priority comparator (via `S`) to a
/// [`DualIndexedPriceMap`]. A level is created on first order at a price
/// and persists for the process lifetime of its symbol, even once emptied.
#[derive(Debug)]
pub struct Book<S> {
    symbol: SymbolId,
    map: DualIndexedPriceMap<S>,
}

impl<S: SideMarker> Book<S> {
    pub fn new(symbol: SymbolId) -> Self {
        Book {
            symbol,
            map: DualIndexedPriceMap::new(),
        }
    }

    /// Returns the level at `px`, creating an empty one first if absent.
    pub fn level_or_create(&mut self, px: Price) -> &mut Level {
        if !self.map.contains(px) {
            let level = Level::new(self.symbol, S::SIDE, px);
            self.map.insert(px, level);
        }
        self.map.lookup_mut(px)
    }

    pub fn level_mut(&mut self, px: Price) -> &mut Level {
        self.map.lookup_mut(px)
    }

    pub fn level(&self, px: Price) -> &Level {
        self.map.lookup(px)
    }

    /// Price keys in best-to-worst order for this side.
    pub fn prices(&self) -> impl Iterator<Item = Price> + '_ {
        self.map.iter_prices()
    }

    /// Non-empty levels in best-to-worst order, in full.
    pub fn non_empty_levels(&self) -> impl Iterator<Item = &Level> + '_ {
        self.prices()
            .map(|px| self.map.lookup(px))
            .filter(|l| !l.is_empty())
    }
}
