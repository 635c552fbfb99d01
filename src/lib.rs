//! # Price-Time Limit Order Book Engine
//!
//! An in-memory limit order book: per-symbol resting orders on both sides
//! of the market, with O(1) order lookup by id and O(1) price-level lookup
//! within a side, while keeping each side's levels in price-priority order
//! for depth queries.
//!
//! This crate stores resting orders; it does not match or cross them. The
//! transport that delivers order events, the matching policy, and
//! persistence/replay are all external collaborators — the only surface
//! this crate exposes is [`Engine`] and the types it returns.
//!
//! ## Core design
//!
//! Two coupled indexes do the work:
//!
//! - A global [`OrderRegistry`](orderbook::OrderRegistry) mapping order id
//!   to an [`OrderRecord`](orderbook::OrderRecord) that names the order's
//!   level (by symbol/side/price) and its slot index within that level.
//! - Per-symbol, per-side [`DualIndexedPriceMap`](orderbook::DualIndexedPriceMap)s
//!   that pair a hash index (O(1) level lookup by price) with an ordered
//!   index (best-price-first iteration), parameterised at compile time by
//!   a [`Bid`](orderbook::Bid) or [`Ask`](orderbook::Ask) marker so each
//!   side's price-priority ordering is static rather than a runtime
//!   comparator.
//!
//! A [`Level`](orderbook::Level)'s order list is append-only: cancelling or
//! price-amending an order tombstones its slot rather than shifting later
//! ones, so slot indices — and therefore time priority among the
//! survivors — stay stable for the life of the level.
//!
//! ## Example
//!
//! ```
//! use lob_engine::{Engine, OrderId, Price, Quantity, Side, SymbolId};
//!
//! let mut engine = Engine::new();
//! engine.add_symbol(SymbolId(4), "DOGE_USDT");
//!
//! engine.add_order(SymbolId(4), OrderId(0), Price(10), Quantity(3), Side::Buy);
//! engine.add_order(SymbolId(4), OrderId(1), Price(9), Quantity(2), Side::Buy);
//!
//! let top = engine.query_top(SymbolId(4), 5, Side::Buy);
//! assert_eq!(top, vec![(Price(10), Quantity(3)), (Price(9), Quantity(2))]);
//! ```

pub mod orderbook;
pub mod prelude;

pub use orderbook::{
    Ask, Bid, DualIndexedPriceMap, Engine, Level, LevelView, OrderId, OrderRecord, OrderRegistry,
    OrderSlot, OrderView, Price, Quantity, RejectReason, Side, SlotIndex, SymbolHandler, SymbolId,
};
