//! Per-symbol price-time order book: dual-indexed price levels, a global
//! order registry, and the engine façade that ties them together.

mod book;
mod engine;
mod error;
mod handler;
mod level;
mod price_map;
mod registry;
mod snapshot;
mod types;

#[cfg(test)]
mod tests;

pub use engine::Engine;
pub use error::RejectReason;
pub use handler::SymbolHandler;
pub use level::{Level, OrderSlot};
pub use price_map::{Ask, Bid, DualIndexedPriceMap};
pub use registry::{OrderRecord, OrderRegistry};
pub use snapshot::{LevelView, OrderView};
pub use types::{OrderId, Price, Quantity, Side, SlotIndex, SymbolId};
