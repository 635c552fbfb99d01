//! Convenience re-export of the types most callers need.

pub use crate::orderbook::{
    Engine, LevelView, OrderId, OrderView, Price, Quantity, RejectReason, Side, SymbolHandler,
    SymbolId,
};
