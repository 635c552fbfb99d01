//! Internal reject/failure taxonomy, used for logging and for the
//! `*_detailed` API variants. The public boolean-returning API (`add_order`,
//! `remove_order`, `modify_order`, `add_symbol`) never surfaces this type
//! directly — it exists so a rejection can be logged with a specific,
//! structured cause instead of a bare `false`.

use super::types::{OrderId, SymbolId};
use std::fmt;

/// Why a mutating call was rejected, or (for `InvariantViolation`) why the
/// engine is about to panic. Expected-rejection variants are always
/// caller-recoverable: the call that produced them made no state change.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RejectReason {
    /// `add_order` with an id already present in the registry.
    DuplicateOrderId(OrderId),

    /// `remove_order`/`modify_order` with an id not in the registry.
    UnknownOrderId(OrderId),

    /// `remove_order`/`modify_order` called via a handler for a symbol
    /// other than the one the order actually belongs to.
    SymbolMismatch { order: SymbolId, handler: SymbolId },

    /// `add_symbol` with an id already registered.
    DuplicateSymbolId(SymbolId),

    /// An order record pointed at a level or slot that doesn't hold it.
    /// Always a bug in this crate, never a caller error; see
    /// [`crate::orderbook::error::invariant_violation`].
    InvariantViolation(String),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::DuplicateOrderId(id) => {
                write!(f, "order id {id} already exists")
            }
            RejectReason::UnknownOrderId(id) => {
                write!(f, "order id {id} is not known to the registry")
            }
            RejectReason::SymbolMismatch { order, handler } => {
                write!(
                    f,
                    "order belongs to symbol {order}, not to handler for symbol {handler}"
                )
            }
            RejectReason::DuplicateSymbolId(id) => {
                write!(f, "symbol id {id} already exists")
            }
            RejectReason::InvariantViolation(message) => {
                write!(f, "invariant violation: {message}")
            }
        }
    }
}

impl std::error::Error for RejectReason {}

/// Logs the violated invariant at `error!` and then aborts the process.
/// Call this only for states that this crate's own bookkeeping should make
/// unreachable (an order's back-reference resolving to the wrong level,
/// etc) — never for a caller-supplied bad argument, which is a `false`
/// return, not a panic.
#[track_caller]
pub(crate) fn invariant_violation(message: impl Into<String>) -> ! {
    let message = message.into();
    tracing::error!(%message, "order book invariant violation");
    panic!("order book invariant violation: {message}");
}
