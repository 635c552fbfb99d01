//! Exercises the crate purely through its public surface, as an embedding
//! application would.

use lob_engine::{Engine, OrderId, Price, Quantity, Side, SymbolId};

#[test]
fn multi_symbol_orders_are_isolated() {
    let mut engine = Engine::new();
    let btc = SymbolId(0);
    let eth = SymbolId(1);
    assert!(engine.add_symbol(btc, "BTC_USDT"));
    assert!(engine.add_symbol(eth, "ETH_USDT"));

    assert!(engine.add_order(btc, OrderId(1), Price(50_000), Quantity(1), Side::Buy));
    assert!(engine.add_order(eth, OrderId(2), Price(3_000), Quantity(10), Side::Buy));

    assert_eq!(engine.query_top(btc, 5, Side::Buy).len(), 1);
    assert_eq!(engine.query_top(eth, 5, Side::Buy).len(), 1);
    assert_eq!(engine.query_top(btc, 5, Side::Sell).len(), 0);

    // An id used on one symbol cannot be reused on another while still live.
    assert!(!engine.add_order(eth, OrderId(1), Price(3_100), Quantity(2), Side::Buy));
}

#[test]
fn full_order_lifecycle_add_modify_remove() {
    let mut engine = Engine::new();
    let sym = SymbolId(7);
    engine.add_symbol(sym, "PINK_USDT");

    assert!(engine.add_order(sym, OrderId(1), Price(100), Quantity(10), Side::Sell));
    assert!(engine.modify_order(OrderId(1), Price(100), Quantity(25)));
    let levels = engine.query_top_full(sym, 1, Side::Sell);
    assert_eq!(levels[0].qty, Quantity(25));

    assert!(engine.modify_order(OrderId(1), Price(90), Quantity(25)));
    assert_eq!(engine.query_top(sym, 1, Side::Sell), vec![(Price(90), Quantity(25))]);

    assert!(engine.remove_order(OrderId(1)));
    assert_eq!(engine.query_top(sym, 5, Side::Sell), Vec::new());
}

#[test]
fn depth_query_orders_multiple_price_levels_correctly() {
    let mut engine = Engine::new();
    let sym = SymbolId(0);
    engine.add_symbol(sym, "X");

    for (id, px) in [(1, 50), (2, 20), (3, 80), (4, 20), (5, 65)] {
        assert!(engine.add_order(sym, OrderId(id), Price(px), Quantity(1), Side::Buy));
    }
    let prices: Vec<u64> = engine
        .query_top(sym, 10, Side::Buy)
        .into_iter()
        .map(|(px, _)| px.0)
        .collect();
    assert_eq!(prices, vec![80, 65, 50, 20]);

    for (id, px) in [(6, 50), (7, 20), (8, 80), (9, 20), (10, 65)] {
        assert!(engine.add_order(sym, OrderId(id), Price(px), Quantity(1), Side::Sell));
    }
    let prices: Vec<u64> = engine
        .query_top(sym, 10, Side::Sell)
        .into_iter()
        .map(|(px, _)| px.0)
        .collect();
    assert_eq!(prices, vec![20, 50, 65, 80]);
}

#[test]
fn zero_depth_query_returns_nothing() {
    let mut engine = Engine::new();
    let sym = SymbolId(0);
    engine.add_symbol(sym, "X");
    engine.add_order(sym, OrderId(1), Price(10), Quantity(1), Side::Buy);
    assert_eq!(engine.query_top(sym, 0, Side::Buy), Vec::new());
}
