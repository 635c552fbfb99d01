//! Property-based sweep over random add/remove/modify sequences, checking
//! the quantified invariants after every single call: level aggregates
//! agree with their live orders, and every live order appears in exactly
//! one level.

use lob_engine::{Engine, OrderId, Price, Quantity, Side, SymbolId};
use proptest::prelude::*;
use std::collections::HashMap;

const SYMBOL: SymbolId = SymbolId(0);

#[derive(Debug, Clone)]
enum Action {
    Add {
        id: u64,
        px: u64,
        qty: u64,
        side: Side,
    },
    Remove {
        id: u64,
    },
    Modify {
        id: u64,
        px: u64,
        qty: u64,
    },
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Buy), Just(Side::Sell)]
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0u64..12, 1u64..8, 1u64..20, side_strategy()).prop_map(|(id, px, qty, side)| {
            Action::Add { id, px, qty, side }
        }),
        (0u64..12).prop_map(|id| Action::Remove { id }),
        (0u64..12, 1u64..8, 1u64..20).prop_map(|(id, px, qty)| Action::Modify { id, px, qty }),
    ]
}

/// A plain shadow model of the live orders this engine should contain,
/// kept in lockstep with the real engine so each step can be checked
/// against ground truth instead of just against internal self-consistency.
#[derive(Default)]
struct ShadowModel {
    live: HashMap<u64, (u64, u64, Side)>, // id -> (px, qty, side)
}

fn assert_invariants(engine: &Engine, model: &ShadowModel) {
    let mut seen_ids = std::collections::HashSet::new();

    for side in [Side::Buy, Side::Sell] {
        for level in engine.query_top_full(SYMBOL, 10_000, side) {
            // Invariant 1: num/qty agree with the live slots.
            assert_eq!(level.num as usize, level.orders.len());
            let summed: u64 = level.orders.iter().map(|o| o.qty.0).sum();
            assert_eq!(level.qty, Quantity(summed));
            assert!(level.num > 0, "query_top_full must never emit empty levels");

            for order in &level.orders {
                // Invariant 3: an id appears in at most one live slot anywhere.
                assert!(
                    seen_ids.insert(order.order_id.0),
                    "order {} appears in more than one level",
                    order.order_id.0
                );
                // Invariant 2: the level an order is found in matches the model.
                let &(px, qty, model_side) = model
                    .live
                    .get(&order.order_id.0)
                    .expect("order resting in engine but absent from shadow model");
                assert_eq!(px, level.px.0);
                assert_eq!(qty, order.qty.0);
                assert_eq!(model_side, side);
            }
        }
    }

    assert_eq!(
        seen_ids.len(),
        model.live.len(),
        "engine and shadow model disagree on the set of live orders"
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn invariants_hold_after_every_call(actions in proptest::collection::vec(action_strategy(), 0..80)) {
        let mut engine = Engine::new();
        engine.add_symbol(SYMBOL, "TEST");
        let mut model = ShadowModel::default();

        for action in actions {
            match action {
                Action::Add { id, px, qty, side } => {
                    let expected_ok = !model.live.contains_key(&id);
                    let ok = engine.add_order(SYMBOL, OrderId(id), Price(px), Quantity(qty), side);
                    prop_assert_eq!(ok, expected_ok);
                    if ok {
                        model.live.insert(id, (px, qty, side));
                    }
                }
                Action::Remove { id } => {
                    let expected_ok = model.live.contains_key(&id);
                    let ok = engine.remove_order(OrderId(id));
                    prop_assert_eq!(ok, expected_ok);
                    if ok {
                        model.live.remove(&id);
                    }
                }
                Action::Modify { id, px, qty } => {
                    let expected_ok = model.live.contains_key(&id);
                    let ok = engine.modify_order(OrderId(id), Price(px), Quantity(qty));
                    prop_assert_eq!(ok, expected_ok);
                    if ok {
                        let side = model.live[&id].2;
                        model.live.insert(id, (px, qty, side));
                    }
                }
            }
            assert_invariants(&engine, &model);
        }
    }
}
