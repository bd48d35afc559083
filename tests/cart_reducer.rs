use cartview::cart::{Cart, LineItem};
use cartview::ui::cart::{CartIntent, CartReducer, CartScreenState};
use cartview::ui::mvi::Reducer;

fn make_items() -> Vec<LineItem> {
    vec![
        LineItem::new(
            "1",
            "Chicken Schezwan Fried Rice & Chilli Chicken Sauce",
            "The Red Box",
            309,
            1,
        ),
        LineItem::new("2", "Dragon Chicken", "The Red Box", 309, 1),
    ]
}

fn make_state() -> CartScreenState {
    CartScreenState::with_cart(Cart::new(make_items()))
}

#[test]
fn seed_state_has_no_share_link() {
    let state = make_state();
    assert!(!state.share_open());
    assert_eq!(state.focused, 0);
}

#[test]
fn change_quantity_increments_addressed_item_only() {
    let state = CartReducer::reduce(
        make_state(),
        CartIntent::ChangeQuantity {
            id: "1".to_string(),
            delta: 1,
        },
    );
    assert_eq!(state.cart.items()[0].quantity, 2);
    assert_eq!(state.cart.items()[1].quantity, 1);
}

#[test]
fn decrement_clamps_at_zero() {
    let mut state = make_state();
    for _ in 0..3 {
        state = CartReducer::reduce(
            state,
            CartIntent::ChangeQuantity {
                id: "1".to_string(),
                delta: -1,
            },
        );
    }
    assert_eq!(state.cart.items()[0].quantity, 0);
    assert_eq!(state.cart.len(), 2, "item stays present at quantity zero");
}

#[test]
fn unknown_id_leaves_state_value_equal() {
    let before = make_state();
    let after = CartReducer::reduce(
        before.clone(),
        CartIntent::ChangeQuantity {
            id: "missing".to_string(),
            delta: 1,
        },
    );
    assert_eq!(after, before);
}

#[test]
fn total_follows_quantity_changes() {
    let state = make_state();
    assert_eq!(state.cart.total(), 618);
    let state = CartReducer::reduce(
        state,
        CartIntent::ChangeQuantity {
            id: "2".to_string(),
            delta: -1,
        },
    );
    assert_eq!(state.cart.total(), 309);
}

#[test]
fn all_zero_quantities_give_zero_total() {
    let mut state = make_state();
    for id in ["1", "2"] {
        state = CartReducer::reduce(
            state,
            CartIntent::ChangeQuantity {
                id: id.to_string(),
                delta: -1,
            },
        );
    }
    assert_eq!(state.cart.total(), 0);
}

// -- focus movement -----------------------------------------------------------

#[test]
fn move_down_advances_focus() {
    let state = CartReducer::reduce(make_state(), CartIntent::MoveDown);
    assert_eq!(state.focused, 1);
}

#[test]
fn move_down_wraps_around() {
    let state = CartReducer::reduce(make_state(), CartIntent::MoveDown);
    let state = CartReducer::reduce(state, CartIntent::MoveDown);
    assert_eq!(state.focused, 0);
}

#[test]
fn move_up_wraps_around() {
    let state = CartReducer::reduce(make_state(), CartIntent::MoveUp);
    assert_eq!(state.focused, 1);
}

#[test]
fn move_on_empty_cart_is_noop() {
    let state = CartReducer::reduce(CartScreenState::default(), CartIntent::MoveDown);
    assert_eq!(state.focused, 0);
}

// -- share surface ------------------------------------------------------------

#[test]
fn share_link_ready_opens_surface() {
    let state = CartReducer::reduce(
        make_state(),
        CartIntent::ShareLinkReady {
            link: "https://food.example.com/share/abc".to_string(),
        },
    );
    assert!(state.share_open());
    assert_eq!(
        state.share_link.as_deref(),
        Some("https://food.example.com/share/abc")
    );
}

#[test]
fn clear_share_link_closes_surface() {
    let state = CartReducer::reduce(
        make_state(),
        CartIntent::ShareLinkReady {
            link: "x".to_string(),
        },
    );
    let state = CartReducer::reduce(state, CartIntent::ClearShareLink);
    assert!(!state.share_open());
}

#[test]
fn clear_share_link_when_closed_is_noop() {
    let before = make_state();
    let after = CartReducer::reduce(before.clone(), CartIntent::ClearShareLink);
    assert_eq!(after, before);
}

#[test]
fn quantity_change_does_not_touch_share_link() {
    let state = CartReducer::reduce(
        make_state(),
        CartIntent::ShareLinkReady {
            link: "x".to_string(),
        },
    );
    let state = CartReducer::reduce(
        state,
        CartIntent::ChangeQuantity {
            id: "1".to_string(),
            delta: 1,
        },
    );
    assert!(state.share_open());
}
