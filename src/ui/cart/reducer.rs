use crate::ui::cart::intent::CartIntent;
use crate::ui::cart::state::CartScreenState;
use crate::ui::mvi::Reducer;

pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartScreenState;
    type Intent = CartIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CartIntent::MoveUp => {
                let len = state.cart.len();
                if len == 0 {
                    return state;
                }
                let focused = if state.focused == 0 {
                    len - 1
                } else {
                    state.focused - 1
                };
                CartScreenState { focused, ..state }
            }
            CartIntent::MoveDown => {
                let len = state.cart.len();
                if len == 0 {
                    return state;
                }
                let focused = if state.focused + 1 >= len {
                    0
                } else {
                    state.focused + 1
                };
                CartScreenState { focused, ..state }
            }
            CartIntent::ChangeQuantity { id, delta } => CartScreenState {
                cart: state.cart.with_quantity(&id, delta),
                ..state
            },
            CartIntent::ShareLinkReady { link } => CartScreenState {
                share_link: Some(link),
                ..state
            },
            CartIntent::ClearShareLink => CartScreenState {
                share_link: None,
                ..state
            },
        }
    }
}
