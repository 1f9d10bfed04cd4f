use crate::domain::CartItem;
use crate::store::mvi::Reducer;

use super::action::CartAction;
use super::state::CartState;

pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Action = CartAction;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            CartAction::AddToCart(product) => {
                match state.items.iter_mut().find(|i| i.product.id == product.id) {
                    Some(line) => line.quantity = line.quantity.saturating_add(1),
                    None => state.items.push(CartItem::new(product)),
                }
            }
            CartAction::RemoveFromCart { product_id } => {
                state.items.retain(|i| i.product.id != product_id);
            }
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => set_quantity(&mut state, &product_id, |_| quantity),
            CartAction::IncreaseQuantity { product_id } => {
                set_quantity(&mut state, &product_id, |q| q.saturating_add(1))
            }
            CartAction::DecreaseQuantity { product_id } => {
                set_quantity(&mut state, &product_id, |q| q.saturating_sub(1))
            }
            CartAction::ClearCart => state.items.clear(),
        }
        state
    }
}

fn set_quantity(state: &mut CartState, product_id: &str, f: impl Fn(u32) -> u32) {
    for line in state.items.iter_mut().filter(|i| i.product.id == product_id) {
        line.quantity = f(line.quantity);
    }
    state.items.retain(|i| i.quantity > 0);
}
