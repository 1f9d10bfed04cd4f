use crate::domain::Product;
use crate::store::mvi::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add one unit; appends a new line if the product is not in the cart.
    AddToCart(Product),
    RemoveFromCart { product_id: String },
    /// Set a line's quantity. Zero removes the line.
    UpdateQuantity { product_id: String, quantity: u32 },
    IncreaseQuantity { product_id: String },
    /// Drop one unit, removing the line when it reaches zero.
    DecreaseQuantity { product_id: String },
    ClearCart,
}

impl Action for CartAction {}

impl CartAction {
    pub fn type_name(&self) -> &'static str {
        match self {
            CartAction::AddToCart(_) => "cart/addToCart",
            CartAction::RemoveFromCart { .. } => "cart/removeFromCart",
            CartAction::UpdateQuantity { .. } => "cart/updateQuantity",
            CartAction::IncreaseQuantity { .. } => "cart/increaseQuantity",
            CartAction::DecreaseQuantity { .. } => "cart/decreaseQuantity",
            CartAction::ClearCart => "cart/clearCart",
        }
    }
}
