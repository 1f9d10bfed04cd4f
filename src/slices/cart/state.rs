use rust_decimal::Decimal;

use crate::domain::CartItem;
use crate::store::mvi::SliceState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

impl SliceState for CartState {}

impl CartState {
    /// Total units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of price × quantity over all lines.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.items
            .iter()
            .find(|i| i.product.id == product_id)
            .map_or(0, |i| i.quantity)
    }
}
