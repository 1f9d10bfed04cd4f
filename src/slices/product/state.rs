use crate::domain::Product;
use crate::store::mvi::SliceState;
use crate::store::AsyncFlags;

/// Cached catalogue data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductState {
    /// Current listing page.
    pub items: Vec<Product>,
    /// Total number of products matching the last listing, across pages.
    pub total: u64,
    /// Product opened in the detail view.
    pub item: Option<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SliceState for ProductState {}

impl AsyncFlags for ProductState {
    fn loading_mut(&mut self) -> &mut bool {
        &mut self.loading
    }

    fn error_mut(&mut self) -> &mut Option<String> {
        &mut self.error
    }
}

impl ProductState {
    /// First `count` products of the current listing.
    pub fn featured(&self, count: usize) -> &[Product] {
        &self.items[..count.min(self.items.len())]
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.items.iter().find(|p| p.id == id)
    }

    /// Number of pages of `page_size` needed to show `total` products.
    pub fn page_count(&self, page_size: u32) -> u64 {
        if page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(page_size))
    }
}
