use crate::domain::Category;
use crate::store::mvi::SliceState;
use crate::store::AsyncFlags;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryState {
    pub items: Vec<Category>,
    pub total: u64,
    pub item: Option<Category>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SliceState for CategoryState {}

impl AsyncFlags for CategoryState {
    fn loading_mut(&mut self) -> &mut bool {
        &mut self.loading
    }

    fn error_mut(&mut self) -> &mut Option<String> {
        &mut self.error
    }
}

impl CategoryState {
    pub fn find(&self, id: &str) -> Option<&Category> {
        self.items.iter().find(|c| c.id == id)
    }

    /// Case-insensitive lookup by display name.
    pub fn find_by_name(&self, name: &str) -> Option<&Category> {
        self.items
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}
