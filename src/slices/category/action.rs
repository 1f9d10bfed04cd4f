use crate::domain::Category;
use crate::store::mvi::Action;
use crate::store::AsyncAction;

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryAction {
    /// All categories; the endpoint is not paginated.
    FetchAll(AsyncAction<(), Vec<Category>>),
    FetchOne(AsyncAction<String, Category>),
}

impl Action for CategoryAction {}

impl CategoryAction {
    pub fn type_name(&self) -> String {
        let (operation, phase) = match self {
            CategoryAction::FetchAll(a) => ("fetchAll", a.phase.name()),
            CategoryAction::FetchOne(a) => ("fetchOne", a.phase.name()),
        };
        format!("categories/{}/{}", operation, phase)
    }
}
