//! Categories module - domain models, seeded defaults, and the API trait.

mod categories_constants;
mod categories_model;
mod categories_traits;

pub use categories_constants::{seed_categories, DEFAULT_CATEGORIES};
pub use categories_model::{Category, CategoryGroups, NewCategory};
pub use categories_traits::CategoriesApi;
