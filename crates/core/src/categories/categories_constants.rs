use super::categories_model::NewCategory;
use crate::transactions::TransactionType;

/// Default category set seeded for newly onboarded users.
pub const DEFAULT_CATEGORIES: [(&str, TransactionType); 6] = [
    ("Продаж товарів", TransactionType::Income),
    ("Послуги (IT/Маркетинг)", TransactionType::Income),
    ("Оренда", TransactionType::Expense),
    ("Податки", TransactionType::Expense),
    ("Банківські послуги", TransactionType::Expense),
    ("Зарплата", TransactionType::Expense),
];

/// Builds the default category payloads for `user_id`.
pub fn seed_categories(user_id: &str) -> Vec<NewCategory> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(name, category_type)| NewCategory {
            name: (*name).to_string(),
            category_type: *category_type,
            user_id: user_id.to_string(),
        })
        .collect()
}
