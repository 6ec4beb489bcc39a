pub mod category;
pub mod config;
pub mod input;
pub mod store;

pub use category::BudgetCategory;
pub use config::BudgetConfig;
pub use store::{BudgetSnapshot, BudgetStore};
