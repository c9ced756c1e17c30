pub mod currencies;
pub mod expense_types;
pub mod expenses;
pub mod health;
pub mod request_id;
pub mod roles;
pub mod users;
