use std::fmt;

use super::Currency;
use crate::domain::{ExpenseType, User};

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: i32,
    pub name: String,
    pub amount: f64,
    pub details: Option<String>,
    pub currency: Currency,
    pub user_id: i32,
    pub expense_type_id: i32,
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Expense: name={}>", self.name)
    }
}

/// An expense with its owner and category resolved
#[derive(Debug, Clone)]
pub struct ExpenseWithLinks {
    pub expense: Expense,
    pub user: User,
    pub expense_type: ExpenseType,
}
