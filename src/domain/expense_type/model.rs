use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseType {
    pub id: i32,
    /// The category label, stored in the `type` column
    pub type_name: String,
    pub description: Option<String>,
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<ExpenseType: type={}>", self.type_name)
    }
}
