use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct CreateExpenseTypeDto {
    #[validate(length(min = 1, max = 20, message = "must be 1-20 characters"))]
    pub type_name: String,
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub description: Option<String>,
}

impl CreateExpenseTypeDto {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateExpenseTypeDto {
    #[validate(length(min = 1, max = 20, message = "must be 1-20 characters"))]
    pub type_name: Option<String>,
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub description: Option<String>,
}
