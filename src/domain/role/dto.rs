use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct CreateRoleDto {
    #[validate(length(min = 1, max = 60, message = "must be 1-60 characters"))]
    pub name: String,
    #[validate(length(max = 200, message = "must be at most 200 characters"))]
    pub description: Option<String>,
}

impl CreateRoleDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

/// Partial update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateRoleDto {
    #[validate(length(min = 1, max = 60, message = "must be 1-60 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 200, message = "must be at most 200 characters"))]
    pub description: Option<String>,
}
