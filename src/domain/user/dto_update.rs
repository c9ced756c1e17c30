use validator::Validate;

/// Profile update; `None` leaves a field untouched. The password has its
/// own write path.
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 30, message = "must be 1-30 characters"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 30, message = "must be 1-30 characters"))]
    pub last_name: Option<String>,
    #[validate(
        email(message = "must be a valid email address"),
        length(max = 60, message = "must be at most 60 characters")
    )]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 30, message = "must be 1-30 characters"))]
    pub username: Option<String>,
    pub is_admin: Option<bool>,
    pub role_id: Option<i32>,
}
