use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct CreateUserDto {
    #[validate(length(min = 1, max = 30, message = "must be 1-30 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 30, message = "must be 1-30 characters"))]
    pub last_name: String,
    #[validate(
        email(message = "must be a valid email address"),
        length(max = 60, message = "must be at most 60 characters")
    )]
    pub email: String,
    #[validate(length(min = 1, max = 30, message = "must be 1-30 characters"))]
    pub username: String,
    /// Plaintext; hashed before it reaches storage.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
    pub is_admin: bool,
    pub role_id: i32,
}
