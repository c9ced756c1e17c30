#[derive(Debug, Clone, Default)]
pub struct GetUserDto {
    /// Matches username, email, first or last name
    pub search: Option<String>,
    pub role_id: Option<i32>,
    pub is_admin: Option<bool>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// username, email, last_name; anything else sorts newest first
    pub sort_by: Option<String>,
}
