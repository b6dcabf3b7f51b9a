use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,        // ⇔ users.email (TEXT UNIQUE)
    pub display_name: String, // ⇔ users.display_name
}
