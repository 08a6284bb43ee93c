use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
}
