use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i32,
    pub name: Option<String>,
    pub date_of_joining: Option<NaiveDate>,
    pub designation: Option<String>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
}
