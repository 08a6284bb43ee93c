use serde::{Deserialize, Serialize};

/// Link row between an employee and a team.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmployeeAssignment {
    pub id: i32,
    pub employee_id: Option<i32>,
    pub team_id: Option<i32>,
}
