use serde::{Deserialize, Serialize};

/// A person who can share expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub age: Option<i32>,
}

/// A cost split between several users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i32,
    pub name: String,
    /// Amount in whole currency units
    pub expense: i32,
    /// Ids of the users sharing this expense
    #[serde(default)]
    pub between: Vec<i32>,
    #[serde(default)]
    pub description: String,
}

/// Fields accepted when creating a user; the id is assigned by storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub age: Option<i32>,
}
