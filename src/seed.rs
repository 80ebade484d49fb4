//! Initial contents of the record store.
//!
//! Without a configured seed file the built-in data set is used; a seed file is
//! JSON of the form `{ "users": [...], "expenses": [...] }`.

use crate::domain::{Expense, User};
use crate::error::{AppError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl SeedData {
    /// The data set the service ships with
    pub fn builtin() -> Self {
        let user = |id: i32, name: &str, age: i32| User {
            id,
            name: name.to_string(),
            age: Some(age),
        };
        let expense = |id: i32, name: &str, between: &[i32], amount: i32, description: &str| Expense {
            id,
            name: name.to_string(),
            expense: amount,
            between: between.to_vec(),
            description: description.to_string(),
        };

        Self {
            users: vec![
                user(1, "Sanjeet Tiwari", 26),
                user(2, "Debaditya Dey", 27),
                user(3, "Aliasghar Vali", 27),
                user(4, "Shubham Singh", 29),
            ],
            expenses: vec![
                expense(1, "Rent", &[1, 4], 28000, "Bellandur flat rent"),
                expense(2, "Maid", &[2, 3], 2500, "Maid at Sarjapur"),
                expense(3, "Party", &[1, 2, 3], 4000, "Party at Deba's house"),
            ],
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let seed: SeedData = serde_json::from_str(content)?;
        seed.validate()?;
        Ok(seed)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let seed = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            users = seed.users.len(),
            expenses = seed.expenses.len(),
            "Loaded seed file"
        );
        Ok(seed)
    }

    /// Loads `path` when given, otherwise falls back to [`SeedData::builtin`]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Rejects duplicate ids within either collection
    pub fn validate(&self) -> Result<()> {
        ensure_unique("user", self.users.iter().map(|u| u.id))?;
        ensure_unique("expense", self.expenses.iter().map(|e| e.id))
    }
}

fn ensure_unique(entity: &'static str, ids: impl Iterator<Item = i32>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(AppError::DuplicateId { entity, id });
        }
    }
    Ok(())
}
