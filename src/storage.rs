use crate::domain::{Expense, NewUser, User};
use crate::error::{AppError, Result};
use crate::seed::SeedData;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

/// Storage trait for the user and expense records
#[async_trait]
pub trait Storage: Send + Sync {
    // User operations
    async fn get_all_users(&self) -> Result<Vec<User>>;
    /// Users whose id is in `ids`, in user-sequence order
    async fn get_users_by_ids(&self, ids: &[i32]) -> Result<Vec<User>>;
    async fn create_user(&self, user: NewUser) -> Result<User>;

    // Expense operations
    async fn get_all_expenses(&self) -> Result<Vec<Expense>>;
    /// Expenses whose amount is strictly greater than `threshold`
    async fn get_expenses_above(&self, threshold: i32) -> Result<Vec<Expense>>;
}

struct Records {
    users: Vec<User>,
    expenses: Vec<Expense>,
    /// `None` once the id space is used up
    next_user_id: Option<i32>,
}

/// In-memory storage; the write lock serializes id assignment with the append
pub struct InMemoryStorage {
    records: RwLock<Records>,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::empty()
    }
}

impl InMemoryStorage {
    pub fn empty() -> Self {
        Self::from_parts(Vec::new(), Vec::new())
    }

    /// Storage pre-loaded with the built-in seed data
    pub fn seeded() -> Self {
        let seed = SeedData::builtin();
        Self::from_parts(seed.users, seed.expenses)
    }

    pub fn from_seed(seed: SeedData) -> Result<Self> {
        seed.validate()?;
        Ok(Self::from_parts(seed.users, seed.expenses))
    }

    fn from_parts(users: Vec<User>, expenses: Vec<Expense>) -> Self {
        let next_user_id = match users.iter().map(|u| u.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };

        Self {
            records: RwLock::new(Records {
                users,
                expenses,
                next_user_id,
            }),
        }
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn get_all_users(&self) -> Result<Vec<User>> {
        let records = self.records.read().await;
        Ok(records.users.clone())
    }

    async fn get_users_by_ids(&self, ids: &[i32]) -> Result<Vec<User>> {
        let records = self.records.read().await;
        let users = records
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect();
        Ok(users)
    }

    async fn create_user(&self, user: NewUser) -> Result<User> {
        let mut records = self.records.write().await;

        let id = records
            .next_user_id
            .ok_or(AppError::IdsExhausted("user"))?;
        records.next_user_id = id.checked_add(1);

        let user = User {
            id,
            name: user.name,
            age: user.age,
        };
        records.users.push(user.clone());

        debug!("Created user: {} with id {}", user.name, id);
        Ok(user)
    }

    async fn get_all_expenses(&self) -> Result<Vec<Expense>> {
        let records = self.records.read().await;
        Ok(records.expenses.clone())
    }

    async fn get_expenses_above(&self, threshold: i32) -> Result<Vec<Expense>> {
        let records = self.records.read().await;
        let expenses = records
            .expenses
            .iter()
            .filter(|e| e.expense > threshold)
            .cloned()
            .collect();
        Ok(expenses)
    }
}
