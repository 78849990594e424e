//! Record and goal storage behind the [`FitnessStore`] contract.

pub mod error;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use postgres::PostgresStore;

use crate::goals::default_goals;
use crate::models::goal::{Goal, GoalStatus, NewGoal};
use crate::models::record::DailyRecord;

#[async_trait]
pub trait FitnessStore: Send + Sync {
    /// Every record, newest first
    async fn list_records(&self) -> StoreResult<Vec<DailyRecord>>;

    async fn get_record(&self, date: NaiveDate) -> StoreResult<Option<DailyRecord>>;

    /// Insert or replace the record for `record.date`, returning its id.
    /// Replacing keeps the existing id.
    async fn upsert_record(&self, record: &DailyRecord) -> StoreResult<i64>;

    /// Goals in creation order, optionally filtered by status
    async fn list_goals(&self, status: Option<GoalStatus>) -> StoreResult<Vec<Goal>>;

    async fn get_goal(&self, id: i64) -> StoreResult<Goal>;

    async fn create_goal(&self, goal: &NewGoal) -> StoreResult<i64>;

    async fn update_goal(&self, goal: &Goal) -> StoreResult<()>;

    async fn delete_goal(&self, id: i64) -> StoreResult<()>;
}

/// Insert the default goal set when the store holds no goals at all.
/// Returns the number of goals inserted.
pub async fn seed_default_goals(store: &dyn FitnessStore) -> StoreResult<usize> {
    if !store.list_goals(None).await?.is_empty() {
        return Ok(0);
    }

    let goals = default_goals();
    for goal in &goals {
        store.create_goal(goal).await?;
    }
    info!(count = goals.len(), "Seeded default goals");
    Ok(goals.len())
}
