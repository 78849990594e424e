//! In-process store, used when no database is reachable and in tests

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::{FitnessStore, StoreError, StoreResult};
use crate::models::goal::{Goal, GoalStatus, NewGoal};
use crate::models::record::DailyRecord;

#[derive(Default)]
struct State {
    records: BTreeMap<NaiveDate, DailyRecord>,
    goals: BTreeMap<i64, Goal>,
    next_record_id: i64,
    next_goal_id: i64,
}

#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record_count(&self) -> usize {
        self.state.read().await.records.len()
    }
}

#[async_trait]
impl FitnessStore for InMemoryStore {
    async fn list_records(&self) -> StoreResult<Vec<DailyRecord>> {
        let state = self.state.read().await;
        Ok(state.records.values().rev().cloned().collect())
    }

    async fn get_record(&self, date: NaiveDate) -> StoreResult<Option<DailyRecord>> {
        Ok(self.state.read().await.records.get(&date).cloned())
    }

    async fn upsert_record(&self, record: &DailyRecord) -> StoreResult<i64> {
        let mut state = self.state.write().await;
        let id = match state.records.get(&record.date).and_then(|r| r.id) {
            Some(id) => id,
            None => {
                state.next_record_id += 1;
                state.next_record_id
            }
        };

        let mut stored = record.clone();
        stored.id = Some(id);
        state.records.insert(record.date, stored);
        Ok(id)
    }

    async fn list_goals(&self, status: Option<GoalStatus>) -> StoreResult<Vec<Goal>> {
        let state = self.state.read().await;
        Ok(state
            .goals
            .values()
            .filter(|g| status.map_or(true, |s| g.status == s))
            .cloned()
            .collect())
    }

    async fn get_goal(&self, id: i64) -> StoreResult<Goal> {
        self.state
            .read()
            .await
            .goals
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::goal_not_found(id))
    }

    async fn create_goal(&self, goal: &NewGoal) -> StoreResult<i64> {
        let mut state = self.state.write().await;
        state.next_goal_id += 1;
        let id = state.next_goal_id;
        state.goals.insert(id, goal.clone().into_goal(id));
        Ok(id)
    }

    async fn update_goal(&self, goal: &Goal) -> StoreResult<()> {
        let mut state = self.state.write().await;
        match state.goals.get_mut(&goal.id) {
            Some(stored) => {
                *stored = goal.clone();
                Ok(())
            }
            None => Err(StoreError::goal_not_found(goal.id)),
        }
    }

    async fn delete_goal(&self, id: i64) -> StoreResult<()> {
        let mut state = self.state.write().await;
        state
            .goals
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::goal_not_found(id))
    }
}
