//! PostgreSQL store for fitness records and goals

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio_postgres::{Client, NoTls, Row};

use super::{FitnessStore, StoreError, StoreResult};
use crate::models::goal::{Goal, GoalStatus, GoalType, NewGoal};
use crate::models::record::DailyRecord;

const RECORD_COLUMNS: &str = "id, date, steps, distance, calories, calories_consumed, water, sleep, active, weight, mood, notes";
const GOAL_COLUMNS: &str = "id, goal_type, target_value, current_value, deadline, status";

pub struct PostgresStore {
    client: Client,
}

impl PostgresStore {
    /// Connect and make sure the schema exists
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let (client, connection) = tokio_postgres::connect(database_url, NoTls)
            .await
            .map_err(|e| StoreError::Unavailable(format!("Failed to connect to PostgreSQL: {}", e)))?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!(error = %e, "PostgreSQL connection error");
            }
        });

        let store = Self { client };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> StoreResult<()> {
        self.client
            .batch_execute(
                "CREATE TABLE IF NOT EXISTS fitness_records (
                    id BIGSERIAL PRIMARY KEY,
                    date DATE UNIQUE NOT NULL,
                    steps BIGINT NOT NULL DEFAULT 0,
                    distance DOUBLE PRECISION NOT NULL DEFAULT 0,
                    calories BIGINT NOT NULL DEFAULT 0,
                    calories_consumed BIGINT NOT NULL DEFAULT 0,
                    water BIGINT NOT NULL DEFAULT 0,
                    sleep DOUBLE PRECISION NOT NULL DEFAULT 0,
                    active BIGINT NOT NULL DEFAULT 0,
                    weight DOUBLE PRECISION,
                    mood INTEGER NOT NULL DEFAULT 3,
                    notes TEXT,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
                );
                CREATE TABLE IF NOT EXISTS goals (
                    id BIGSERIAL PRIMARY KEY,
                    goal_type TEXT NOT NULL,
                    target_value DOUBLE PRECISION NOT NULL,
                    current_value DOUBLE PRECISION NOT NULL DEFAULT 0,
                    deadline DATE,
                    status TEXT NOT NULL DEFAULT 'active',
                    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
                );",
            )
            .await?;
        Ok(())
    }
}

fn record_from_row(row: &Row) -> DailyRecord {
    DailyRecord {
        id: Some(row.get(0)),
        date: row.get(1),
        steps: to_count(row.get(2)),
        distance: row.get(3),
        calories: to_count(row.get(4)),
        calories_consumed: to_count(row.get(5)),
        water: to_count(row.get(6)),
        sleep: row.get(7),
        active: to_count(row.get(8)),
        weight: row.get(9),
        mood: u8::try_from(row.get::<_, i32>(10)).unwrap_or(crate::models::record::DEFAULT_MOOD),
        notes: row.get(11),
    }
}

fn goal_from_row(row: &Row) -> StoreResult<Goal> {
    let goal_type: String = row.get(1);
    let status: String = row.get(5);
    Ok(Goal {
        id: row.get(0),
        goal_type: goal_type.parse::<GoalType>().map_err(StoreError::Corrupt)?,
        target_value: row.get(2),
        current_value: row.get(3),
        deadline: row.get(4),
        status: status.parse::<GoalStatus>().map_err(StoreError::Corrupt)?,
    })
}

fn to_count(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

#[async_trait]
impl FitnessStore for PostgresStore {
    async fn list_records(&self) -> StoreResult<Vec<DailyRecord>> {
        let query = format!(
            "SELECT {} FROM fitness_records ORDER BY date DESC",
            RECORD_COLUMNS
        );
        let rows = self.client.query(&query, &[]).await?;
        Ok(rows.iter().map(record_from_row).collect())
    }

    async fn get_record(&self, date: NaiveDate) -> StoreResult<Option<DailyRecord>> {
        let query = format!("SELECT {} FROM fitness_records WHERE date = $1", RECORD_COLUMNS);
        let row = self.client.query_opt(&query, &[&date]).await?;
        Ok(row.as_ref().map(record_from_row))
    }

    async fn upsert_record(&self, record: &DailyRecord) -> StoreResult<i64> {
        let row = self
            .client
            .query_one(
                "INSERT INTO fitness_records
                    (date, steps, distance, calories, calories_consumed, water, sleep, active, weight, mood, notes)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                 ON CONFLICT (date) DO UPDATE SET
                    steps = EXCLUDED.steps,
                    distance = EXCLUDED.distance,
                    calories = EXCLUDED.calories,
                    calories_consumed = EXCLUDED.calories_consumed,
                    water = EXCLUDED.water,
                    sleep = EXCLUDED.sleep,
                    active = EXCLUDED.active,
                    weight = EXCLUDED.weight,
                    mood = EXCLUDED.mood,
                    notes = EXCLUDED.notes
                 RETURNING id",
                &[
                    &record.date,
                    &i64::from(record.steps),
                    &record.distance,
                    &i64::from(record.calories),
                    &i64::from(record.calories_consumed),
                    &i64::from(record.water),
                    &record.sleep,
                    &i64::from(record.active),
                    &record.weight,
                    &i32::from(record.mood),
                    &record.notes,
                ],
            )
            .await?;
        Ok(row.get(0))
    }

    async fn list_goals(&self, status: Option<GoalStatus>) -> StoreResult<Vec<Goal>> {
        let rows = match status {
            Some(status) => {
                let query = format!(
                    "SELECT {} FROM goals WHERE status = $1 ORDER BY created_at, id",
                    GOAL_COLUMNS
                );
                self.client.query(&query, &[&status.as_str()]).await?
            }
            None => {
                let query = format!("SELECT {} FROM goals ORDER BY created_at, id", GOAL_COLUMNS);
                self.client.query(&query, &[]).await?
            }
        };
        rows.iter().map(goal_from_row).collect()
    }

    async fn get_goal(&self, id: i64) -> StoreResult<Goal> {
        let query = format!("SELECT {} FROM goals WHERE id = $1", GOAL_COLUMNS);
        match self.client.query_opt(&query, &[&id]).await? {
            Some(row) => goal_from_row(&row),
            None => Err(StoreError::goal_not_found(id)),
        }
    }

    async fn create_goal(&self, goal: &NewGoal) -> StoreResult<i64> {
        let row = self
            .client
            .query_one(
                "INSERT INTO goals (goal_type, target_value, current_value, deadline, status)
                 VALUES ($1, $2, $3, $4, $5)
                 RETURNING id",
                &[
                    &goal.goal_type.as_str(),
                    &goal.target_value,
                    &goal.current_value,
                    &goal.deadline,
                    &GoalStatus::Active.as_str(),
                ],
            )
            .await?;
        Ok(row.get(0))
    }

    async fn update_goal(&self, goal: &Goal) -> StoreResult<()> {
        let rows_affected = self
            .client
            .execute(
                "UPDATE goals
                 SET target_value = $1, current_value = $2, deadline = $3, status = $4, updated_at = now()
                 WHERE id = $5",
                &[
                    &goal.target_value,
                    &goal.current_value,
                    &goal.deadline,
                    &goal.status.as_str(),
                    &goal.id,
                ],
            )
            .await?;

        if rows_affected == 0 {
            return Err(StoreError::goal_not_found(goal.id));
        }
        Ok(())
    }

    async fn delete_goal(&self, id: i64) -> StoreResult<()> {
        let rows_affected = self
            .client
            .execute("DELETE FROM goals WHERE id = $1", &[&id])
            .await?;

        if rows_affected == 0 {
            return Err(StoreError::goal_not_found(id));
        }
        Ok(())
    }
}
