use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::DbPool;
use crate::errors::{Error, Result};
use crate::goals::goals_model::Goal;
use crate::goals::goals_traits::GoalRepositoryTrait;
use crate::schema::goals;

pub struct SqliteGoalRepository {
    pool: Arc<DbPool>,
}

impl SqliteGoalRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SqliteGoalRepository { pool }
    }
}

#[async_trait]
impl GoalRepositoryTrait for SqliteGoalRepository {
    fn load_goals(&self) -> Result<Vec<Goal>> {
        let mut conn = self.pool.get()?;
        Ok(goals::table
            .order(goals::created_at.asc())
            .load::<Goal>(&mut conn)?)
    }

    async fn insert_new_goal(&self, goal: Goal) -> Result<Goal> {
        let mut conn = self.pool.get()?;
        Ok(diesel::insert_into(goals::table)
            .values(&goal)
            .get_result::<Goal>(&mut conn)?)
    }

    async fn delete_goal(&self, goal_id: String) -> Result<usize> {
        let mut conn = self.pool.get()?;
        let deleted = diesel::delete(goals::table.find(&goal_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Goal '{}'", goal_id)));
        }
        Ok(deleted)
    }
}
