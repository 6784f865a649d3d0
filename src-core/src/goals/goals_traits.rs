use async_trait::async_trait;

use crate::errors::Result;
use crate::goals::goals_model::{Goal, NewGoal};

#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<Goal>>;
    async fn insert_new_goal(&self, goal: Goal) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: String) -> Result<usize>;
}

#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<Goal>>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: String) -> Result<usize>;
}
