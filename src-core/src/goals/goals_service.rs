use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::Result;
use crate::goals::goals_model::{Goal, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};

pub struct GoalService<T: GoalRepositoryTrait> {
    goal_repo: Arc<T>,
}

impl<T: GoalRepositoryTrait> GoalService<T> {
    pub fn new(goal_repo: Arc<T>) -> Self {
        GoalService { goal_repo }
    }
}

#[async_trait]
impl<T: GoalRepositoryTrait> GoalServiceTrait for GoalService<T> {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals()
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        self.goal_repo.insert_new_goal(Goal::from_new(new_goal)).await
    }

    async fn delete_goal(&self, goal_id: String) -> Result<usize> {
        self.goal_repo.delete_goal(goal_id).await
    }
}
