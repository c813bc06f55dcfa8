//! Task Repository

use super::{BaseRepository, RepoError, RepoResult};
use serde::{Deserialize, Serialize};
use shared::models::{
    Task, TaskBoard, TaskCategory, TaskContent, TaskCreate, TaskId, TaskOrder, TaskPosition,
};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

const TABLE: &str = "tasks";

/// Stored task document; the record key carries the id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TaskDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    order: Option<TaskOrder>,
}

impl TaskDocument {
    fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            order: self.order,
        }
    }
}

impl From<TaskCreate> for TaskDocument {
    fn from(data: TaskCreate) -> Self {
        Self {
            title: data.title,
            description: data.description,
            category: data.category,
            order: None,
        }
    }
}

#[derive(Clone)]
pub struct TaskRepository {
    base: BaseRepository,
}

impl TaskRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find every task, unfiltered
    pub async fn find_all(&self) -> RepoResult<Vec<Task>> {
        let tasks: Vec<Task> = self
            .base
            .db()
            .query("SELECT *, record::id(id) AS _id FROM tasks")
            .await?
            .take(0)?;
        Ok(tasks)
    }

    /// Find tasks whose category equals `category` exactly, ordered by `order`
    pub async fn find_by_category(&self, category: &str) -> RepoResult<Vec<Task>> {
        let tasks: Vec<Task> = self
            .base
            .db()
            .query(
                "SELECT *, record::id(id) AS _id FROM tasks WHERE category = $category ORDER BY `order` ASC",
            )
            .bind(("category", category.to_string()))
            .await?
            .take(0)?;
        Ok(tasks)
    }

    /// Board view: the three column reads run concurrently and are not a
    /// consistent snapshot. The first failing read fails the whole board.
    pub async fn find_board(&self) -> RepoResult<TaskBoard> {
        let (todo, in_progress, done) = tokio::try_join!(
            self.find_by_category(TaskCategory::Todo.as_str()),
            self.find_by_category(TaskCategory::InProgress.as_str()),
            self.find_by_category(TaskCategory::Done.as_str()),
        )?;
        Ok(TaskBoard {
            todo,
            in_progress,
            done,
        })
    }

    /// Find task by id
    pub async fn find_by_id(&self, id: &TaskId) -> RepoResult<Option<Task>> {
        let doc: Option<TaskDocument> = self.base.db().select((TABLE, id.to_string())).await?;
        Ok(doc.map(|d| d.into_task(id.clone())))
    }

    /// Insert a new task under a freshly generated id
    pub async fn create(&self, data: TaskCreate) -> RepoResult<Task> {
        let id = TaskId::generate();
        let created: Option<TaskDocument> = self
            .base
            .db()
            .create((TABLE, id.to_string()))
            .content(TaskDocument::from(data))
            .await?;
        created
            .map(|d| d.into_task(id))
            .ok_or_else(|| RepoError::Database("Failed to create task".to_string()))
    }

    /// Set `category` and `order`; returns the re-read task, `None` if absent
    pub async fn update_position(
        &self,
        id: &TaskId,
        position: TaskPosition,
    ) -> RepoResult<Option<Task>> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(None);
        }
        let _: Option<TaskDocument> = self
            .base
            .db()
            .update((TABLE, id.to_string()))
            .merge(position)
            .await?;
        self.find_by_id(id).await
    }

    /// Set `title` and `description`; returns `false` if the task is absent
    pub async fn update_content(&self, id: &TaskId, content: TaskContent) -> RepoResult<bool> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(false);
        }
        let updated: Option<TaskDocument> = self
            .base
            .db()
            .update((TABLE, id.to_string()))
            .merge(content)
            .await?;
        Ok(updated.is_some())
    }

    /// Hard delete; returns whether a document was removed
    pub async fn delete(&self, id: &TaskId) -> RepoResult<bool> {
        let deleted: Option<TaskDocument> = self.base.db().delete((TABLE, id.to_string())).await?;
        Ok(deleted.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn repo() -> TaskRepository {
        let db = DbService::in_memory().await.unwrap();
        TaskRepository::new(db.db().clone())
    }

    fn create(title: &str, category: &str) -> TaskCreate {
        TaskCreate {
            title: Some(title.to_string()),
            description: Some(format!("{title} description")),
            category: Some(category.to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_then_find_by_id() {
        let repo = repo().await;
        let task = repo.create(create("Write docs", "todo")).await.unwrap();

        assert_eq!(task.title.as_deref(), Some("Write docs"));
        assert_eq!(task.category.as_deref(), Some("todo"));
        assert!(task.order.is_none());

        let found = repo.find_by_id(&task.id).await.unwrap().unwrap();
        assert_eq!(found, task);
    }

    #[tokio::test]
    async fn test_create_with_no_fields() {
        let repo = repo().await;
        let task = repo.create(TaskCreate::default()).await.unwrap();
        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![task]);
    }

    #[tokio::test]
    async fn test_board_partitions_by_category() {
        let repo = repo().await;
        let a = repo.create(create("a", "todo")).await.unwrap();
        let b = repo.create(create("b", "inProgress")).await.unwrap();
        let c = repo.create(create("c", "done")).await.unwrap();
        let other = repo.create(create("d", "archived")).await.unwrap();

        let board = repo.find_board().await.unwrap();
        assert_eq!(board.todo, vec![a]);
        assert_eq!(board.in_progress, vec![b]);
        assert_eq!(board.done, vec![c]);
        assert_eq!(board.len(), 3);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 4);
        assert!(all.contains(&other));
    }

    #[tokio::test]
    async fn test_column_sorted_by_order() {
        let repo = repo().await;
        let first = repo.create(create("first", "todo")).await.unwrap();
        let second = repo.create(create("second", "todo")).await.unwrap();

        let between = repo.create(create("between", "todo")).await.unwrap();

        let position = |order: TaskOrder| TaskPosition {
            category: "todo".to_string(),
            order,
        };
        repo.update_position(&first.id, position(2.into())).await.unwrap();
        repo.update_position(&second.id, position(1.into())).await.unwrap();
        let half = TaskOrder::from_f64(1.5).unwrap();
        repo.update_position(&between.id, position(half)).await.unwrap();

        let column = repo.find_by_category("todo").await.unwrap();
        let titles: Vec<_> = column.iter().map(|t| t.title.as_deref().unwrap()).collect();
        assert_eq!(titles, ["second", "between", "first"]);
    }

    #[tokio::test]
    async fn test_update_position_keeps_content() {
        let repo = repo().await;
        let task = repo.create(create("move me", "todo")).await.unwrap();

        let moved = repo
            .update_position(
                &task.id,
                TaskPosition {
                    category: "done".to_string(),
                    order: 7.into(),
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(moved.category.as_deref(), Some("done"));
        assert_eq!(moved.order, Some(7.into()));
        assert_eq!(moved.title, task.title);
        assert_eq!(moved.description, task.description);
    }

    #[tokio::test]
    async fn test_update_content_keeps_position() {
        let repo = repo().await;
        let task = repo.create(create("old", "inProgress")).await.unwrap();

        let updated = repo
            .update_content(
                &task.id,
                TaskContent {
                    title: "new".to_string(),
                    description: "new description".to_string(),
                },
            )
            .await
            .unwrap();
        assert!(updated);

        let found = repo.find_by_id(&task.id).await.unwrap().unwrap();
        assert_eq!(found.title.as_deref(), Some("new"));
        assert_eq!(found.description.as_deref(), Some("new description"));
        assert_eq!(found.category.as_deref(), Some("inProgress"));
    }

    #[tokio::test]
    async fn test_updates_on_absent_task() {
        let repo = repo().await;
        let missing: TaskId = "507f1f77bcf86cd799439011".parse().unwrap();

        let moved = repo
            .update_position(
                &missing,
                TaskPosition {
                    category: "todo".to_string(),
                    order: 1.into(),
                },
            )
            .await
            .unwrap();
        assert!(moved.is_none());

        let updated = repo
            .update_content(
                &missing,
                TaskContent {
                    title: "t".to_string(),
                    description: "d".to_string(),
                },
            )
            .await
            .unwrap();
        assert!(!updated);

        // updates never create documents
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_once() {
        let repo = repo().await;
        let task = repo.create(create("bye", "done")).await.unwrap();

        assert!(repo.delete(&task.id).await.unwrap());
        assert!(!repo.delete(&task.id).await.unwrap());
        assert!(repo.find_by_id(&task.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unconnected_store_fails() {
        let repo = TaskRepository::new(DbService::new().db().clone());
        let err = repo.find_board().await.unwrap_err();
        assert!(matches!(err, RepoError::Database(_)));
    }
}
