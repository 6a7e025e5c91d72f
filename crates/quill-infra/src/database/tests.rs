#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use crate::database::entity::post;
    use crate::database::sqlite_repo::SqlitePostRepository;
    use quill_core::domain::BlogPost;
    use quill_core::ports::PostRepository;

    fn model(id: i64, title: &str) -> post::Model {
        post::Model {
            id,
            title: title.to_owned(),
            content: "Content".to_owned(),
            timestamp: "2024-06-01 12:00:00".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results(vec![vec![model(7, "Test Post")]])
            .into_connection();

        let repo = SqlitePostRepository::new(db);

        let result: Option<BlogPost> = repo.find_by_id(7).await.unwrap();

        assert!(result.is_some());
        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, 7);
    }

    #[tokio::test]
    async fn test_find_missing_post_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = SqlitePostRepository::new(db);

        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_maps_every_row() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results(vec![vec![model(1, "first"), model(2, "second")]])
            .into_connection();

        let repo = SqlitePostRepository::new(db);

        let posts = repo.list_all().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "first");
        assert_eq!(posts[1].title, "second");
    }

    #[tokio::test]
    async fn test_update_missing_post_writes_nothing() {
        // Only the lookup query is mocked; an unexpected UPDATE would fail
        // the mock.
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = SqlitePostRepository::new(db);

        let result = repo.update(99, "x".into(), "y".into()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_post_is_ok() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = SqlitePostRepository::new(db);

        repo.delete(99).await.unwrap();
    }
}
