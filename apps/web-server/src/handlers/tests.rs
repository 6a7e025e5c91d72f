#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::dev::ServiceResponse;
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test, web};

    use quill_core::{BlogService, ListOrder};
    use quill_infra::json::JsonPostRepository;
    use quill_shared::PostForm;

    use crate::handlers::configure_routes;
    use crate::state::AppState;
    use crate::templates;

    fn state_in(dir: &tempfile::TempDir) -> AppState {
        let repo = JsonPostRepository::new(dir.path().join("blogs.json"));
        AppState {
            blog: BlogService::new(Arc::new(repo)),
            templates: Arc::new(templates::build().unwrap()),
            list_order: ListOrder::default(),
        }
    }

    macro_rules! test_app {
        ($dir:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(state_in($dir)))
                    .configure(configure_routes),
            )
            .await
        };
    }

    macro_rules! get {
        ($app:expr, $uri:expr) => {
            test::call_service(&$app, test::TestRequest::get().uri($uri).to_request()).await
        };
    }

    macro_rules! post_form {
        ($app:expr, $uri:expr, $title:expr, $content:expr) => {
            test::call_service(
                &$app,
                test::TestRequest::post()
                    .uri($uri)
                    .set_form(PostForm {
                        title: $title.to_owned(),
                        content: $content.to_owned(),
                    })
                    .to_request(),
            )
            .await
        };
    }

    fn location(resp: &ServiceResponse) -> &str {
        resp.headers()
            .get(header::LOCATION)
            .expect("redirect without Location header")
            .to_str()
            .unwrap()
    }

    async fn body_text(resp: ServiceResponse) -> String {
        String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn full_post_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(&dir);

        // Empty store renders an empty listing.
        let body = body_text(get!(app, "/")).await;
        assert!(body.contains("No posts yet"));

        // Create redirects to the listing.
        let resp = post_form!(app, "/new-post", "Hello", "World");
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/");

        // Listing shows exactly the new post, with id 1.
        let body = body_text(get!(app, "/")).await;
        assert!(body.contains("Hello"));
        assert!(body.contains("/blog/1"));

        // Edit redirects to the detail page.
        let resp = post_form!(app, "/blog/edit/1", "Hello2", "World2");
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/blog/1");

        // Detail shows the updated fields.
        let resp = get!(app, "/blog/1");
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(body.contains("Hello2"));
        assert!(body.contains("World2"));

        // Delete redirects to the listing, which is empty again.
        let resp = get!(app, "/blog/delete/1");
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/");
        let body = body_text(get!(app, "/")).await;
        assert!(!body.contains("Hello2"));
    }

    #[actix_web::test]
    async fn missing_post_redirects_to_listing() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(&dir);

        for uri in ["/blog/42", "/blog/edit/42"] {
            let resp = get!(app, uri);
            assert_eq!(resp.status(), StatusCode::FOUND, "GET {uri}");
            assert_eq!(location(&resp), "/");
        }

        let resp = post_form!(app, "/blog/edit/42", "x", "y");
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/");
    }

    #[actix_web::test]
    async fn deleting_a_missing_post_still_redirects() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(&dir);

        let resp = get!(app, "/blog/delete/42");
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/");
    }

    #[actix_web::test]
    async fn create_form_renders_and_missing_field_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(&dir);

        let resp = get!(app, "/new-post");
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(body.contains("name=\"title\""));
        assert!(body.contains("name=\"content\""));

        // A submission without `content` never reaches the service.
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/new-post")
                .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
                .set_payload("title=OnlyTitle")
                .to_request(),
        )
        .await;
        assert!(resp.status().is_client_error());

        let body = body_text(get!(app, "/")).await;
        assert!(!body.contains("OnlyTitle"));
    }

    #[actix_web::test]
    async fn non_integer_id_is_rejected_before_the_service() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(&dir);

        let resp = get!(app, "/blog/not-a-number");
        assert!(resp.status().is_client_error());
    }

    #[actix_web::test]
    async fn edit_form_is_prefilled() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(&dir);

        post_form!(app, "/new-post", "Draft", "Body text");

        let resp = get!(app, "/blog/edit/1");
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(body.contains("Draft"));
        assert!(body.contains("Body text"));
    }

    #[actix_web::test]
    async fn listing_is_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        // Seed the store directly so the two posts carry distinct stamps.
        std::fs::write(
            dir.path().join("blogs.json"),
            serde_json::json!([
                {"id": 1, "title": "older", "content": "a", "timestamp": "2024-01-01 10:00:00"},
                {"id": 2, "title": "newer", "content": "b", "timestamp": "2024-06-01 10:00:00"},
            ])
            .to_string(),
        )
        .unwrap();
        let app = test_app!(&dir);

        let body = body_text(get!(app, "/")).await;
        let newer = body.find("newer").expect("newer post missing");
        let older = body.find("older").expect("older post missing");
        assert!(newer < older);
    }

    #[actix_web::test]
    async fn health_reports_ok() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(&dir);

        let resp = get!(app, "/health");
        assert_eq!(resp.status(), StatusCode::OK);
        let payload: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(payload["status"], "ok");
        assert!(!payload["version"].as_str().unwrap().is_empty());
    }
}
