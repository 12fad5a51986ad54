//! HTTP handlers and route configuration.

mod authors;
mod health;
mod posts;

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::web;

use crate::middleware::error::extractor_error;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(extractor_error::<JsonPayloadError>))
        .app_data(web::PathConfig::default().error_handler(extractor_error::<PathError>))
        .app_data(web::QueryConfig::default().error_handler(extractor_error::<QueryPayloadError>))
        // Liveness
        .route("/", web::get().to(health::home))
        .route("/contacts", web::get().to(health::contacts))
        .route("/health", web::get().to(health::health_check))
        // Posts
        .route("/items", web::get().to(posts::list_posts))
        .route("/items/add", web::post().to(posts::create_post))
        .route("/items/{post_id}", web::get().to(posts::get_post))
        .route("/items/{post_id}/edit", web::put().to(posts::edit_post))
        .route("/items/{post_id}/delete", web::delete().to(posts::delete_post))
        .route("/search", web::get().to(posts::search))
        // Authors
        .route("/authors", web::get().to(authors::list_authors))
        .route("/user/add", web::post().to(authors::create_author));
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test, web};
    use blog_infra::InMemoryBlogStore;
    use serde_json::{Value, json};

    use super::configure_routes;
    use crate::state::AppState;

    macro_rules! seeded_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::from_store(Arc::new(
                        InMemoryBlogStore::seeded(),
                    ))))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_home_and_contacts() {
        let app = seeded_app!();

        let body: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request())
                .await;
        assert_eq!(body, json!({"data": "message"}));

        let body: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/contacts").to_request(),
        )
        .await;
        assert_eq!(body, json!(256));
    }

    #[actix_web::test]
    async fn test_health() {
        let app = seeded_app!();
        let body: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/health").to_request(),
        )
        .await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn test_list_items() {
        let app = seeded_app!();
        let body: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/items").to_request())
                .await;

        let posts = body.as_array().unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(
            posts[0],
            json!({
                "id": 1,
                "title": "News 1",
                "body": "Text 1",
                "author": {"id": 2, "name": "Alex", "age": 12}
            })
        );
    }

    #[actix_web::test]
    async fn test_get_item() {
        let app = seeded_app!();

        let body: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/items/2").to_request(),
        )
        .await;
        assert_eq!(body["id"], 2);
        assert_eq!(body["author"]["name"], "John");

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/items/99").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Post not found");
    }

    #[actix_web::test]
    async fn test_get_item_rejects_non_integer_id() {
        let app = seeded_app!();
        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/items/abc").to_request())
                .await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_search() {
        let app = seeded_app!();

        let body: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/search?post_id=3").to_request(),
        )
        .await;
        assert_eq!(body["title"], "News 3");

        for uri in ["/search", "/search?post_id=0"] {
            let body: Value =
                test::call_and_read_body_json(&app, test::TestRequest::get().uri(uri).to_request())
                    .await;
            assert_eq!(body, json!({"data": "No post id provided"}));
        }

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/search?post_id=42").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_add_item() {
        let app = seeded_app!();

        let req = test::TestRequest::post()
            .uri("/items/add")
            .set_json(json!({"title": "News 4", "body": "Text 4", "author_id": 1}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "id": 4,
                "title": "News 4",
                "body": "Text 4",
                "author": {"id": 1, "name": "John", "age": 34}
            })
        );

        let body: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/items").to_request())
                .await;
        assert_eq!(body.as_array().unwrap().len(), 4);
    }

    #[actix_web::test]
    async fn test_add_item_unknown_author() {
        let app = seeded_app!();

        let req = test::TestRequest::post()
            .uri("/items/add")
            .set_json(json!({"title": "t", "body": "b", "author_id": 17}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "User not found");
    }

    #[actix_web::test]
    async fn test_add_item_malformed_body() {
        let app = seeded_app!();

        let req = test::TestRequest::post()
            .uri("/items/add")
            .set_json(json!({"title": "t"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_edit_item() {
        let app = seeded_app!();

        let req = test::TestRequest::put()
            .uri("/items/2/edit")
            .set_json(json!({"title": null, "body": null, "author_id": 3}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body,
            json!({
                "id": 2,
                "title": "News 2",
                "body": "Text 2",
                "author": {"id": 3, "name": "Bob", "age": 45}
            })
        );

        let req = test::TestRequest::put()
            .uri("/items/2/edit")
            .set_json(json!({"title": "Renamed"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["title"], "Renamed");
        assert_eq!(body["author"]["id"], 3);
    }

    #[actix_web::test]
    async fn test_edit_item_errors() {
        let app = seeded_app!();

        let req = test::TestRequest::put()
            .uri("/items/1/edit")
            .set_json(json!({"title": null, "body": null, "author_id": null}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "No changes");

        let req = test::TestRequest::put()
            .uri("/items/1/edit")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::put()
            .uri("/items/99/edit")
            .set_json(json!({"body": "x"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Post not found");

        let req = test::TestRequest::put()
            .uri("/items/1/edit")
            .set_json(json!({"author_id": 99}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "User not found");
    }

    #[actix_web::test]
    async fn test_delete_item() {
        let app = seeded_app!();

        let req = test::TestRequest::delete()
            .uri("/items/1/delete")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"post_id": 1, "detail": "deleted"}));

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/items/1").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete()
            .uri("/items/1/delete")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_add_user() {
        let app = seeded_app!();

        let req = test::TestRequest::post()
            .uri("/user/add")
            .set_json(json!({"name": "Kate", "age": 29}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"id": 4, "name": "Kate", "age": 29}));

        let body: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/authors").to_request(),
        )
        .await;
        assert_eq!(body.as_array().unwrap().len(), 4);

        // The new author can be referenced right away
        let req = test::TestRequest::post()
            .uri("/items/add")
            .set_json(json!({"title": "t", "body": "b", "author_id": 4}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["author"]["name"], "Kate");
    }

    #[actix_web::test]
    async fn test_add_user_validation() {
        let app = seeded_app!();

        let req = test::TestRequest::post()
            .uri("/user/add")
            .set_json(json!({"name": "K", "age": 130}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.contains("name"));
        assert!(detail.contains("age"));
    }
}
