use crate::post::post_model::CreatePostRequest;
use crate::post::post_service::PostService;
use crate::utils::error::CustomError;
use actix_web::{HttpResponse, web};
use log::debug;

pub async fn get_post(
    post_id: web::Path<String>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let post = post_service.get_post(&post_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Post fetched successfully",
        "httpStatusCode": 200,
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        "post": post,
    })))
}

pub async fn list_posts() -> Result<HttpResponse, CustomError> {
    Err(CustomError::NotImplementedError(
        "GET for multiple posts not implemented yet".to_string(),
    ))
}

pub async fn create_post(
    post_service: web::Data<PostService>,
    body: web::Bytes,
) -> Result<HttpResponse, CustomError> {
    debug!("validating request body");

    let payload: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|_| CustomError::ValidationError("missing json body".to_string()))?;
    let request = CreatePostRequest::from_payload(&payload)?;

    let post = post_service.create_post(request).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "message": "Post created successfully",
        "httpStatusCode": 201,
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        "post": post,
    })))
}

pub async fn edit_post(_post_id: web::Path<String>) -> Result<HttpResponse, CustomError> {
    Err(CustomError::NotImplementedError(
        "post editing not implemented yet".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use mongodb::{Client, options::ClientOptions};
    use serde_json::json;

    // Collection handles are lazy, so a service over an unconnected client
    // works for paths that fail before reaching the database.
    async fn offline_post_service() -> web::Data<PostService> {
        let options = ClientOptions::parse("mongodb://localhost:27017").await.unwrap();
        let client = Client::with_options(options).unwrap();
        web::Data::new(PostService::new(&client))
    }

    #[actix_web::test]
    async fn listing_posts_is_not_implemented() {
        let app = test::init_service(
            App::new().route("/post/", web::get().to(list_posts)),
        )
        .await;

        let req = test::TestRequest::get().uri("/post/").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_IMPLEMENTED);
    }

    #[actix_web::test]
    async fn editing_a_post_is_not_implemented() {
        let app = test::init_service(
            App::new().route("/post/{id}", web::put().to(edit_post)),
        )
        .await;

        let req = test::TestRequest::put().uri("/post/123").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_IMPLEMENTED);
    }

    #[actix_web::test]
    async fn creating_a_post_without_body_field_fails_validation() {
        let app = test::init_service(
            App::new()
                .app_data(offline_post_service().await)
                .route("/post/", web::post().to(create_post)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/post/")
            .set_json(json!({
                "title": "No body here",
                "collaborators": [],
                "explicit_tags": [],
            }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(body["message"].as_str().unwrap().contains("\"body\" required"));
    }

    #[actix_web::test]
    async fn creating_a_post_without_json_body_fails_validation() {
        let app = test::init_service(
            App::new()
                .app_data(offline_post_service().await)
                .route("/post/", web::post().to(create_post)),
        )
        .await;

        let req = test::TestRequest::post().uri("/post/").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert!(body["message"].as_str().unwrap().contains("missing json body"));
    }
}
