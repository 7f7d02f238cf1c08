use crate::user::model::{CreateUserRequest, LoginRequest};
use crate::user::service::UserService;
use crate::utils::error::CustomError;
use actix_web::{HttpResponse, web};

pub async fn register_user(
    user_service: web::Data<UserService>,
    user_info: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, CustomError> {
    let user_info = user_info.into_inner();

    let user_id = user_service
        .create_user(
            user_info.username,
            user_info.display_name,
            user_info.email,
            user_info.password,
        )
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "message": "User created successfully",
        "httpStatusCode": 201,
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        "user_id": user_id.to_hex(),
    })))
}

pub async fn login_user(
    user_service: web::Data<UserService>,
    login_info: web::Json<LoginRequest>,
) -> Result<HttpResponse, CustomError> {
    let token = user_service.login(login_info.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Login successful",
        "httpStatusCode": 200,
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        "token": token,
    })))
}
