use crate::database;
use crate::middleware::auth::create_token;
use crate::user::model::{LoginRequest, User};
use crate::utils::error::CustomError;
use crate::utils::hashing;
use chrono::Utc;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection};

pub struct UserService {
    collection: Collection<User>,
}

impl UserService {
    pub fn new(client: &Client) -> Self {
        let db = client.database(&database::database_name());
        let collection = db.collection::<User>("users");

        UserService { collection }
    }

    pub async fn create_user(
        &self,
        username: String,
        display_name: String,
        email: String,
        password: String,
    ) -> Result<ObjectId, CustomError> {
        if self.username_exists(&username).await? {
            return Err(CustomError::ConflictError(
                "Username already exists".to_string(),
            ));
        }

        if self.email_exists(&email).await? {
            return Err(CustomError::ConflictError(
                "Email already exists".to_string(),
            ));
        }

        if password.len() < 8 {
            return Err(CustomError::BadRequestError(
                "Password must be at least 8 characters long".to_string(),
            ));
        }

        let hashed_password = hashing::hash_password(&password)
            .map_err(|e| CustomError::InternalServerError(e.to_string()))?;

        let new_user = User {
            id: None,
            username,
            display_name,
            email,
            password: hashed_password,
            created_date: Utc::now(),
        };

        let result = self
            .collection
            .insert_one(new_user)
            .await
            .map_err(|e| CustomError::InternalServerError(e.to_string()))?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            CustomError::InternalServerError("Failed to get inserted ID".to_string())
        })
    }

    pub async fn login(&self, login_info: LoginRequest) -> Result<String, CustomError> {
        let user = self
            .collection
            .find_one(doc! { "username": &login_info.username })
            .await
            .map_err(|e| CustomError::InternalServerError(e.to_string()))?
            .ok_or_else(|| {
                CustomError::UnauthorizedError("Invalid username or password".to_string())
            })?;

        let valid = hashing::verify_password(&login_info.password, &user.password)
            .map_err(|e| CustomError::InternalServerError(e.to_string()))?;

        if !valid {
            return Err(CustomError::UnauthorizedError(
                "Invalid username or password".to_string(),
            ));
        }

        let user_id = user.id.ok_or_else(|| {
            CustomError::InternalServerError("Stored user is missing an ID".to_string())
        })?;

        create_token(&user_id.to_hex())
    }

    async fn username_exists(&self, username: &str) -> Result<bool, CustomError> {
        let existing = self
            .collection
            .find_one(doc! { "username": username })
            .await
            .map_err(|_| {
                CustomError::InternalServerError("Failed to check username existence".to_string())
            })?;
        Ok(existing.is_some())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, CustomError> {
        let existing = self
            .collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|_| {
                CustomError::InternalServerError("Failed to check email existence".to_string())
            })?;
        Ok(existing.is_some())
    }
}
