use crate::utils::error::CustomError;
use actix_web::{Error, HttpMessage, dev::ServiceRequest};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub id: String,
    pub exp: usize,
}

fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| "secret".to_string())
}

/// Bearer-auth middleware callback: decode the JWT and stash the claims in
/// the request extensions for downstream handlers.
pub async fn verify_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (Error, ServiceRequest)> {
    let token = credentials.token();

    match decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret().as_bytes()),
        &Validation::default(),
    ) {
        Ok(token_data) => {
            req.extensions_mut().insert(token_data.claims);
            Ok(req)
        }
        Err(_) => Err((actix_web::error::ErrorUnauthorized("Invalid token"), req)),
    }
}

/// Create a JWT for a user id, expiring in 24 hours.
pub fn create_token(user_id: &str) -> Result<String, CustomError> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::hours(24))
        .ok_or_else(|| CustomError::InternalServerError("Invalid expiry timestamp".to_string()))?
        .timestamp() as usize;

    let claims = Claims {
        id: user_id.to_owned(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret().as_bytes()),
    )
    .map_err(|_| CustomError::InternalServerError("Token generation failed".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_token_decodes_to_same_user_id() {
        let token = create_token("64f000000000000000000001").unwrap();

        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(jwt_secret().as_bytes()),
            &Validation::default(),
        )
        .unwrap();

        assert_eq!(data.claims.id, "64f000000000000000000001");
        assert!(data.claims.exp > chrono::Utc::now().timestamp() as usize);
    }
}
