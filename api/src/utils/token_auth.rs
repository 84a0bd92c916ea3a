use actix_web::http::header;
use actix_web::HttpRequest;
use jsonwebtoken::{decode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use common::constants::TOKEN_EXPIRE_TIME;
use common::env::{ServiceMode, CONF, TOKEN_SECRET_KEY};
use common::error_code::BackendError;
use common::error_code::BackendError::Authorization;
use common::utils::time::{now_millis, YEAR100};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Claims {
    user_id: u32,
    iat: u64,
    exp: u64,
}

impl Claims {
    pub fn new(user_id: u32, iat: u64, exp: u64) -> Self {
        Self { user_id, iat, exp }
    }
}

pub fn create_jwt(user_id: u32) -> Result<String, BackendError> {
    let iat = now_millis();

    let exp = if CONF.service_mode != ServiceMode::Product && CONF.service_mode != ServiceMode::Dev
    {
        iat + YEAR100
    } else {
        iat + TOKEN_EXPIRE_TIME
    };

    let claims = Claims::new(user_id, iat, exp);

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TOKEN_SECRET_KEY.as_bytes()),
    )
    .map_err(|e| BackendError::InternalError(e.to_string()))
}

fn validate_jwt(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(TOKEN_SECRET_KEY.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
}

pub fn validate_credentials(req: &HttpRequest) -> Result<u32, BackendError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(Authorization("No Authorization header".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_err| Authorization("Token is invalid".to_string()))?;
    if auth_str.starts_with("bearer ") || auth_str.starts_with("Bearer ") {
        let token = &auth_str["bearer ".len()..];
        let claim_dat = validate_jwt(token)
            .map_err(|_err| Authorization("Invalid token signature".to_string()))?;
        if now_millis() > claim_dat.exp {
            Err(Authorization("Token has expired.".to_string()))?
        } else {
            Ok(claim_dat.user_id)
        }
    } else {
        Err(Authorization("Token is invalid or malformed".to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_session_token_roundtrip() {
        let token = create_jwt(1).unwrap();
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, format!("bearer {}", token)))
            .to_http_request();
        assert_eq!(validate_credentials(&req).unwrap(), 1);
    }

    #[test]
    fn test_missing_or_malformed_header() {
        let req = TestRequest::default().to_http_request();
        assert!(validate_credentials(&req).is_err());

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "basic abc"))
            .to_http_request();
        assert!(validate_credentials(&req).is_err());

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "bearer not_a_jwt"))
            .to_http_request();
        assert!(validate_credentials(&req).is_err());
    }
}
