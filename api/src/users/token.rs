use jsonwebtoken::{decode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use common::constants::EMAIL_VERIFY_EXPIRE_TIME;
use common::env::{CONF, TOKEN_SECRET_KEY};
use common::error_code::AccountManagerError::{self, EmailVerifyTokenInvalid};
use common::error_code::BackendError;
use common::utils::time::now_millis;

/// 验证链接里绑死user和email,改绑后旧链接自动失效
#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct EmailVerifyClaims {
    user_id: u32,
    email: String,
    iat: u64,
    exp: u64,
}

pub fn generate_verify_email_url(user_id: u32, email: &str) -> Result<String, BackendError> {
    let iat = now_millis();
    let claims = EmailVerifyClaims {
        user_id,
        email: email.to_owned(),
        iat,
        exp: iat + EMAIL_VERIFY_EXPIRE_TIME,
    };
    let token = jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TOKEN_SECRET_KEY.as_bytes()),
    )
    .map_err(|e| BackendError::InternalError(e.to_string()))?;
    Ok(format!("{}?token={}", CONF.email_verify_base_uri, token))
}

pub fn check_verify_email_token(token: &str) -> Result<(u32, String), AccountManagerError> {
    let claims = decode::<EmailVerifyClaims>(
        token,
        &DecodingKey::from_secret(TOKEN_SECRET_KEY.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|_err| EmailVerifyTokenInvalid)?;
    if now_millis() > claims.exp {
        Err(EmailVerifyTokenInvalid)?
    }
    Ok((claims.user_id, claims.email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_url_roundtrip() {
        let url = generate_verify_email_url(7, "a@b.com").unwrap();
        assert!(url.starts_with(&CONF.email_verify_base_uri));

        let token = url.split("token=").nth(1).unwrap();
        let (user_id, email) = check_verify_email_token(token).unwrap();
        assert_eq!(user_id, 7);
        assert_eq!(email, "a@b.com");
    }

    #[test]
    fn test_verify_token_tampered() {
        assert_eq!(
            check_verify_email_token("not_a_jwt"),
            Err(EmailVerifyTokenInvalid)
        );
    }
}
