use jsonwebtoken::{decode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use common::constants::ACCESS_TOKEN_EXPIRE_TIME;
use common::env::TOKEN_SECRET_KEY;
use common::error_code::AccountManagerError::{self, AccessTokenInvalid};
use common::error_code::BackendError;
use common::utils::time::now_millis;

/// 回调和绑定两个接口之间传递openid的短期凭证
#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct OpenidClaims {
    openid: String,
    iat: u64,
    exp: u64,
}

pub fn generate_openid_token(openid: &str) -> Result<String, BackendError> {
    let iat = now_millis();
    let claims = OpenidClaims {
        openid: openid.to_owned(),
        iat,
        exp: iat + ACCESS_TOKEN_EXPIRE_TIME,
    };
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TOKEN_SECRET_KEY.as_bytes()),
    )
    .map_err(|e| BackendError::InternalError(e.to_string()))
}

pub fn check_openid_token(token: &str) -> Result<String, AccountManagerError> {
    let claims = decode::<OpenidClaims>(
        token,
        &DecodingKey::from_secret(TOKEN_SECRET_KEY.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|_err| AccessTokenInvalid)?;
    if now_millis() > claims.exp {
        Err(AccessTokenInvalid)?
    }
    Ok(claims.openid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openid_token_roundtrip() {
        let token = generate_openid_token("Q123").unwrap();
        assert_eq!(check_openid_token(&token).unwrap(), "Q123");
    }

    #[test]
    fn test_openid_token_tampered() {
        let token = generate_openid_token("Q123").unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        assert_eq!(check_openid_token(&tampered), Err(AccessTokenInvalid));
        assert_eq!(check_openid_token("not_a_jwt"), Err(AccessTokenInvalid));
    }
}
