use serde::{Deserialize, Serialize};
use tracing::info;

use common::error_code::{BackendRes, ExternalServiceError};
use models::oauth_qq::{OauthQQFilter, OauthQQUserEntity};
use models::PsqlOp;

use crate::oauth::{qq_client, token, QQCallbackRequest};
use crate::utils::token_auth;

#[derive(Serialize, Deserialize, Debug)]
pub struct QQCallbackResponse {
    //已绑定时返回登录态
    pub user_id: Option<u32>,
    pub token: Option<String>,
    //未绑定时返回用于绑定接口的凭证
    pub access_token: Option<String>,
}

pub async fn req(request_data: QQCallbackRequest) -> BackendRes<QQCallbackResponse> {
    let QQCallbackRequest { code } = request_data;

    let qq_token = qq_client::get_access_token(&code)
        .await
        .map_err(|e| ExternalServiceError::OAuth(e.to_string()))?;
    let openid = qq_client::get_openid(&qq_token)
        .await
        .map_err(|e| ExternalServiceError::OAuth(e.to_string()))?;

    let find_res = OauthQQUserEntity::find(OauthQQFilter::ByOpenid(&openid)).await?;
    match find_res.into_iter().next() {
        Some(link) => {
            let user_id = link.oauth_qq_user.user_id;
            let token = token_auth::create_jwt(user_id)?;
            info!("user {} login by qq openid", user_id);
            Ok(Some(QQCallbackResponse {
                user_id: Some(user_id),
                token: Some(token),
                access_token: None,
            }))
        }
        None => {
            let access_token = token::generate_openid_token(&openid)?;
            Ok(Some(QQCallbackResponse {
                user_id: None,
                token: None,
                access_token: Some(access_token),
            }))
        }
    }
}
