use actix_web::HttpRequest;
use serde::{Deserialize, Serialize};
use tracing::error;

use common::error_code::{BackendError, BackendRes};
use models::account_manager::{UserFilter, UserInfoEntity, UserUpdater};
use models::PsqlOp;

use crate::users::{token, BindEmailRequest};
use crate::utils::email::send_verify_email;
use crate::utils::token_auth;

#[derive(Serialize, Deserialize, Debug)]
pub struct BindEmailResponse {
    pub id: u32,
    pub email: String,
}

pub async fn req(req: HttpRequest, request_data: BindEmailRequest) -> BackendRes<BindEmailResponse> {
    let user_id = token_auth::validate_credentials(&req)?;
    let BindEmailRequest { email } = request_data;

    if !email.contains('@') {
        Err(BackendError::RequestParamInvalid(email.clone()))?;
    }

    //覆盖旧值,验证状态一并重置
    UserInfoEntity::update_single(UserUpdater::Email(&email), UserFilter::ById(&user_id)).await?;

    let verify_url = token::generate_verify_email_url(user_id, &email)?;

    //邮件投递不阻塞请求,失败只记日志,由用户重新发起绑定
    let notify_email = email.clone();
    tokio::spawn(async move {
        let send_res = send_verify_email(&notify_email, &verify_url);
        if let Err(e) = send_res {
            error!("send verify email to {} failed {}", notify_email, e.to_string());
        }
    });

    Ok(Some(BindEmailResponse { id: user_id, email }))
}
