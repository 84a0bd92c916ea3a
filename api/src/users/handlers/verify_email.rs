use common::error_code::AccountManagerError::EmailVerifyTokenInvalid;
use common::error_code::BackendRes;
use models::account_manager::{UserFilter, UserInfoEntity, UserUpdater};
use models::PsqlOp;

use crate::users::{token, VerifyEmailRequest};

pub async fn req(request_data: VerifyEmailRequest) -> BackendRes<String> {
    let VerifyEmailRequest { token } = request_data;
    let (user_id, email) = token::check_verify_email_token(&token)?;

    let user = UserInfoEntity::find_single(UserFilter::ById(&user_id))
        .await
        .map_err(|_e| EmailVerifyTokenInvalid)?
        .into_inner();
    //签发后邮箱又被改绑的旧链接拒绝
    if user.email.as_deref() != Some(email.as_str()) {
        Err(EmailVerifyTokenInvalid)?;
    }

    UserInfoEntity::update_single(UserUpdater::EmailVerified(true), UserFilter::ById(&user_id))
        .await?;
    Ok(None::<String>)
}
