use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use common::error_code::AccountManagerError::*;
use common::error_code::{BackendError, BackendRes};
use common::hash::Hash;
use common::utils::math::random_num;

use models::account_manager::{UserFilter, UserInfoEntity};
use models::oauth_qq::{OauthQQFilter, OauthQQUserEntity};
use models::PsqlOp;

use crate::oauth::{token, QQLoginRequest};
use crate::utils::sms_code::{self, SmsCode};
use crate::utils::token_auth;

//手机号已注册则校验密码后绑定,否则注册新账户再绑定
enum ResolvedUser {
    Existing(UserInfoEntity),
    New(UserInfoEntity),
}

#[derive(Serialize, Deserialize, Debug)]
pub struct QQLoginResponse {
    pub id: u32,
    pub mobile: String,
    pub token: String,
}

const MAX_RETRY_TIMES: u8 = 10;
//生成十位随机数作为user_id
async fn gen_user_id() -> Result<u32, BackendError> {
    for _ in 0..MAX_RETRY_TIMES {
        let num = (random_num() % 1_000_000_000 + 1_000_000_000) as u32;
        if UserInfoEntity::find(UserFilter::ById(&num)).await?.is_empty() {
            return Ok(num);
        } else {
            warn!("user_id {} already exist", num);
            continue;
        }
    }
    Err(BackendError::InternalError("".to_string()))
}

pub async fn req(request_data: QQLoginRequest) -> BackendRes<QQLoginResponse> {
    let QQLoginRequest {
        access_token,
        mobile,
        password,
        sms_code,
    } = request_data;

    sms_code::validate_mobile(&mobile)?;
    if password.len() < 8 || password.len() > 20 {
        Err(BackendError::RequestParamInvalid(
            "password must be 8 to 20 chars".to_string(),
        ))?;
    }

    //凭证换回openid
    let openid = token::check_openid_token(&access_token)?;

    //短信验证码只比对不消费
    SmsCode::check(&mobile, &sms_code)?;

    //check userinfo from db
    let find_res = UserInfoEntity::find(UserFilter::ByMobile(&mobile)).await?;
    let resolved = match find_res.into_iter().next() {
        Some(user) => {
            if password.hash() != user.user_info.login_pwd_hash {
                Err(PasswordIncorrect)?;
            }
            ResolvedUser::Existing(user)
        }
        None => {
            let this_user_id = gen_user_id().await?;
            ResolvedUser::New(UserInfoEntity::new_with_specified(
                this_user_id,
                &mobile,
                &password.hash(),
            ))
        }
    };

    //openid重复绑定在写入前拦截,表上的唯一索引兜底并发
    let bind_res = OauthQQUserEntity::find(OauthQQFilter::ByOpenid(&openid)).await?;
    if !bind_res.is_empty() {
        Err(OpenidAlreadyRegister)?;
    }

    let user = match resolved {
        ResolvedUser::Existing(entity) => entity.into_inner(),
        ResolvedUser::New(entity) => {
            entity.insert().await?;
            entity.into_inner()
        }
    };

    OauthQQUserEntity::new_with_specified(&openid, user.id)
        .insert()
        .await?;

    let token = token_auth::create_jwt(user.id)?;
    info!("user {} bind qq openid successfully", user.mobile);
    Ok(Some(QQLoginResponse {
        id: user.id,
        mobile: user.mobile,
        token,
    }))
}
