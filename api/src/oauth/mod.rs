//! qq oauth login http service
pub mod handlers;
pub mod qq_client;
pub mod token;

use actix_web::{get, post, web, Responder};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::respond::gen_extra_respond;

/**
 * @api {post} /qq/authorization 拼接qq登录跳转链接
 * @apiVersion 0.0.1
 * @apiName QQAuthorization
 * @apiGroup Oauth
 * @apiBody {String} [next] 登录完成后前端回跳的页面
 * @apiExample {curl} Example usage:
 *   curl -X POST http://127.0.0.1:8066/qq/authorization -H "Content-Type: application/json" -d
 *  '{"next": "/cart"}'
 * @apiSuccess {string=0,1,2} status_code         status code.
 * @apiSuccess {string=Successfully,InternalError,RequestParamInvalid} msg
 * @apiSuccess {object} data                login_url.
 * @apiSampleRequest http://127.0.0.1:8066/qq/authorization
 */
#[derive(Deserialize, Serialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QQAuthUrlRequest {
    next: Option<String>,
}
#[tracing::instrument(skip_all,fields(trace_id = common::log::generate_trace_id()))]
#[post("/qq/authorization")]
async fn qq_authorization(request_data: web::Json<QQAuthUrlRequest>) -> impl Responder {
    debug!("{}", serde_json::to_string(&request_data.0).unwrap());
    gen_extra_respond(handlers::auth_url::req(request_data.into_inner()))
}

/**
 * @api {get} /qq/user qq授权回调,code换openid
 * @apiVersion 0.0.1
 * @apiName QQCallback
 * @apiGroup Oauth
 * @apiQuery {String} code qq互联重定向带回的授权码
 * @apiExample {curl} Example usage:
 * curl -X GET "http://127.0.0.1:8066/qq/user?code=9A5F0E1234"
 * @apiSuccess {string=0,1,3003} status_code         status code.
 * @apiSuccess {string=Successfully,InternalError,OAuthServiceError} msg
 * @apiSuccess {object} data    已绑定返回user_id+token,未绑定返回access_token.
 * @apiSampleRequest http://127.0.0.1:8066/qq/user
 */
#[derive(Deserialize, Serialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QQCallbackRequest {
    code: String,
}
#[tracing::instrument(skip_all,fields(trace_id = common::log::generate_trace_id()))]
#[get("/qq/user")]
async fn qq_callback(request_data: web::Query<QQCallbackRequest>) -> impl Responder {
    debug!("{}", serde_json::to_string(&request_data.0).unwrap());
    gen_extra_respond(handlers::callback::req(request_data.into_inner()).await)
}

/**
 * @api {post} /qq/user 绑定qq并登录,手机号未注册时顺带注册
 * @apiVersion 0.0.1
 * @apiName QQUserLogin
 * @apiGroup Oauth
 * @apiBody {String} accessToken 回调接口下发的绑定凭证
 * @apiBody {String} mobile     手机号 13800000000
 * @apiBody {String} password   密码,8到20位
 * @apiBody {String} smsCode    短信验证码,测试环境固定000000
 * @apiExample {curl} Example usage:
 *    curl -X POST http://127.0.0.1:8066/qq/user -H "Content-Type: application/json" -d
 *  '{"accessToken": "xxx","mobile": "13800000000","password":"123456789","smsCode":"000000"}'
 * @apiSuccess {string=0,1,2,2002,2003,2004,2005,2006,2007,2009} status_code  status code.
 * @apiSuccess {string=Successfully,InternalError,RequestParamInvalid,CaptchaNotFound,CaptchaExpired,CaptchaIncorrect,PhoneNumberIncorrect,AccessTokenInvalid,OpenidAlreadyRegister,PasswordIncorrect} msg
 * @apiSuccess {object} data                id+mobile+token.
 * @apiSampleRequest http://127.0.0.1:8066/qq/user
 */
#[derive(Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QQLoginRequest {
    access_token: String,
    mobile: String,
    password: String,
    sms_code: String,
}
#[tracing::instrument(skip_all,fields(trace_id = common::log::generate_trace_id()))]
#[post("/qq/user")]
async fn qq_user_login(request_data: web::Json<QQLoginRequest>) -> impl Responder {
    debug!("{}", serde_json::to_string(&request_data.0).unwrap());
    gen_extra_respond(handlers::login::req(request_data.into_inner()).await)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(qq_authorization)
        .service(qq_callback)
        .service(qq_user_login);
}
