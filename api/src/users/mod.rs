//! user account http service
pub mod handlers;
pub mod token;

use actix_web::{get, post, web, HttpRequest, Responder};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::respond::gen_extra_respond;

/**
 * @api {post} /user/email 绑定邮箱
 * @apiVersion 0.0.1
 * @apiName BindEmail
 * @apiGroup Users
 * @apiHeader {String} Authorization  登录下发的token
 * @apiBody {String} email 邮箱地址,重复绑定会覆盖旧值
 * @apiExample {curl} Example usage:
 *   curl -X POST http://127.0.0.1:8066/user/email -H "Content-Type: application/json"
 *  -H "Authorization: bearer xxx" -d '{"email": "a@b.com"}'
 * @apiSuccess {string=0,1,2,3} status_code         status code.
 * @apiSuccess {string=Successfully,InternalError,RequestParamInvalid,DBError} msg
 * @apiSuccess {object} data                id+email.
 * @apiSampleRequest http://127.0.0.1:8066/user/email
 */
#[derive(Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BindEmailRequest {
    email: String,
}
#[tracing::instrument(skip_all,fields(trace_id = common::log::generate_trace_id()))]
#[post("/user/email")]
async fn bind_email(
    request: HttpRequest,
    request_data: web::Json<BindEmailRequest>,
) -> impl Responder {
    debug!("{}", serde_json::to_string(&request_data.0).unwrap());
    gen_extra_respond(handlers::bind_email::req(request, request_data.into_inner()).await)
}

/**
 * @api {get} /user/verifyEmail 校验邮件里的验证链接
 * @apiVersion 0.0.1
 * @apiName VerifyEmail
 * @apiGroup Users
 * @apiQuery {String} token 验证邮件中携带的token
 * @apiExample {curl} Example usage:
 * curl -X GET "http://127.0.0.1:8066/user/verifyEmail?token=xxx"
 * @apiSuccess {string=0,1,2012} status_code         status code.
 * @apiSuccess {string=Successfully,InternalError,EmailVerifyTokenInvalid} msg
 * @apiSuccess {string} data                nothing.
 * @apiSampleRequest http://127.0.0.1:8066/user/verifyEmail
 */
#[derive(Deserialize, Serialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailRequest {
    token: String,
}
#[tracing::instrument(skip_all,fields(trace_id = common::log::generate_trace_id()))]
#[get("/user/verifyEmail")]
async fn verify_email(request_data: web::Query<VerifyEmailRequest>) -> impl Responder {
    gen_extra_respond(handlers::verify_email::req(request_data.into_inner()).await)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(bind_email).service(verify_email);
}
