//! sms verification code http service
pub mod handlers;

use actix_web::{post, web, Responder};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::respond::gen_extra_respond;

/**
 * @api {post} /smsCode 申请短信验证码
 * @apiVersion 0.0.1
 * @apiName GetSmsCode
 * @apiGroup Verifications
 * @apiBody {String} mobile 手机号 13800000000,测试环境生成的验证码为000000
 * @apiExample {curl} Example usage:
 *   curl -X POST http://127.0.0.1:8066/smsCode -H "Content-Type: application/json" -d
 *  '{"mobile": "13800000000"}'
 * @apiSuccess {string=0,1,2005,2011} status_code         status code.
 * @apiSuccess {string=Successfully,InternalError,PhoneNumberIncorrect,CaptchaRequestTooFrequently} msg
 * @apiSuccess {string} data                nothing.
 * @apiSampleRequest http://127.0.0.1:8066/smsCode
 */
#[derive(Deserialize, Serialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GetSmsCodeRequest {
    mobile: String,
}
#[tracing::instrument(skip_all,fields(trace_id = common::log::generate_trace_id()))]
#[post("/smsCode")]
async fn get_sms_code(request_data: web::Json<GetSmsCodeRequest>) -> impl Responder {
    debug!("{}", serde_json::to_string(&request_data.0).unwrap());
    gen_extra_respond(handlers::sms_code::req(request_data.into_inner()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_sms_code);
}
