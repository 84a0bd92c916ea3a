use tracing::{debug, error};

use common::constants::CAPTCHA_REQUEST_INTERVAL;
use common::error_code::AccountManagerError::CaptchaRequestTooFrequently;
use common::error_code::BackendRes;
use common::utils::time::now_millis;

use crate::utils::sms::send_sms;
use crate::utils::sms_code::{self, SmsCode};
use crate::verifications::GetSmsCodeRequest;

pub fn req(request_data: GetSmsCodeRequest) -> BackendRes<String> {
    let GetSmsCodeRequest { mobile } = request_data;
    sms_code::validate_mobile(&mobile)?;

    //一分钟内重复申请直接覆盖旧码会造成骚扰,拦掉
    if let Some(data) = sms_code::get_code(&mobile)? {
        let past_time = now_millis() - data.created_at;
        if past_time <= CAPTCHA_REQUEST_INTERVAL {
            Err(CaptchaRequestTooFrequently)?;
        }
    }

    let code = SmsCode::new(mobile.clone());
    code.store()?;

    let content = format!(
        "[Mall] Your sms code is: {}, valid for 10 minutes.",
        code.code
    );
    tokio::spawn(async move {
        let send_res = send_sms(&mobile, &content).await;
        if let Err(e) = send_res {
            error!("send sms code({:?}) failed {}", code, e.to_string());
        } else {
            debug!("send sms code successful {:?}", code);
        }
    });

    Ok(None::<String>)
}
