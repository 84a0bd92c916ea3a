use crate::utils::time::{DAY1, DAY7, MINUTE1, MINUTE10};

//验证每次请求的间隔
pub const CAPTCHA_REQUEST_INTERVAL: u64 = MINUTE1;
//验证码的有效时间
pub const CAPTCHA_EXPIRE_TIME: u64 = MINUTE10;
//openid换取的access_token的有效时间
pub const ACCESS_TOKEN_EXPIRE_TIME: u64 = MINUTE10;
//邮箱验证链接的有效时间
pub const EMAIL_VERIFY_EXPIRE_TIME: u64 = DAY1;
//登录token的有效时间
pub const TOKEN_EXPIRE_TIME: u64 = DAY7;
