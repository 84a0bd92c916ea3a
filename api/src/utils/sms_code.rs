use std::collections::HashMap;
use std::sync::Mutex;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use common::constants::CAPTCHA_EXPIRE_TIME;
use common::env::{ServiceMode, CONF};
use common::error_code::AccountManagerError::*;
use common::error_code::BackendError::InternalError;
use common::error_code::{AccountManagerError, BackendError};
use common::utils::math::gen_random_verify_code;
use common::utils::time::now_millis;

lazy_static! {
    static ref CODE_STORAGE: Mutex<HashMap<String, SmsCode>> = Mutex::new(HashMap::new());
    static ref MOBILE_PATTERN: Regex = Regex::new(r"^1[3-9]\d{9}$").unwrap();
}

pub fn validate_mobile(mobile: &str) -> Result<(), AccountManagerError> {
    if MOBILE_PATTERN.is_match(mobile) {
        Ok(())
    } else {
        Err(PhoneNumberIncorrect)
    }
}

#[derive(Debug, Clone)]
pub struct SmsCode {
    //phone number the code was issued for
    owner: String,
    pub code: String,
    pub created_at: u64,
    pub expiration_time: u64,
}

impl SmsCode {
    pub fn new(mobile: String) -> Self {
        //测试环境固定验证码,方便写测试用例
        let code = if CONF.service_mode != ServiceMode::Product
            && CONF.service_mode != ServiceMode::Dev
        {
            "000000".to_string()
        } else {
            gen_random_verify_code().to_string()
        };
        let now = now_millis();
        SmsCode {
            owner: mobile,
            code,
            created_at: now,
            expiration_time: now + CAPTCHA_EXPIRE_TIME,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expiration_time <= now_millis()
    }

    pub fn store(&self) -> Result<(), BackendError> {
        let code_storage = &mut CODE_STORAGE
            .lock()
            .map_err(|e| InternalError(e.to_string()))?;
        code_storage.insert(self.owner.to_string(), self.clone());
        debug!("store sms code {:?}", self);
        Ok(())
    }

    pub fn delete(&self) -> Result<(), BackendError> {
        let code_storage = &mut CODE_STORAGE
            .lock()
            .map_err(|e| InternalError(e.to_string()))?;
        code_storage.remove(&self.owner);
        Ok(())
    }

    //compare only, the entry is not consumed here and lapses by expiry
    pub fn check(mobile: &str, code: &str) -> Result<(), BackendError> {
        if let Some(data) = get_code(mobile)? {
            if data.code != code {
                Err(CaptchaIncorrect)?
            } else if data.is_expired() {
                Err(CaptchaExpired)?
            } else {
                Ok(())
            }
        } else {
            Err(CaptchaNotFound)?
        }
    }
}

pub fn get_code(mobile: &str) -> Result<Option<SmsCode>, BackendError> {
    let code_storage = &CODE_STORAGE
        .lock()
        .map_err(|e| InternalError(e.to_string()))?;
    let value = code_storage.get(mobile).map(|x| x.to_owned());
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::error_code::ErrorCode;

    fn check_err_code(mobile: &str, code: &str) -> u16 {
        SmsCode::check(mobile, code).unwrap_err().code()
    }

    #[test]
    fn test_mobile_pattern() {
        assert!(validate_mobile("13800000000").is_ok());
        assert!(validate_mobile("19912345678").is_ok());
        assert!(validate_mobile("12800000000").is_err());
        assert!(validate_mobile("1380000000").is_err());
        assert!(validate_mobile("138000000000").is_err());
        assert!(validate_mobile("+86 13800000000").is_err());
    }

    #[test]
    fn test_code_check_paths() {
        //missing
        assert_eq!(check_err_code("13811110000", "123456"), 2002);

        //stored in test mode the code is fixed
        let code = SmsCode::new("13811110001".to_string());
        code.store().unwrap();
        assert_eq!(code.code, "000000");
        assert!(SmsCode::check("13811110001", "000000").is_ok());

        //mismatch
        assert_eq!(check_err_code("13811110001", "111111"), 2004);

        //the comparison does not consume the entry
        assert!(SmsCode::check("13811110001", "000000").is_ok());
        code.delete().unwrap();
        assert_eq!(check_err_code("13811110001", "000000"), 2002);
    }

    #[test]
    fn test_code_expired() {
        let now = now_millis();
        let code = SmsCode {
            owner: "13811110002".to_string(),
            code: "000000".to_string(),
            created_at: now - CAPTCHA_EXPIRE_TIME - 1,
            expiration_time: now - 1,
        };
        code.store().unwrap();
        assert_eq!(check_err_code("13811110002", "000000"), 2003);
    }
}
