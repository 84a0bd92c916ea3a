/***
success 0
common  1~9
account_manager 2000
external service 3000

error message is correspond with error code
*/

use thiserror::Error;

pub type BackendRes<D, E = BackendError> = Result<Option<D>, E>;

pub trait ErrorCode {
    fn code(&self) -> u16;
}

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("internal error: {0}")]
    InternalError(String),
    #[error("Request param is invalid: {0}")]
    RequestParamInvalid(String),
    #[error("Db error: {0}")]
    DBError(String),
    #[error("Authorization error: {0}")]
    Authorization(String),
    #[error("{0}")]
    AccountManager(#[from] AccountManagerError),
    #[error("{0}")]
    ExternalService(#[from] ExternalServiceError),
}

impl ErrorCode for BackendError {
    fn code(&self) -> u16 {
        match self {
            Self::InternalError(_) => 1,
            Self::RequestParamInvalid(_) => 2,
            Self::DBError(_) => 3,
            Self::Authorization(_) => 4,
            Self::AccountManager(err) => err.code(),
            Self::ExternalService(err) => err.code(),
        }
    }
}

//models returns anyhow, the db marker strings are set there
impl From<anyhow::Error> for BackendError {
    fn from(err: anyhow::Error) -> Self {
        if err.to_string().contains("DBError::") {
            BackendError::DBError(err.to_string())
        } else {
            BackendError::InternalError(err.to_string())
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum AccountManagerError {
    #[error("cann't find user's captcha in storage")]
    CaptchaNotFound,
    #[error("user's captcha is expired")]
    CaptchaExpired,
    #[error("user's captcha is different with storage")]
    CaptchaIncorrect,
    #[error("user's phone number is invalided")]
    PhoneNumberIncorrect,
    #[error("access_token is invalid or expired")]
    AccessTokenInvalid,
    #[error("openid already bound to a user")]
    OpenidAlreadyRegister,
    #[error("user's password is incorrect")]
    PasswordIncorrect,
    #[error("Captcha request too frequently")]
    CaptchaRequestTooFrequently,
    #[error("email verify token is invalid or expired")]
    EmailVerifyTokenInvalid,
}

impl ErrorCode for AccountManagerError {
    fn code(&self) -> u16 {
        match self {
            Self::CaptchaNotFound => 2002,
            Self::CaptchaExpired => 2003,
            Self::CaptchaIncorrect => 2004,
            Self::PhoneNumberIncorrect => 2005,
            Self::AccessTokenInvalid => 2006,
            Self::OpenidAlreadyRegister => 2007,
            Self::PasswordIncorrect => 2009,
            Self::CaptchaRequestTooFrequently => 2011,
            Self::EmailVerifyTokenInvalid => 2012,
        }
    }
}

#[derive(Error, Debug)]
pub enum ExternalServiceError {
    #[error("email service error: {0}")]
    EmailNotify(String),
    #[error("sms service error: {0}")]
    Sms(String),
    #[error("qq oauth service error: {0}")]
    OAuth(String),
}

impl ErrorCode for ExternalServiceError {
    fn code(&self) -> u16 {
        match self {
            Self::EmailNotify(_) => 3001,
            Self::Sms(_) => 3002,
            Self::OAuth(_) => 3003,
        }
    }
}
