use serde_derive::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct UserInfo {
    pub id: u32,
    //等于注册时的手机号
    pub username: String,
    pub mobile: String,
    pub email: Option<String>,
    //绑定后未点验证链接前是false
    pub email_verified: bool,
    pub login_pwd_hash: String,
}
