use serde_derive::{Deserialize, Serialize};

/// qq互联下发的openid和本地账户的绑定关系
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OauthQQUser {
    pub openid: String,
    pub user_id: u32,
}
