//! 对接qq互联的oauth2.0接口

use anyhow::{anyhow, Result};

use common::env::{ServiceMode, CONF};
use common::hash::hash_str;

/// 拼接qq授权页地址,`next`由前端带回
pub fn get_qq_login_url(next: &str) -> String {
    format!(
        "{}/oauth2.0/authorize?response_type=code&client_id={}&redirect_uri={}&state={}",
        CONF.qq_oauth.graph_base_uri, CONF.qq_oauth.app_id, CONF.qq_oauth.redirect_uri, next
    )
}

/// 授权码换取qq侧的access_token
pub async fn get_access_token(code: &str) -> Result<String> {
    //测试环境不访问qq互联
    if CONF.service_mode == ServiceMode::Test {
        return Ok(format!("test_token_{}", code));
    }

    let url = format!("{}/oauth2.0/token", CONF.qq_oauth.graph_base_uri);
    let client = reqwest::Client::new();
    let res = client
        .get(&url)
        .query(&[
            ("grant_type", "authorization_code"),
            ("client_id", CONF.qq_oauth.app_id.as_str()),
            ("client_secret", CONF.qq_oauth.app_key.as_str()),
            ("code", code),
            ("redirect_uri", CONF.qq_oauth.redirect_uri.as_str()),
        ])
        .send()
        .await?;
    let text = res.text().await?;

    //正常返回形如 access_token=xxx&expires_in=7776000&refresh_token=yyy
    for pair in text.split('&') {
        if let Some(token) = pair.strip_prefix("access_token=") {
            return Ok(token.to_string());
        }
    }
    Err(anyhow!("unexpected token response: {}", text))
}

/// access_token换取openid
pub async fn get_openid(access_token: &str) -> Result<String> {
    //测试环境由token推导出可复现的openid
    if CONF.service_mode == ServiceMode::Test {
        return Ok(format!("openid_{}", &hash_str(access_token)[..16]));
    }

    let url = format!("{}/oauth2.0/me", CONF.qq_oauth.graph_base_uri);
    let client = reqwest::Client::new();
    let res = client
        .get(&url)
        .query(&[("access_token", access_token)])
        .send()
        .await?;
    let text = res.text().await?;

    //正常返回形如 callback( {"client_id":"YOUR_APPID","openid":"YOUR_OPENID"} );
    let json_part = text
        .trim()
        .trim_start_matches("callback(")
        .trim_end_matches(");")
        .trim();
    let value: serde_json::Value = serde_json::from_str(json_part)
        .map_err(|_e| anyhow!("unexpected openid response: {}", text))?;
    value["openid"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or(anyhow!("no openid in response: {}", text))
}
