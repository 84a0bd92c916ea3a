//! 对接smsbao短信发送服务

use anyhow::{anyhow, Result};
use tracing::debug;

use common::env::{ServiceMode, CONF};

/// 发送一条短信,`msg`超过64字符会按多条计费,尽量别超
pub async fn send_sms(mobile: &str, msg: &str) -> Result<()> {
    //测试环境不真实外发
    if CONF.service_mode == ServiceMode::Test {
        debug!("skip real sms send to {}: {}", mobile, msg);
        return Ok(());
    }

    let client = reqwest::Client::new();
    let res = client
        .get(&CONF.sms.server)
        .query(&[
            ("u", CONF.sms.username.as_str()),
            ("p", CONF.sms.api_key.as_str()),
            ("m", mobile),
            ("c", msg),
        ])
        .send()
        .await?;
    match (res.status().as_u16(), res.text().await?) {
        (200, ref c) => {
            if c == "0" {
                Ok(())
            } else {
                Err(anyhow!("sms provider error code {}", c))
            }
        }
        (_, c) => Err(anyhow!(c)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_sms_skipped_in_test_mode() {
        send_sms("13800000000", "[Mall] Your sms code is: 000000")
            .await
            .unwrap();
    }
}
