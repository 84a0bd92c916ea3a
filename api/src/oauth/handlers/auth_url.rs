use serde::{Deserialize, Serialize};

use common::error_code::BackendRes;

use crate::oauth::{qq_client, QQAuthUrlRequest};

#[derive(Serialize, Deserialize, Debug)]
pub struct QQAuthUrlResponse {
    pub login_url: String,
}

pub fn req(request_data: QQAuthUrlRequest) -> BackendRes<QQAuthUrlResponse> {
    let QQAuthUrlRequest { next } = request_data;
    let login_url = qq_client::get_qq_login_url(next.as_deref().unwrap_or("/"));
    Ok(Some(QQAuthUrlResponse { login_url }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_url_default_state() {
        let res = req(QQAuthUrlRequest::default()).unwrap().unwrap();
        assert!(res.login_url.contains("response_type=code"));
        assert!(res.login_url.ends_with("state=/"));
    }
}
