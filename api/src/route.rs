//! mall backend service — qq oauth login and email binding

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod oauth;
pub mod users;
pub mod utils;
pub mod verifications;

use actix_cors::Cors;
use actix_web::{http, middleware, App, HttpServer};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    common::log::init_logger();
    let service: String = format!("0.0.0.0:{}", common::env::CONF.api_port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_header()
                    .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
                    .allowed_headers(vec![http::header::AUTHORIZATION, http::header::ACCEPT])
                    .allowed_header(http::header::CONTENT_TYPE)
                    .max_age(3600),
            )
            .configure(oauth::configure_routes)
            .configure(users::configure_routes)
            .configure(verifications::configure_routes)
    })
    .bind(service)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_service_call;
    use actix_web::body::MessageBody;
    use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
    use actix_web::http::header;
    use actix_web::{test, App, Error};

    use crate::oauth::handlers::auth_url::QQAuthUrlResponse;
    use crate::oauth::handlers::callback::QQCallbackResponse;
    use crate::oauth::handlers::login::QQLoginResponse;
    use crate::users::handlers::bind_email::BindEmailResponse;
    use crate::utils::respond::BackendRespond;
    use models::oauth_qq::{OauthQQFilter, OauthQQUserEntity};
    use models::PsqlOp;

    async fn init() -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = Error,
            InitError = (),
        >,
    > {
        common::log::init_logger();
        models::general::table_all_clear().await;
        App::new()
            .configure(oauth::configure_routes)
            .configure(users::configure_routes)
            .configure(verifications::configure_routes)
    }

    #[actix_web::test]
    async fn test_qq_authorization_url() {
        let app = App::new().configure(oauth::configure_routes);
        let service = test::init_service(app).await;

        let payload = r#"{ "next": "/cart" }"#;
        let res: BackendRespond<QQAuthUrlResponse> = test_service_call!(
            service,
            "post",
            "/qq/authorization",
            Some(payload),
            None::<String>
        );
        assert_eq!(res.status_code, 0);
        assert!(res.data.login_url.contains("oauth2.0/authorize"));
    }

    #[actix_web::test]
    #[ignore = "requires a local postgres with the users/oauth_qq_users tables"]
    async fn test_all_braced_qq_login_ok() {
        let app = init().await;
        let service = test::init_service(app).await;

        //qq callback with an unbound openid hands back a binding credential
        let res: BackendRespond<QQCallbackResponse> = test_service_call!(
            service,
            "get",
            "/qq/user?code=test0001",
            None::<String>,
            None::<String>
        );
        assert_eq!(res.status_code, 0);
        assert!(res.data.token.is_none());
        let access_token = res.data.access_token.unwrap();

        //apply a sms code, fixed to 000000 in test mode
        let payload = r#"{ "mobile": "13866660000" }"#;
        let res: BackendRespond<String> =
            test_service_call!(service, "post", "/smsCode", Some(payload), None::<String>);
        assert_eq!(res.status_code, 0);

        //bind: mobile unseen before, a fresh user is created
        let payload = format!(
            r#"{{ "accessToken": "{}", "mobile": "13866660000", "password": "123456789", "smsCode": "000000" }}"#,
            access_token
        );
        let res: BackendRespond<QQLoginResponse> = test_service_call!(
            service,
            "post",
            "/qq/user",
            Some(payload.clone()),
            None::<String>
        );
        assert_eq!(res.status_code, 0);
        assert_eq!(res.data.mobile, "13866660000");
        let user_id = res.data.id;
        let login_token = res.data.token;

        //submitting the identical request again must conflict, not duplicate
        let res: BackendRespond<String> = test_service_call!(
            service,
            "post",
            "/qq/user",
            Some(payload),
            None::<String>
        );
        assert_eq!(res.status_code, 2007);

        //the callback now logs straight in
        let res: BackendRespond<QQCallbackResponse> = test_service_call!(
            service,
            "get",
            "/qq/user?code=test0001",
            None::<String>,
            None::<String>
        );
        assert_eq!(res.status_code, 0);
        assert_eq!(res.data.user_id, Some(user_id));
        assert!(res.data.access_token.is_none());

        //bind an email on the fresh account
        let payload = r#"{ "email": "a@b.com" }"#;
        let res: BackendRespond<BindEmailResponse> = test_service_call!(
            service,
            "post",
            "/user/email",
            Some(payload),
            Some(&login_token)
        );
        assert_eq!(res.status_code, 0);
        assert_eq!(res.data.id, user_id);
        assert_eq!(res.data.email, "a@b.com");

        //consume the verification link
        let verify_url = crate::users::token::generate_verify_email_url(user_id, "a@b.com").unwrap();
        let token = verify_url.split("token=").nth(1).unwrap();
        let res: BackendRespond<String> = test_service_call!(
            service,
            "get",
            &format!("/user/verifyEmail?token={}", token),
            None::<String>,
            None::<String>
        );
        assert_eq!(res.status_code, 0);
    }

    #[actix_web::test]
    #[ignore = "requires a local postgres with the users/oauth_qq_users tables"]
    async fn test_qq_login_existing_user_wrong_password() {
        let app = init().await;
        let service = test::init_service(app).await;

        //register through the first openid
        let access_token = crate::oauth::token::generate_openid_token("Q123").unwrap();
        crate::utils::sms_code::SmsCode::new("13866660001".to_string())
            .store()
            .unwrap();
        let payload = format!(
            r#"{{ "accessToken": "{}", "mobile": "13866660001", "password": "123456789", "smsCode": "000000" }}"#,
            access_token
        );
        let res: BackendRespond<QQLoginResponse> = test_service_call!(
            service,
            "post",
            "/qq/user",
            Some(payload),
            None::<String>
        );
        assert_eq!(res.status_code, 0);
        let link = OauthQQUserEntity::find_single(OauthQQFilter::ByOpenid("Q123"))
            .await
            .unwrap();
        assert_eq!(link.oauth_qq_user.user_id, res.data.id);

        //a second openid against the same mobile must present the right password
        let access_token = crate::oauth::token::generate_openid_token("Q456").unwrap();
        let payload = format!(
            r#"{{ "accessToken": "{}", "mobile": "13866660001", "password": "wrong_password", "smsCode": "000000" }}"#,
            access_token
        );
        let res: BackendRespond<String> = test_service_call!(
            service,
            "post",
            "/qq/user",
            Some(payload),
            None::<String>
        );
        assert_eq!(res.status_code, 2009);
        assert!(OauthQQUserEntity::find(OauthQQFilter::ByOpenid("Q456"))
            .await
            .unwrap()
            .is_empty());
    }
}
