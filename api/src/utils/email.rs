use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{Message, SmtpTransport, Transport};

use common::env::{ServiceMode, CONF};
use common::error_code::{BackendRes, ExternalServiceError};
use tracing::{debug, error};

pub fn send_verify_email(to: &str, verify_url: &str) -> BackendRes<String> {
    let content = format!(
        "[Mall] Click the link to verify your email, valid for 1 day: {}",
        verify_url
    );
    send_email(to, "[Mall] Verify your email", &content)
}

pub fn send_email(to: &str, subject: &str, content: &str) -> BackendRes<String> {
    //测试环境不真实外发
    if CONF.service_mode == ServiceMode::Test {
        debug!("skip real email send to {}: {}", to, content);
        return Ok(None::<String>);
    }

    let email = Message::builder()
        .from(CONF.smtp.sender.parse().map_err(|_| {
            error!("smtp sender address is invalid {}", CONF.smtp.sender);
            ExternalServiceError::EmailNotify(CONF.smtp.sender.clone())
        })?)
        .to(to.parse().map_err(|_| {
            error!("receiver address is invalid {}", to);
            ExternalServiceError::EmailNotify(to.to_string())
        })?)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(content.to_string())
        .map_err(|e| {
            error!("Email parameters error {}", e.to_string());
            ExternalServiceError::EmailNotify(e.to_string())
        })?;

    let creds = Credentials::new(CONF.smtp.sender.to_owned(), CONF.smtp.password.to_owned());

    let tls = TlsParameters::builder(CONF.smtp.server.to_owned())
        .dangerous_accept_invalid_certs(true)
        .build()
        .map_err(|e| {
            error!("Email notify service is crashed {}", e.to_string());
            ExternalServiceError::EmailNotify(e.to_string())
        })?;

    let mailer = SmtpTransport::relay(&CONF.smtp.server)
        .map(|c| c.port(CONF.smtp.port))
        .map_err(|e| {
            error!("Email notify service is crashed {}", e.to_string());
            ExternalServiceError::EmailNotify(e.to_string())
        })?
        .tls(Tls::Required(tls))
        .credentials(creds)
        .build();

    let send_res = mailer.send(&email).map_err(|e| {
        error!("Email send message failed {}", e.to_string());
        ExternalServiceError::EmailNotify(e.to_string())
    })?;
    debug!("mail send res {:?}", send_res);
    Ok(None::<String>)
}
