use std::{env, fmt, fs};

use serde::Deserialize;

#[derive(Clone, Deserialize, Debug, PartialEq)]
pub enum ServiceMode {
    Product,
    Dev,
    Local,
    Test, //for testcase
}

impl std::str::FromStr for ServiceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product" => Ok(ServiceMode::Product),
            "dev" => Ok(ServiceMode::Dev),
            "local" => Ok(ServiceMode::Local),
            "test" => Ok(ServiceMode::Test),
            _ => Err("Don't support this service mode".to_string()),
        }
    }
}

impl fmt::Display for ServiceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            ServiceMode::Product => "product",
            ServiceMode::Dev => "dev",
            ServiceMode::Local => "local",
            ServiceMode::Test => "test",
        };
        write!(f, "{}", description)
    }
}

#[derive(Deserialize, Debug)]
pub struct Database {
    pub host: String,
    pub port: u32,
    pub user: String,
    pub password: String,
    pub dbname: String,
}

impl Database {
    pub fn db_uri(&self) -> String {
        format!(
            "host={} port={} user={} password={} dbname={}",
            self.host, self.port, self.user, self.password, self.dbname
        )
    }
}

#[derive(Deserialize, Debug)]
pub struct Smtp {
    pub server: String,
    pub port: u16,
    pub sender: String,
    pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct Sms {
    pub server: String,
    pub username: String,
    pub api_key: String,
}

/// qq互联的应用凭证和回调地址
#[derive(Deserialize, Debug)]
pub struct QQOauth {
    pub app_id: String,
    pub app_key: String,
    pub redirect_uri: String,
    /// https://graph.qq.com
    pub graph_base_uri: String,
}

///read config data for env
#[derive(Deserialize, Debug)]
pub struct EnvConf {
    /// dev or pro
    pub service_mode: ServiceMode,
    /// http service port
    pub api_port: usize,
    pub database: Database,
    pub smtp: Smtp,
    pub sms: Sms,
    pub qq_oauth: QQOauth,
    /// page the email verification link points at
    pub email_verify_base_uri: String,
}

impl EnvConf {
    //unit tests run without a CONFIG file
    fn test_profile() -> Self {
        EnvConf {
            service_mode: ServiceMode::Test,
            api_port: 8066,
            database: Database {
                host: "127.0.0.1".to_string(),
                port: 5432,
                user: "postgres".to_string(),
                password: "postgres".to_string(),
                dbname: "mall_backend_test".to_string(),
            },
            smtp: Smtp {
                server: "127.0.0.1".to_string(),
                port: 1025,
                sender: "noreply@mall.test".to_string(),
                password: "".to_string(),
            },
            sms: Sms {
                server: "https://api.smsbao.com/sms".to_string(),
                username: "".to_string(),
                api_key: "".to_string(),
            },
            qq_oauth: QQOauth {
                app_id: "100000000".to_string(),
                app_key: "test_app_key".to_string(),
                redirect_uri: "http://www.mall.test/oauth_callback.html".to_string(),
                graph_base_uri: "https://graph.qq.com".to_string(),
            },
            email_verify_base_uri: "http://www.mall.test/success_verify_email.html".to_string(),
        }
    }
}

lazy_static! {
    pub static ref CONF: EnvConf = {
        match env::var_os("CONFIG") {
            Some(path) => {
                let content =
                    fs::read_to_string(path).expect("Unable to read the `CONFIG` specified file");
                toml::from_str(content.as_str()).expect("contents of configuration file invalid")
            }
            None => EnvConf::test_profile(),
        }
    };
    pub static ref TOKEN_SECRET_KEY: String = {
        if let Some(value) = env::var_os("TOKEN_SECRET_KEY") {
            value.to_str().unwrap().parse().unwrap()
        } else {
            "your_secret_key".to_string()
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env() {
        println!("envs {:?}", *super::CONF);
    }
}
