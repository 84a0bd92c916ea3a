use async_trait::async_trait;
use std::fmt;

use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

use common::data_structures::account_manager::UserInfo;

use crate::{PsqlOp, PsqlType};
use anyhow::Result;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct UserInfoEntity {
    pub user_info: UserInfo,
    pub updated_at: String,
    pub created_at: String,
}

impl UserInfoEntity {
    pub fn new_with_specified(id: u32, mobile: &str, login_pwd_hash: &str) -> Self {
        UserInfoEntity {
            user_info: UserInfo {
                id,
                //注册时用户名就是手机号
                username: mobile.to_owned(),
                mobile: mobile.to_owned(),
                email: None,
                email_verified: false,
                login_pwd_hash: login_pwd_hash.to_owned(),
            },
            updated_at: "".to_string(),
            created_at: "".to_string(),
        }
    }

    pub fn into_inner(self) -> UserInfo {
        self.user_info
    }
}

#[derive(Debug)]
pub enum UserUpdater<'a> {
    LoginPwdHash(&'a str),
    //binding a new address always drops the old verified state
    Email(&'a str),
    EmailVerified(bool),
}

impl fmt::Display for UserUpdater<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            UserUpdater::LoginPwdHash(pwd_hash) => format!("login_pwd_hash='{}'", pwd_hash),
            UserUpdater::Email(email) => {
                format!("(email,email_verified)=('{}',false)", email)
            }
            UserUpdater::EmailVerified(verified) => format!("email_verified={}", verified),
        };
        write!(f, "{}", description)
    }
}

#[derive(Clone, Debug)]
pub enum UserFilter<'b> {
    ById(&'b u32),
    ByMobile(&'b str),
}

impl fmt::Display for UserFilter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            UserFilter::ById(id) => format!("id={}", id),
            UserFilter::ByMobile(mobile) => format!("mobile='{}'", mobile),
        };
        write!(f, "{}", description)
    }
}

#[async_trait]
impl PsqlOp for UserInfoEntity {
    type UpdaterContent<'a> = UserUpdater<'a>;
    type FilterContent<'b> = UserFilter<'b>;

    async fn find(filter: Self::FilterContent<'_>) -> Result<Vec<UserInfoEntity>> {
        let sql = format!(
            "select id,\
            username,\
            mobile,\
            email,\
            email_verified,\
            login_pwd_hash,\
            cast(updated_at as text),\
            cast(created_at as text) \
            from users where {}",
            filter
        );
        let query_res = crate::query(sql.as_str()).await?;
        debug!("get_user: raw sql {}", sql);

        let gen_view = |row: &Row| UserInfoEntity {
            user_info: UserInfo {
                id: row.get::<usize, i32>(0) as u32,
                username: row.get(1),
                mobile: row.get(2),
                email: row.get::<usize, Option<String>>(3),
                email_verified: row.get(4),
                login_pwd_hash: row.get(5),
            },
            updated_at: row.get(6),
            created_at: row.get(7),
        };
        let users = query_res.iter().map(gen_view).collect();
        Ok(users)
    }

    async fn update(
        new_value: Self::UpdaterContent<'_>,
        filter: Self::FilterContent<'_>,
    ) -> Result<u64> {
        let sql = format!(
            "update users set {},updated_at=CURRENT_TIMESTAMP where {}",
            new_value, filter
        );
        debug!("start update users {} ", sql);
        let execute_res = crate::execute(sql.as_str()).await?;
        debug!("success update users {} rows", execute_res);
        Ok(execute_res)
    }

    async fn insert(&self) -> Result<()> {
        let UserInfo {
            id,
            username,
            mobile,
            email,
            email_verified,
            login_pwd_hash,
        } = &self.user_info;

        let sql = format!(
            "insert into users (id,\
                username,\
                mobile,\
                email,\
                email_verified,\
                login_pwd_hash\
            ) values ({},'{}','{}',{},{},'{}');",
            id,
            username,
            mobile,
            PsqlType::OptionStr(email.to_owned()).to_psql_str(),
            email_verified,
            login_pwd_hash,
        );
        debug!("row sql {} rows", sql);
        let execute_res = crate::execute(sql.as_str()).await?;
        debug!("success insert {} rows", execute_res);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::general::table_all_clear;
    use common::log::init_logger;

    #[test]
    fn test_filter_and_updater_render() {
        assert_eq!(UserFilter::ById(&8).to_string(), "id=8");
        assert_eq!(
            UserFilter::ByMobile("13800000000").to_string(),
            "mobile='13800000000'"
        );
        assert_eq!(
            UserUpdater::Email("a@b.com").to_string(),
            "(email,email_verified)=('a@b.com',false)"
        );
        assert_eq!(
            UserUpdater::EmailVerified(true).to_string(),
            "email_verified=true"
        );
    }

    #[tokio::test]
    #[ignore = "requires a local postgres with the users table"]
    async fn test_db_user_info() {
        init_logger();
        table_all_clear().await;

        let user = UserInfoEntity::new_with_specified(1, "13800000000", "0123456789");
        user.insert().await.unwrap();
        let user_by_find = UserInfoEntity::find_single(UserFilter::ById(&1)).await.unwrap();
        println!("{:?}", user_by_find);
        assert_eq!(user_by_find.user_info, user.user_info);

        UserInfoEntity::update_single(UserUpdater::Email("a@b.com"), UserFilter::ById(&1))
            .await
            .unwrap();
        let user_by_find = UserInfoEntity::find_single(UserFilter::ByMobile("13800000000"))
            .await
            .unwrap();
        assert_eq!(user_by_find.user_info.email, Some("a@b.com".to_string()));
        assert!(!user_by_find.user_info.email_verified);
    }
}
