use async_trait::async_trait;
use std::fmt;

use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

use common::data_structures::oauth::OauthQQUser;

use crate::PsqlOp;
use anyhow::Result;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OauthQQUserEntity {
    pub oauth_qq_user: OauthQQUser,
    pub updated_at: String,
    pub created_at: String,
}

impl OauthQQUserEntity {
    pub fn new_with_specified(openid: &str, user_id: u32) -> Self {
        OauthQQUserEntity {
            oauth_qq_user: OauthQQUser {
                openid: openid.to_owned(),
                user_id,
            },
            updated_at: "".to_string(),
            created_at: "".to_string(),
        }
    }

    pub fn into_inner(self) -> OauthQQUser {
        self.oauth_qq_user
    }
}

#[derive(Clone, Debug)]
pub enum OauthQQFilter<'b> {
    ByOpenid(&'b str),
    ByUserId(&'b u32),
}

impl fmt::Display for OauthQQFilter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            OauthQQFilter::ByOpenid(openid) => format!("openid='{}'", openid),
            OauthQQFilter::ByUserId(user_id) => format!("user_id={}", user_id),
        };
        write!(f, "{}", description)
    }
}

/// 绑定关系只有插入和查询,不会被修改
pub enum OauthQQUpdater {}

impl fmt::Display for OauthQQUpdater {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

#[async_trait]
impl PsqlOp for OauthQQUserEntity {
    type UpdaterContent<'a> = OauthQQUpdater;
    type FilterContent<'b> = OauthQQFilter<'b>;

    async fn find(filter: Self::FilterContent<'_>) -> Result<Vec<OauthQQUserEntity>> {
        let sql = format!(
            "select openid,\
            user_id,\
            cast(updated_at as text),\
            cast(created_at as text) \
            from oauth_qq_users where {}",
            filter
        );
        let query_res = crate::query(sql.as_str()).await?;
        debug!("get_oauth_qq_user: raw sql {}", sql);

        let gen_view = |row: &Row| OauthQQUserEntity {
            oauth_qq_user: OauthQQUser {
                openid: row.get(0),
                user_id: row.get::<usize, i32>(1) as u32,
            },
            updated_at: row.get(2),
            created_at: row.get(3),
        };
        let links = query_res.iter().map(gen_view).collect();
        Ok(links)
    }

    async fn update(
        new_value: Self::UpdaterContent<'_>,
        _filter: Self::FilterContent<'_>,
    ) -> Result<u64> {
        match new_value {}
    }

    async fn insert(&self) -> Result<()> {
        let OauthQQUser { openid, user_id } = &self.oauth_qq_user;

        let sql = format!(
            "insert into oauth_qq_users (openid,\
                user_id\
            ) values ('{}',{});",
            openid, user_id,
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
    fn test_oauth_filter_render() {
        assert_eq!(OauthQQFilter::ByOpenid("Q123").to_string(), "openid='Q123'");
        assert_eq!(OauthQQFilter::ByUserId(&5).to_string(), "user_id=5");
    }

    #[tokio::test]
    #[ignore = "requires a local postgres with the oauth_qq_users table"]
    async fn test_db_oauth_qq_user() {
        init_logger();
        table_all_clear().await;

        let link = OauthQQUserEntity::new_with_specified("Q123", 1);
        link.insert().await.unwrap();
        let link_by_find = OauthQQUserEntity::find_single(OauthQQFilter::ByOpenid("Q123"))
            .await
            .unwrap();
        assert_eq!(link_by_find.oauth_qq_user, link.oauth_qq_user);

        //unique index on openid is the backstop for concurrent binds
        assert!(link.insert().await.is_err());
    }
}
