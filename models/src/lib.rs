//! encapsulation of some postgresql interface for easy call
#![allow(unused_imports)]
#![allow(dead_code)]

pub mod account_manager;
pub mod general;
pub mod oauth_qq;

#[macro_use]
extern crate tracing;
#[macro_use]
extern crate lazy_static;

use anyhow::anyhow;
use anyhow::Result;
use async_trait::async_trait;
use deadpool_postgres::{Config, ManagerConfig, Pool, RecyclingMethod};
use std::fmt::Display;
use tokio_postgres::{NoTls, Row};

lazy_static! {
    static ref PG_POOL: Pool = connect_pool().unwrap();
}

fn connect_pool() -> Result<Pool> {
    let mut cfg = Config::new();
    cfg.dbname = Some(common::env::CONF.database.dbname.clone());
    cfg.user = Some(common::env::CONF.database.user.clone());
    cfg.password = Some(common::env::CONF.database.password.clone());
    cfg.host = Some(common::env::CONF.database.host.clone());
    cfg.port = Some(common::env::CONF.database.port as u16);

    cfg.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });
    let pool = cfg.create_pool(None, NoTls)?;
    Ok(pool)
}

pub async fn query(raw_sql: &str) -> Result<Vec<Row>> {
    let conn = PG_POOL.get().await?;
    let rows = conn.query(raw_sql, &[]).await?;
    Ok(rows)
}

pub async fn execute(raw_sql: &str) -> Result<u64> {
    let conn = PG_POOL.get().await?;
    let lines = conn.execute(raw_sql, &[]).await?;
    Ok(lines)
}

#[async_trait]
pub trait PsqlOp {
    type UpdaterContent<'a>: Display + Send;
    type FilterContent<'b>: Display + Send;

    async fn find(filter: Self::FilterContent<'_>) -> Result<Vec<Self>>
    where
        Self: Sized + Send;

    async fn find_single(filter: Self::FilterContent<'_>) -> Result<Self>
    where
        Self: Sized + Send,
    {
        let mut get_res: Vec<Self> = Self::find(filter).await?;
        let data_len = get_res.len();
        if data_len == 0 {
            let error_info = "DBError::DataNotFound: data isn't existed";
            error!("{}", error_info);
            Err(anyhow!(error_info.to_string()))
        } else if data_len > 1 {
            let error_info = "DBError::RepeatedData: data is repeated";
            error!("{}", error_info);
            Err(anyhow!(error_info.to_string()))
        } else {
            Ok(get_res.pop().unwrap())
        }
    }

    async fn update(
        new_value: Self::UpdaterContent<'_>,
        filter: Self::FilterContent<'_>,
    ) -> Result<u64>;

    async fn update_single(
        new_value: Self::UpdaterContent<'_>,
        filter: Self::FilterContent<'_>,
    ) -> Result<()>
    where
        Self: Sized + Send,
    {
        let row_num = Self::update(new_value, filter).await?;
        if row_num == 0 {
            let error_info = "DBError::DataNotFound: data isn't existed";
            error!("{}", error_info);
            Err(anyhow!(error_info.to_string()))
        } else if row_num > 1 {
            let error_info = "DBError::RepeatedData: data is repeated";
            error!("{}", error_info);
            Err(anyhow!(error_info.to_string()))
        } else {
            Ok(())
        }
    }

    async fn insert(&self) -> Result<()>;

    async fn delete(_filter: Self::FilterContent<'_>) -> Result<()> {
        todo!()
    }
}

pub enum PsqlType {
    OptionStr(Option<String>),
    OptionU64(Option<u64>),
}

impl PsqlType {
    pub fn to_psql_str(&self) -> String {
        match self {
            PsqlType::OptionStr(data) => data
                .to_owned()
                .map(|x| format!("'{}'", x.replace('\'', "''")))
                .unwrap_or("NULL".to_string()),
            PsqlType::OptionU64(data) => {
                data.map(|x| format!("{}", x)).unwrap_or("NULL".to_string())
            }
        }
    }
}

impl From<Option<String>> for PsqlType {
    fn from(value: Option<String>) -> Self {
        PsqlType::OptionStr(value)
    }
}

impl From<Option<u64>> for PsqlType {
    fn from(value: Option<u64>) -> Self {
        PsqlType::OptionU64(value)
    }
}
