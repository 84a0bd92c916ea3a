use anyhow::Result;

pub async fn table_clear(table_name: &str) -> Result<()> {
    let sql = format!("truncate table {} restart identity", table_name);
    crate::execute(sql.as_str()).await?;
    Ok(())
}

pub async fn table_all_clear() {
    table_clear("users").await.unwrap();
    table_clear("oauth_qq_users").await.unwrap();
}
