#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = ppdb_portal::run_db_check().await {
        eprintln!("db_check failed: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
