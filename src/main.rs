#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = ppdb_portal::run().await {
        eprintln!("ppdb-portal fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
