use std::env;

use anyhow::{anyhow, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let email = match parse_args() {
        Ok(email) => email,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: make_admin <email>   (or set ADMIN_EMAIL)");
            std::process::exit(2);
        }
    };

    if let Err(e) = ppdb_portal::promote_admin(&email).await {
        eprintln!("make_admin failed: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn parse_args() -> Result<String> {
    let mut email = env::var("ADMIN_EMAIL").ok();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--email" => {
                email = Some(args.next().ok_or_else(|| anyhow!("--email missing value"))?);
            }
            value if !value.starts_with('-') => email = Some(value.to_string()),
            _ => return Err(anyhow!("Unknown argument: {arg}")),
        }
    }

    email.filter(|value| !value.trim().is_empty()).ok_or_else(|| anyhow!("No email given"))
}
