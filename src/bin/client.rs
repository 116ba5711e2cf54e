use anyhow::Result;
use clap::Parser;
use line_search::client::query::SearchClient;
use line_search::config::cli::ClientArgs;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let args = ClientArgs::parse();

    let mut client = SearchClient::new(&args.host, args.port);
    if args.ssl {
        let Some(ca_cert) = args.ca_cert.as_deref() else {
            anyhow::bail!("--ssl requires --ca-cert to verify the server");
        };
        client = client.with_tls(ca_cert)?;
    }

    let response = client.query(&args.query).await?;
    if response.is_empty() {
        eprintln!("Server closed the connection without answering");
        std::process::exit(1);
    }
    print!("{}", response);

    Ok(())
}
