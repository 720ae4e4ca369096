use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use patentlens_client::{format_size, ApiClient};

#[derive(Parser, Debug)]
#[command(name = "patentlens")]
#[command(about = "Upload a patent document for AI analysis")]
struct Args {
    /// Path to the document. Supported formats: PDF, TXT, DOC, DOCX (max 10 MB)
    file: PathBuf,

    /// API base URL (defaults to PATENTLENS_API_URL or http://localhost:3000)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let client = match args.api_url {
        Some(url) => ApiClient::new(url)?,
        None => ApiClient::from_env()?,
    };

    match client.upload_document(&args.file).await {
        Ok(response) => {
            println!("{}", response.message);
            println!("  file:   {} ({})", response.original_name, format_size(response.size));
            println!("  stored: {}", response.file_name);
            println!("  id:     {}", response.file_id);
            Ok(())
        }
        Err(err) => {
            eprintln!("Upload failed: {}", err.user_message());
            eprintln!("Supported formats: PDF, TXT, DOC, DOCX (max 10 MB)");
            std::process::exit(1);
        }
    }
}
