use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yt_digest::analysis::analyze;
use yt_digest::cli::{Cli, Commands};
use yt_digest::config::Config;
use yt_digest::output::{self, DigestReport};
use yt_digest::providers::{self, ProviderRegistry};
use yt_digest::utils;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        "yt_digest=debug"
    } else {
        "yt_digest=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing tools are only a warning; local transcript analysis works
    // without any of them
    if !cli.quiet {
        for dep in utils::check_dependencies().await {
            eprintln!("⚠️  {}", dep);
        }
    }

    let config = Config::load().await?;

    match cli.command {
        Commands::Analyze {
            source,
            output,
            format,
            language,
            save_transcript,
            no_metadata,
        } => {
            let registry = ProviderRegistry::with_config(&config.provider);
            let language = language.unwrap_or_else(|| config.provider.default_language.clone());

            tracing::info!("Fetching transcript for: {}", source);
            let transcript = registry.fetch_transcript(&source, &language).await?;

            let metadata = if no_metadata {
                None
            } else {
                match registry.fetch_metadata(&source).await {
                    Ok(metadata) => Some(metadata),
                    Err(e) => {
                        tracing::warn!("Could not fetch metadata: {}", e);
                        None
                    }
                }
            };

            let digest = DigestReport::new(source.clone(), metadata, analyze(&transcript));

            match output {
                Some(path) => {
                    output::save_to_file(&digest, &path, &format).await?;
                    println!("Digest saved to: {}", path.display());
                }
                None => {
                    output::print_to_console(&digest, &format)?;
                }
            }

            if let Some(path) = save_transcript {
                output::save_transcript(&path, digest.metadata.as_ref(), &source, &transcript)?;
                println!("Transcript saved to: {}", path.display());
            }
        }
        Commands::Info { url } => {
            let registry = ProviderRegistry::with_config(&config.provider);
            let metadata = registry.fetch_metadata(&url).await?;
            print!("{}", output::metadata_section(&metadata));
        }
        Commands::Download { url, output_dir } => {
            let dir = output_dir
                .or_else(|| config.app.downloads_dir.clone())
                .unwrap_or_else(|| "downloads".into());
            fs_err::create_dir_all(&dir)?;

            let registry = ProviderRegistry::with_config(&config.provider);
            if registry.is_local_file(&url) {
                anyhow::bail!("'{}' is already a local file", url);
            }

            match registry.find_provider(&url) {
                Some(provider) => {
                    let base = provider
                        .fetch_metadata(&url)
                        .await
                        .map(|m| m.title)
                        .unwrap_or_else(|_| "audio".to_string());
                    let path = dir.join(utils::generate_unique_filename(&base, "mp3"));

                    println!("{}", style("Downloading audio...").bold());
                    provider.download_audio(&url, &path).await?;
                    println!("Audio saved to: {}", path.display());
                }
                None => {
                    // Not a known platform; treat it as a direct media link
                    let ext = utils::extension_from_url(&url).unwrap_or_else(|| "mp3".to_string());
                    let path = dir.join(utils::generate_unique_filename("audio", &ext));

                    providers::download::download_to_file(&url, &path).await?;
                    println!("Audio saved to: {}", path.display());
                }
            }
        }
        Commands::Config { show } => {
            config.display();
            if !show {
                println!();
                println!("Edit the config file directly to change these values.");
            }
        }
        Commands::Platforms => {
            let registry = ProviderRegistry::new();
            println!("Supported sources:");
            for platform in registry.list_platforms() {
                println!("  • {}", platform);
            }
            println!("  • Local transcript files (txt, vtt, srt)");
        }
    }

    Ok(())
}
