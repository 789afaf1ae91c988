use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use blocks_fetch::{ContentClient, ContentRequest, FetchConfig, FilterOperation, Language, Query};

#[derive(Parser)]
#[command(name = "blocks")]
#[command(about = "Render Strapi rich-text blocks to HTML")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a JSON block array read from a file or stdin
    Render {
        /// Input JSON file (stdin when omitted or "-")
        input: Option<PathBuf>,

        /// JSON pointer to the block array, e.g. /data/body
        #[arg(short, long)]
        pointer: Option<String>,
    },

    /// Fetch a resource from the content API
    Fetch {
        /// Resource path below /api/, e.g. "homepage"
        slug: String,

        /// Content locale
        #[arg(short, long, default_value = "pl")]
        lang: Language,

        /// Relation to populate (repeatable)
        #[arg(long)]
        populate: Vec<String>,

        /// Equality filter as FIELD=VALUE (repeatable)
        #[arg(long, value_parser = parse_filter)]
        filter: Vec<(String, String)>,

        /// API server root (defaults to API_SERVER_URL)
        #[arg(long)]
        server: Option<String>,

        /// Render the block array at this JSON pointer instead of printing the data
        #[arg(short, long)]
        pointer: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Render { input, pointer } => {
            let source = read_input(input.as_deref())?;
            tracing::debug!(bytes = source.len(), "rendering document");
            println!("{}", render_document(&source, pointer.as_deref())?);
        }

        Command::Fetch {
            slug,
            lang,
            populate,
            filter,
            server,
            pointer,
        } => {
            let config = match server {
                Some(server) => FetchConfig::new(server)?,
                None => FetchConfig::from_env()?,
            };
            let client = ContentClient::new(config)?;
            let request = build_request(slug, lang, populate, filter);
            tracing::debug!(slug = %request.slug, lang = %request.lang, "fetching content");

            let data = client.fetch(&request).await?;
            match pointer {
                Some(pointer) => {
                    let blocks = select(&data, Some(&pointer))?;
                    println!("{}", blocks_core::render_value(blocks));
                }
                None => println!("{}", serde_json::to_string_pretty(&data)?),
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .init();
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Error reading {}", path.display())),
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Error reading stdin")?;
            Ok(source)
        }
    }
}

fn render_document(source: &str, pointer: Option<&str>) -> Result<String> {
    let document: Value = serde_json::from_str(source).context("Input is not valid JSON")?;
    let blocks = select(&document, pointer)?;
    if !blocks.is_array() {
        bail!("Expected a JSON array of blocks");
    }
    Ok(blocks_core::render_value(blocks))
}

fn select<'a>(document: &'a Value, pointer: Option<&str>) -> Result<&'a Value> {
    match pointer {
        Some(pointer) => document
            .pointer(pointer)
            .ok_or_else(|| anyhow!("Nothing found at JSON pointer {pointer}")),
        None => Ok(document),
    }
}

fn build_request(
    slug: String,
    lang: Language,
    populate: Vec<String>,
    filters: Vec<(String, String)>,
) -> ContentRequest {
    let mut query = Query::new();
    if !populate.is_empty() {
        query = query.populate(populate);
    }
    for (field, value) in filters {
        query = query.filter(field, FilterOperation::eq(value));
    }

    let request = ContentRequest::new(slug).lang(lang);
    if query.is_empty() {
        request
    } else {
        request.query(query)
    }
}

fn parse_filter(arg: &str) -> std::result::Result<(String, String), String> {
    match arg.split_once('=') {
        Some((field, value)) if !field.is_empty() => Ok((field.to_string(), value.to_string())),
        _ => Err(format!("expected FIELD=VALUE, got {arg:?}")),
    }
}
