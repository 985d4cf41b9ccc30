use std::env;
use std::error::Error;
use std::io::{self, Write};
use std::process;
use std::sync::Arc;

use go_marketplace_cart::config::storage_path_from_env;
use go_marketplace_cart::storage::FileStorage;
use go_marketplace_cart::{use_cart, CartConfig, CartProvider, CartStore, NewLineItem};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: go-marketplace-cart <list | add <id> <title> <image_url> <price> | increment <id> | decrement <id>>";

#[tokio::main]
async fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "go_marketplace_cart=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run_app().await {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

async fn run_app() -> Result<(), Box<dyn Error + Send + Sync>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = CartConfig::from_env()?;
    let storage = FileStorage::new(storage_path_from_env());
    tracing::debug!(path = %storage.path().display(), "using file storage");

    let cart = CartStore::load(Arc::new(storage), config).await?;
    let provider = CartProvider::new(cart);
    provider.scope(run_command(args)).await
}

async fn run_command(args: Vec<String>) -> Result<(), Box<dyn Error + Send + Sync>> {
    let cart = use_cart()?;
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["list"] => {}
        ["add", id, title, image_url, price] => {
            let price: Decimal = price.parse()?;
            cart.add_to_cart(NewLineItem {
                id: id.to_string(),
                title: title.to_string(),
                image_url: image_url.to_string(),
                price,
            })
            .await?;
        }
        ["increment", id] => cart.increment(id).await?,
        ["decrement", id] => cart.decrement(id).await?,
        _ => return Err(USAGE.into()),
    }

    // One JSON object per line, in cart order
    let mut stdout = io::stdout().lock();
    for item in cart.products() {
        serde_json::to_writer(&mut stdout, &item)?;
        writeln!(stdout)?;
    }
    Ok(())
}
