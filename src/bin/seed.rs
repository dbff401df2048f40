//! Development fixture seeder.
//!
//! Inserts the demo accounts used by local frontends and manual testing:
//! a buyer with a default shipping address and a seller with an open shop.
//! Safe to run repeatedly; existing fixtures are left untouched.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use shopwave_auth::password::PasswordHasher;
use shopwave_core::config::AppConfig;
use shopwave_core::error::AppError;
use shopwave_database::Stores;
use shopwave_entity::address::CreateAddress;
use shopwave_entity::shop::CreateShop;
use shopwave_entity::user::{CreateUser, UserRole};

/// ShopWave development data seeder
#[derive(Debug, Parser)]
#[command(name = "shopwave-seed", version, about, long_about = None)]
struct Cli {
    /// Configuration environment to load
    #[arg(short, long, default_value = "development")]
    env: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), AppError> {
    let config = AppConfig::load(&cli.env)?;

    if config.database.provider == "memory" {
        tracing::warn!("Seeding the in-memory provider; data is lost when this process exits");
    }

    let stores = Stores::connect(&config.database).await?;
    let hasher = PasswordHasher::new();

    seed_buyer(&stores, &hasher).await?;
    seed_seller(&stores, &hasher).await?;

    tracing::info!("Seed complete");
    Ok(())
}

/// Buyer fixture: test@example.com with a default "Home" address.
async fn seed_buyer(stores: &Stores, hasher: &PasswordHasher) -> Result<(), AppError> {
    if stores
        .users
        .find_by_email("test@example.com")
        .await?
        .is_some()
    {
        tracing::info!("Buyer fixture already present, skipping");
        return Ok(());
    }

    let user = stores
        .users
        .create(&CreateUser {
            name: "Test Buyer".to_string(),
            email: "test@example.com".to_string(),
            password_hash: hasher.hash_password("password123")?,
            role: UserRole::Buyer,
            image_url: None,
        })
        .await?;

    stores
        .addresses
        .create(&CreateAddress {
            user_id: user.id,
            label: "Home".to_string(),
            street: "123 Main St".to_string(),
            city: "Jakarta".to_string(),
            province: "DKI Jakarta".to_string(),
            postal_code: "12345".to_string(),
            is_default: true,
        })
        .await?;

    tracing::info!(user_id = %user.id, "Seeded buyer test@example.com");
    Ok(())
}

/// Seller fixture: seller@example.com with the shop "Test Shop".
async fn seed_seller(stores: &Stores, hasher: &PasswordHasher) -> Result<(), AppError> {
    if stores
        .users
        .find_by_email("seller@example.com")
        .await?
        .is_some()
    {
        tracing::info!("Seller fixture already present, skipping");
        return Ok(());
    }

    let user = stores
        .users
        .create(&CreateUser {
            name: "Test Seller".to_string(),
            email: "seller@example.com".to_string(),
            password_hash: hasher.hash_password("password123")?,
            role: UserRole::Seller,
            image_url: None,
        })
        .await?;

    let shop = stores
        .shops
        .create(&CreateShop::new(user.id, "Test Shop", None))
        .await?;

    tracing::info!(user_id = %user.id, shop_id = %shop.id, "Seeded seller seller@example.com");
    Ok(())
}
