//! Goals Report Example
//!
//! This example demonstrates how to use fintual-client to:
//! - Browse public fund data (providers, funds, series, daily prices)
//! - Authenticate and list the user's goals
//! - Handle errors by kind
//!
//! Credentials are read from `FINTUAL_EMAIL` and `FINTUAL_PASSWORD` (a `.env`
//! file works too). Without them only the public part runs.

use fintual_client::{ConceptualAssetListParams, Decimal, Error, FintualClient};
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  dotenvy::dotenv().ok();
  let client = FintualClient::from_env()?;

  let providers = client.asset_providers().list().await?;
  println!("Asset providers: {}", providers.len());

  let Some(fintual) = providers.iter().find(|p| p.attributes.name == "Fintual") else {
    println!("Fintual is not listed as an asset provider");
    return Ok(());
  };

  let funds = client
    .conceptual_assets()
    .list_by_asset_provider(&fintual.id, Some(&ConceptualAssetListParams::default()))
    .await?;

  for fund in &funds {
    println!("\n{} [{}] {}", fund.attributes.name, fund.attributes.currency, fund.attributes.run);

    for series in client.real_assets().list_by_conceptual_asset(&fund.id).await? {
      let last = &series.attributes.last_day;
      println!("  {:<6} {} @ {}", series.attributes.serie, last.rate, last.date);

      let days = client.real_assets().days_between(&series.id, "2021-01-01", "2021-01-31").await?;
      if let (Some(first), Some(last)) = (days.first(), days.last()) {
        println!("    January 2021: {} -> {}", first.attributes.price, last.attributes.price);
      }
    }
  }

  let (Ok(email), Ok(password)) = (env::var("FINTUAL_EMAIL"), env::var("FINTUAL_PASSWORD")) else {
    println!("\nSet FINTUAL_EMAIL and FINTUAL_PASSWORD to list goals");
    return Ok(());
  };

  match client.authenticate(&email, &password).await {
    Ok(()) => {}
    Err(Error::AuthenticationFailed(reason)) => {
      eprintln!("Login rejected: {}", reason);
      return Ok(());
    }
    Err(e) => return Err(e.into()),
  }

  println!("\nGoals for {}:", email);
  for goal in client.goals().list().await? {
    let ratio = goal.attributes.return_ratio().map(|r| format!("{:.2}%", r * Decimal::ONE_HUNDRED));
    println!(
      "  {:<24} nav {:>14} return {}",
      goal.attributes.name,
      goal.attributes.net_asset_value,
      ratio.unwrap_or_else(|| "n/a".to_string())
    );
  }

  Ok(())
}
