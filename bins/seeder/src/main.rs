//! Database seeder for Parcel development and testing.
//!
//! Replaces every stored transaction with randomized sales across French
//! cities over the past 90 days, plus a few fixed high-margin sales dated now.
//!
//! Usage: cargo run --bin seeder

use std::ops::RangeInclusive;

use anyhow::Context;
use chrono::{DateTime, Duration, Utc};
use parcel_core::transaction::{NewTransaction, PropertyType};
use parcel_db::TransactionRepository;
use rand::Rng;
use rust_decimal::Decimal;

/// Number of randomized sales.
const RANDOM_SALES: usize = 30;

/// How far back randomized sales may be dated.
const HISTORY_DAYS: i64 = 90;

const CITIES: [&str; 15] = [
    "Paris",
    "Lyon",
    "Marseille",
    "Toulouse",
    "Nice",
    "Nantes",
    "Strasbourg",
    "Montpellier",
    "Bordeaux",
    "Lille",
    "Rennes",
    "Reims",
    "Le Havre",
    "Saint-Étienne",
    "Toulon",
];

/// Realistic value ranges for one kind of property.
struct Profile {
    /// Square meters.
    area: RangeInclusive<u32>,
    /// Euros per square meter.
    price_per_sqm: RangeInclusive<u32>,
    /// Cost as a share of net value, in basis points.
    cost_ratio_bp: RangeInclusive<u32>,
}

impl Profile {
    fn for_type(property_type: PropertyType) -> Self {
        match property_type {
            PropertyType::Apartment => Self {
                area: 30..=129,
                price_per_sqm: 3_000..=7_999,
                cost_ratio_bp: 7_000..=9_000,
            },
            PropertyType::House => Self {
                area: 80..=229,
                price_per_sqm: 2_000..=4_999,
                cost_ratio_bp: 6_500..=9_000,
            },
            PropertyType::Land => Self {
                area: 500..=2_499,
                price_per_sqm: 50..=249,
                cost_ratio_bp: 6_000..=9_000,
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

    println!("Connecting to database...");
    let db = parcel_db::connect(&database_url)
        .await
        .context("Failed to connect to database")?;
    let repo = TransactionRepository::new(db);

    let removed = repo.delete_all().await?;
    println!("Cleared {removed} existing transactions");

    let now = Utc::now();
    let mut rng = rand::rng();
    let mut sales: Vec<NewTransaction> = (0..RANDOM_SALES)
        .map(|_| random_sale(&mut rng, now))
        .collect();
    sales.extend(showcase_sales(now));

    for sale in &sales {
        repo.create(sale.clone()).await?;
    }

    println!("Successfully seeded {} transactions", sales.len());
    Ok(())
}

/// A sale with a random city, type and date, priced by its type's profile.
fn random_sale<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> NewTransaction {
    let city = CITIES[rng.random_range(0..CITIES.len())];
    let property_type = PropertyType::ALL[rng.random_range(0..PropertyType::ALL.len())];
    let profile = Profile::for_type(property_type);

    let area = Decimal::from(rng.random_range(profile.area));
    let net_value = area * Decimal::from(rng.random_range(profile.price_per_sqm));
    let cost_ratio_bp = Decimal::from(rng.random_range(profile.cost_ratio_bp));
    let cost = (net_value * cost_ratio_bp / Decimal::from(10_000)).round();
    let days_ago = rng.random_range(0..HISTORY_DAYS);

    NewTransaction {
        city: city.to_string(),
        property_type,
        area,
        transaction_date: now - Duration::days(days_ago),
        transaction_net_value: net_value,
        transaction_cost: cost,
    }
}

/// Fixed high-margin sales so the reports always have something to rank.
fn showcase_sales(now: DateTime<Utc>) -> [NewTransaction; 3] {
    let sale = |city: &str, property_type, area: u32, net: u32, cost: u32| NewTransaction {
        city: city.to_string(),
        property_type,
        area: Decimal::from(area),
        transaction_date: now,
        transaction_net_value: Decimal::from(net),
        transaction_cost: Decimal::from(cost),
    };

    [
        sale("Paris", PropertyType::Apartment, 120, 1_200_000, 800_000),
        sale("Lyon", PropertyType::House, 200, 900_000, 550_000),
        sale("Marseille", PropertyType::Land, 1_500, 300_000, 180_000),
    ]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_random_sales_are_valid_and_recent() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let sale = random_sale(&mut rng, now);
            sale.validate().expect("seeded sale should be valid");

            assert!(CITIES.contains(&sale.city.as_str()));
            assert!(sale.transaction_date <= now);
            assert!(sale.transaction_date > now - Duration::days(HISTORY_DAYS));
            assert!(sale.transaction_cost < sale.transaction_net_value);
        }
    }

    #[test]
    fn test_showcase_sales_have_positive_margin() {
        for sale in showcase_sales(Utc::now()) {
            sale.validate().expect("showcase sale should be valid");
            assert!(sale.transaction_net_value > sale.transaction_cost);
        }
    }
}
