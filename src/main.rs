use chrono::Local;
use dotenvy::dotenv;
use nutrition_tracker::{
    NutritionStore,
    config,
    core::{NewFoodItem, NewMealEntry, validate_food_item, validate_meal_entry},
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal since env vars can be set externally
    dotenv().ok();

    // 3. Resolve where the store lives
    let store_config = config::load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Open the store
    let store = NutritionStore::open_with_config(&store_config)
        .await
        .inspect_err(|e| error!("Failed to open nutrition store: {}", e))?;

    // 5. Register a sample food item and log a meal with it
    let chicken = NewFoodItem::new("Chicken Breast", 165.0, 31.0, 0.0, 3.6, 100.0);
    validate_food_item(&chicken)?;
    let chicken_id = store.add_food_item(&chicken).await?;

    let now = Local::now().naive_local();
    let meal = NewMealEntry::new(chicken_id, 200.0, now);
    validate_meal_entry(&meal)?;
    store.add_meal_entry(&meal).await?;

    // 6. Report today's totals
    let totals = store.get_daily_totals(now).await?;
    info!("Daily totals computed for {}", now.date());
    println!("Daily totals: {totals}");

    store.close().await
}
