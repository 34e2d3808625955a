use anyhow::Context;
use rahgozar_app::{telemetry, App, Config};
use rahgozar_catalog::Passenger;
use rahgozar_core::MessageKey;
use rahgozar_shared::Masked;
use rahgozar_wizard::{CurrencyPurchaseDraft, CurrencyPurchaseFlow};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init()?;

    let config = Config::load().context("Failed to load config")?;
    let mut app = App::new(config);
    tracing::info!(language = app.language().code(), "Starting {}", app.t(MessageKey::AppName));

    let mut events = app.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            tracing::debug!(sequence = event.sequence, change = ?event.change, "session changed");
        }
    });

    // flight journey up to the review page
    app.navigate("#/flights");
    let flight_id = app
        .search_flights("THR", "MHD")
        .first()
        .map(|f| f.id)
        .context("no THR-MHD flight in the catalog")?;
    app.navigate(&format!("#/flights/{}", flight_id));
    app.select_flight(flight_id)?;
    app.navigate("#/flights/checkout/passengers");
    app.store_mut()
        .update_passengers(vec![Passenger::adult("Sara", "Karimi", "0012345678")]);
    app.navigate("#/flights/checkout/review");

    // switching to a currency purchase replaces the flight
    app.navigate("#/currency/buy");
    let mut runner = app.wizard::<CurrencyPurchaseFlow>();
    if let Some(draft) = runner.draft_mut() {
        *draft = CurrencyPurchaseDraft {
            currency_code: "USD".to_string(),
            amount: 200,
            national_id: Masked::from("0012345678"),
        };
    }
    while !runner.is_review() {
        app.advance(&mut runner)?;
    }
    let quote = app.quote(&runner);
    tracing::info!(
        total = %app.amount(quote.total_rial),
        "{}",
        app.t(MessageKey::Total)
    );

    let purchase = app.confirm(&mut runner).await?;
    app.navigate("#/currency/buy/confirmation");
    tracing::info!(
        transaction_id = %purchase.transaction_id,
        national_id = %purchase.national_id,
        "{}",
        app.t(MessageKey::PaymentSucceeded)
    );

    app.navigate("#/");
    tracing::info!(empty = app.session().is_empty(), "back home");
    Ok(())
}
