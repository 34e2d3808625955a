use rahgozar_catalog::{Catalog, Flight, Quote, QuoteEngine};
use rahgozar_core::{
    format_number, localize_digits, translate, JsonFilePreferences, Language, MemoryPreferences,
    MessageKey, PaymentGateway, PreferenceStore, SimulatedGateway, Theme, TransactionIdGenerator,
};
use rahgozar_session::{BookingSession, SessionStore};
use rahgozar_shared::SessionChanged;
use rahgozar_wizard::{FlowContext, WizardFlow, WizardRunner};
use tokio::sync::broadcast;

use crate::app_config::Config;
use crate::error::{AppError, AppResult};
use crate::routes::{self, Navigation, Route};

/// Everything a running client holds: one booking session, the catalog,
/// localization state and the pieces the wizards need to confirm.
pub struct App {
    config: Config,
    catalog: Catalog,
    quotes: QuoteEngine,
    store: SessionStore,
    ids: TransactionIdGenerator,
    preferences: Box<dyn PreferenceStore>,
    /// Replaces the per-flow simulated gateway when set.
    gateway: Option<Box<dyn PaymentGateway>>,
    language: Language,
    current: Option<Route>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let preferences: Box<dyn PreferenceStore> = match &config.preferences.path {
            Some(path) => Box::new(JsonFilePreferences::new(path)),
            None => Box::new(MemoryPreferences::new()),
        };
        let ids = match config.transactions.seed {
            Some(seed) => TransactionIdGenerator::seeded(seed),
            None => TransactionIdGenerator::random(),
        };

        Self {
            catalog: Catalog::mock(),
            quotes: QuoteEngine::new(config.quotes.clone()),
            store: SessionStore::new(),
            ids,
            preferences,
            gateway: None,
            language: config.locale.language,
            current: None,
            config,
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_gateway(mut self, gateway: Box<dyn PaymentGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    pub fn with_preferences(mut self, preferences: Box<dyn PreferenceStore>) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &BookingSession {
        self.store.session()
    }

    pub fn store_mut(&mut self) -> &mut SessionStore {
        &mut self.store
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionChanged> {
        self.store.subscribe()
    }

    pub fn current_route(&self) -> Option<Route> {
        self.current
    }

    // --- routing ---

    /// Moves to `location`. Leaving a confirmation page first clears the
    /// booking; the target is then guarded against the resulting session.
    pub fn navigate(&mut self, location: &str) -> Navigation {
        if let Some(current) = self.current {
            if Route::parse(location) != Some(current) {
                self.leave();
            }
        }

        let navigation = routes::resolve(location, self.store.session(), &self.catalog);
        self.current = match &navigation {
            Navigation::Render(route) => Some(*route),
            Navigation::Redirect(to) => Route::parse(to),
            Navigation::Unmatched => None,
        };
        tracing::info!(location, outcome = ?navigation, "navigated");
        navigation
    }

    /// Unmounts the current page. Returns whether the booking was cleared.
    pub fn leave(&mut self) -> bool {
        match self.current.take() {
            Some(route) if route.is_terminal() => {
                tracing::info!(page = ?route.page, "leaving confirmation, clearing booking");
                self.store.clear_booking();
                true
            }
            _ => false,
        }
    }

    // --- catalog selections ---

    pub fn search_flights(&self, origin: &str, destination: &str) -> Vec<&Flight> {
        self.catalog.search_flights(origin, destination).collect()
    }

    pub fn select_flight(&mut self, id: u32) -> AppResult<()> {
        let flight = self
            .catalog
            .flight(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("flight {}", id)))?;
        self.store.select_flight(flight);
        Ok(())
    }

    pub fn select_hotel(&mut self, id: u32) -> AppResult<()> {
        let hotel = self
            .catalog
            .hotel(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("hotel {}", id)))?;
        self.store.select_hotel(hotel);
        Ok(())
    }

    pub fn select_train(&mut self, id: u32) -> AppResult<()> {
        let train = self
            .catalog
            .train(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("train {}", id)))?;
        self.store.select_train(train);
        Ok(())
    }

    // --- localization ---

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        tracing::info!(language = language.code(), "language changed");
        self.language = language;
    }

    pub fn t(&self, key: MessageKey) -> &'static str {
        translate(self.language, key)
    }

    pub fn digits(&self, text: &str) -> String {
        localize_digits(self.language, text)
    }

    pub fn amount(&self, rial: i64) -> String {
        format_number(self.language, rial)
    }

    // --- preferences ---

    pub fn theme(&self) -> AppResult<Theme> {
        Ok(self.preferences.theme()?)
    }

    pub fn set_theme(&self, theme: Theme) -> AppResult<()> {
        Ok(self.preferences.set_theme(theme)?)
    }

    // --- wizards ---

    pub fn wizard<F: WizardFlow>(&self) -> WizardRunner<F> {
        WizardRunner::new()
    }

    pub fn flow_context(&self) -> FlowContext<'_> {
        FlowContext::new(&self.catalog, &self.quotes)
    }

    pub fn advance<F: WizardFlow>(&self, runner: &mut WizardRunner<F>) -> AppResult<usize> {
        Ok(runner.next(&self.flow_context())?)
    }

    pub fn quote<F: WizardFlow>(&self, runner: &WizardRunner<F>) -> Quote {
        runner.quote(&self.flow_context())
    }

    /// Pays (unless the flow is free), mints the transaction ID and publishes
    /// the result into the booking session.
    pub async fn confirm<F: WizardFlow>(
        &mut self,
        runner: &mut WizardRunner<F>,
    ) -> AppResult<F::Committed> {
        let ctx = FlowContext::new(&self.catalog, &self.quotes);
        let simulated;
        let gateway: &dyn PaymentGateway = match &self.gateway {
            Some(gateway) => gateway.as_ref(),
            None => {
                simulated = SimulatedGateway::new(self.config.latency.for_flow(F::NAME));
                &simulated
            }
        };

        let committed = runner
            .confirm(&ctx, &mut self.store, &mut self.ids, gateway)
            .await?;
        Ok(committed)
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("session_id", &self.store.id())
            .field("language", &self.language)
            .field("current", &self.current)
            .field("occupied", &self.store.session().occupied())
            .finish()
    }
}
