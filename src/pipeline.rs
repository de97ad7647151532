// Request pipeline: extraction -> dynamic values -> pricing -> offer
use std::sync::Arc;

use crate::config::MarketConfig;
use crate::error::ProcessingError;
use crate::offer::{DynamicValues, PricedOffer};
use crate::pricing::{PricingEngine, PricingService};
use crate::request::{RequestParser, XmlRequestParser};
use crate::supplier_code::{CodeGenerator, RandomCodeGenerator};

pub struct AvailabilityProcessor {
    config: Arc<MarketConfig>,
    parser: Box<dyn RequestParser>,
    pricing: Box<dyn PricingEngine>,
    codes: Box<dyn CodeGenerator>,
}

impl AvailabilityProcessor {
    /// Production wiring: XML parser on the system clock, random supplier codes.
    pub fn new(config: Arc<MarketConfig>) -> Self {
        Self::with_components(
            Arc::clone(&config),
            Box::new(XmlRequestParser::new(config)),
            Box::new(PricingService),
            Box::new(RandomCodeGenerator),
        )
    }

    pub fn with_components(
        config: Arc<MarketConfig>,
        parser: Box<dyn RequestParser>,
        pricing: Box<dyn PricingEngine>,
        codes: Box<dyn CodeGenerator>,
    ) -> Self {
        tracing::debug!("availability processor initialized");
        Self {
            config,
            parser,
            pricing,
            codes,
        }
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    // Never fails: unknown keys resolve to the configured defaults
    pub fn dynamic_values(&self, currency: &str, nationality: &str) -> DynamicValues {
        let values = DynamicValues {
            exchange_rate: self.config.exchange_rate_for(currency),
            markup: self.config.markup_for(nationality),
            net_price: self.config.default_net_price,
        };
        tracing::info!(
            currency,
            nationality,
            exchange_rate = values.exchange_rate,
            markup = values.markup,
            net_price = values.net_price,
            "resolved dynamic values"
        );
        values
    }

    pub fn process(&self, raw_xml: &str) -> Result<PricedOffer, ProcessingError> {
        tracing::debug!("processing XML request");
        let request = self.parser.parse(raw_xml)?;

        let hotel_code = self.codes.supplier_code();
        let values = self.dynamic_values(&request.currency, &request.nationality);

        let selling_price = self
            .pricing
            .calculate_selling_price(values.net_price, values.markup);
        let converted_price = self
            .pricing
            .convert_currency(selling_price, values.exchange_rate);

        if !converted_price.is_finite() {
            return Err(ProcessingError::Internal(format!(
                "computed price for hotel {hotel_code} is not a finite number"
            )));
        }

        tracing::info!(
            hotel_code = %hotel_code,
            net_price = values.net_price,
            selling_price,
            converted_price,
            exchange_rate = values.exchange_rate,
            "priced hotel offer"
        );

        Ok(PricedOffer::assemble(
            &request,
            hotel_code,
            self.config.default_market.clone(),
            values,
            converted_price,
        ))
    }
}
