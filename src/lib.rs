// Hotel offer service: XML availability request -> priced hotel offer

pub mod api;
pub mod config;
pub mod error;
pub mod offer;
pub mod pipeline;
pub mod pricing;
pub mod request;
pub mod supplier_code;

// Re-export key types for convenience
pub use api::{build_app, AppState};
pub use config::{MarketConfig, RequestRules, ServerConfig};
pub use error::{ConfigError, ProcessingError, ValidationError};
pub use offer::{DynamicValues, Price, PricedOffer};
pub use pipeline::AvailabilityProcessor;
pub use pricing::{PricingEngine, PricingService};
pub use request::{Clock, ExtractedRequest, FixedClock, RequestParser, SystemClock, XmlRequestParser};
pub use supplier_code::{CodeGenerator, RandomCodeGenerator, SeededCodeGenerator};
