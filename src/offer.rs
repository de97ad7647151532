use serde::{Deserialize, Serialize};

use crate::request::ExtractedRequest;

// JSON response shape for a priced hotel offer
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PricedOffer {
    pub id: String,
    #[serde(rename = "hotelCodeSupplier")]
    pub hotel_code_supplier: String,
    pub market: String,
    pub price: Price,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Price {
    // Always null for now; serialized rather than skipped
    #[serde(rename = "minimumSellingPrice")]
    pub minimum_selling_price: Option<f64>,
    pub currency: String,
    pub net: f64,
    pub selling_price: f64,
    pub selling_currency: String,
    pub markup: f64,
    pub exchange_rate: f64,
}

// Derived per request from the market configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicValues {
    pub exchange_rate: f64,
    pub markup: f64,
    pub net_price: f64,
}

pub fn response_id(hotel_code_supplier: &str) -> String {
    format!("{hotel_code_supplier}-RESPONSE")
}

impl PricedOffer {
    pub fn assemble(
        request: &ExtractedRequest,
        hotel_code_supplier: String,
        market: String,
        values: DynamicValues,
        selling_price: f64,
    ) -> Self {
        PricedOffer {
            id: response_id(&hotel_code_supplier),
            hotel_code_supplier,
            market,
            price: Price {
                minimum_selling_price: None,
                currency: request.currency.clone(),
                net: values.net_price,
                selling_price,
                selling_currency: request.currency.clone(),
                markup: values.markup,
                exchange_rate: values.exchange_rate,
            },
        }
    }
}
