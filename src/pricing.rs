// Markup and currency conversion. Arithmetic runs on decimals and every
// amount is rounded to cents with half-away-from-zero rounding, so binary
// float artefacts never decide a midpoint.
use rust_decimal::{Decimal, RoundingStrategy};

pub trait PricingEngine: Send + Sync {
    /// Applies a percentage markup to a net price.
    fn calculate_selling_price(&self, net_price: f64, markup_percent: f64) -> f64;

    fn convert_currency(&self, amount: f64, exchange_rate: f64) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PricingService;

impl PricingEngine for PricingService {
    fn calculate_selling_price(&self, net_price: f64, markup_percent: f64) -> f64 {
        let selling_price = to_decimal(net_price)
            .zip(to_decimal(markup_percent))
            .and_then(|(net, markup)| {
                let factor = Decimal::ONE.checked_add(markup.checked_div(Decimal::ONE_HUNDRED)?)?;
                net.checked_mul(factor)
            })
            .map_or(f64::NAN, cents_to_f64);
        tracing::debug!(net_price, markup_percent, selling_price, "calculated selling price");
        selling_price
    }

    fn convert_currency(&self, amount: f64, exchange_rate: f64) -> f64 {
        let converted = to_decimal(amount)
            .zip(to_decimal(exchange_rate))
            .and_then(|(amount, rate)| amount.checked_mul(rate))
            .map_or(f64::NAN, cents_to_f64);
        tracing::debug!(amount, exchange_rate, converted, "converted amount");
        converted
    }
}

/// Rounds to two decimal places, half away from zero, taking the value as
/// written (`1.255` rounds to `1.26` even though the nearest `f64` sits just
/// below the midpoint). Returns NaN when the value has no decimal form.
pub fn round_to_cents(value: f64) -> f64 {
    to_decimal(value).map_or(f64::NAN, cents_to_f64)
}

// Shortest round-trip text of the float, so 2.675 becomes exactly 2.675.
// NaN, infinities and magnitudes beyond the decimal range give None.
fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    value.to_string().parse::<Decimal>().ok()
}

fn cents_to_f64(value: Decimal) -> f64 {
    let cents = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // scale is at most 2 here, so this is one correctly rounded division
    cents.mantissa() as f64 / 10f64.powi(cents.scale() as i32)
}
