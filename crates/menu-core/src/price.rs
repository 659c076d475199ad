pub const DEFAULT_CURRENCY: &str = "₺";

/// Renders a price as `12,50 ₺`. An absent price renders as an empty string,
/// never as zero.
#[must_use]
pub fn format_price(price: Option<f64>, currency: Option<&str>) -> String {
    let Some(price) = price else {
        return String::new();
    };

    let currency = currency.unwrap_or(DEFAULT_CURRENCY);
    let amount = to_fixed_two(price).replace('.', ",");
    format!("{amount} {currency}")
}

// Two decimals with exact midpoints rounded away from zero, the way browsers
// round `toFixed`. Only values that are whole eighths can sit exactly on a
// midpoint.
fn to_fixed_two(value: f64) -> String {
    let value = value + 0.0;
    let cents = value * 100.0;

    if (value * 8.0).fract() == 0.0 && cents.fract().abs() == 0.5 {
        let rounded = (cents.abs() + 0.5).copysign(cents) / 100.0;
        return format!("{rounded:.2}");
    }

    format!("{value:.2}")
}
