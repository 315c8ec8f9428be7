//! Price-derived display values.

/// Discount as a whole percentage of the original price.
///
/// Returns 0 when there is no original price or it does not exceed the
/// current price. Rounding is half away from zero; by the data invariant
/// (original price above current price) the result stays in `[0, 99]`.
pub fn discount_percent(price: f64, original_price: Option<f64>) -> u8 {
    match original_price {
        Some(original) if original > price => {
            (((original - price) / original) * 100.0).round() as u8
        }
        _ => 0,
    }
}
