/// Currency rendering contract.
///
/// The session takes the formatter as a plain function pointer; locale and
/// symbol choices never leak into the pricing core.
pub type CurrencyFormatter = fn(f64) -> String;

/// Default renderer: Brazilian real with two decimals, e.g. `R$ 19.90`.
pub fn format_value(value: f64) -> String {
    format!("R$ {:.2}", value)
}
