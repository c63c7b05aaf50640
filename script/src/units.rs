//! Conversions between whole-token strings and base units.
use alloy::primitives::{
    utils::{format_units, parse_units},
    U256,
};
use eyre::WrapErr;

/// Decimals of the token.
pub const DECIMALS: u8 = 18;

/// Parse a decimal amount of whole tokens, e.g. `"1000"` or `"0.5"`, into
/// base units.
///
/// # Errors
///
/// May fail if `amount` is not a non-negative decimal number or has more
/// than [`DECIMALS`] fractional digits.
pub fn parse_tokens(amount: &str) -> eyre::Result<U256> {
    let parsed = parse_units(amount, DECIMALS)
        .wrap_err(format!("invalid token amount {amount}"))?;
    eyre::ensure!(
        !parsed.is_negative(),
        "token amount {amount} must not be negative"
    );
    Ok(parsed.get_absolute())
}

/// Render base units as whole tokens, keeping at least one fractional digit:
/// `1000 * 10^18` becomes `"1000.0"`.
#[must_use]
pub fn format_tokens(amount: U256) -> String {
    let Ok(formatted) = format_units(amount, DECIMALS) else {
        return amount.to_string();
    };

    let trimmed = formatted.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}
