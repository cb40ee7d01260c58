/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64) -> String;
}

/// Two-decimal amount followed by a currency code.
#[derive(Debug, Clone)]
pub struct PlainCurrencyFormatter {
    currency: String,
}

impl PlainCurrencyFormatter {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }
}

impl CurrencyFormatter for PlainCurrencyFormatter {
    fn format_amount(&self, amount: f64) -> String {
        if self.currency.is_empty() {
            format!("{amount:.2}")
        } else {
            format!("{amount:.2} {}", self.currency)
        }
    }
}
