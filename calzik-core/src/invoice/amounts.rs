//! HT / VAT / TTC derivation.
//!
//! All derived amounts are rounded to cents. The form keeps the two amount
//! fields consistent: editing one recomputes the other from the current rate,
//! editing the rate recomputes TTC from HT. Unparseable amounts never raise,
//! they blank the derived field.

use crate::constants::DEFAULT_VAT_RATE;

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parse a user-typed amount. Accepts a decimal comma.
pub fn parse_amount(input: &str) -> Option<f64> {
    let normalized = input.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a VAT rate in percent. Anything unusable counts as 0.
pub fn parse_rate(input: &str) -> f64 {
    parse_amount(input).filter(|r| *r >= 0.0).unwrap_or(0.0)
}

pub fn vat_amount(ht: f64, rate: f64) -> f64 {
    round2(ht * rate / 100.0)
}

pub fn ttc_from_ht(ht: f64, rate: f64) -> f64 {
    round2(ht + vat_amount(ht, rate))
}

pub fn ht_from_ttc(ttc: f64, rate: f64) -> f64 {
    round2(ttc / (1.0 + rate / 100.0))
}

/// A consistent set of invoice amounts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amounts {
    pub ht: f64,
    pub vat_rate: f64,
    pub vat: f64,
    pub ttc: f64,
}

impl Amounts {
    pub fn from_ht(ht: f64, vat_rate: f64) -> Self {
        Amounts {
            ht,
            vat_rate,
            vat: vat_amount(ht, vat_rate),
            ttc: ttc_from_ht(ht, vat_rate),
        }
    }
}

/// The amount fields of the invoice form, as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountForm {
    amount_ht: String,
    vat_rate: String,
    amount_ttc: String,
}

impl Default for AmountForm {
    fn default() -> Self {
        AmountForm::new(DEFAULT_VAT_RATE)
    }
}

impl AmountForm {
    pub fn new(vat_rate: &str) -> Self {
        AmountForm {
            amount_ht: String::new(),
            vat_rate: vat_rate.to_string(),
            amount_ttc: String::new(),
        }
    }

    pub fn amount_ht(&self) -> &str {
        &self.amount_ht
    }

    pub fn vat_rate(&self) -> &str {
        &self.vat_rate
    }

    pub fn amount_ttc(&self) -> &str {
        &self.amount_ttc
    }

    pub fn set_amount_ht(&mut self, value: &str) {
        self.amount_ht = value.to_string();
        self.amount_ttc = match parse_amount(value) {
            Some(ht) => format!("{:.2}", ttc_from_ht(ht, self.rate())),
            None => String::new(),
        };
    }

    pub fn set_amount_ttc(&mut self, value: &str) {
        self.amount_ttc = value.to_string();
        self.amount_ht = match parse_amount(value) {
            Some(ttc) => format!("{:.2}", ht_from_ttc(ttc, self.rate())),
            None => String::new(),
        };
    }

    pub fn set_vat_rate(&mut self, value: &str) {
        self.vat_rate = value.to_string();
        let ht = self.amount_ht.clone();
        self.set_amount_ht(&ht);
    }

    fn rate(&self) -> f64 {
        parse_rate(&self.vat_rate)
    }

    /// Amounts to put on the invoice, or `None` while HT is not a number.
    pub fn amounts(&self) -> Option<Amounts> {
        let ht = parse_amount(&self.amount_ht)?;
        let rate = self.rate();
        let mut amounts = Amounts::from_ht(ht, rate);
        if let Some(ttc) = parse_amount(&self.amount_ttc) {
            amounts.ttc = ttc;
        }
        Some(amounts)
    }
}
