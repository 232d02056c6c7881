use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CalzikError;

/// Sequential invoice number, printed as `YYYY-NNNN`.
///
/// Ordering follows (year, sequence), so numbers handed out one after the
/// other compare strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InvoiceNumber {
    year: i32,
    seq: u32,
}

impl InvoiceNumber {
    pub fn new(year: i32, seq: u32) -> Self {
        InvoiceNumber { year, seq }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn seq(&self) -> u32 {
        self.seq
    }
}

impl fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:04}", self.year, self.seq)
    }
}

impl FromStr for InvoiceNumber {
    type Err = CalzikError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalzikError::Validation(format!("invalid invoice number '{}'", s));
        let (year, seq) = s.trim().split_once('-').ok_or_else(invalid)?;
        Ok(InvoiceNumber {
            year: year.parse().map_err(|_| invalid())?,
            seq: seq.parse().map_err(|_| invalid())?,
        })
    }
}

impl Serialize for InvoiceNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for InvoiceNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Issuer or recipient of an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub siret: Option<String>,
    #[serde(
        rename = "vat",
        alias = "vatNumber",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub vat_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub number: InvoiceNumber,
    pub provider: Party,
    pub client: Party,
    pub service_title: String,
    #[serde(default)]
    pub location: String,
    pub service_date: NaiveDate,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub attendees: String,
    #[serde(rename = "amountHT", alias = "amountHt")]
    pub amount_ht: f64,
    pub vat_rate: f64,
    pub vat_amount: f64,
    #[serde(rename = "amountTTC", alias = "amountTtc")]
    pub amount_ttc: f64,
    #[serde(default)]
    pub is_paid: bool,
}

impl Invoice {
    /// Id of the reminder raised while this invoice is overdue.
    pub fn notification_id(&self) -> String {
        format!("invoice-{}", self.id)
    }

    pub fn due_date(&self, overdue_days: i64) -> NaiveDate {
        self.service_date + Duration::days(overdue_days)
    }

    /// Unpaid and past its due date.
    pub fn is_overdue(&self, today: NaiveDate, overdue_days: i64) -> bool {
        !self.is_paid && self.due_date(overdue_days) < today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_format_and_order() {
        let first = InvoiceNumber::new(2025, 9);
        let second = InvoiceNumber::new(2025, 10);
        let next_year = InvoiceNumber::new(2026, 1);

        assert_eq!(first.to_string(), "2025-0009");
        assert_eq!(second.to_string(), "2025-0010");
        assert!(first < second);
        assert!(second < next_year);
        assert_eq!("2025-0010".parse::<InvoiceNumber>().unwrap(), second);
        assert!("20250010".parse::<InvoiceNumber>().is_err());
    }

    #[test]
    fn overdue_is_strictly_after_delay() {
        let invoice: Invoice = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "number": "2025-0001",
            "provider": { "name": "CalZik" },
            "client": { "name": "Salle des Fêtes" },
            "serviceTitle": "Concert de Noël",
            "serviceDate": "2025-01-01",
            "amountHt": 100.0,
            "vatRate": 20.0,
            "vatAmount": 20.0,
            "amountTtc": 120.0
        }))
        .unwrap();

        let due = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(invoice.due_date(30), due);
        assert!(!invoice.is_overdue(due, 30));
        assert!(invoice.is_overdue(due.succ_opt().unwrap(), 30));
        assert_eq!(invoice.notification_id(), "invoice-abc");
    }

    // --- stored layout ---

    #[test]
    fn amounts_are_stored_with_upper_case_suffixes() {
        let invoice: Invoice = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "number": "2025-0001",
            "provider": { "name": "CalZik", "vatNumber": "FR00123456789" },
            "client": { "name": "Salle des Fêtes" },
            "serviceTitle": "Concert de Noël",
            "serviceDate": "2025-01-01",
            "amountHt": 100.0,
            "vatRate": 20.0,
            "vatAmount": 20.0,
            "amountTtc": 120.0
        }))
        .unwrap();
        assert_eq!(invoice.provider.vat_number.as_deref(), Some("FR00123456789"));

        let json = serde_json::to_value(&invoice).unwrap();
        assert_eq!(json["amountHT"], 100.0);
        assert_eq!(json["amountTTC"], 120.0);
        assert_eq!(json["provider"]["vat"], "FR00123456789");
        assert!(json.get("amountHt").is_none());
        assert!(json.get("amountTtc").is_none());
        assert!(json["provider"].get("vatNumber").is_none());
        assert!(json["client"].get("vat").is_none());
    }
}
