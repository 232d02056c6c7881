//! Invoicing: amount derivation and invoice drafts.

pub mod amounts;

pub use amounts::{AmountForm, Amounts};

use chrono::NaiveDate;

use crate::error::{CalzikError, CalzikResult};
use crate::model::{Invoice, InvoiceNumber, Party};
use crate::store::{self, Repository, keys};

/// Everything the invoice form collects before a number is assigned.
#[derive(Debug, Clone)]
pub struct InvoiceDraft {
    pub provider: Party,
    pub client: Party,
    pub service_title: String,
    pub location: String,
    pub service_date: NaiveDate,
    pub time: String,
    pub attendees: String,
    pub amounts: AmountForm,
}

impl InvoiceDraft {
    /// Check the draft and compute its amounts.
    pub fn validate(&self) -> CalzikResult<Amounts> {
        if self.provider.name.trim().is_empty() {
            return Err(CalzikError::Validation("provider name is required".into()));
        }
        if self.client.name.trim().is_empty() {
            return Err(CalzikError::Validation("client name is required".into()));
        }
        if self.service_title.trim().is_empty() {
            return Err(CalzikError::Validation("service title is required".into()));
        }
        self.amounts.amounts().ok_or_else(|| {
            CalzikError::Validation(format!(
                "amount HT '{}' is not a number",
                self.amounts.amount_ht()
            ))
        })
    }

    pub fn into_invoice(self, number: InvoiceNumber) -> CalzikResult<Invoice> {
        let amounts = self.validate()?;

        Ok(Invoice {
            id: crate::model::new_id(),
            number,
            provider: self.provider,
            client: self.client,
            service_title: self.service_title.trim().to_string(),
            location: self.location,
            service_date: self.service_date,
            time: self.time,
            attendees: self.attendees,
            amount_ht: amounts.ht,
            vat_rate: amounts.vat_rate,
            vat_amount: amounts.vat,
            amount_ttc: amounts.ttc,
            is_paid: false,
        })
    }
}

/// Reserve the next invoice number for `year`.
///
/// The counter stored under `invoiceSeq` is read, incremented and written
/// back before the number is returned. `floor` is the highest sequence
/// already in use, so a lost or corrupt counter never hands out a number
/// twice. This assumes a single writer: two processes sharing a data
/// directory can still race on the counter.
pub fn next_number(repo: &dyn Repository, year: i32, floor: u32) -> CalzikResult<InvoiceNumber> {
    let stored: u32 = store::load_value(repo, keys::INVOICE_SEQ).unwrap_or(0);
    let seq = stored.max(floor) + 1;
    store::save_value(repo, keys::INVOICE_SEQ, &seq)?;

    log::debug!("Reserved invoice sequence {}", seq);
    Ok(InvoiceNumber::new(year, seq))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryRepository;

    fn make_test_draft(ht: &str) -> InvoiceDraft {
        let mut amounts = AmountForm::default();
        amounts.set_amount_ht(ht);
        InvoiceDraft {
            provider: Party {
                name: "Association CalZik".to_string(),
                ..Party::default()
            },
            client: Party {
                name: "Salle des Fêtes".to_string(),
                ..Party::default()
            },
            service_title: "Concert".to_string(),
            location: "Lyon".to_string(),
            service_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            time: "20:00".to_string(),
            attendees: "150".to_string(),
            amounts,
        }
    }

    // --- numbering ---

    #[test]
    fn numbers_increase_from_stored_counter() {
        let repo = MemoryRepository::default();
        let first = next_number(&repo, 2025, 0).unwrap();
        let second = next_number(&repo, 2025, 0).unwrap();

        assert_eq!(first.to_string(), "2025-0001");
        assert_eq!(second.to_string(), "2025-0002");
        assert!(second > first);
    }

    #[test]
    fn corrupt_counter_falls_back_to_floor() {
        let repo = MemoryRepository::default();
        repo.write(keys::INVOICE_SEQ, "not a number").unwrap();

        let number = next_number(&repo, 2025, 41).unwrap();
        assert_eq!(number.seq(), 42);
        assert_eq!(store::load_value::<u32>(&repo, keys::INVOICE_SEQ), Some(42));
    }

    // --- drafts ---

    #[test]
    fn draft_requires_names_and_amount() {
        assert!(make_test_draft("100").validate().is_ok());
        assert!(matches!(
            make_test_draft("abc").validate(),
            Err(CalzikError::Validation(_))
        ));

        let mut draft = make_test_draft("100");
        draft.client.name = "  ".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn invoice_carries_derived_amounts() {
        let invoice = make_test_draft("100")
            .into_invoice(InvoiceNumber::new(2025, 3))
            .unwrap();
        assert_eq!(invoice.vat_amount, 20.0);
        assert_eq!(invoice.amount_ttc, 120.0);
        assert!(!invoice.is_paid);
    }
}
