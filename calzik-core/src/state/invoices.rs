//! Issued invoices.

use crate::error::{CalzikError, CalzikResult};
use crate::invoice::InvoiceDraft;
use crate::model::{Invoice, InvoiceNumber};

#[derive(Debug, Clone, Default)]
pub struct InvoiceBook {
    invoices: Vec<Invoice>,
}

impl InvoiceBook {
    pub fn new(invoices: Vec<Invoice>) -> Self {
        InvoiceBook { invoices }
    }

    pub fn all(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Highest sequence number already issued, 0 when empty.
    pub fn max_seq(&self) -> u32 {
        self.invoices
            .iter()
            .map(|i| i.number.seq())
            .max()
            .unwrap_or(0)
    }

    pub fn create(&mut self, draft: InvoiceDraft, number: InvoiceNumber) -> CalzikResult<&Invoice> {
        let invoice = draft.into_invoice(number)?;
        log::info!("Issued invoice {} to {}", invoice.number, invoice.client.name);
        self.invoices.push(invoice);
        Ok(&self.invoices[self.invoices.len() - 1])
    }

    pub fn toggle_paid(&mut self, id: &str) -> CalzikResult<&Invoice> {
        let invoice = self
            .invoices
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CalzikError::not_found("Invoice", id))?;
        invoice.is_paid = !invoice.is_paid;
        Ok(invoice)
    }

    /// Most recent number first.
    pub fn sorted(&self) -> Vec<&Invoice> {
        let mut sorted: Vec<&Invoice> = self.invoices.iter().collect();
        sorted.sort_by(|a, b| b.number.cmp(&a.number));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::AmountForm;
    use crate::model::Party;
    use chrono::NaiveDate;

    fn make_draft(ht: &str) -> InvoiceDraft {
        let mut amounts = AmountForm::default();
        amounts.set_amount_ht(ht);
        InvoiceDraft {
            provider: Party {
                name: "Association CalZik".to_string(),
                ..Default::default()
            },
            client: Party {
                name: "Salle des Fêtes".to_string(),
                ..Default::default()
            },
            service_title: "Concert de Noël".to_string(),
            location: "Lyon".to_string(),
            service_date: NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
            time: "20:00".to_string(),
            attendees: "200".to_string(),
            amounts,
        }
    }

    #[test]
    fn create_derives_vat() {
        let mut book = InvoiceBook::default();
        let invoice = book
            .create(make_draft("100"), InvoiceNumber::new(2025, 1))
            .unwrap();
        assert_eq!(invoice.vat_amount, 20.0);
        assert_eq!(invoice.amount_ttc, 120.0);
        assert!(!invoice.is_paid);
        assert_eq!(book.max_seq(), 1);
    }

    #[test]
    fn create_rejects_non_numeric_ht() {
        let mut book = InvoiceBook::default();
        let result = book.create(make_draft("cent"), InvoiceNumber::new(2025, 1));
        assert!(matches!(result, Err(CalzikError::Validation(_))));
        assert!(book.all().is_empty());
    }

    #[test]
    fn toggle_paid_flips() {
        let mut book = InvoiceBook::default();
        let id = book
            .create(make_draft("100"), InvoiceNumber::new(2025, 1))
            .unwrap()
            .id
            .clone();
        assert!(book.toggle_paid(&id).unwrap().is_paid);
        assert!(!book.toggle_paid(&id).unwrap().is_paid);
    }

    #[test]
    fn sorted_newest_first() {
        let mut book = InvoiceBook::default();
        book.create(make_draft("100"), InvoiceNumber::new(2025, 1)).unwrap();
        book.create(make_draft("50"), InvoiceNumber::new(2025, 2)).unwrap();
        let numbers: Vec<String> = book.sorted().iter().map(|i| i.number.to_string()).collect();
        assert_eq!(numbers, vec!["2025-0002", "2025-0001"]);
    }
}
