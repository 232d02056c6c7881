//! Keeps one notification per overdue invoice.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{Invoice, Notification};
use crate::state::NotificationCenter;

/// What a reconciliation pass changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl ReconcileReport {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

pub fn overdue_message(invoice: &Invoice, overdue_days: i64) -> String {
    format!(
        "Facture {} ({}) impayée depuis plus de {} jours",
        invoice.number, invoice.client.name, overdue_days
    )
}

/// Bring notifications in line with the invoice list.
///
/// Unpaid invoices more than `overdue_days` past their service date get an
/// `invoice-{id}` notification if they don't have one yet; paid invoices
/// lose theirs. Running it twice changes nothing the second time.
pub fn reconcile_overdue(
    invoices: &[Invoice],
    notifications: &mut NotificationCenter,
    today: NaiveDate,
    overdue_days: i64,
    now: DateTime<Utc>,
) -> ReconcileReport {
    let mut report = ReconcileReport::default();

    for invoice in invoices {
        let id = invoice.notification_id();

        if invoice.is_paid {
            if notifications.remove(&id) {
                report.removed.push(id);
            }
        } else if invoice.is_overdue(today, overdue_days) {
            let notification = Notification::new(&id, &overdue_message(invoice, overdue_days), now)
                .with_link(&format!("invoices/{}", invoice.id));
            if notifications.add(notification) {
                report.added.push(id);
            }
        }
    }

    if !report.is_empty() {
        log::info!(
            "Overdue invoices: {} notification(s) added, {} removed",
            report.added.len(),
            report.removed.len()
        );
    }

    report
}
