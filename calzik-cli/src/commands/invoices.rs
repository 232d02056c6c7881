use anyhow::Result;
use calzik_core::config::CalzikConfig;
use calzik_core::constants::VAT_RATES;
use calzik_core::invoice::{AmountForm, InvoiceDraft};
use calzik_core::model::Party;
use calzik_core::workspace::Workspace;
use chrono::NaiveDate;
use clap::Args;
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize};

#[derive(Args)]
pub struct NewInvoiceArgs {
    /// Client name
    #[arg(long)]
    client: String,

    #[arg(long, default_value = "")]
    client_address: String,

    #[arg(long)]
    client_siret: Option<String>,

    #[arg(long)]
    client_vat: Option<String>,

    /// What was performed (e.g. "Concert")
    #[arg(long)]
    title: String,

    #[arg(long, default_value = "")]
    location: String,

    /// Service date (YYYY-MM-DD)
    #[arg(long)]
    date: NaiveDate,

    #[arg(long, default_value = "")]
    time: String,

    #[arg(long, default_value = "")]
    attendees: String,

    /// Amount before tax
    #[arg(long, conflicts_with = "ttc", required_unless_present = "ttc")]
    ht: Option<String>,

    /// Amount including tax
    #[arg(long)]
    ttc: Option<String>,

    /// VAT rate in percent (defaults to default_vat_rate from the config)
    #[arg(long)]
    rate: Option<String>,

    /// Issuer name (defaults to the provider from the config)
    #[arg(long)]
    provider: Option<String>,

    #[arg(long)]
    provider_address: Option<String>,
}

impl NewInvoiceArgs {
    fn into_draft(self, config: &CalzikConfig) -> InvoiceDraft {
        let rate = self.rate.unwrap_or_else(|| config.default_vat_rate.clone());
        let mut amounts = AmountForm::new(&rate);
        match (&self.ht, &self.ttc) {
            (Some(ht), _) => amounts.set_amount_ht(ht),
            (None, Some(ttc)) => amounts.set_amount_ttc(ttc),
            (None, None) => {}
        }

        let mut provider = config.provider.clone().unwrap_or_default();
        if let Some(name) = self.provider {
            provider.name = name;
        }
        if let Some(address) = self.provider_address {
            provider.address = address;
        }

        InvoiceDraft {
            provider,
            client: Party {
                name: self.client,
                address: self.client_address,
                siret: self.client_siret,
                vat_number: self.client_vat,
            },
            service_title: self.title,
            location: self.location,
            service_date: self.date,
            time: self.time,
            attendees: self.attendees,
            amounts,
        }
    }
}

pub fn list(workspace: &Workspace, today: NaiveDate) -> Result<()> {
    let invoices = workspace.invoices().sorted();

    if invoices.is_empty() {
        println!("{}", "No invoices yet".dimmed());
        return Ok(());
    }

    let overdue_days = workspace.settings().overdue_days;
    let mut unpaid = 0.0;
    for invoice in &invoices {
        let mut line = invoice.render();
        if invoice.is_overdue(today, overdue_days) {
            line.push_str(&format!(" {}", "overdue".red().bold()));
        }
        println!("{} {}", line, format!("[{}]", invoice.id).dimmed());
        if !invoice.is_paid {
            unpaid += invoice.amount_ttc;
        }
    }

    println!();
    println!(
        "{} {}, {:.2} € TTC outstanding",
        invoices.len(),
        pluralize("invoice", invoices.len()),
        unpaid
    );

    Ok(())
}

pub fn new(
    workspace: &mut Workspace,
    config: &CalzikConfig,
    args: NewInvoiceArgs,
    today: NaiveDate,
) -> Result<()> {
    let draft = args.into_draft(config);
    if !VAT_RATES.contains(&draft.amounts.vat_rate()) {
        log::warn!("Unusual VAT rate {}%", draft.amounts.vat_rate());
    }

    let invoice = workspace.create_invoice(draft, today)?;

    println!("{}", format!("Invoice {} created", invoice.number).green());
    println!("  {:<6} {:>10.2} €", "HT", invoice.amount_ht);
    println!("  {:<6} {:>10.2} € ({}%)", "TVA", invoice.vat_amount, invoice.vat_rate);
    println!("  {:<6} {:>10.2} €", "TTC", invoice.amount_ttc.bold());
    Ok(())
}

pub fn toggle_paid(workspace: &mut Workspace, id: &str, today: NaiveDate) -> Result<()> {
    let invoice = workspace.toggle_invoice_paid(id, today)?;
    if invoice.is_paid {
        println!("{}", format!("Invoice {} marked paid", invoice.number).green());
    } else {
        println!("{}", format!("Invoice {} marked unpaid", invoice.number).yellow());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_args(ht: Option<&str>, ttc: Option<&str>) -> NewInvoiceArgs {
        NewInvoiceArgs {
            client: "Salle des Fêtes".to_string(),
            client_address: String::new(),
            client_siret: None,
            client_vat: None,
            title: "Concert".to_string(),
            location: "Lyon".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
            time: "20:00".to_string(),
            attendees: String::new(),
            ht: ht.map(String::from),
            ttc: ttc.map(String::from),
            rate: None,
            provider: None,
            provider_address: None,
        }
    }

    #[test]
    fn ttc_derives_ht_with_config_rate() {
        let config = CalzikConfig {
            provider: Some(Party {
                name: "Association CalZik".to_string(),
                ..Party::default()
            }),
            ..CalzikConfig::default()
        };

        let draft = make_test_args(None, Some("120")).into_draft(&config);
        assert_eq!(draft.amounts.amount_ht(), "100.00");
        assert_eq!(draft.provider.name, "Association CalZik");
    }

    #[test]
    fn provider_flag_overrides_config() {
        let mut args = make_test_args(Some("100"), None);
        args.provider = Some("Les Zikos".to_string());
        args.rate = Some("5,5".to_string());

        let draft = args.into_draft(&CalzikConfig::default());
        assert_eq!(draft.provider.name, "Les Zikos");
        assert_eq!(draft.amounts.amount_ttc(), "105.50");
    }
}
