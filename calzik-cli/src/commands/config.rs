use anyhow::Result;
use calzik_core::Calzik;
use calzik_core::config::CalzikConfig;
use owo_colors::OwoColorize;

use crate::render::format_size;

pub fn run(calzik: &Calzik) -> Result<()> {
    let config_path = CalzikConfig::config_path()?;
    let config = calzik.config();

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Data:       {}", calzik.data_path().display());
    println!("  Documents:  {}", calzik.documents_path().display());

    println!();
    println!("{}", "Settings".bold());
    println!("  VAT rate:      {}%", config.default_vat_rate);
    println!("  Time slots:    {}", config.time_slots.join(", "));
    println!("  Overdue after: {} days", config.overdue_days);
    println!("  Storage quota: {}", format_size(config.document_quota_bytes));
    match &config.provider {
        Some(provider) => println!("  Provider:      {}", provider.name),
        None => println!("  Provider:      {}", "(none)".dimmed()),
    }

    Ok(())
}
