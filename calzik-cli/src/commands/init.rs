use anyhow::Result;
use calzik_core::{Calzik, seed};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use super::confirm;

pub fn run(calzik: &Calzik, demo: bool, yes: bool, today: NaiveDate) -> Result<()> {
    let existed = calzik.is_initialized();
    calzik.init_data_dir()?;

    if !existed {
        println!("Created {}", calzik.display_path().display());
    }

    if demo {
        if existed
            && !confirm("Replace all band data, invoices and documents included, with the demo band?", yes)?
        {
            return Ok(());
        }

        let mut workspace = calzik.open_workspace(today)?;
        workspace.seed(seed::demo(today)?)?;

        println!("{}", "Demo band ready.".green());
        println!();
        println!("Log in as the band leader with:");
        println!("  calzik login admin@calzik.fr --password demo");
    } else if existed {
        println!("{}", "Already initialized".dimmed());
    }

    Ok(())
}
