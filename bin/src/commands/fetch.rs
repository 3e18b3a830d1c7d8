//! Fetch command implementation.
//!
//! Warms the cache for the session date without running the model.

use anyhow::Result;

use crate::session::Session;

/// Download whatever the session date needs and summarize the cache.
pub(crate) async fn fetch(session: &Session) -> Result<()> {
    let dataset = session.dataset().await?;
    let cache = session.store().cache();
    let cached = cache.cached_report_dates()?;

    println!("Session date:      {}", session.today());
    println!("Report window:     {}", dataset.window);
    println!("Case rows:         {}", dataset.cases.len());
    println!(
        "Vaccination rows:  {}",
        dataset.vaccinations.domestic.len() + dataset.vaccinations.global.len()
    );
    println!("Cached reports:    {}", cached.len());
    println!("Cache directory:   {}", cache.base_path().display());
    Ok(())
}
