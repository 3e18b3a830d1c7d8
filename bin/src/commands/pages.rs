//! Page dispatch.
//!
//! Each page carries only the inputs it needs; the static pages carry none.

use anyhow::Result;

use crate::commands::model::{self, ModelArgs};
use crate::session::Session;

const BANNER: &str = "Proof of concept - see the disclaimer page (vaxrisk disclaimer)";

const HOME: &str = "\
vaxrisk estimates the probability that someone in a given place currently has an
active COVID-19 infection, separately for vaccinated and unvaccinated people.

It combines the daily case reports published by the Johns Hopkins CSSE with the
latest vaccination figures, then adjusts for vaccine efficacy and for infections
that never show up in the counts.

  vaxrisk model                   choose a location interactively
  vaxrisk model -c US -r Texas    run for Texas
  vaxrisk countries               list the available countries
  vaxrisk about                   how the estimate is made";

const ABOUT: &str = "\
How the estimate is made

1. The daily reports of the last 14 days (plus one earlier day) are summed over
   the chosen location. Day-to-day differences of the cumulative counts give the
   new cases of each day.
2. New cases of the last 10 days, the assumed infectious period, divided by the
   population give the share of people currently infectious.
3. The largest fully vaccinated count reported for the location, divided by the
   same population, gives the vaccination rate.
4. Bayes' theorem splits the infections between the two groups. With a vaccine
   efficacy e and a vaccination rate v, a share v(1-e) / (v(1-e) + 1 - v) of the
   infections falls on the vaccinated, assuming both groups face the same exposure.

A detection rate below 100% scales the infection rate up to account for cases that
were never reported.";

const DISCLAIMER: &str = "\
This tool is a proof of concept. Its estimates rest on simplifying assumptions
(equal exposure for vaccinated and unvaccinated people, a fixed infectious period,
a single efficacy figure for every vaccine and variant) and on public data that may
be incomplete or revised. It is not medical advice and must not be used to make
health decisions.";

/// A page of the application.
pub(crate) enum Page {
    Home,
    Model(ModelArgs),
    About,
    Disclaimer,
}

/// Renders a page.
pub(crate) async fn show(page: Page, session: &Session) -> Result<()> {
    println!("{BANNER}");
    println!();

    match page {
        Page::Home => println!("{HOME}"),
        Page::Model(args) => model::run(args, session).await?,
        Page::About => println!("{ABOUT}"),
        Page::Disclaimer => println!("{DISCLAIMER}"),
    }
    Ok(())
}
