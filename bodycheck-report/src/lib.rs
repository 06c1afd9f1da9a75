use std::{fs::File, io::BufReader, path::Path};

use bodycheck_client::Client;
use bodycheck_model::{assessment::Recommendation, profile::Profile};
use itertools::Itertools;
use log::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read profile: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid profile: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Client(#[from] bodycheck_client::Error),
}

pub fn load_profile(path: impl AsRef<Path>) -> Result<Profile, Error> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

pub struct Reporter {
    client: Box<dyn Client>,
}

impl Reporter {
    pub fn new(client: Box<dyn Client>) -> Self {
        Self { client }
    }

    pub async fn run(&self, profile: &Profile) -> Result<String, Error> {
        info!("Checking server");
        self.client.health().await?;

        info!("Requesting report");
        let report = self.client.get_report(profile).await?;
        debug!("Received {:?}", report.bmi);

        Ok(render_text(&report.recommendation))
    }
}

/// Plain-text rendering of a recommendation, one bullet per item.
pub fn render_text(recommendation: &Recommendation) -> String {
    format!(
        "{}\n{}\n\nDiet suggestions:\n{}\n\nDaily health habits:\n{}\n",
        recommendation.greeting,
        recommendation.bmi_summary,
        render_items(&recommendation.diet_items, "No diet suggestions available."),
        render_items(&recommendation.habit_items, "No habit suggestions available."),
    )
}

fn render_items(items: &[String], placeholder: &str) -> String {
    if items.is_empty() {
        placeholder.to_owned()
    } else {
        items.iter().map(|item| format!("- {}", item)).join("\n")
    }
}
