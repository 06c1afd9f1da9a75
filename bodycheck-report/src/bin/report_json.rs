use std::{env, error::Error};

use bodycheck_report::{load_profile, Reporter};
use dotenv::dotenv;
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;
    dotenv().ok();

    let path = env::args().nth(1).unwrap_or_else(|| "profile.json".to_owned());
    let url = env::var("BODYCHECK_URL").unwrap_or_else(|_| "http://localhost:8080/".to_owned());

    info!("Loading profile from {}", path);
    let profile = load_profile(&path)?;

    let reporter = Reporter::new(Box::new(bodycheck_client::create(url)));
    print!("{}", reporter.run(&profile).await?);

    Ok(())
}
