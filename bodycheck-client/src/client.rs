use async_trait::async_trait;
use bodycheck_model::{assessment::Report, profile::Profile};
use log::debug;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("server unreachable")]
    CommunicationError,
    #[error("internal server error")]
    InternalServerError,
    #[error("invalid request")]
    RequestError,
    #[error("incorrect server response")]
    ResponseError,
}

type Result<T> = std::result::Result<T, Error>;

#[mockall::automock]
#[async_trait]
pub trait Client: Send + Sync {
    async fn get_report(&self, profile: &Profile) -> Result<Report>;
    async fn health(&self) -> Result<()>;
}

pub struct ClientImpl {
    url: String,
    client: reqwest::Client,
}

impl ClientImpl {
    fn new(url: String) -> Self {
        Self {
            url: url.trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.url, path)
    }
}

pub fn create(url: String) -> impl Client {
    ClientImpl::new(url)
}

fn check_status(resp: reqwest::Response) -> Result<reqwest::Response> {
    if resp.status().is_client_error() {
        Err(Error::RequestError)
    } else if resp.status().is_server_error() {
        Err(Error::InternalServerError)
    } else {
        Ok(resp)
    }
}

#[async_trait]
impl Client for ClientImpl {
    async fn get_report(&self, profile: &Profile) -> Result<Report> {
        let url = self.endpoint("recommendation");
        debug!("Requesting report from {}", url);
        self.client
            .post(&url)
            .json(profile)
            .send()
            .await
            .map_err(|_| Error::CommunicationError)
            .and_then(check_status)?
            .json()
            .await
            .map_err(|_| Error::ResponseError)
    }

    async fn health(&self) -> Result<()> {
        let url = self.endpoint("health");
        debug!("Checking {}", url);
        self.client
            .get(&url)
            .send()
            .await
            .map_err(|_| Error::CommunicationError)
            .and_then(check_status)?;
        Ok(())
    }
}
