use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use url::Url;

use crate::api::http_client::{HttpClient, HttpClientResult, HttpCompletion, HttpResponse};
use crate::config::Config;
use crate::errors::TransportError;

/// `HttpClient` backed by a blocking reqwest client.
///
/// Every request runs on its own worker thread and completes there.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(config.request_timeout, &config.user_agent)
    }

    fn fetch(client: &Client, url: Url) -> HttpClientResult {
        let response = client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();

        Ok(HttpResponse { status, body })
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url, completion: HttpCompletion) {
        let client = self.client.clone();
        let url = url.clone();

        // Shared so a failed spawn can still hand the completion its error.
        let pending = Arc::new(Mutex::new(Some(completion)));
        let worker = Arc::clone(&pending);

        let spawned = thread::Builder::new()
            .name("feed-request".to_string())
            .spawn(move || {
                debug!("GET {}", url);
                let result = Self::fetch(&client, url);
                if let Some(completion) = take_completion(&worker) {
                    completion(result);
                }
            });

        if let Err(e) = spawned {
            if let Some(completion) = take_completion(&pending) {
                completion(Err(TransportError::Spawn(e)));
            }
        }
    }
}

fn take_completion(slot: &Mutex<Option<HttpCompletion>>) -> Option<HttpCompletion> {
    slot.lock().ok().and_then(|mut completion| completion.take())
}
