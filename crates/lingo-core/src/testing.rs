//! In-memory session used by the unit tests of this crate.

use std::collections::HashMap;
use std::sync::Mutex;

use lingo_types::error::SessionError;
use lingo_types::session::HttpResponse;

use crate::session::SessionClient;

/// A recorded request: URL plus query or form pairs.
pub type Recorded = (String, Vec<(String, String)>);

/// Canned responses keyed by URL. A route holding several responses serves
/// them in order and keeps repeating the last one; unknown URLs get a 404.
#[derive(Default)]
pub struct FakeSession {
    routes: Mutex<HashMap<String, Vec<HttpResponse>>>,
    failing: Vec<String>,
    gets: Mutex<Vec<Recorded>>,
    posts: Mutex<Vec<Recorded>>,
}

impl FakeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, url: &str, response: HttpResponse) -> Self {
        self.route_seq(url, vec![response])
    }

    pub fn route_seq(self, url: &str, responses: Vec<HttpResponse>) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert(url.to_string(), responses);
        self
    }

    /// Make every request to `url` fail at the transport level.
    pub fn fail(mut self, url: &str) -> Self {
        self.failing.push(url.to_string());
        self
    }

    pub fn gets(&self) -> Vec<Recorded> {
        self.gets.lock().unwrap().clone()
    }

    pub fn posts(&self) -> Vec<Recorded> {
        self.posts.lock().unwrap().clone()
    }

    pub fn get_count(&self, url: &str) -> usize {
        self.gets().iter().filter(|(u, _)| u == url).count()
    }

    fn respond(&self, url: &str) -> Result<HttpResponse, SessionError> {
        if self.failing.iter().any(|u| u == url) {
            return Err(SessionError::Request {
                url: url.to_string(),
                message: "connection refused".to_string(),
            });
        }

        let mut routes = self.routes.lock().unwrap();
        let response = match routes.get_mut(url) {
            Some(queue) if queue.len() > 1 => queue.remove(0),
            Some(queue) => queue
                .first()
                .cloned()
                .unwrap_or_else(|| HttpResponse::new(404, "")),
            None => HttpResponse::new(404, "not found"),
        };
        Ok(response)
    }
}

fn record(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl SessionClient for FakeSession {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, SessionError> {
        self.gets
            .lock()
            .unwrap()
            .push((url.to_string(), record(query)));
        self.respond(url)
    }

    async fn post_form(
        &self,
        url: &str,
        fields: &[(&str, &str)],
    ) -> Result<HttpResponse, SessionError> {
        self.posts
            .lock()
            .unwrap()
            .push((url.to_string(), record(fields)));
        self.respond(url)
    }
}
