//! Local HTTP responder standing in for SWAPI
//!
//! Routes are keyed by request target (`/api/people/?page=2`). Each route holds
//! a queue of responses: all but the last are served once, the last one is
//! served for every further request. `{base}` in a body is replaced by the
//! server's API root so continuation links point back at it.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use serde_json::json;
use swapi_fetcher::app::ClientConfig;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

type Response = (u16, String);

/// Scripted responses by request target
#[derive(Debug, Default, Clone)]
pub struct Routes {
    map: HashMap<String, VecDeque<Response>>,
}

impl Routes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `target`
    pub fn respond(mut self, target: &str, status: u16, body: impl Into<String>) -> Self {
        self.map
            .entry(target.to_string())
            .or_default()
            .push_back((status, body.into()));
        self
    }

    /// Fail the next request for `target` with `status`, ahead of queued responses
    pub fn fail_once(mut self, target: &str, status: u16) -> Self {
        self.map
            .entry(target.to_string())
            .or_default()
            .push_front((status, "{}".to_string()));
        self
    }

    /// Queue a successful people page for `page`
    pub fn page(self, page: u32, body: impl Into<String>) -> Self {
        self.respond(&page_target(page), 200, body)
    }

    fn next_response(&mut self, target: &str) -> Response {
        match self.map.get_mut(target) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue.front().cloned().unwrap(),
            None => (404, r#"{"detail":"Not found"}"#.to_string()),
        }
    }
}

/// Running responder
pub struct MockServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl MockServer {
    pub async fn start(routes: Routes) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base = format!("http://{}/api", addr);

        let routes = Arc::new(Mutex::new(routes));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let requests = Arc::clone(&requests);
            tokio::spawn(async move {
                loop {
                    let Ok((stream, _)) = listener.accept().await else {
                        break;
                    };
                    let routes = Arc::clone(&routes);
                    let requests = Arc::clone(&requests);
                    let base = base.clone();
                    tokio::spawn(async move {
                        serve(stream, routes, requests, base).await;
                    });
                }
            })
        };

        Self {
            addr,
            requests,
            handle,
        }
    }

    /// API root, e.g. `http://127.0.0.1:41234/api`
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Client configuration pointed at this server
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            rate_limit_rps: 1000,
            use_system_proxy: false,
            ..ClientConfig::with_base_url(self.base_url())
        }
    }

    /// Request targets received so far, in arrival order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests for `target`
    pub fn hits(&self, target: &str) -> usize {
        self.requests().iter().filter(|t| *t == target).count()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve(
    mut stream: TcpStream,
    routes: Arc<Mutex<Routes>>,
    requests: Arc<Mutex<Vec<String>>>,
    base: String,
) {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buffer.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buffer.extend_from_slice(&chunk[..n]),
        }
    }

    let head = String::from_utf8_lossy(&buffer);
    let target = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    requests.lock().unwrap().push(target.clone());
    let (status, body) = routes.lock().unwrap().next_response(&target);
    let body = body.replace("{base}", &base);

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// Request target of a people page
pub fn page_target(page: u32) -> String {
    format!("/api/people/?page={}", page)
}

/// One person as SWAPI encodes it
pub fn person(name: &str, height: &str, mass: &str, birth_year: &str) -> serde_json::Value {
    json!({
        "name": name,
        "height": height,
        "mass": mass,
        "birth_year": birth_year,
        "gender": "n/a",
        "url": format!("{{base}}/people/{}/", name.len()),
    })
}

/// A people page body with an optional count and continuation link
pub fn people_page(
    count: Option<u64>,
    next: Option<u32>,
    results: Vec<serde_json::Value>,
) -> String {
    json!({
        "count": count,
        "next": next.map(|page| format!("{{base}}/people/?page={}", page)),
        "previous": null,
        "results": results,
    })
    .to_string()
}

/// Routes serving `total` generated characters in pages of `page_size`
pub fn uniform_routes(total: usize, page_size: usize) -> Routes {
    let people: Vec<_> = (1..=total)
        .map(|i| person(&format!("Character {}", i), "170", "70", "unknown"))
        .collect();
    let chunks: Vec<_> = people.chunks(page_size).collect();
    let last = chunks.len() as u32;

    let mut routes = Routes::new();
    for (index, chunk) in chunks.into_iter().enumerate() {
        let page = index as u32 + 1;
        let count = (page == 1).then_some(total as u64);
        let next = (page < last).then_some(page + 1);
        routes = routes.page(page, people_page(count, next, chunk.to_vec()));
    }
    routes
}
