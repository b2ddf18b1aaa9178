// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::Arc;

/// Prometheus registry for the API server
pub struct Metrics {
    registry: Registry,
    http_requests: IntCounterVec,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();
        let http_requests = IntCounterVec::new(
            Opts::new("http_requests_total", "HTTP requests served, by route and status"),
            &["method", "route", "status"],
        )?;
        registry.register(Box::new(http_requests.clone()))?;

        Ok(Self {
            registry,
            http_requests,
        })
    }

    pub fn observe_request(&self, method: &str, route: &str, status: u16) {
        self.http_requests
            .with_label_values(&[method, route, &status.to_string()])
            .inc();
    }

    /// Render every registered metric in the text exposition format
    pub fn render(&self) -> prometheus::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// Count each request against the route template it matched
pub async fn track_requests(
    State(metrics): State<Arc<Metrics>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;
    metrics.observe_request(&method, &route, response.status().as_u16());

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_observed_requests() {
        let metrics = Metrics::new().unwrap();
        metrics.observe_request("GET", "/api/users", 200);
        metrics.observe_request("GET", "/api/users", 200);

        let text = metrics.render().unwrap();
        assert!(text.contains("http_requests_total"));
        assert!(text.contains("route=\"/api/users\""));
        assert!(text.contains("} 2"));
    }
}
