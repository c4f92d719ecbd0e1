//! Demo request classification.
//!
//! The demo service is mounted under its own prefix; whatever follows it in
//! the request path names the service to demonstrate:
//!
//! ```text
//! /demo              -> landing page
//! /demo/             -> landing page
//! /demo/wms          -> WMS demo
//! /demo/wms/whatever -> WMS demo
//! /demo/wmsx         -> 404
//! ```

use tracing::debug;

use crate::error::DemoError;
use crate::service::{Service, ServiceRegistry};

/// Which service a demo page should be rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingDecision<'a> {
    /// `None` renders the landing page
    pub selected_service: Option<&'a Service>,
}

impl<'a> RoutingDecision<'a> {
    /// Decision for the landing page.
    pub fn landing() -> Self {
        Self {
            selected_service: None,
        }
    }

    /// Decision targeting a specific service.
    pub fn service(service: &'a Service) -> Self {
        Self {
            selected_service: Some(service),
        }
    }

    pub fn is_landing(&self) -> bool {
        self.selected_service.is_none()
    }
}

/// Match a path fragment against the configured service prefixes.
///
/// `path_fragment` is the request path with the demo service's own prefix
/// already stripped. Slots are tried in registry order and the first prefix
/// followed by end-of-string or `/` wins.
pub fn classify<'a>(
    path_fragment: Option<&str>,
    registry: &'a ServiceRegistry,
) -> Result<RoutingDecision<'a>, DemoError> {
    let fragment = match path_fragment {
        None | Some("") | Some("/") => {
            debug!("Demo request without service, rendering landing page");
            return Ok(RoutingDecision::landing());
        }
        Some(fragment) => fragment,
    };

    // Skip exactly one leading separator
    let rest = fragment.strip_prefix('/').unwrap_or(fragment);

    for service in registry.slots().flatten() {
        if prefix_matches(&service.url_prefix, rest) {
            debug!(
                prefix = %service.url_prefix,
                kind = %service.kind,
                "Demo request routed"
            );
            return Ok(RoutingDecision::service(service));
        }
    }

    Err(DemoError::NotFound {
        fragment: rest.to_string(),
    })
}

/// `prefix` matches `path` when it is followed by end-of-string or `/`.
fn prefix_matches(prefix: &str, path: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(tail) => tail.is_empty() || tail.starts_with('/'),
        None => false,
    }
}
