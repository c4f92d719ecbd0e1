//! Landing page listing every demo the gateway can render.

use crate::error::DemoError;
use crate::service::{ServiceRegistry, ServiceType};

use super::assembler::reserve_document;
use super::generator::{CapabilityDocument, TEXT_HTML};

const LANDING_HEAD: &str = "<html><head><title>tilegate demo landing page</title></head><body>";
const LANDING_TAIL: &str = "</body></html>";

/// Build the landing page: one link per configured, non-demo service.
///
/// Links point below the demo service's own prefix (`demo` unless
/// configured otherwise).
pub fn landing_page(
    services: &ServiceRegistry,
    base_url: &str,
) -> Result<CapabilityDocument, DemoError> {
    let demo_prefix = services
        .demo()
        .map(|demo| demo.url_prefix.as_str())
        .unwrap_or(ServiceType::Demo.default_prefix());

    let links: Vec<String> = services
        .iter()
        .filter(|service| !service.is_demo())
        .map(|service| {
            format!(
                "<a href=\"{base_url}/{demo_prefix}/{prefix}\">{prefix}</a><br/>",
                prefix = service.url_prefix
            )
        })
        .collect();

    let size =
        LANDING_HEAD.len() + LANDING_TAIL.len() + links.iter().map(String::len).sum::<usize>();
    let mut body = reserve_document(size)?;
    body.push_str(LANDING_HEAD);
    for link in &links {
        body.push_str(link);
    }
    body.push_str(LANDING_TAIL);

    Ok(CapabilityDocument::new(TEXT_HTML, body))
}
