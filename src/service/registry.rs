//! Fixed-capacity table of configured services.
//!
//! Slot positions are the protocol types' ordinals, so iteration order is
//! stable across requests and matches the order prefixes are tried in when
//! classifying demo requests.

use crate::error::ConfigError;

use super::{Service, ServiceType};

/// Number of service slots (one per protocol type).
pub const SERVICE_SLOTS: usize = 7;

/// Check that a URL prefix is non-empty, carries no surrounding slashes and
/// contains no router path syntax.
pub fn validate_prefix(prefix: &str) -> Result<(), ConfigError> {
    let reason = if prefix.is_empty() {
        "prefix must not be empty"
    } else if prefix.contains(['{', '}', '*']) {
        "prefix must not contain '{', '}' or '*'"
    } else if prefix.starts_with('/') {
        "prefix must not start with '/'"
    } else if prefix.ends_with('/') {
        "prefix must not end with '/'"
    } else {
        return Ok(());
    };

    Err(ConfigError::InvalidPrefix {
        prefix: prefix.to_string(),
        reason,
    })
}

/// Registry of configured services, one optional slot per [`ServiceType`].
#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    slots: [Option<Service>; SERVICE_SLOTS],
}

impl ServiceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service in its type's slot.
    ///
    /// Fails if the slot is taken, the prefix is malformed, or another
    /// service already uses the same prefix.
    pub fn register(&mut self, service: Service) -> Result<(), ConfigError> {
        validate_prefix(&service.url_prefix)?;

        let slot = service.kind.slot();
        if self.slots[slot].is_some() {
            return Err(ConfigError::DuplicateService(service.kind.name()));
        }
        if self.iter().any(|s| s.url_prefix == service.url_prefix) {
            return Err(ConfigError::DuplicatePrefix(service.url_prefix));
        }

        self.slots[slot] = Some(service);
        Ok(())
    }

    /// Builder-style variant of [`register`](Self::register).
    pub fn with_service(mut self, service: Service) -> Result<Self, ConfigError> {
        self.register(service)?;
        Ok(self)
    }

    /// All slots in order, including unconfigured ones.
    pub fn slots(&self) -> impl Iterator<Item = Option<&Service>> {
        self.slots.iter().map(Option::as_ref)
    }

    /// Configured services in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Service> {
        self.slots.iter().flatten()
    }

    /// Service configured for a protocol type.
    pub fn get(&self, kind: ServiceType) -> Option<&Service> {
        self.slots[kind.slot()].as_ref()
    }

    /// The demo service, if configured.
    pub fn demo(&self) -> Option<&Service> {
        self.get(ServiceType::Demo)
    }

    /// Number of configured services.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
