//! Order updater.
//!
//! Applies a client-submitted service ordering to a [`GlobalConfig`]. The
//! submission is validated as a whole before anything is applied; a rejected
//! submission leaves no trace.

use std::collections::HashSet;

use tracing::debug;

use crate::error::CoreError;
use crate::models::{GlobalConfig, ServiceId};

/// Parses submitted service identifiers.
///
/// # Errors
///
/// Returns [`CoreError::InvalidService`] for the first identifier that is
/// not a supported service.
pub fn parse_service_ids<S: AsRef<str>>(items: &[S]) -> Result<Vec<ServiceId>, CoreError> {
    items.iter().map(|item| item.as_ref().parse()).collect()
}

/// Applies a submitted ordering.
///
/// Every listed service becomes enabled with `order` equal to its index.
/// Every unlisted service becomes disabled and keeps its previous order.
///
/// # Errors
///
/// Returns [`CoreError::DuplicateService`] if a service is listed twice.
pub fn apply_order(current: &GlobalConfig, submitted: &[ServiceId]) -> Result<GlobalConfig, CoreError> {
    let mut seen = HashSet::with_capacity(submitted.len());
    for &id in submitted {
        if !seen.insert(id) {
            return Err(CoreError::DuplicateService(id));
        }
    }

    let mut updated = current.clone().normalize();
    for service in &mut updated.services {
        match submitted.iter().position(|&id| id == service.id) {
            Some(index) => {
                service.enabled = true;
                service.order = u32::try_from(index).unwrap_or(u32::MAX);
            }
            None => service.enabled = false,
        }
    }

    debug!(services = ?submitted, "Applied service order");
    Ok(updated)
}

/// Parses and applies a raw submitted ordering.
///
/// # Errors
///
/// Returns [`CoreError::InvalidService`] or [`CoreError::DuplicateService`];
/// in both cases nothing is applied.
pub fn apply_submitted_order<S: AsRef<str>>(
    current: &GlobalConfig,
    items: &[S],
) -> Result<GlobalConfig, CoreError> {
    let submitted = parse_service_ids(items)?;
    apply_order(current, &submitted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_order_twitter_facebook() {
        let cfg = apply_order(
            &GlobalConfig::default(),
            &[ServiceId::Twitter, ServiceId::Facebook],
        )
        .unwrap();

        let twitter = cfg.service(ServiceId::Twitter).unwrap();
        assert!(twitter.enabled);
        assert_eq!(twitter.order, 0);

        let facebook = cfg.service(ServiceId::Facebook).unwrap();
        assert!(facebook.enabled);
        assert_eq!(facebook.order, 1);

        for id in [ServiceId::Google, ServiceId::Linkedin, ServiceId::Pinterest] {
            assert!(!cfg.is_enabled(id), "{id} should be disabled");
        }
    }

    #[test]
    fn test_apply_order_rejects_duplicates() {
        let result = apply_order(
            &GlobalConfig::default(),
            &[ServiceId::Twitter, ServiceId::Twitter],
        );
        assert!(matches!(result, Err(CoreError::DuplicateService(ServiceId::Twitter))));
    }

    #[test]
    fn test_apply_submitted_order_rejects_unknown() {
        let result = apply_submitted_order(&GlobalConfig::default(), &["twitter", "myspace"]);
        assert!(matches!(result, Err(CoreError::InvalidService(ref s)) if s == "myspace"));
    }

    #[test]
    fn test_unlisted_service_keeps_order() {
        let mut cfg = GlobalConfig::default();
        let google = cfg.service_mut(ServiceId::Google).unwrap();
        google.enabled = true;
        google.order = 42;

        let cfg = apply_order(&cfg, &[ServiceId::Pinterest]).unwrap();
        let google = cfg.service(ServiceId::Google).unwrap();
        assert!(!google.enabled);
        assert_eq!(google.order, 42);
    }

    #[test]
    fn test_empty_submission_disables_everything() {
        let mut cfg = GlobalConfig::default();
        cfg.service_mut(ServiceId::Twitter).unwrap().enabled = true;

        let cfg = apply_order(&cfg, &[]).unwrap();
        assert!(cfg.enabled_services().is_empty());
    }

    #[test]
    fn test_other_fields_untouched() {
        let mut cfg = GlobalConfig::default();
        cfg.label = "Spread it".to_string();
        cfg.cache_ttl_seconds = 60;

        let updated = apply_order(&cfg, &[ServiceId::Google]).unwrap();
        assert_eq!(updated.label, "Spread it");
        assert_eq!(updated.cache_ttl_seconds, 60);
    }
}
