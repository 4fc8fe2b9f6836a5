#![allow(dead_code)]

use area_domain::{AreaTemplate, Service, ServiceId, TemplateId};
use std::sync::Arc;

pub fn service(id: i64, name: &str, category: &str) -> Service {
    Service::new(ServiceId::from(id), name, category)
}

pub fn template(id: i64, action: &str, reaction: &str) -> AreaTemplate {
    let mut template = AreaTemplate::new(
        TemplateId::from(id),
        &format!("{} to {}", action, reaction),
        action,
        reaction,
    );
    template.service_connections.insert(Arc::from(action), true);
    template
}
