#![allow(dead_code)]
use area_domain::{AreaTemplate, Service, ServiceId, TemplateId};
use std::collections::HashMap;
use std::sync::Arc;

pub struct ServiceBuilder {
    id: ServiceId,
    name: Arc<str>,
    description: Arc<str>,
    category: Arc<str>,
    is_popular: bool,
    tags: Vec<Arc<str>>,
    automation_count: u32,
}

impl ServiceBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id: ServiceId::from(id),
            name: Arc::from(format!("Service {}", id).as_str()),
            description: "".into(),
            category: "Productivity".into(),
            is_popular: false,
            tags: Vec::new(),
            automation_count: 0,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.into();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.into();
        self
    }

    pub fn popular(mut self, is_popular: bool) -> Self {
        self.is_popular = is_popular;
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| Arc::from(*t)).collect();
        self
    }

    pub fn automation_count(mut self, count: u32) -> Self {
        self.automation_count = count;
        self
    }

    pub fn build(self) -> Service {
        Service {
            id: self.id,
            name: self.name,
            description: self.description,
            category: self.category,
            is_popular: self.is_popular,
            tags: self.tags,
            automation_count: self.automation_count,
        }
    }
}

pub struct TemplateBuilder {
    id: TemplateId,
    name: Arc<str>,
    description: Arc<str>,
    action_service: Arc<str>,
    reaction_service: Arc<str>,
    connections: HashMap<Arc<str>, bool>,
}

impl TemplateBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id: TemplateId::from(id),
            name: Arc::from(format!("Template {}", id).as_str()),
            description: "".into(),
            action_service: "GitHub".into(),
            reaction_service: "Discord".into(),
            connections: HashMap::new(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.into();
        self
    }

    pub fn services(mut self, action: &str, reaction: &str) -> Self {
        self.action_service = action.into();
        self.reaction_service = reaction.into();
        self
    }

    pub fn connected(mut self, service: &str, connected: bool) -> Self {
        self.connections.insert(service.into(), connected);
        self
    }

    pub fn build(self) -> AreaTemplate {
        AreaTemplate {
            id: self.id,
            name: self.name,
            description: self.description,
            action_service: self.action_service,
            reaction_service: self.reaction_service,
            service_connections: self.connections,
        }
    }
}

/// `count` services numbered from 1, all in `category`.
pub fn services_in(category: &str, first_id: i64, count: usize) -> Vec<Service> {
    (0..count as i64)
        .map(|i| ServiceBuilder::new(first_id + i).category(category).build())
        .collect()
}
