use crate::core::{IdGenerator, Result, TimeProvider};
use crate::model::{Audit, AuditReferenceType};
use crate::service::{AuditCrudService, UserCrudService};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{Level, event};

pub const SYSTEM_USER: &str = "system";

/// `user_source` of actors authenticated through a personal token.
pub const TOKEN_SOURCE: &str = "token";

/// The authenticated principal behind an audited action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditActor {
    pub user_id: String,
    pub user_source: Option<String>,
    pub user_source_id: Option<String>,
}

impl AuditActor {
    pub fn user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Default::default()
        }
    }

    pub fn with_source(mut self, source: impl Into<String>, source_id: impl Into<String>) -> Self {
        self.user_source = Some(source.into());
        self.user_source_id = Some(source_id.into());
        self
    }

    fn uses_token(&self) -> bool {
        self.user_source.as_deref() == Some(TOKEN_SOURCE)
    }
}

impl From<&str> for AuditActor {
    fn from(user_id: &str) -> Self {
        Self::user(user_id)
    }
}

impl From<String> for AuditActor {
    fn from(user_id: String) -> Self {
        Self::user(user_id)
    }
}

/// Who performed an audited action, and where.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditInfo {
    pub organization_id: String,
    pub environment_id: String,
    pub actor: Option<AuditActor>,
}

impl AuditInfo {
    pub fn new(organization_id: impl Into<String>, environment_id: impl Into<String>) -> Self {
        Self {
            organization_id: organization_id.into(),
            environment_id: environment_id.into(),
            actor: None,
        }
    }

    pub fn by(mut self, actor: impl Into<AuditActor>) -> Self {
        self.actor = Some(actor.into());
        self
    }
}

/// One audited change on a referenced entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditEntry {
    pub reference_type: AuditReferenceType,
    pub reference_id: String,
    pub event: String,
    pub properties: BTreeMap<String, String>,
    pub old_value: Option<Value>,
    pub new_value: Option<Value>,
    /// When the change happened; the service clock is used when absent.
    pub created_at: Option<DateTime<Utc>>,
}

impl AuditEntry {
    pub fn new(reference_type: AuditReferenceType, reference_id: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            reference_type,
            reference_id: reference_id.into(),
            event: event.into(),
            ..Default::default()
        }
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn change(mut self, old_value: Option<Value>, new_value: Option<Value>) -> Self {
        self.old_value = old_value;
        self.new_value = new_value;
        self
    }

    pub fn at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Builds audit records and stores them through an [`AuditCrudService`].
///
/// Token-authenticated actors are resolved through the [`UserCrudService`]
/// so the record names the person behind the token.
pub struct AuditDomainService {
    audits: Arc<dyn AuditCrudService>,
    users: Arc<dyn UserCrudService>,
    clock: Arc<dyn TimeProvider>,
    ids: Arc<dyn IdGenerator>,
}

impl AuditDomainService {
    pub fn new(
        audits: Arc<dyn AuditCrudService>,
        users: Arc<dyn UserCrudService>,
        clock: Arc<dyn TimeProvider>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            audits,
            users,
            clock,
            ids,
        }
    }

    pub fn create_audit_log(&self, info: &AuditInfo, entry: AuditEntry) -> Result<Audit> {
        let patch = diff(
            entry.old_value.as_ref().unwrap_or(&Value::Null),
            entry.new_value.as_ref().unwrap_or(&Value::Null),
        );
        let user = self.user_name(info.actor.as_ref())?;

        // Organization-level records carry no environment.
        let environment_id = match entry.reference_type {
            AuditReferenceType::Organization => String::new(),
            _ => info.environment_id.clone(),
        };

        let audit = Audit {
            id: self.ids.next_id(),
            organization_id: info.organization_id.clone(),
            environment_id,
            reference_type: entry.reference_type,
            reference_id: entry.reference_id,
            user,
            event: entry.event,
            properties: entry.properties,
            patch: serde_json::to_string(&patch)?,
            created_at: entry.created_at.unwrap_or_else(|| self.clock.now()),
        };

        event!(
            Level::DEBUG,
            event = %audit.event,
            reference = %audit.reference_id,
            user = %audit.user,
            "audit recorded"
        );
        self.audits.create(audit)
    }

    fn user_name(&self, actor: Option<&AuditActor>) -> Result<String> {
        match actor {
            None => Ok(SYSTEM_USER.to_string()),
            Some(actor) if actor.uses_token() => {
                let user = self.users.get_base_user(&actor.user_id)?;
                Ok(format!(
                    "{} - (using token \"{}\")",
                    user.display_name(),
                    actor.user_source_id.as_deref().unwrap_or_default()
                ))
            }
            Some(actor) => Ok(actor.user_id.clone()),
        }
    }
}

/// JSON patch operations turning `old` into `new`.
///
/// Per object level: removals, then additions, then replacements. Objects
/// present on both sides are diffed field by field; arrays and scalars are
/// replaced whole.
fn diff(old: &Value, new: &Value) -> Vec<Value> {
    let mut ops = Vec::new();
    diff_at("", old, new, &mut ops);
    ops
}

fn diff_at(path: &str, old: &Value, new: &Value, ops: &mut Vec<Value>) {
    match (old, new) {
        (Value::Object(old), Value::Object(new)) => diff_objects(path, old, new, ops),
        _ if old == new => {}
        _ => ops.push(json!({ "op": "replace", "path": path, "value": new })),
    }
}

fn diff_objects(path: &str, old: &Map<String, Value>, new: &Map<String, Value>, ops: &mut Vec<Value>) {
    let child = |field: &str| format!("{path}/{}", escape_pointer(field));

    for field in old.keys().filter(|field| !new.contains_key(*field)) {
        ops.push(json!({ "op": "remove", "path": child(field) }));
    }
    for (field, value) in new.iter().filter(|(field, _)| !old.contains_key(*field)) {
        ops.push(json!({ "op": "add", "path": child(field), "value": value }));
    }
    for (field, value) in new {
        match old.get(field) {
            Some(previous) if previous != value => diff_at(&child(field), previous, value, ops),
            _ => {}
        }
    }
}

fn escape_pointer(field: &str) -> String {
    field.replace('~', "~0").replace('/', "~1")
}
