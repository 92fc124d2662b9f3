use crate::core::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseUser {
    pub id: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
}

impl BaseUser {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn named(mut self, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        self.firstname = Some(firstname.into());
        self.lastname = Some(lastname.into());
        self
    }

    /// "First Last" when both names are known, else the email, else the id.
    pub fn display_name(&self) -> String {
        match (&self.firstname, &self.lastname) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            _ => self.email.clone().unwrap_or_else(|| self.id.clone()),
        }
    }
}

impl Entity for BaseUser {
    type Key = String;
    const KIND: &'static str = "User";

    fn key(&self) -> String {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_full_name() {
        assert_eq!(BaseUser::new("u1").named("Jane", "Doe").display_name(), "Jane Doe");

        let partial = BaseUser {
            firstname: Some("Jane".to_string()),
            email: Some("jane@example.com".to_string()),
            ..BaseUser::new("u1")
        };
        assert_eq!(partial.display_name(), "jane@example.com");
        assert_eq!(BaseUser::new("u1").display_name(), "u1");
    }
}
