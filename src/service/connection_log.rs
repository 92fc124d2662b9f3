use crate::model::{ConnectionLog, HttpMethod};
use crate::query::{Page, Pageable};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionLogCriteria {
    /// Inclusive bounds on the log timestamp.
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub api_ids: Option<Vec<String>>,
    pub application_ids: Option<Vec<String>>,
    pub plan_ids: Option<Vec<String>>,
    pub methods: Option<Vec<HttpMethod>>,
    pub statuses: Option<Vec<u16>>,
}

pub trait ConnectionLogsCrudService: Send + Sync {
    /// Logs of one application, newest first. `None` uses the default page.
    fn search_application_logs(
        &self,
        application_id: &str,
        criteria: &ConnectionLogCriteria,
        pageable: Option<&Pageable>,
    ) -> Page<ConnectionLog>;

    /// Logs of one API, newest first.
    fn search_api_logs(
        &self,
        api_id: &str,
        criteria: &ConnectionLogCriteria,
        pageable: Option<&Pageable>,
    ) -> Page<ConnectionLog>;
}
