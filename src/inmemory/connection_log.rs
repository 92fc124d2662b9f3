use crate::config::InMemoryConfig;
use crate::in_memory_alternative;
use crate::model::ConnectionLog;
use crate::query::{Filter, Page, Pageable, SortResolver, Sortable, paginate};
use crate::service::{ConnectionLogCriteria, ConnectionLogsCrudService};
use crate::storage::Storage;
use tracing::{Level, event};

pub struct ConnectionLogsCrudServiceInMemory {
    logs: Storage<ConnectionLog>,
    sorts: SortResolver<ConnectionLog>,
    default_pageable: Pageable,
}

impl ConnectionLogsCrudServiceInMemory {
    pub fn new() -> Self {
        Self::with_config(&InMemoryConfig::default())
    }

    pub fn with_config(config: &InMemoryConfig) -> Self {
        Self {
            logs: Storage::new(),
            sorts: SortResolver::new().field("timestamp", |log: &ConnectionLog| log.timestamp),
            default_pageable: config.default_pageable,
        }
    }

    fn search<'a>(
        &self,
        owner: Filter<'a, ConnectionLog>,
        criteria: &'a ConnectionLogCriteria,
        pageable: Option<&Pageable>,
    ) -> Page<ConnectionLog> {
        let filter = owner
            .within(criteria.from, criteria.to, |log: &ConnectionLog| log.timestamp)
            .one_of(criteria.api_ids.as_deref(), |log: &ConnectionLog| &log.api_id)
            .one_of(criteria.application_ids.as_deref(), |log: &ConnectionLog| &log.application_id)
            .and(move |log: &ConnectionLog| match criteria.plan_ids.as_deref() {
                None => true,
                Some(plans) => log.plan_id.as_ref().is_some_and(|plan| plans.contains(plan)),
            })
            .one_of(criteria.methods.as_deref(), |log: &ConnectionLog| &log.method)
            .one_of(criteria.statuses.as_deref(), |log: &ConnectionLog| &log.status);

        let matches = self
            .sorts
            .sorted(filter.select(&self.logs), Some(&Sortable::desc("timestamp")));
        let page = paginate(matches, pageable.unwrap_or(&self.default_pageable));

        event!(
            Level::DEBUG,
            total = page.total_elements,
            returned = page.page_elements,
            "connection log search"
        );
        page
    }
}

impl Default for ConnectionLogsCrudServiceInMemory {
    fn default() -> Self {
        Self::new()
    }
}

in_memory_alternative!(ConnectionLogsCrudServiceInMemory, ConnectionLog, logs);

impl ConnectionLogsCrudService for ConnectionLogsCrudServiceInMemory {
    fn search_application_logs(
        &self,
        application_id: &str,
        criteria: &ConnectionLogCriteria,
        pageable: Option<&Pageable>,
    ) -> Page<ConnectionLog> {
        let owner = Filter::new().eq(Some(application_id), |log: &ConnectionLog| log.application_id.as_str());
        self.search(owner, criteria, pageable)
    }

    fn search_api_logs(
        &self,
        api_id: &str,
        criteria: &ConnectionLogCriteria,
        pageable: Option<&Pageable>,
    ) -> Page<ConnectionLog> {
        let owner = Filter::new().eq(Some(api_id), |log: &ConnectionLog| log.api_id.as_str());
        self.search(owner, criteria, pageable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HttpMethod;
    use crate::storage::InMemoryAlternative;
    use chrono::{Duration, TimeZone, Utc};

    fn log(index: i64, application_id: &str) -> ConnectionLog {
        ConnectionLog {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap() + Duration::seconds(index),
            ..ConnectionLog::new(index.to_string(), "api-1", application_id)
        }
    }

    #[test]
    fn application_logs_are_scoped_and_newest_first() {
        let service = ConnectionLogsCrudServiceInMemory::new();
        service.init_with(vec![log(1, "app-1"), log(2, "app-2"), log(3, "app-1")]);

        let page = service.search_application_logs("app-1", &ConnectionLogCriteria::default(), None);
        let ids: Vec<&str> = page.content.iter().map(|l| l.request_id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn plan_criterion_skips_logs_without_plan() {
        let service = ConnectionLogsCrudServiceInMemory::new();
        let mut with_plan = log(1, "app-1");
        with_plan.plan_id = Some("plan-1".to_string());
        with_plan.method = HttpMethod::Post;
        service.init_with(vec![with_plan, log(2, "app-1")]);

        let criteria = ConnectionLogCriteria {
            plan_ids: Some(vec!["plan-1".to_string()]),
            ..Default::default()
        };
        let page = service.search_api_logs("api-1", &criteria, None);
        assert_eq!(page.total_elements, 1);
        assert_eq!(page.content[0].method, HttpMethod::Post);
    }
}
