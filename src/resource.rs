use crate::aggregation::CapacityLookup;
use crate::calendar::ResourceCalendar;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A person, crew or machine that day assignments are booked against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Identifier for the resource. This can be a person id, crew name, or equipment tag.
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Capacity calendar. Resources without one have no theoretical capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar: Option<ResourceCalendar>,
}

impl Resource {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            calendar: None,
        }
    }

    pub fn with_calendar(mut self, calendar: ResourceCalendar) -> Self {
        self.calendar = Some(calendar);
        self
    }
}

/// Resources indexed by id, answering capacity queries.
#[derive(Debug, Clone, Default)]
pub struct ResourceDirectory<'a> {
    by_id: HashMap<&'a str, &'a Resource>,
}

impl<'a> ResourceDirectory<'a> {
    pub fn new(resources: &'a [Resource]) -> Self {
        Self {
            by_id: resources.iter().map(|r| (r.id.as_str(), r)).collect(),
        }
    }

    pub fn get(&self, resource_id: &str) -> Option<&'a Resource> {
        self.by_id.get(resource_id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl CapacityLookup for ResourceDirectory<'_> {
    fn workable_hours(&self, resource_id: &str, day: NaiveDate) -> Option<u32> {
        self.get(resource_id)?
            .calendar
            .as_ref()
            .map(|calendar| calendar.workable_hours(day))
    }
}
