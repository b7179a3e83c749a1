use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `hours` of work booked for a resource on one calendar day, on behalf of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAssignment {
    pub order_id: i32,
    pub resource_id: String,
    pub day: NaiveDate,
    pub hours: u32,
}

impl DayAssignment {
    pub fn new(order_id: i32, resource_id: impl Into<String>, day: NaiveDate, hours: u32) -> Self {
        Self {
            order_id,
            resource_id: resource_id.into(),
            day,
            hours,
        }
    }
}
