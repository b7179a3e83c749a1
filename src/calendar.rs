use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Capacity calendar of a resource: workable hours per weekday, with dated
/// exceptions (holidays, short days, overtime) taking precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ResourceCalendarConfig", into = "ResourceCalendarConfig")]
pub struct ResourceCalendar {
    weekday_hours: HashMap<Weekday, u32>,
    exceptions: HashMap<NaiveDate, u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDay {
    pub weekday: Weekday,
    pub hours: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarException {
    pub day: NaiveDate,
    pub hours: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCalendarConfig {
    working_days: Vec<WorkingDay>,
    #[serde(default)]
    exceptions: Vec<CalendarException>,
}

impl Default for ResourceCalendar {
    fn default() -> Self {
        Self::standard(8)
    }
}

impl ResourceCalendar {
    const ALL_WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Monday to Friday, `hours_per_day` each.
    pub fn standard(hours_per_day: u32) -> Self {
        let weekday_hours = Self::ALL_WEEKDAYS[..5]
            .iter()
            .map(|day| (*day, hours_per_day))
            .collect();
        Self {
            weekday_hours,
            exceptions: HashMap::new(),
        }
    }

    pub fn custom<I, J>(working_days: I, exceptions: J) -> Self
    where
        I: IntoIterator<Item = WorkingDay>,
        J: IntoIterator<Item = CalendarException>,
    {
        let config = ResourceCalendarConfig::new(working_days, exceptions);
        Self::from_config(&config)
    }

    pub fn from_config(config: &ResourceCalendarConfig) -> Self {
        let weekday_hours = config
            .working_days
            .iter()
            .map(|wd| (wd.weekday, wd.hours))
            .collect();
        let exceptions = config
            .exceptions
            .iter()
            .map(|ex| (ex.day, ex.hours))
            .collect();
        Self {
            weekday_hours,
            exceptions,
        }
    }

    pub fn to_config(&self) -> ResourceCalendarConfig {
        ResourceCalendarConfig::from(self)
    }

    pub fn set_weekday_hours(&mut self, weekday: Weekday, hours: u32) {
        if hours == 0 {
            self.weekday_hours.remove(&weekday);
        } else {
            self.weekday_hours.insert(weekday, hours);
        }
    }

    /// Override the workable hours of a single day.
    pub fn add_exception(&mut self, day: NaiveDate, hours: u32) {
        self.exceptions.insert(day, hours);
    }

    pub fn add_holiday(&mut self, day: NaiveDate) {
        self.add_exception(day, 0);
    }

    /// Add the same holiday for every year in the range (inclusive).
    /// Dates that do not exist in a given year (Feb 29) are skipped.
    pub fn add_recurring_holiday(&mut self, month: u32, day: u32, start_year: i32, end_year: i32) {
        for year in start_year..=end_year {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                self.add_holiday(date);
            }
        }
    }

    pub fn workable_hours(&self, day: NaiveDate) -> u32 {
        if let Some(hours) = self.exceptions.get(&day) {
            return *hours;
        }
        self.weekday_hours
            .get(&day.weekday())
            .copied()
            .unwrap_or(0)
    }

    pub fn is_available(&self, day: NaiveDate) -> bool {
        self.workable_hours(day) > 0
    }

    /// Sum of workable hours over `[start, end]`.
    pub fn total_workable_hours(&self, start: NaiveDate, end: NaiveDate) -> u64 {
        let mut total = 0;
        let mut current = start;
        while current <= end {
            total += u64::from(self.workable_hours(current));
            current = current + Duration::days(1);
        }
        total
    }
}

impl ResourceCalendarConfig {
    pub fn new<I, J>(working_days: I, exceptions: J) -> Self
    where
        I: IntoIterator<Item = WorkingDay>,
        J: IntoIterator<Item = CalendarException>,
    {
        let mut working: Vec<WorkingDay> = working_days
            .into_iter()
            .filter(|wd| wd.hours > 0)
            .collect();
        working.sort_by_key(|wd| wd.weekday.num_days_from_monday());
        // Last entry for a weekday wins.
        working.reverse();
        working.dedup_by_key(|wd| wd.weekday.num_days_from_monday());
        working.reverse();

        let mut exceptions: Vec<CalendarException> = exceptions.into_iter().collect();
        exceptions.sort_by_key(|ex| ex.day);
        exceptions.reverse();
        exceptions.dedup_by_key(|ex| ex.day);
        exceptions.reverse();

        Self {
            working_days: working,
            exceptions,
        }
    }

    pub fn working_days(&self) -> &[WorkingDay] {
        &self.working_days
    }

    pub fn exceptions(&self) -> &[CalendarException] {
        &self.exceptions
    }
}

impl Default for ResourceCalendarConfig {
    fn default() -> Self {
        ResourceCalendarConfig::from(&ResourceCalendar::default())
    }
}

impl From<&ResourceCalendar> for ResourceCalendarConfig {
    fn from(calendar: &ResourceCalendar) -> Self {
        let working_days = ResourceCalendar::ALL_WEEKDAYS
            .iter()
            .filter_map(|day| {
                calendar.weekday_hours.get(day).map(|hours| WorkingDay {
                    weekday: *day,
                    hours: *hours,
                })
            })
            .collect();

        let mut exceptions: Vec<CalendarException> = calendar
            .exceptions
            .iter()
            .map(|(day, hours)| CalendarException {
                day: *day,
                hours: *hours,
            })
            .collect();
        exceptions.sort_by_key(|ex| ex.day);

        Self {
            working_days,
            exceptions,
        }
    }
}

impl From<ResourceCalendar> for ResourceCalendarConfig {
    fn from(calendar: ResourceCalendar) -> Self {
        ResourceCalendarConfig::from(&calendar)
    }
}

impl From<ResourceCalendarConfig> for ResourceCalendar {
    fn from(config: ResourceCalendarConfig) -> Self {
        ResourceCalendar::from_config(&config)
    }
}
