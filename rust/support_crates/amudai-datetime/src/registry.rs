//! Process-wide cache of per-time-zone calendars.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::calendar::{Calendar, CalendarProvider};
use crate::date_lut::DateLut;
use crate::TimeZoneResult;

/// Builds each [`DateLut`] on first use and hands out shared references afterwards.
///
/// A registry is meant to be wrapped in an `Arc` and passed to every function
/// invocation that needs calendar lookups.
#[derive(Debug)]
pub struct TimeZoneRegistry {
    default: Arc<DateLut>,
    calendars: RwLock<HashMap<String, Arc<DateLut>>>,
}

impl TimeZoneRegistry {
    /// Creates a registry whose default calendar is `default_time_zone`.
    ///
    /// # Errors
    /// Fails if `default_time_zone` is not a known time zone name.
    pub fn new(default_time_zone: &str) -> TimeZoneResult<TimeZoneRegistry> {
        let default = Arc::new(DateLut::new(default_time_zone)?);
        let mut calendars = HashMap::new();
        calendars.insert(default_time_zone.to_string(), default.clone());
        Ok(TimeZoneRegistry {
            default,
            calendars: RwLock::new(calendars),
        })
    }

    pub fn utc() -> TimeZoneRegistry {
        let default = Arc::new(DateLut::utc());
        let mut calendars = HashMap::new();
        calendars.insert(default.time_zone().to_string(), default.clone());
        TimeZoneRegistry {
            default,
            calendars: RwLock::new(calendars),
        }
    }

    /// Returns the calendar for `name`, building and caching it if needed.
    /// An empty name resolves to the default calendar.
    pub fn get(&self, name: &str) -> TimeZoneResult<Arc<DateLut>> {
        if name.is_empty() {
            return Ok(self.default.clone());
        }
        if let Some(lut) = self
            .calendars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
        {
            return Ok(lut.clone());
        }

        let lut = Arc::new(DateLut::new(name)?);
        log::debug!("built date LUT for time zone '{name}'");
        let mut calendars = self
            .calendars
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(calendars.entry(name.to_string()).or_insert(lut).clone())
    }

    /// Number of cached calendars, including the default one.
    pub fn len(&self) -> usize {
        self.calendars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CalendarProvider for TimeZoneRegistry {
    fn default_calendar(&self) -> Arc<dyn Calendar> {
        self.default.clone()
    }

    fn calendar(&self, time_zone: &str) -> TimeZoneResult<Arc<dyn Calendar>> {
        Ok(self.get(time_zone)?)
    }
}
