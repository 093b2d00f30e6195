use std::sync::Arc;

use amudai_common::{Result, error::Error};
use amudai_datetime::{Calendar, CalendarProvider, TimeZoneError, TimeZoneRegistry};

use crate::config::FunctionsConfig;

/// Everything a function invocation needs beyond its arguments: the calendar
/// lookup service and the evaluation settings.
///
/// Cloning is cheap; clones share the same calendar cache.
#[derive(Clone)]
pub struct FunctionContext {
    calendars: Arc<dyn CalendarProvider>,
    config: FunctionsConfig,
}

impl FunctionContext {
    pub fn new(calendars: Arc<dyn CalendarProvider>, config: FunctionsConfig) -> FunctionContext {
        FunctionContext { calendars, config }
    }

    /// Creates a context backed by a fresh [`TimeZoneRegistry`] whose default
    /// calendar is `config.default_timezone`.
    ///
    /// # Errors
    /// Fails if the configuration is invalid or its default time zone is unknown.
    pub fn from_config(config: FunctionsConfig) -> Result<FunctionContext> {
        config.validate()?;
        let registry = TimeZoneRegistry::new(&config.default_timezone).map_err(into_error)?;
        Ok(FunctionContext::new(Arc::new(registry), config))
    }

    pub fn calendars(&self) -> &Arc<dyn CalendarProvider> {
        &self.calendars
    }

    pub fn config(&self) -> &FunctionsConfig {
        &self.config
    }

    /// The calendar for an explicit time zone, or the default calendar for `None`.
    pub fn resolve_calendar(&self, timezone: Option<&str>) -> Result<Arc<dyn Calendar>> {
        match timezone {
            Some(name) => self.calendars.calendar(name).map_err(into_error),
            None => Ok(self.calendars.default_calendar()),
        }
    }
}

impl Default for FunctionContext {
    fn default() -> Self {
        FunctionContext::new(
            Arc::new(TimeZoneRegistry::utc()),
            FunctionsConfig::default(),
        )
    }
}

impl std::fmt::Debug for FunctionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionContext")
            .field("default_timezone", &self.calendars.default_calendar().time_zone())
            .field("config", &self.config)
            .finish()
    }
}

fn into_error(err: TimeZoneError) -> Error {
    match err {
        TimeZoneError::UnknownTimeZone(name) => Error::unknown_timezone(name),
    }
}
