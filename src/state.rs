use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use moka::future::Cache;

use crate::config::Config;
use crate::error::ScheduleError;
use crate::provider::ScheduleDataProvider;
use crate::schedule::{LocationResolver, MonthCursor, MonthGrid};

/// Shared by every worker; handlers get it as `web::Data<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub resolver: LocationResolver,
    pub provider: Arc<dyn ScheduleDataProvider>,
    month_grids: Cache<MonthCursor, Arc<MonthGrid>>,
    pinned_today: Option<NaiveDate>,
}

impl AppState {
    pub fn new(
        resolver: LocationResolver,
        provider: Arc<dyn ScheduleDataProvider>,
        cache_capacity: u64,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            resolver,
            provider,
            month_grids: Cache::builder()
                .max_capacity(cache_capacity)
                .time_to_live(cache_ttl)
                .build(),
            pinned_today: None,
        }
    }

    pub fn from_config(
        config: &Config,
        provider: Arc<dyn ScheduleDataProvider>,
    ) -> Result<Self, ScheduleError> {
        let resolver = LocationResolver::new(config.reference_office_friday)?;
        Ok(Self::new(
            resolver,
            provider,
            config.month_cache_capacity,
            Duration::from_secs(config.month_cache_ttl_secs),
        )
        .with_today(config.today))
    }

    pub fn with_today(mut self, today: Option<NaiveDate>) -> Self {
        self.pinned_today = today;
        self
    }

    /// Local wall-clock date unless pinned
    pub fn today(&self) -> NaiveDate {
        self.pinned_today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Month grid without the today marker, memoized per cursor.
    pub async fn month_grid(&self, cursor: MonthCursor) -> Result<Arc<MonthGrid>, ScheduleError> {
        if let Some(grid) = self.month_grids.get(&cursor).await {
            return Ok(grid);
        }
        let grid = Arc::new(MonthGrid::build(&self.resolver, cursor)?);
        self.month_grids.insert(cursor, grid.clone()).await;
        Ok(grid)
    }

    #[cfg(test)]
    pub fn is_month_cached(&self, cursor: &MonthCursor) -> bool {
        self.month_grids.contains_key(cursor)
    }
}
