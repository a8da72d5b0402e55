use anyhow::Result;
use chrono::NaiveDate;

use crate::schedule::MonthCursor;
use crate::state::AppState;

/// Cursors from `months` before to `months` after the month holding `around`
pub fn months_around(around: NaiveDate, months: u32) -> Vec<MonthCursor> {
    let center = MonthCursor::containing(around);

    let mut before = Vec::with_capacity(months as usize);
    let mut cursor = center;
    for _ in 0..months {
        cursor = cursor.prev();
        before.push(cursor);
    }
    before.reverse();

    let mut cursors = before;
    cursors.push(center);
    let mut cursor = center;
    for _ in 0..months {
        cursor = cursor.next();
        cursors.push(cursor);
    }
    cursors
}

/// Pre-build the month grids around today so first navigation is a cache hit
pub async fn warmup_month_cache(state: &AppState, months: u32) -> Result<()> {
    let today = state.today();
    let cursors = months_around(today, months);

    let futures: Vec<_> = cursors.iter().map(|c| state.month_grid(*c)).collect();

    // Build all grids concurrently
    let results = futures::future::join_all(futures).await;
    let built = results.into_iter().collect::<Result<Vec<_>, _>>()?.len();

    log::info!(
        "Month cache warmup complete: {} months around {}",
        built,
        today
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::InMemoryProvider;
    use crate::schedule::LocationResolver;
    use std::sync::Arc;
    use std::time::Duration;

    fn cursor(year: i32, month: u32) -> MonthCursor {
        MonthCursor::new(year, month).unwrap()
    }

    #[test]
    fn window_spans_year_boundaries() {
        let around = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let cursors = months_around(around, 2);
        assert_eq!(
            cursors,
            vec![
                cursor(2025, 11),
                cursor(2025, 12),
                cursor(2026, 1),
                cursor(2026, 2),
                cursor(2026, 3),
            ]
        );
        assert_eq!(months_around(around, 0), vec![cursor(2026, 1)]);
    }

    #[actix_web::test]
    async fn warmup_fills_the_cache() {
        let state = AppState::new(
            LocationResolver::default(),
            Arc::new(InMemoryProvider::sample()),
            64,
            Duration::from_secs(60),
        )
        .with_today(NaiveDate::from_ymd_opt(2026, 10, 19));

        warmup_month_cache(&state, 1).await.unwrap();
        assert!(state.is_month_cached(&cursor(2026, 9)));
        assert!(state.is_month_cached(&cursor(2026, 10)));
        assert!(state.is_month_cached(&cursor(2026, 11)));
        assert!(!state.is_month_cached(&cursor(2026, 12)));
    }
}
