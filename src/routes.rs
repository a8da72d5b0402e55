use crate::{
    api::{calendar, holidays, leave},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use anyhow::anyhow;

pub type LimiterConfig = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-IP limiter allowing `requests_per_min`, bursting up to the same amount
pub fn build_limiter(requests_per_min: u32) -> anyhow::Result<LimiterConfig> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        (60_000 / requests_per_min as u64).max(1)
    };
    GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow!("invalid rate limit: {requests_per_min} requests per minute"))
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limiter: &LimiterConfig) {
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(Governor::new(limiter)) // rate limiting
            .configure(api_routes),
    );
}

/// View routes, relative to the API prefix
pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/calendar")
            // /calendar?year=&month=
            .service(web::resource("").route(web::get().to(calendar::month_view))),
    )
    // /location/{year}/{month}/{day}
    .service(
        web::resource("/location/{year}/{month}/{day}")
            .route(web::get().to(calendar::location_for_date)),
    )
    .service(
        web::scope("/holidays")
            // /holidays?show_past=
            .service(web::resource("").route(web::get().to(holidays::holiday_list)))
            // /holidays/import
            .service(
                web::resource("/import").route(web::post().to(holidays::import_holidays)),
            ),
    )
    .service(
        web::scope("/leave")
            // /leave?tab=
            .service(web::resource("").route(web::get().to(leave::leave_planner)))
            // /leave/requests
            .service(web::resource("/requests").route(web::post().to(leave::request_leave))),
    );
}

// GET /api/calendar?year=2026&month=1
//  └─ month grid (cells, summary, prev/next cursors)

// GET /api/holidays?show_past=true
//  └─ all holidays, upcoming ones with a countdown

// GET /api/leave?tab=requests
//  └─ request cards instead of balance bars
