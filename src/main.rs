use std::env;
use std::str::FromStr;
use std::sync::Arc;
use time::macros::format_description;
use time::{Date, Time};
use tourplan::calendar::{JsonFileVisitStore, VisitCalendar};
use tourplan::catalog::{builtin_catalog, filter_catalog, load_catalog};
use tourplan::config::Config;
use tourplan::models::{PlanRequest, PoiCategory};
use tourplan::services::location::FixedLocationProvider;
use tourplan::services::recommendation::local_date_today;
use tourplan::{AppError, RecommendationService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        "\
Usage: tourplan [OPTIONS]

Options:
  --max-distance=KM     Search radius around the current position
  --max-stops=N         Maximum number of stops in the itinerary
  --max-hours=H         Total time budget in hours
  --start=HH:MM         Start time (default: now)
  --category=NAME       Only consider monuments of this category
  --search=TEXT         Only consider monuments whose name or description matches
  --nearby              List nearby monuments without planning a route
  --confirm             Save the planned itinerary to the visit calendar
  --calendar[=DATE]     Show calendar visits for DATE (YYYY-MM-DD, default: today)
  --help                Show this help message"
    );
}

/// Value of `--name=value`, parsed; `Ok(None)` when the flag is absent.
fn flag_value<T: FromStr>(args: &[String], name: &str) -> Result<Option<T>, String> {
    let prefix = format!("--{}=", name);
    match args.iter().find_map(|a| a.strip_prefix(prefix.as_str())) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| format!("Invalid value for --{}: '{}'", name, raw)),
        None => Ok(None),
    }
}

fn parse_start_time(raw: &str) -> Result<Time, String> {
    Time::parse(raw, format_description!("[hour]:[minute]"))
        .map_err(|_| format!("Invalid --start '{}', expected HH:MM", raw))
}

fn parse_date(raw: &str) -> Result<Date, String> {
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", raw))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tourplan=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help") {
        print_help();
        return Ok(());
    }

    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;
    let calendar = VisitCalendar::new(Arc::new(JsonFileVisitStore::new(
        config.visits_path.clone(),
    )));

    // Calendar view
    if let Some(arg) = args.iter().find(|a| a.starts_with("--calendar")) {
        let date = match arg.strip_prefix("--calendar=") {
            Some(raw) => parse_date(raw)?,
            None => local_date_today(),
        };
        let visits = calendar.visits_on(date).await.map_err(AppError::logged)?;
        let days = calendar.day_summaries().await.map_err(AppError::logged)?;
        let days: Vec<_> = days
            .into_iter()
            .map(|(day, summary)| serde_json::json!({ "date": day.to_string(), "summary": summary }))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "visits": visits, "days": days }))?
        );
        return Ok(());
    }

    let catalog = match &config.catalog_path {
        Some(path) => load_catalog(path).await.map_err(AppError::logged)?,
        None => builtin_catalog(),
    };

    let category: Option<PoiCategory> = flag_value(&args, "category")?;
    let search: Option<String> = flag_value(&args, "search")?;
    let catalog: Vec<_> = filter_catalog(&catalog, category, search.as_deref())
        .into_iter()
        .cloned()
        .collect();

    let mut request = PlanRequest::from_config(&config.planner);
    if let Some(km) = flag_value(&args, "max-distance")? {
        request.max_distance_km = km;
    }
    if let Some(n) = flag_value(&args, "max-stops")? {
        request.max_stops = n;
    }
    if let Some(h) = flag_value(&args, "max-hours")? {
        request.max_duration_hours = h;
    }
    if let Some(raw) = flag_value::<String>(&args, "start")? {
        request = request.with_start_time(parse_start_time(&raw)?);
    }

    let location = Arc::new(FixedLocationProvider::new(config.device_position));
    let service = RecommendationService::new(location, config.location_timeout, &config.planner)
        .map_err(AppError::logged)?;

    if args.iter().any(|a| a == "--nearby") {
        let nearby = service
            .nearby(&catalog, request.max_distance_km)
            .await
            .map_err(AppError::logged)?;
        println!("{}", serde_json::to_string_pretty(&nearby)?);
        return Ok(());
    }

    let recommendation = service
        .recommend(&catalog, &request)
        .await
        .map_err(AppError::logged)?;

    if recommendation.nearby.is_empty() {
        tracing::warn!(
            "No monuments within {} km, try a larger --max-distance",
            request.max_distance_km
        );
    }

    println!("{}", serde_json::to_string_pretty(&recommendation)?);

    if args.iter().any(|a| a == "--confirm") {
        if recommendation.itinerary.is_empty() {
            tracing::warn!("Itinerary is empty, nothing saved to the calendar");
        } else {
            let records = recommendation
                .itinerary
                .to_visit_records(local_date_today());
            let added = calendar
                .append_visits(records)
                .await
                .map_err(AppError::logged)?;
            tracing::info!("{} monument(s) added to the calendar", added);
        }
    }

    Ok(())
}
