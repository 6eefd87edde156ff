/*!
 * Structured Tracing
 * Diagnostics for the simulator using the tracing crate
 */

use crate::scheduler::SchedulingPolicy;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - PROCSIM_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("PROCSIM_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    // Diagnostics go to stderr so they never interleave with the report on stdout
    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        info!("Structured tracing initialized");
    }
}

/// Generate a unique id for one policy run
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span covering one policy run
pub fn policy_span(policy: SchedulingPolicy) -> Span {
    let run_id = generate_run_id();
    match policy {
        SchedulingPolicy::RoundRobin { quantum } => {
            info_span!("policy_run", policy = %policy, quantum, run_id = %run_id)
        }
        _ => info_span!("policy_run", policy = %policy, run_id = %run_id),
    }
}
