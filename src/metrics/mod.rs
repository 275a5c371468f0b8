//! Metrics module for the application.
//!
//! - This module contains the global Prometheus registry.
//! - Defines request metrics, the cat creation counter and system gauges.

pub mod middleware;
use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Encoder, Gauge, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use sysinfo::{Disks, System};

const REQUEST_LABELS: &[&str] = &["endpoint", "method", "status"];

/// Endpoint label for requests that match no registered route.
pub const UNMATCHED_ENDPOINT: &str = "unmatched";

fn register<C>(collector: C) -> C
where
    C: prometheus::core::Collector + Clone + 'static,
{
    // Names are static and unique, so registration cannot fail.
    REGISTRY
        .register(Box::new(collector.clone()))
        .expect("metric registration");
    collector
}

fn gauge(name: &str, help: &str) -> Gauge {
    register(Gauge::new(name, help).expect("valid gauge options"))
}

lazy_static! {
    // Global Prometheus registry.
    pub static ref REGISTRY: Registry = Registry::new();

    pub static ref REQUEST_COUNTER: CounterVec = register(
        CounterVec::new(
            Opts::new("requests_total", "Total number of HTTP requests"),
            REQUEST_LABELS,
        )
        .expect("valid counter options"),
    );

    pub static ref REQUEST_LATENCY: HistogramVec = register(
        HistogramVec::new(
            HistogramOpts::new("request_latency_seconds", "Request latency in seconds").buckets(
                vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0],
            ),
            REQUEST_LABELS,
        )
        .expect("valid histogram options"),
    );

    pub static ref ERROR_COUNTER: CounterVec = register(
        CounterVec::new(
            Opts::new("error_requests_total", "Total number of error responses"),
            REQUEST_LABELS,
        )
        .expect("valid counter options"),
    );

    pub static ref CATS_CREATED: Counter = register(
        Counter::new("cats_created_total", "Total number of cats created")
            .expect("valid counter options"),
    );

    pub static ref CPU_USAGE: Gauge =
        gauge("cpu_usage_percentage", "Current CPU usage percentage");
    pub static ref MEMORY_USAGE_PERCENT: Gauge =
        gauge("memory_usage_percentage", "Memory usage percentage");
    pub static ref MEMORY_USAGE: Gauge = gauge("memory_usage_bytes", "Memory usage in bytes");
    pub static ref TOTAL_MEMORY: Gauge = gauge("total_memory_bytes", "Total memory in bytes");
    pub static ref AVAILABLE_MEMORY: Gauge =
        gauge("available_memory_bytes", "Available memory in bytes");
    pub static ref DISK_USAGE: Gauge = gauge("disk_usage_bytes", "Used disk space in bytes");
    pub static ref DISK_USAGE_PERCENT: Gauge =
        gauge("disk_usage_percentage", "Disk usage percentage");
}

/// Records one finished request.
///
/// `endpoint` must be a route pattern or [`UNMATCHED_ENDPOINT`], never a raw
/// path, so the number of series stays bounded by the route table.
pub fn observe_request(endpoint: &str, method: &str, status: u16, elapsed_secs: f64) {
    let status = status.to_string();
    let labels = [endpoint, method, status.as_str()];

    REQUEST_LATENCY.with_label_values(&labels).observe(elapsed_secs);
    REQUEST_COUNTER.with_label_values(&labels).inc();
    if status.starts_with('4') || status.starts_with('5') {
        ERROR_COUNTER.with_label_values(&labels).inc();
    }
}

/// Gather all metrics and encode them in the Prometheus text format.
pub fn gather_metrics() -> Result<Vec<u8>, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(buffer)
}

fn percentage(part: u64, total: u64) -> f64 {
    if total > 0 {
        (part as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

/// Updates the system metrics for CPU, memory and disk usage.
pub fn update_system_metrics() {
    let mut sys = System::new_all();
    sys.refresh_all();

    CPU_USAGE.set(sys.global_cpu_usage() as f64);

    let total_memory = sys.total_memory();
    let used_memory = sys.used_memory();
    TOTAL_MEMORY.set(total_memory as f64);
    AVAILABLE_MEMORY.set(sys.available_memory() as f64);
    MEMORY_USAGE.set(used_memory as f64);
    MEMORY_USAGE_PERCENT.set(percentage(used_memory, total_memory));

    let disks = Disks::new_with_refreshed_list();
    let (total_space, available_space) = disks
        .list()
        .iter()
        .fold((0u64, 0u64), |(total, available), disk| {
            (total + disk.total_space(), available + disk.available_space())
        });
    let used_space = total_space.saturating_sub(available_space);
    DISK_USAGE.set(used_space as f64);
    DISK_USAGE_PERCENT.set(percentage(used_space, total_space));
}
