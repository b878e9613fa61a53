use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub dashboard_requests_total: IntCounterVec,
    pub dashboard_build_seconds: HistogramVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let dashboard_requests_total = IntCounterVec::new(
            Opts::new("dashboard_requests_total", "Dashboard snapshots served by outcome"),
            &["outcome"],
        )
        .expect("valid dashboard_requests_total metric");

        let dashboard_build_seconds = HistogramVec::new(
            HistogramOpts::new(
                "dashboard_build_seconds",
                "Time spent formatting a dashboard snapshot in seconds",
            ),
            &["filtered"],
        )
        .expect("valid dashboard_build_seconds metric");

        registry
            .register(Box::new(dashboard_requests_total.clone()))
            .expect("register dashboard_requests_total");
        registry
            .register(Box::new(dashboard_build_seconds.clone()))
            .expect("register dashboard_build_seconds");

        Self {
            registry,
            dashboard_requests_total,
            dashboard_build_seconds,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
