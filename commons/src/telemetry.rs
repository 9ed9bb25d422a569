use std::collections::HashMap;
use std::path::{Path, PathBuf};

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_otlp::{LogExporter, SpanExporter, WithExportConfig, WithHttpConfig};
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::layer::SubscriberExt;

const DEFAULT_SERVICE_NAME: &str = "hemi-bridge";
const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub service_name: String,
    pub traces_endpoint: Option<String>,
    pub logs_endpoint: Option<String>,
    pub auth_header: Option<String>,
    pub local_log_file: Option<PathBuf>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            traces_endpoint: None,
            logs_endpoint: None,
            auth_header: None,
            local_log_file: None,
        }
    }
}

impl TelemetryConfig {
    // Reads the standard OTEL_* variables; unset endpoints disable the matching exporter.
    pub fn from_env() -> Self {
        Self {
            service_name: std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string()),
            traces_endpoint: std::env::var("OTEL_EXPORTER_OTLP_TRACES_ENDPOINT").ok(),
            logs_endpoint: std::env::var("OTEL_EXPORTER_OTLP_LOGS_ENDPOINT").ok(),
            auth_header: std::env::var("OTEL_EXPORTER_AUTH").ok(),
            local_log_file: None,
        }
    }

    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    pub fn with_local_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.local_log_file = Some(path.into());
        self
    }

    fn export_headers(&self) -> HashMap<String, String> {
        self.auth_header
            .iter()
            .map(|auth| ("Authorization".to_string(), auth.clone()))
            .collect()
    }
}

/// Keeps exporters and the file writer alive; flushes them when dropped.
pub struct TelemetryGuard {
    tracer_provider: Option<SdkTracerProvider>,
    logger_provider: Option<SdkLoggerProvider>,
    _file_log_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.tracer_provider.take()
            && let Err(e) = provider.shutdown()
        {
            eprintln!("Failed to shutdown tracer provider: {e}");
        }

        if let Some(provider) = self.logger_provider.take()
            && let Err(e) = provider.shutdown()
        {
            eprintln!("Failed to shutdown logger provider: {e}");
        }
    }
}

pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (writer, file_log_guard) = match &config.local_log_file {
        Some(path) => {
            let (file_writer, guard) = tracing_appender::non_blocking(open_log_file(path)?);
            (BoxMakeWriter::new(std::io::stderr.and(file_writer)), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    // Event output goes to stderr so command results on stdout stay machine readable.
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(writer);

    let resource = Resource::builder()
        .with_service_name(config.service_name.clone())
        .build();

    let tracer_provider = config
        .traces_endpoint
        .as_deref()
        .map(|endpoint| {
            let exporter = SpanExporter::builder()
                .with_http()
                .with_endpoint(endpoint)
                .with_headers(config.export_headers())
                .build()?;
            Ok::<_, Box<dyn std::error::Error>>(
                SdkTracerProvider::builder()
                    .with_resource(resource.clone())
                    .with_batch_exporter(exporter)
                    .build(),
            )
        })
        .transpose()?;

    let logger_provider = config
        .logs_endpoint
        .as_deref()
        .map(|endpoint| {
            let exporter = LogExporter::builder()
                .with_http()
                .with_endpoint(endpoint)
                .with_headers(config.export_headers())
                .build()?;
            Ok::<_, Box<dyn std::error::Error>>(
                SdkLoggerProvider::builder()
                    .with_resource(resource.clone())
                    .with_batch_exporter(exporter)
                    .build(),
            )
        })
        .transpose()?;

    // Spans go to the trace exporter, events stay logs.
    let otel_trace_layer = tracer_provider.as_ref().map(|provider| {
        OpenTelemetryLayer::new(provider.tracer(config.service_name.clone()))
            .with_filter(filter_fn(|meta| meta.is_span()))
    });
    let otel_log_layer = logger_provider.as_ref().map(OpenTelemetryTracingBridge::new);

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(otel_trace_layer)
        .with(otel_log_layer);

    tracing::subscriber::set_global_default(subscriber)?;

    let _ = tracing_log::LogTracer::builder().init();

    Ok(TelemetryGuard {
        tracer_provider,
        logger_provider,
        _file_log_guard: file_log_guard,
    })
}

pub fn init_telemetry_from_env(local_log_file: Option<&Path>) -> Result<TelemetryGuard, Box<dyn std::error::Error>> {
    let mut config = TelemetryConfig::from_env();
    if let Some(path) = local_log_file {
        config = config.with_local_log_file(path);
    }
    init_telemetry(config)
}

fn open_log_file(path: &Path) -> Result<std::fs::File, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}
