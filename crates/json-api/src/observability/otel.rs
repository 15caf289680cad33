//! OpenTelemetry tracer provider setup.

use std::time::Duration;

use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    Resource,
    trace::{RandomIdGenerator, Sampler, SdkTracerProvider},
};

use crate::config::{ServerConfig, observability::ObservabilityConfig};

use super::ObservabilityError;

pub(super) fn build_tracer_provider(
    config: &ServerConfig,
) -> Result<SdkTracerProvider, ObservabilityError> {
    let settings = &config.observability;

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(settings.otel_exporter_otlp_endpoint.clone())
        .with_timeout(Duration::from_secs(
            settings.otel_exporter_otlp_timeout_seconds,
        ))
        .build()?;

    let sampler = Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(
        settings.otel_trace_sample_ratio.clamp(0.0, 1.0),
    )));

    Ok(SdkTracerProvider::builder()
        .with_sampler(sampler)
        .with_id_generator(RandomIdGenerator::default())
        .with_resource(service_resource(settings))
        .with_batch_exporter(exporter)
        .build())
}

fn service_resource(settings: &ObservabilityConfig) -> Resource {
    Resource::builder_empty()
        .with_service_name(settings.otel_service_name.clone())
        .with_attributes([
            KeyValue::new("service.version", settings.otel_service_version.clone()),
            KeyValue::new(
                "deployment.environment.name",
                settings.otel_deployment_environment.clone(),
            ),
        ])
        .build()
}
