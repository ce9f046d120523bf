use once_cell::sync::Lazy;
use opentelemetry::{
    global,
    metrics::{Counter, Histogram, Meter},
};

pub static METER: Lazy<Meter> = Lazy::new(|| global::meter("hairlyzer-api"));

pub static HTTP_REQUESTS_TOTAL: Lazy<Counter<u64>> = Lazy::new(|| {
    METER
        .u64_counter("http.server.requests")
        .with_description("Total HTTP requests served")
        .build()
});

pub static HTTP_REQUEST_DURATION: Lazy<Histogram<f64>> = Lazy::new(|| {
    METER
        .f64_histogram("http.server.request.duration")
        .with_description("HTTP request latency in milliseconds")
        .with_unit("ms")
        .build()
});

pub static USERS_REGISTERED: Lazy<Counter<u64>> = Lazy::new(|| {
    METER
        .u64_counter("users.registered")
        .with_description("Total users registered")
        .build()
});

pub static ASSESSMENTS_CREATED: Lazy<Counter<u64>> = Lazy::new(|| {
    METER
        .u64_counter("assessments.created")
        .with_description("Total assessments created")
        .build()
});

pub static PHOTOS_UPLOADED: Lazy<Counter<u64>> = Lazy::new(|| {
    METER
        .u64_counter("photos.uploaded")
        .with_description("Total profile photos uploaded")
        .build()
});

pub static PROGRESS_QUERIES: Lazy<Counter<u64>> = Lazy::new(|| {
    METER
        .u64_counter("progress.queries")
        .with_description("Total progress tracker queries answered")
        .build()
});
