mod init;
mod metrics;

pub use init::{TelemetryGuard, init_telemetry};
pub use metrics::{
    ASSESSMENTS_CREATED, HTTP_REQUEST_DURATION, HTTP_REQUESTS_TOTAL, PHOTOS_UPLOADED,
    PROGRESS_QUERIES, USERS_REGISTERED,
};
