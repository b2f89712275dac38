mod service;

pub use service::ServiceError;
