pub mod analytics;
pub mod driver;
pub mod equipment;
pub mod location;
pub mod receivable;
pub mod trip;
