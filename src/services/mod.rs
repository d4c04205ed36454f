//! Business Logic Services

pub mod guide;

pub use guide::GuideService;
