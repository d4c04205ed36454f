//! Data Models
//!
//! Request, response, document and configuration types.

pub mod guide;
pub mod query;
pub mod response;
pub mod settings;
pub mod template;

pub use guide::*;
pub use query::*;
pub use response::*;
pub use settings::*;
pub use template::*;
