//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod business_service;
pub mod category_service;
pub mod command_service;
pub mod session_service;

pub use business_service::{BusinessOnboardingService, OnboardBusiness, OnboardedBusiness};
pub use category_service::CategoryService;
pub use command_service::{CommandListingService, ListCommands};
pub use session_service::{SessionService, StartedSession};
