pub mod auth_service;
pub use auth_service::{AuthError, AuthService};

pub mod auth_service_impl;
pub use auth_service_impl::SeaOrmAuthService;

pub mod password;

pub mod portal_service;
pub use portal_service::PortalService;

pub mod portal_service_impl;
pub use portal_service_impl::SeaOrmPortalService;
