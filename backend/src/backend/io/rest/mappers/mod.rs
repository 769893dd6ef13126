//! DTO <-> domain mappers for the REST layer.

pub mod geography_mapper;
pub mod registration_mapper;
pub mod session_mapper;
pub mod volunteer_mapper;

pub use geography_mapper::GeographyMapper;
pub use registration_mapper::RegistrationMapper;
pub use session_mapper::SessionMapper;
pub use volunteer_mapper::VolunteerMapper;
