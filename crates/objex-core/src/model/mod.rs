pub mod metadata;
pub mod object;

pub use metadata::Metadata;
pub use object::DomainObject;
