//! Value objects - Immutable objects defined by their attributes

mod phone_type;

pub use phone_type::PhoneType;
