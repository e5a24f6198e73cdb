// src/domain/mod.rs
/// Declares a positive integer identifier newtype for a persisted entity.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i64);

        impl $name {
            pub fn new(id: i64) -> $crate::domain::errors::DomainResult<Self> {
                if id <= 0 {
                    Err($crate::domain::errors::DomainError::Validation(
                        concat!("Invalid ", $label, " ID").into(),
                    ))
                } else {
                    Ok(Self(id))
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use entity_id;

pub mod catalog;
pub mod errors;
pub mod order;
pub mod slug;
