//! Common utilities for the gateway adapter

pub mod masking {
    use std::{fmt, marker::PhantomData};

    use serde::{Deserialize, Deserializer};

    /// Formatting strategy applied when a secret is printed.
    pub trait Strategy<T> {
        fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result;
    }

    /// Default strategy, prints only the type name of the hidden value.
    #[derive(Clone, Copy)]
    pub enum WithType {}

    impl<T> Strategy<T> for WithType {
        fn fmt(_: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("*** ")?;
            f.write_str(std::any::type_name::<T>())?;
            f.write_str(" ***")
        }
    }

    /// Wrapper that keeps a value out of `Debug` output and logs.
    pub struct Secret<T, S = WithType> {
        inner: T,
        marker: PhantomData<S>,
    }

    impl<T, S> Secret<T, S> {
        pub fn new(inner: T) -> Self {
            Self {
                inner,
                marker: PhantomData,
            }
        }
    }

    impl<T, S> From<T> for Secret<T, S> {
        fn from(inner: T) -> Self {
            Self::new(inner)
        }
    }

    impl<T: Clone, S> Clone for Secret<T, S> {
        fn clone(&self) -> Self {
            Self::new(self.inner.clone())
        }
    }

    impl<T: PartialEq, S> PartialEq for Secret<T, S> {
        fn eq(&self, other: &Self) -> bool {
            self.inner == other.inner
        }
    }

    impl<T: Eq, S> Eq for Secret<T, S> {}

    impl<T: Default, S> Default for Secret<T, S> {
        fn default() -> Self {
            Self::new(T::default())
        }
    }

    impl<T, S: Strategy<T>> fmt::Debug for Secret<T, S> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            S::fmt(&self.inner, f)
        }
    }

    impl<'de, T: Deserialize<'de>, S> Deserialize<'de> for Secret<T, S> {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            T::deserialize(deserializer).map(Self::new)
        }
    }

    pub trait PeekInterface<T> {
        fn peek(&self) -> &T;
    }

    impl<T, S> PeekInterface<T> for Secret<T, S> {
        fn peek(&self) -> &T {
            &self.inner
        }
    }

    pub trait ExposeInterface<T> {
        fn expose(self) -> T;
    }

    impl<T, S> ExposeInterface<T> for Secret<T, S> {
        fn expose(self) -> T {
            self.inner
        }
    }

    /// A value that is either safe to print or has to stay masked.
    #[derive(Clone, PartialEq, Eq)]
    pub enum Maskable<T> {
        Masked(Secret<T>),
        Normal(T),
    }

    impl<T> Maskable<T> {
        pub fn new_masked(value: Secret<T>) -> Self {
            Self::Masked(value)
        }

        pub fn new_normal(value: T) -> Self {
            Self::Normal(value)
        }

        pub fn is_masked(&self) -> bool {
            matches!(self, Self::Masked(_))
        }

        pub fn into_inner(self) -> T {
            match self {
                Self::Masked(inner) => inner.expose(),
                Self::Normal(inner) => inner,
            }
        }
    }

    impl<T> PeekInterface<T> for Maskable<T> {
        fn peek(&self) -> &T {
            match self {
                Self::Masked(inner) => inner.peek(),
                Self::Normal(inner) => inner,
            }
        }
    }

    impl<T: fmt::Debug> fmt::Debug for Maskable<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Masked(secret) => fmt::Debug::fmt(secret, f),
                Self::Normal(value) => fmt::Debug::fmt(value, f),
            }
        }
    }

    impl From<String> for Maskable<String> {
        fn from(value: String) -> Self {
            Self::new_normal(value)
        }
    }

    impl From<&str> for Maskable<String> {
        fn from(value: &str) -> Self {
            Self::new_normal(value.to_owned())
        }
    }

    impl From<Secret<String>> for Maskable<String> {
        fn from(value: Secret<String>) -> Self {
            Self::new_masked(value)
        }
    }
}

pub use masking::{ExposeInterface, Maskable, PeekInterface, Secret, Strategy, WithType};

pub mod consts;
pub mod errors;
pub mod pii;
pub mod request;
pub mod types;

pub use errors::{CustomResult, ParsingError};
pub use request::{Method, Request, RequestBuilder, RequestContent};
pub use types::StringMinorUnit;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_debug_hides_value() {
        let secret: Secret<String> = Secret::new("4111111111111111".to_string());
        let printed = format!("{secret:?}");
        assert!(!printed.contains("4111"));
        assert_eq!(printed, "*** alloc::string::String ***");
        assert_eq!(secret.peek(), "4111111111111111");
    }

    #[test]
    fn maskable_exposes_inner_value_on_demand() {
        let masked = Maskable::from(Secret::new("123".to_string()));
        let normal = Maskable::from("944");
        assert!(masked.is_masked());
        assert!(!normal.is_masked());
        assert_eq!(format!("{normal:?}"), "\"944\"");
        assert_eq!(masked.into_inner(), "123");
    }

    #[test]
    fn secret_deserializes_transparently() {
        let secret: Secret<String> = serde_json::from_str("\"passphrase\"").unwrap();
        assert_eq!(secret.expose(), "passphrase");
    }
}
