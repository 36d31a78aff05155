//! Error types for the effect system.
//!
//! This module provides the fault type produced when
//! [`IOMonad::try_catch`](super::IOMonad::try_catch) captures a panic.

use std::any::Any;

/// A panic captured by [`IOMonad::try_catch`](super::IOMonad::try_catch).
///
/// Holds the panic payload as it was raised, plus its message: `&str` and
/// `String` payloads give their text, anything else gives `"Unknown panic"`.
/// The payload can be borrowed with [`payload`](Self::payload) or taken back
/// with [`into_payload`](Self::into_payload).
///
/// Equality and hashing look at the message only. The payload is not
/// `Clone` or `Sync`, so neither is `PanicFault`.
///
/// # Examples
///
/// ```rust
/// use base_return::effect::PanicFault;
///
/// let fault = PanicFault::new("division by zero");
/// assert_eq!(format!("{fault}"), "panicked: division by zero");
/// assert_eq!(
///     fault.payload().downcast_ref::<String>().map(String::as_str),
///     Some("division by zero")
/// );
/// ```
pub struct PanicFault {
    /// The panic message.
    pub message: String,
    payload: Box<dyn Any + Send>,
}

impl PanicFault {
    /// Creates a fault whose payload is the message itself.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            payload: Box::new(message.clone()),
            message,
        }
    }

    pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(string) = payload.downcast_ref::<&str>() {
            (*string).to_string()
        } else if let Some(string) = payload.downcast_ref::<String>() {
            string.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self { message, payload }
    }

    /// Borrows the original panic payload.
    #[inline]
    pub fn payload(&self) -> &(dyn Any + Send) {
        self.payload.as_ref()
    }

    /// Takes back the original panic payload, e.g. to downcast it or to
    /// resume unwinding with it.
    #[inline]
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }
}

impl std::fmt::Debug for PanicFault {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PanicFault")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl PartialEq for PanicFault {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for PanicFault {}

impl std::hash::Hash for PanicFault {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.message.hash(state);
    }
}

impl std::fmt::Display for PanicFault {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "panicked: {}", self.message)
    }
}

impl std::error::Error for PanicFault {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_from_str_payload() {
        let fault = PanicFault::from_payload(Box::new("oops"));
        assert_eq!(fault.message, "oops");
        assert_eq!(fault.payload().downcast_ref::<&str>(), Some(&"oops"));
    }

    #[rstest]
    fn test_from_string_payload() {
        let fault = PanicFault::from_payload(Box::new(format!("code {}", 7)));
        assert_eq!(fault.message, "code 7");
    }

    #[rstest]
    fn test_opaque_payload_is_kept() {
        let fault = PanicFault::from_payload(Box::new(42_u8));
        assert_eq!(fault.message, "Unknown panic");
        assert_eq!(fault.into_payload().downcast::<u8>().ok().map(|n| *n), Some(42));
    }

    #[rstest]
    fn test_equality_ignores_payload() {
        let left = PanicFault::from_payload(Box::new("same"));
        let right = PanicFault::new("same");
        assert_eq!(left, right);
        assert_ne!(left, PanicFault::new("other"));
    }

    #[rstest]
    fn test_panic_fault_is_error() {
        fn assert_error<T: std::error::Error>(_: &T) {}
        let fault = PanicFault::new("boom");
        assert_error(&fault);
        assert_eq!(fault.to_string(), "panicked: boom");
        assert_eq!(format!("{fault:?}"), r#"PanicFault { message: "boom", .. }"#);
    }
}
