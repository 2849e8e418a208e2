/// What happens to a type whose registration was rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RetryPolicy {
	/// The type stays claimed; every later `register` fails with `AlreadyRegistered`.
	#[default]
	Poison,
	/// The claim is released so a corrected declaration can register later.
	/// A successfully registered type is never re-registrable.
	AllowAfterRejection,
}

/// Construction-time settings of a [`Registry`](crate::Registry).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
	/// Name attached to log events emitted by the registry.
	pub label: &'static str,
	pub retry: RetryPolicy,
}

impl RegistryConfig {
	pub const fn new(label: &'static str) -> Self {
		Self {
			label,
			retry: RetryPolicy::Poison,
		}
	}

	pub const fn with_retry(self, retry: RetryPolicy) -> Self {
		Self {
			label: self.label,
			retry,
		}
	}
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self::new("enums")
	}
}
