use thiserror::Error;

/// When an [`EnumError`] can be raised, and how callers are expected to treat it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
	/// Raised by `register`. Fatal for the type within this process.
	Registration,
	/// Raised by reads. Ordinary and recoverable.
	Lookup,
	/// Raised when singleton identity would be broken. Always a caller bug.
	Lifecycle,
}

/// Errors raised by the enumeration registry.
///
/// Every variant carries the owning enumeration's name so messages stay useful
/// once they leave the call site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumError {
	/// The type was already claimed by an earlier `register` call.
	#[error("enum {owner} already defined")]
	AlreadyRegistered { owner: &'static str },
	/// The type declares itself open to further specialization.
	#[error("{owner} needs to be a closed enumeration")]
	NotClosed { owner: &'static str },
	/// The type refines another enumeration instead of the variant base.
	#[error("{owner} needs to directly refine the variant base, not {parent}")]
	NotDirectRefinement {
		owner: &'static str,
		parent: &'static str,
	},
	/// `register` was called with no slots.
	#[error("enum {owner} declares no variants")]
	EmptyDeclaration { owner: &'static str },
	/// The type has no published variants.
	#[error("enum {owner} is not registered")]
	NotRegistered { owner: &'static str },
	/// No variant of the type answers to `symbol`.
	#[error("{symbol} is not an {owner}")]
	NoSuchSymbol { owner: &'static str, symbol: String },
	/// A second instance of an existing variant would be created.
	#[error("no duplicate allowed for enum {owner}: {name}")]
	IllegalDuplication {
		owner: &'static str,
		name: &'static str,
	},
	/// A variant was about to be rebuilt from external data.
	#[error("variants of enum {owner} cannot be reconstructed from external data")]
	IllegalReconstruction { owner: &'static str },
}

impl EnumError {
	/// Returns the name of the enumeration the error refers to.
	pub fn owner(&self) -> &'static str {
		match self {
			Self::AlreadyRegistered { owner }
			| Self::NotClosed { owner }
			| Self::NotDirectRefinement { owner, .. }
			| Self::EmptyDeclaration { owner }
			| Self::NotRegistered { owner }
			| Self::NoSuchSymbol { owner, .. }
			| Self::IllegalDuplication { owner, .. }
			| Self::IllegalReconstruction { owner } => owner,
		}
	}

	/// Returns the taxonomy bucket of this error.
	pub fn class(&self) -> ErrorClass {
		match self {
			Self::AlreadyRegistered { .. }
			| Self::NotClosed { .. }
			| Self::NotDirectRefinement { .. }
			| Self::EmptyDeclaration { .. } => ErrorClass::Registration,
			Self::NotRegistered { .. } | Self::NoSuchSymbol { .. } => ErrorClass::Lookup,
			Self::IllegalDuplication { .. } | Self::IllegalReconstruction { .. } => ErrorClass::Lifecycle,
		}
	}
}

pub type Result<T, E = EnumError> = std::result::Result<T, E>;
