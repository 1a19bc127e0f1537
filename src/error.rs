use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors produced while parsing structured metadata text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
	/// Version text was empty.
	#[error("empty version text")]
	EmptyVersion,
	/// Version branch component was not an unsigned integer.
	#[error("bad version component: {text}")]
	BadVersionComponent {
		/// Offending component text.
		text: String,
	},
	/// Version tag between separators was empty.
	#[error("empty version tag at position {index}")]
	EmptyVersionTag {
		/// Zero-based tag position.
		index: usize,
	},
	/// Fingerprint text was not exactly 32 hex digits.
	#[error("bad fingerprint: {text}")]
	BadFingerprint {
		/// Offending fingerprint text.
		text: String,
	},
}
