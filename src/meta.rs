use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{ParseError, Result};
use crate::protocol::{ForceDeep, Forced};

/// Release version: ordered numeric branch plus free-form tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
	/// Dot-separated numeric components, most significant first.
	pub branch: Vec<u32>,
	/// Trailing tags, in declaration order.
	pub tags: Vec<Box<str>>,
}

impl Version {
	/// Build a version from branch components only.
	pub fn new(branch: Vec<u32>) -> Self {
		Self {
			branch,
			tags: Vec::new(),
		}
	}
}

impl fmt::Display for Version {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, part) in self.branch.iter().enumerate() {
			if idx > 0 {
				f.write_str(".")?;
			}
			write!(f, "{part}")?;
		}
		for tag in &self.tags {
			write!(f, "-{tag}")?;
		}
		Ok(())
	}
}

impl FromStr for Version {
	type Err = ParseError;

	/// Parse `1.2.3-tag-other` into branch `[1, 2, 3]` plus tags.
	fn from_str(s: &str) -> Result<Self> {
		if s.is_empty() {
			return Err(ParseError::EmptyVersion);
		}

		let (branch_text, tag_text) = match s.split_once('-') {
			Some((branch, tags)) => (branch, Some(tags)),
			None => (s, None),
		};

		let mut branch = Vec::new();
		for part in branch_text.split('.') {
			let value: u32 = part.parse().map_err(|_| ParseError::BadVersionComponent { text: part.to_owned() })?;
			branch.push(value);
		}

		let mut tags = Vec::new();
		if let Some(tag_text) = tag_text {
			for (index, tag) in tag_text.split('-').enumerate() {
				if tag.is_empty() {
					return Err(ParseError::EmptyVersionTag { index });
				}
				tags.push(tag.to_owned().into_boxed_str());
			}
		}

		Ok(Self { branch, tags })
	}
}

impl ForceDeep for Version {
	fn force_deep(&self) -> Forced {
		self.branch.force_deep();
		self.tags.force_deep()
	}
}

/// 128-bit fingerprint stored as two fixed-width halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint {
	/// High 64 bits.
	pub hi: u64,
	/// Low 64 bits.
	pub lo: u64,
}

impl Fingerprint {
	/// Build a fingerprint from its two halves.
	pub const fn new(hi: u64, lo: u64) -> Self {
		Self { hi, lo }
	}
}

impl fmt::Display for Fingerprint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:016x}{:016x}", self.hi, self.lo)
	}
}

impl FromStr for Fingerprint {
	type Err = ParseError;

	/// Parse exactly 32 lowercase or uppercase hex digits.
	fn from_str(s: &str) -> Result<Self> {
		if s.len() != 32 || !s.bytes().all(|byte| byte.is_ascii_hexdigit()) {
			return Err(ParseError::BadFingerprint { text: s.to_owned() });
		}

		let hi = u64::from_str_radix(&s[..16], 16).map_err(|_| ParseError::BadFingerprint { text: s.to_owned() })?;
		let lo = u64::from_str_radix(&s[16..], 16).map_err(|_| ParseError::BadFingerprint { text: s.to_owned() })?;
		Ok(Self { hi, lo })
	}
}

impl ForceDeep for Fingerprint {
	fn force_deep(&self) -> Forced {
		self.hi.force_deep();
		self.lo.force_deep()
	}
}

/// One node of a type-representation tree.
///
/// Names and metadata strings are interned `Arc<str>`, so repeated nodes
/// share storage across a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDesc {
	/// Interned type name.
	pub name: Arc<str>,
	/// Child representations, in declaration order.
	pub args: Vec<TypeDesc>,
	/// Interned key/value metadata pairs.
	pub meta: Vec<(Arc<str>, Arc<str>)>,
}

impl TypeDesc {
	/// Leaf node with no children or metadata.
	pub fn leaf(name: impl Into<Arc<str>>) -> Self {
		Self {
			name: name.into(),
			args: Vec::new(),
			meta: Vec::new(),
		}
	}

	/// Node with child representations.
	pub fn with_args(name: impl Into<Arc<str>>, args: Vec<TypeDesc>) -> Self {
		Self {
			name: name.into(),
			args,
			meta: Vec::new(),
		}
	}

	/// Attach one interned metadata pair.
	pub fn with_meta(mut self, key: impl Into<Arc<str>>, value: impl Into<Arc<str>>) -> Self {
		self.meta.push((key.into(), value.into()));
		self
	}
}

impl fmt::Display for TypeDesc {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)?;
		if !self.args.is_empty() {
			f.write_str("<")?;
			for (idx, arg) in self.args.iter().enumerate() {
				if idx > 0 {
					f.write_str(", ")?;
				}
				write!(f, "{arg}")?;
			}
			f.write_str(">")?;
		}
		Ok(())
	}
}

impl ForceDeep for TypeDesc {
	fn force_deep(&self) -> Forced {
		self.name.force_deep();
		self.args.force_deep();
		self.meta.force_deep()
	}
}
