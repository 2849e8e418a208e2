use rustc_hash::FxHashMap;

use crate::decl::Enumeration;
use crate::variant::Variant;

/// Published variant set of one enumeration type.
///
/// Leaked on publication and never mutated again; `values` and `by_name` point
/// at the same singletons.
pub(crate) struct Entry<E: Enumeration> {
	pub(crate) values: Box<[&'static Variant<E>]>,
	pub(crate) by_name: FxHashMap<&'static str, &'static Variant<E>>,
}

impl<E: Enumeration> Entry<E> {
	pub(crate) fn new(values: Vec<&'static Variant<E>>) -> Self {
		let by_name = values.iter().map(|&v| (v.name(), v)).collect();
		Self {
			values: values.into_boxed_slice(),
			by_name,
		}
	}

	pub(crate) fn get(&self, symbol: &str) -> Option<&'static Variant<E>> {
		self.by_name.get(symbol).copied()
	}
}
