/// Implements [`CompositeGeometryTrait`](super::CompositeGeometryTrait), a list-style `Debug`
/// and conversions from vectors and arrays for a tuple struct over `Vec<$item>`.
macro_rules! impl_composite {
	($($t:ty, $item:ty);* $(;)?) => {$(
		impl $crate::geo::CompositeGeometryTrait<$item> for $t {
			fn new() -> Self {
				Self(Vec::new())
			}
			fn as_vec(&self) -> &Vec<$item> {
				&self.0
			}
			fn as_mut_vec(&mut self) -> &mut Vec<$item> {
				&mut self.0
			}
			fn into_inner(self) -> Vec<$item> {
				self.0
			}
		}

		impl std::fmt::Debug for $t {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.debug_list().entries(&self.0).finish()
			}
		}

		impl<T> From<Vec<T>> for $t
		where
			$item: From<T>,
		{
			fn from(value: Vec<T>) -> Self {
				Self(value.into_iter().map(<$item>::from).collect())
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $t
		where
			$item: From<&'a T>,
		{
			fn from(value: &'a [T; N]) -> Self {
				Self(value.iter().map(<$item>::from).collect())
			}
		}
	)*};
}

pub(crate) use impl_composite;
