//! Values resolved from a seed at the point of use.

/// A value derived from a seed of type `S`.
///
/// Any `Fn(&S) -> V` is a seeded value; [`Constant`] ignores its seed.
pub trait SeededValue<S, V> {
    /// Produce the value for `seed`.
    fn resolve(&self, seed: &S) -> V;
}

impl<S, V, F> SeededValue<S, V> for F
where
    F: Fn(&S) -> V,
{
    fn resolve(&self, seed: &S) -> V {
        self(seed)
    }
}

/// A seeded value that returns the same value for every seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Constant<V>(V);

impl<V> Constant<V> {
    /// The wrapped value.
    pub fn get(&self) -> &V {
        &self.0
    }

    /// Unwrap the constant.
    pub fn into_inner(self) -> V {
        self.0
    }
}

impl<S, V: Clone> SeededValue<S, V> for Constant<V> {
    fn resolve(&self, _seed: &S) -> V {
        self.0.clone()
    }
}

/// Build a seeded value that ignores its seed.
pub fn constant<V>(value: V) -> Constant<V> {
    Constant(value)
}
