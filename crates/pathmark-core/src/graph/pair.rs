//! Unordered pair used to match edge endpoints regardless of direction

/// A pair whose equality ignores the order of its two values
#[derive(Debug, Clone, Copy)]
pub struct SymmetricPair<T> {
    first: T,
    second: T,
}

impl<T: PartialEq> SymmetricPair<T> {
    pub fn new(first: T, second: T) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &T {
        &self.first
    }

    pub fn second(&self) -> &T {
        &self.second
    }

    /// True if `{x, y}` is the same unordered pair
    pub fn contains(&self, x: &T, y: &T) -> bool {
        (self.first == *x && self.second == *y) || (self.first == *y && self.second == *x)
    }

    /// Swap the stored values in place
    pub fn reverse(&mut self) -> &mut Self {
        std::mem::swap(&mut self.first, &mut self.second);
        self
    }

    pub fn into_tuple(self) -> (T, T) {
        (self.first, self.second)
    }
}

impl<T: PartialEq> PartialEq for SymmetricPair<T> {
    fn eq(&self, other: &Self) -> bool {
        self.contains(&other.first, &other.second)
    }
}

impl<T: Eq> Eq for SymmetricPair<T> {}

impl<T: PartialEq> From<(T, T)> for SymmetricPair<T> {
    fn from((first, second): (T, T)) -> Self {
        Self::new(first, second)
    }
}
