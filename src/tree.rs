/// Set-like operations shared by the tree types, used by the benchmark and
/// the operation scripts.
pub trait TreeOps<T> {
    /// Returns `false` when the value was already present.
    fn insert(&mut self, value: T) -> bool;
    fn contains(&self, value: &T) -> bool;
    /// Returns `false` when the value was not present.
    fn remove(&mut self, value: &T) -> bool;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
