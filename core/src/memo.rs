//! Single-entry memoization keyed by an input tuple.

/// Caches the last computed value together with the inputs that produced it.
///
/// Widgets key their target style by every input the style depends on, so the
/// style function only runs when one of them actually changes.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Memo<K, V> {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self { entry: None }
    }

    /// Forgets the cached value.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// The key of the cached value.
    #[must_use]
    pub fn cached_key(&self) -> Option<&K> {
        self.entry.as_ref().map(|(key, _)| key)
    }
}

impl<K: PartialEq, V: Clone> Memo<K, V> {
    /// Returns the cached value for `key`, running `compute` only on a miss.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> V {
        if let Some((cached, value)) = &self.entry {
            if *cached == key {
                return value.clone();
            }
        }
        let value = compute(&key);
        self.entry = Some((key, value.clone()));
        value
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::Memo;

    #[test]
    fn recomputes_only_on_key_change() {
        let calls = Cell::new(0);
        let mut memo = Memo::new();
        let square = |memo: &mut Memo<(u32, bool), u32>, key: (u32, bool)| {
            memo.get_or_compute(key, |(n, _)| {
                calls.set(calls.get() + 1);
                n * n
            })
        };

        assert_eq!(square(&mut memo, (3, true)), 9);
        assert_eq!(square(&mut memo, (3, true)), 9);
        assert_eq!(calls.get(), 1);

        assert_eq!(square(&mut memo, (3, false)), 9);
        assert_eq!(calls.get(), 2);

        memo.invalidate();
        assert!(memo.cached_key().is_none());
        assert_eq!(square(&mut memo, (3, false)), 9);
        assert_eq!(calls.get(), 3);
    }
}
