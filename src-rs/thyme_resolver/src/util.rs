//! Utility types for the resolver.

/// A stack of the imports being followed on the current call path.
///
/// Pushing returns a new stack rather than mutating this one, so sibling
/// branches of an import graph never see each other's entries.
#[derive(Debug, Clone)]
pub struct Stack<T: Clone> {
    items: Vec<T>,
}

impl<T: Clone> Stack<T> {
    /// Creates a new empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: vec![] }
    }

    /// Returns a new stack with `item` on top of the items of this one.
    #[must_use]
    pub fn pushed(&self, item: T) -> Self {
        let mut items = self.items.clone();
        items.push(item);
        Self { items }
    }

    /// Returns the number of items on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Finds a circular dependency starting from the given item.
    ///
    /// Items are compared by the key `key` computes for them. If an item with
    /// the same key is on the stack, the returned path holds every item from
    /// that occurrence to the top of the stack, followed by `item` itself.
    #[must_use]
    pub fn find_circular_dependency_by<K, F>(&self, item: &T, key: F) -> Option<Vec<T>>
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        let item_key = key(item);
        let item_index = self.items.iter().position(|i| key(i) == item_key)?;

        let mut circular_dependency = self.items[item_index..].to_vec();
        circular_dependency.push(item.clone());

        Some(circular_dependency)
    }
}

impl<T: Clone> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushing_leaves_the_original_untouched() {
        let root = Stack::new().pushed("a");
        let left = root.pushed("b");
        let right = root.pushed("c");

        assert_eq!(root.len(), 1);
        assert_eq!(left.find_circular_dependency_by(&"c", |item| *item), None);
        assert_eq!(right.find_circular_dependency_by(&"b", |item| *item), None);
    }

    #[test]
    fn circular_dependency_path_starts_at_first_occurrence() {
        let stack = Stack::new().pushed("root").pushed("a").pushed("b");

        assert_eq!(
            stack.find_circular_dependency_by(&"a", |item| *item),
            Some(vec!["a", "b", "a"])
        );
    }

    #[test]
    fn keys_decide_equality() {
        let stack = Stack::new().pushed("Open".to_string());

        let cycle =
            stack.find_circular_dependency_by(&"open".to_string(), |item| item.to_lowercase());

        assert_eq!(cycle, Some(vec!["Open".to_string(), "open".to_string()]));
    }
}
