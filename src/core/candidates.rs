use indexmap::IndexMap;

/// Opaque identity the display layer uses to track a candidate row. Handles
/// are allocated once per live name and never rebound to another name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemHandle(u64);

/// Deduplicated registry of known names.
///
/// Backed by an `IndexMap`, so iteration follows insertion order. That order
/// is the "encounter order" the ranking layer uses for Tier-1 placement and
/// tie-breaking; it is stable for the lifetime of a session. The sorted view
/// written to disk is produced separately at persistence time.
#[derive(Debug, Default)]
pub struct CandidateSet {
    entries: IndexMap<String, ItemHandle>,
    next_handle: u64,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut set = Self::new();
        for name in names {
            set.add(name);
        }
        set
    }

    /// Inserts `name`, binding a fresh handle. Adding a name that is already
    /// present is a no-op and does not consume a handle.
    pub fn add(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return;
        }
        let handle = ItemHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.insert(name, handle);
    }

    /// Removes `name`, releasing its handle. Removing an absent name is a
    /// no-op. Uses a shifting removal so the encounter order of the
    /// remaining entries is preserved.
    pub fn remove(&mut self, name: &str) {
        self.entries.shift_remove(name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ItemHandle)> {
        self.entries.iter().map(|(name, &handle)| (name.as_str(), handle))
    }

    /// Names in ascending order, for the persisted snapshot.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_add_is_a_no_op() {
        let mut set = CandidateSet::new();
        set.add("alpha");
        assert_eq!(set.len(), 1);
        set.add("alpha");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_restores_prior_size() {
        let mut set = CandidateSet::from_names(["alpha", "beta"]);
        set.add("gamma");
        set.remove("gamma");
        assert_eq!(set.len(), 2);
        assert!(!set.contains("gamma"));
    }

    #[test]
    fn remove_of_missing_name_is_a_no_op() {
        let mut set = CandidateSet::from_names(["alpha"]);
        set.remove("never added");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn handles_are_unique_and_stable() {
        let mut set = CandidateSet::from_names(["alpha", "beta"]);
        let before: Vec<_> = set.iter().map(|(_, handle)| handle).collect();
        assert_ne!(before[0], before[1]);

        // A duplicate add keeps the original binding.
        set.add("alpha");
        let after: Vec<_> = set.iter().map(|(_, handle)| handle).collect();
        assert_eq!(before, after);

        // A removed name's handle is never handed out again.
        set.remove("alpha");
        set.add("alpha");
        let rebound = set
            .iter()
            .find(|(name, _)| *name == "alpha")
            .map(|(_, handle)| handle)
            .unwrap();
        assert!(!before.contains(&rebound));
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut set = CandidateSet::from_names(["beta", "alpha", "delta"]);
        set.remove("alpha");
        set.add("gamma");
        let names: Vec<_> = set.iter().map(|(name, _)| name.to_string()).collect();
        assert_eq!(names, ["beta", "delta", "gamma"]);
    }

    #[test]
    fn sorted_names_are_ascending() {
        let set = CandidateSet::from_names(["beta", "alpha", "delta"]);
        assert_eq!(set.sorted_names(), ["alpha", "beta", "delta"]);
    }
}
