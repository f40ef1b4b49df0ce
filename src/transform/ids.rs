use ahash::AHashSet;
use tracing::warn;

/// Issues operation and field identifiers for one transformer invocation.
///
/// Identifiers are `<hint>-<stamp>-<position>`: the upstream identifier is only
/// a readable hint, uniqueness comes from the position. Every issued id is
/// remembered so that a hint crafted to mimic another id's suffix still cannot
/// produce a duplicate.
#[derive(Debug)]
pub(crate) struct IdAllocator {
    stamp: i64,
    issued: AHashSet<String>,
}

impl IdAllocator {
    pub(crate) fn new(stamp: i64) -> Self {
        Self {
            stamp,
            issued: AHashSet::new(),
        }
    }

    pub(crate) fn operation_id(&mut self, hint: &str, op_index: usize) -> String {
        let candidate = format!("{}-{}-{}", hint, self.stamp, op_index);
        self.claim(candidate)
    }

    pub(crate) fn field_id(&mut self, hint: &str, op_index: usize, field_index: usize) -> String {
        let candidate = format!("{}-{}-{}-{}", hint, self.stamp, op_index, field_index);
        self.claim(candidate)
    }

    /// Issue `candidate` unchanged, or with a `~<n>` suffix if it was already issued.
    pub(crate) fn claim(&mut self, candidate: String) -> String {
        if self.issued.insert(candidate.clone()) {
            return candidate;
        }
        let mut n = 1;
        loop {
            let repaired = format!("{}~{}", candidate, n);
            if self.issued.insert(repaired.clone()) {
                warn!(original = %candidate, repaired = %repaired, "Repaired identifier collision");
                return repaired;
            }
            n += 1;
        }
    }
}
