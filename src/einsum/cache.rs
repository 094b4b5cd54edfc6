//! Memoization of validation verdicts and contraction schemas.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::schema::ContractionSchema;
use crate::error::EinsumError;
use crate::tensor::{Label, TensorMeta};

/// Cache key: the exact input descriptors plus the output label order.
type SchemaKey = (Vec<TensorMeta>, Vec<Label>);

/// A verdict as stored in the cache: the planned schema or the validation
/// error, shared immutably once built.
pub(crate) type CachedPlan = Arc<Result<ContractionSchema, EinsumError>>;

/// Cache of contraction schemas keyed by tensor signatures.
///
/// Validation and planning depend only on label/shape metadata, so their
/// result can be reused for every later call with the same signature.
/// Invalid verdicts are cached too: repeating a call with a known-bad
/// signature returns the stored error without walking the labels again.
///
/// A mutex guards first build per key; entries are immutable afterwards.
#[derive(Debug, Default)]
pub struct SchemaCache {
    entries: Mutex<HashMap<SchemaKey, CachedPlan>>,
}

impl SchemaCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the plan for this signature, planning it on first use.
    pub(crate) fn get_or_plan(&self, metas: &[TensorMeta], output: &[Label]) -> CachedPlan {
        let key = (metas.to_vec(), output.to_vec());
        let mut entries = self.entries.lock().expect("schema cache lock poisoned");
        match entries.entry(key) {
            Entry::Occupied(entry) => Arc::clone(entry.get()),
            Entry::Vacant(entry) => {
                let plan = Arc::new(ContractionSchema::plan(metas, output));
                entry.insert(Arc::clone(&plan));
                plan
            }
        }
    }

    /// Number of cached signatures (valid and invalid).
    pub fn len(&self) -> usize {
        self.entries.lock().expect("schema cache lock poisoned").len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all cached verdicts.
    pub fn clear(&self) {
        self.entries
            .lock()
            .expect("schema cache lock poisoned")
            .clear();
    }
}
