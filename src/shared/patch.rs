use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: key omitted => keep current value
// - Null: explicit null => clear the value
// - Value(v): replace with v
//
// Use with #[serde(default)] so omitted keys become Unset.
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Applies the patch to an optional slot.
    pub fn apply_to(self, slot: &mut Option<T>) {
        match self {
            PatchField::Unset => {}
            PatchField::Null => *slot = None,
            PatchField::Value(v) => *slot = Some(v),
        }
    }

    /// Applies the patch to a slot that falls back to `T::default()` when cleared.
    pub fn apply_or_default(self, slot: &mut T)
    where
        T: Default,
    {
        match self {
            PatchField::Unset => {}
            PatchField::Null => *slot = T::default(),
            PatchField::Value(v) => *slot = v,
        }
    }
}
