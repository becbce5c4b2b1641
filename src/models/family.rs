use serde::{Deserialize, Serialize};

use crate::models::dog::Dog;
use crate::state_machine::ConditionChannel;

/// A sire, a dam, and ALL children that pair produced across every litter.
///
/// Families are a read projection assembled from parent/child edges; they
/// have no identity of their own in the register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Family {
    pub sire: Dog,
    pub dam: Dog,
    pub children: Vec<Dog>,
}

impl Family {
    /// The other parent in this family, given one parent's id.
    ///
    /// Returns `None` if the id is not a parent here (possible on
    /// malformed edges; callers skip rather than fail).
    pub fn mate_of(&self, dog_id: i64) -> Option<&Dog> {
        if self.sire.id == dog_id {
            Some(&self.dam)
        } else if self.dam.id == dog_id {
            Some(&self.sire)
        } else {
            None
        }
    }

    /// Whether both parents count as clear on the given channel
    pub fn parents_clear(&self, channel: ConditionChannel) -> bool {
        self.sire.status(channel).counts_as_clear() && self.dam.status(channel).counts_as_clear()
    }
}
