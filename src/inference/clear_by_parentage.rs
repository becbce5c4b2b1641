//! # Clear-By-Parentage Propagator
//!
//! Top-down pass: children's statuses are inferred from their parents'.
//! When both parents of a family count as clear, every child of that
//! family that is not yet visited, not lab-confirmed and not overridden is
//! promoted to `ClearByParentage`.
//!
//! Unlike the bottom-up pass, the lab-confirmed and override guards apply
//! to the children being written, not to the candidate parent driving the
//! traversal.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::error::Result;
use crate::inference::visited::VisitedTracker;
use crate::models::{Dog, Sex};
use crate::state_machine::{ConditionChannel, ConditionStatus};
use crate::store::PedigreeStore;

pub struct ClearByParentagePass {
    channel: ConditionChannel,
}

impl ClearByParentagePass {
    pub fn new(channel: ConditionChannel) -> Self {
        Self { channel }
    }

    /// Traverse the pedigree downward from `root`, promoting eligible
    /// children family by family. Returns the number of promotions.
    pub async fn run<S: PedigreeStore>(
        &self,
        store: &mut S,
        visited: &mut VisitedTracker,
        root: Dog,
    ) -> Result<u64> {
        let channel = self.channel;
        let mut promoted = 0u64;
        let mut pending: VecDeque<Dog> = VecDeque::new();
        pending.push_back(root);

        while let Some(dog) = pending.pop_front() {
            if !visited.mark(dog.id) {
                debug!(dog_id = dog.id, name = %dog.name, pass = "clear_by_parentage", "skipping, already processed");
                continue;
            }

            let families = match dog.sex {
                Sex::Male => store.families_as_sire(dog.id).await?,
                Sex::Female => store.families_as_dam(dog.id).await?,
                Sex::Unknown => {
                    debug!(dog_id = dog.id, name = %dog.name, pass = "clear_by_parentage", "skipping, sex unknown");
                    continue;
                }
            };
            if families.is_empty() {
                debug!(dog_id = dog.id, name = %dog.name, pass = "clear_by_parentage", "skipping, no children");
                continue;
            }

            for family in &families {
                // checked once per family, not per child
                if !family.parents_clear(channel) {
                    debug!(
                        sire_id = family.sire.id,
                        dam_id = family.dam.id,
                        pass = "clear_by_parentage",
                        "skipping children, parents not clear"
                    );
                    continue;
                }

                for child in &family.children {
                    if visited.seen(child.id) {
                        debug!(child_id = child.id, name = %child.name, pass = "clear_by_parentage", "skipping child, already processed");
                        continue;
                    }
                    if child.status(channel).is_lab_confirmed() {
                        debug!(child_id = child.id, name = %child.name, pass = "clear_by_parentage", "skipping child, lab-tested");
                        continue;
                    }
                    if child.infer_override(channel) {
                        debug!(child_id = child.id, name = %child.name, pass = "clear_by_parentage", "skipping child, infer override set");
                        continue;
                    }

                    info!(
                        child_id = child.id,
                        name = %child.name,
                        old_status = %child.status(channel),
                        pass = "clear_by_parentage",
                        "promoting to ClearByParentage"
                    );
                    store
                        .update_status(child.id, channel, ConditionStatus::ClearByParentage)
                        .await?;
                    promoted += 1;
                }
            }

            // every child is the next generation's candidate parent, even
            // the ones left unpromoted this generation
            for family in families {
                pending.extend(family.children);
            }
        }

        Ok(promoted)
    }
}
