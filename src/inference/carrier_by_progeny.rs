//! # Carrier-By-Progeny Propagator
//!
//! Bottom-up pass: a parent's status is inferred from its children's. A
//! parent is promoted to `CarrierByProgeny` when any child is `Affected`
//! (rule 1), or when any child is `Carrier` and the other parent counts as
//! clear (rule 2). Rule 1 takes precedence; the first qualifying
//! family/child pair triggers the single promotion for that parent.
//!
//! NOTE: an earlier revision of the register left this rule set marked
//! "rules TBC". The rules here are the most complete revision on record;
//! see DESIGN.md.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::error::Result;
use crate::inference::visited::VisitedTracker;
use crate::models::{Dog, Sex};
use crate::state_machine::{ConditionChannel, ConditionStatus};
use crate::store::PedigreeStore;

pub struct CarrierByProgenyPass {
    channel: ConditionChannel,
}

impl CarrierByProgenyPass {
    pub fn new(channel: ConditionChannel) -> Self {
        Self { channel }
    }

    /// Traverse the pedigree downward from `root`, treating every dog
    /// reached as a candidate parent. Returns the number of promotions.
    ///
    /// Uses an owned work-list rather than native recursion; the tracker
    /// still guarantees each dog is handled at most once per pass, parents
    /// before their children.
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
                debug!(dog_id = dog.id, name = %dog.name, pass = "carrier_by_progeny", "skipping, already processed");
                continue;
            }

            // confirmed lab data is authoritative over inference
            if dog.status(channel).is_lab_confirmed() {
                debug!(dog_id = dog.id, name = %dog.name, pass = "carrier_by_progeny", "skipping, lab-tested");
                continue;
            }
            if dog.infer_override(channel) {
                debug!(dog_id = dog.id, name = %dog.name, pass = "carrier_by_progeny", "skipping, infer override set");
                continue;
            }

            let families = match dog.sex {
                Sex::Male => store.families_as_sire(dog.id).await?,
                Sex::Female => store.families_as_dam(dog.id).await?,
                Sex::Unknown => {
                    debug!(dog_id = dog.id, name = %dog.name, pass = "carrier_by_progeny", "skipping, sex unknown");
                    continue;
                }
            };
            if families.is_empty() {
                debug!(dog_id = dog.id, name = %dog.name, pass = "carrier_by_progeny", "skipping, no children");
                continue;
            }

            // at most one promotion per dog, first qualifying child wins
            'scan: for family in &families {
                let other_parent_clear = family
                    .mate_of(dog.id)
                    .map(|mate| mate.status(channel).counts_as_clear())
                    .unwrap_or(false);

                for child in &family.children {
                    let promote = child.status(channel) == ConditionStatus::Affected
                        || (child.status(channel) == ConditionStatus::Carrier
                            && other_parent_clear);
                    if promote {
                        info!(
                            dog_id = dog.id,
                            name = %dog.name,
                            old_status = %dog.status(channel),
                            via_child = child.id,
                            pass = "carrier_by_progeny",
                            "promoting to CarrierByProgeny"
                        );
                        store
                            .update_status(dog.id, channel, ConditionStatus::CarrierByProgeny)
                            .await?;
                        promoted += 1;
                        break 'scan;
                    }
                }
            }

            // children become the next generation's candidate parents
            for family in families {
                pending.extend(family.children);
            }
        }

        Ok(promoted)
    }
}
