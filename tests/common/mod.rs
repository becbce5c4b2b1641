//! In-memory Pedigree Store for testing the inference engine without a
//! database, with call tracking for visit-once and idempotence assertions.

#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;

use pedigree_core::error::Result;
use pedigree_core::models::{Dog, Family, Sex};
use pedigree_core::state_machine::{ConditionChannel, ConditionStatus};
use pedigree_core::store::PedigreeStore;

/// One recorded store invocation
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    RootDogs,
    FamiliesAsSire(i64),
    FamiliesAsDam(i64),
    UpdateStatus {
        dog_id: i64,
        channel: ConditionChannel,
        status: ConditionStatus,
        /// whether the write actually changed the stored value
        changed: bool,
    },
}

/// A sire/dam pair and the union of their children across litters
#[derive(Debug, Clone)]
struct Mating {
    sire_id: i64,
    dam_id: i64,
    child_ids: Vec<i64>,
}

/// Mock store backed by maps, mirroring the Postgres adapter's contract:
/// families are assembled fresh on every fetch, so reads within a batch
/// observe earlier writes exactly as they would inside the transaction.
#[derive(Debug, Default)]
pub struct MemoryPedigreeStore {
    dogs: HashMap<i64, Dog>,
    matings: Vec<Mating>,
    pub calls: Vec<StoreCall>,
    pub fail_updates: bool,
}

impl MemoryPedigreeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dog(&mut self, dog: Dog) -> &mut Self {
        self.dogs.insert(dog.id, dog);
        self
    }

    /// Record a litter; children accumulate per sire/dam pair
    pub fn add_litter(&mut self, sire_id: i64, dam_id: i64, child_ids: &[i64]) -> &mut Self {
        if let Some(mating) = self
            .matings
            .iter_mut()
            .find(|m| m.sire_id == sire_id && m.dam_id == dam_id)
        {
            for id in child_ids {
                if !mating.child_ids.contains(id) {
                    mating.child_ids.push(*id);
                }
            }
        } else {
            self.matings.push(Mating {
                sire_id,
                dam_id,
                child_ids: child_ids.to_vec(),
            });
        }
        self
    }

    pub fn dog(&self, id: i64) -> &Dog {
        self.dogs.get(&id).unwrap_or_else(|| panic!("no dog {id} in fixture"))
    }

    pub fn status_of(&self, id: i64, channel: ConditionChannel) -> ConditionStatus {
        self.dog(id).status(channel)
    }

    /// Current statuses of every dog, for before/after comparisons
    pub fn snapshot(&self) -> HashMap<i64, (ConditionStatus, ConditionStatus)> {
        self.dogs
            .iter()
            .map(|(id, dog)| (*id, (dog.slem_status, dog.cecs_status)))
            .collect()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// How many times families were fetched for the given dog
    pub fn family_fetches(&self, id: i64) -> usize {
        self.calls
            .iter()
            .filter(|c| {
                matches!(c, StoreCall::FamiliesAsSire(i) | StoreCall::FamiliesAsDam(i) if *i == id)
            })
            .count()
    }

    pub fn update_calls_for(&self, id: i64) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, StoreCall::UpdateStatus { dog_id, .. } if *dog_id == id))
            .count()
    }

    /// Writes that actually altered a stored status
    pub fn changed_writes(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, StoreCall::UpdateStatus { changed: true, .. }))
            .count()
    }

    fn family(&self, mating: &Mating) -> Family {
        Family {
            sire: self.dog(mating.sire_id).clone(),
            dam: self.dog(mating.dam_id).clone(),
            children: mating.child_ids.iter().map(|id| self.dog(*id).clone()).collect(),
        }
    }
}

#[async_trait]
impl PedigreeStore for MemoryPedigreeStore {
    async fn root_dogs(&mut self) -> Result<Vec<Dog>> {
        self.calls.push(StoreCall::RootDogs);
        let mut roots: Vec<Dog> = self
            .dogs
            .values()
            .filter(|dog| {
                !self
                    .matings
                    .iter()
                    .any(|m| m.child_ids.contains(&dog.id))
            })
            .cloned()
            .collect();
        roots.sort_by_key(|dog| dog.id);
        Ok(roots)
    }

    async fn families_as_sire(&mut self, sire_id: i64) -> Result<Vec<Family>> {
        self.calls.push(StoreCall::FamiliesAsSire(sire_id));
        let matings: Vec<Mating> = self
            .matings
            .iter()
            .filter(|m| m.sire_id == sire_id)
            .cloned()
            .collect();
        Ok(matings.iter().map(|m| self.family(m)).collect())
    }

    async fn families_as_dam(&mut self, dam_id: i64) -> Result<Vec<Family>> {
        self.calls.push(StoreCall::FamiliesAsDam(dam_id));
        let matings: Vec<Mating> = self
            .matings
            .iter()
            .filter(|m| m.dam_id == dam_id)
            .cloned()
            .collect();
        Ok(matings.iter().map(|m| self.family(m)).collect())
    }

    async fn update_status(
        &mut self,
        dog_id: i64,
        channel: ConditionChannel,
        status: ConditionStatus,
    ) -> Result<()> {
        if self.fail_updates {
            return Err(sqlx::Error::PoolClosed.into());
        }
        let dog = self
            .dogs
            .get_mut(&dog_id)
            .unwrap_or_else(|| panic!("no dog {dog_id} in fixture"));
        let changed = dog.status(channel) != status;
        dog.set_status(channel, status);
        self.calls.push(StoreCall::UpdateStatus {
            dog_id,
            channel,
            status,
            changed,
        });
        Ok(())
    }
}

/// Fixture dog with defaults: no overrides, CECS unknown
pub fn dog(id: i64, sex: Sex, slem_status: ConditionStatus) -> Dog {
    Dog {
        id,
        name: format!("dog-{id}"),
        sex,
        slem_status,
        cecs_status: ConditionStatus::Unknown,
        slem_infer_override: false,
        cecs_infer_override: false,
    }
}

/// Fixture dog with the SLEM infer-override flag set
pub fn overridden_dog(id: i64, sex: Sex, slem_status: ConditionStatus) -> Dog {
    Dog {
        slem_infer_override: true,
        ..dog(id, sex, slem_status)
    }
}
