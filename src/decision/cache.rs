use super::{CategoryChoice, SelectionPolicy};
use crate::dice::Dice;
use crate::error::YzResult;
use fnv::FnvHashMap;
use std::sync::{PoisonError, RwLock};

/// Memo of category choices per sorted hand, valid for one ranking policy.
///
/// Shared by the mask workers of a single engine, so it lives behind a lock.
/// A hit is only ever served for the policy the cache was built for.
pub struct OutcomeCache {
    policy: SelectionPolicy,
    map: RwLock<FnvHashMap<Dice, CategoryChoice>>,
}

impl OutcomeCache {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            map: RwLock::new(FnvHashMap::default()),
        }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn get(&self, dice: &Dice) -> Option<CategoryChoice> {
        let map = self.map.read().unwrap_or_else(PoisonError::into_inner);
        map.get(dice).copied()
    }

    pub fn get_or_try_insert_with<F>(&self, dice: Dice, compute: F) -> YzResult<CategoryChoice>
    where
        F: FnOnce() -> YzResult<CategoryChoice>,
    {
        if let Some(hit) = self.get(&dice) {
            return Ok(hit);
        }
        // Two workers may compute the same hand; both results are identical.
        let choice = compute()?;
        let mut map = self.map.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(dice, choice);
        Ok(choice)
    }

    pub fn len(&self) -> usize {
        self.map.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
