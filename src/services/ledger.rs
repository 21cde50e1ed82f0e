//! Ledger service
//!
//! Business logic for the transaction and savings-goal collections:
//! mutations, goal contribution bookkeeping, and the single-capacity undo
//! slot for deleted transactions.
//!
//! Every operation that depends on the current time takes the evaluation
//! instant as an explicit parameter so behavior is deterministic under test.

use std::sync::RwLock;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    Advice, GoalId, Money, SavingsGoal, Transaction, TransactionId, TransactionKind,
};
use crate::storage::Storage;

/// How long a deleted transaction stays restorable, in seconds
pub const UNDO_WINDOW_SECS: i64 = 5;

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub amount: Money,
    pub description: String,
    pub category: String,
    pub linked_goal_id: Option<GoalId>,
}

/// Partial update for an existing transaction
///
/// `linked_goal_id` uses a double Option:
/// - `None`: no change
/// - `Some(None)`: unlink from any goal
/// - `Some(Some(id))`: link to the given goal
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub kind: Option<TransactionKind>,
    pub amount: Option<Money>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub linked_goal_id: Option<Option<GoalId>>,
}

/// Input for creating a new savings goal
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub name: String,
    pub category: String,
    pub description: String,
    pub icon: String,
    pub target_amount: Money,
    pub deadline: Option<NaiveDate>,
}

/// Partial update for an existing savings goal
#[derive(Debug, Clone, Default)]
pub struct GoalPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub target_amount: Option<Money>,
    pub deadline: Option<Option<NaiveDate>>,
}

/// The single most-recently-deleted transaction, restorable until the
/// expiry deadline passes
#[derive(Debug, Clone)]
struct UndoEntry {
    txn: Transaction,
    index: usize,
    expires_at: DateTime<Utc>,
}

/// Service owning ledger mutations and the undo slot
pub struct LedgerService<'a> {
    storage: &'a Storage,
    undo: RwLock<Option<UndoEntry>>,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            undo: RwLock::new(None),
        }
    }

    /// Record a new transaction dated at `now`
    ///
    /// Validates input and the linked goal reference before mutating
    /// anything; a validation failure leaves all state unchanged. A linked
    /// goal receives the full transaction amount, clamped to its target.
    pub fn add_transaction(
        &self,
        input: NewTransaction,
        now: DateTime<Utc>,
    ) -> FintrackResult<Transaction> {
        let mut txn = Transaction::new(
            input.kind,
            input.amount,
            input.description,
            input.category,
            now,
        );
        txn.linked_goal_id = input.linked_goal_id;

        txn.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        // Resolve the goal before appending so a dangling reference
        // cannot leave a half-applied state
        let linked_goal = match txn.linked_goal_id {
            Some(goal_id) => Some(
                self.storage
                    .goals
                    .get(goal_id)?
                    .ok_or_else(|| FintrackError::goal_not_found(goal_id.to_string()))?,
            ),
            None => None,
        };

        if let Some(mut goal) = linked_goal {
            goal.apply(txn.amount);
            self.storage.goals.update(goal)?;
            self.storage.goals.save()?;
        }

        self.storage.transactions.append(txn.clone())?;
        self.storage.transactions.save()?;

        Ok(txn)
    }

    /// Merge an AI advisory annotation into a stored transaction by ID
    ///
    /// Returns false when the transaction no longer exists (deleted while
    /// the analysis was pending); the annotation is discarded in that case.
    pub fn annotate_transaction(
        &self,
        id: TransactionId,
        advice: Advice,
    ) -> FintrackResult<bool> {
        match self.storage.transactions.get(id)? {
            None => Ok(false),
            Some(mut txn) => {
                txn.advice = Some(advice);
                self.storage.transactions.update(txn)?;
                self.storage.transactions.save()?;
                Ok(true)
            }
        }
    }

    /// Delete a transaction
    ///
    /// Confirmation is the caller's responsibility; this operation is
    /// unconditional. Reverses any goal contribution and parks the record
    /// in the undo slot, replacing a previous occupant, with an expiry
    /// deadline of `now` + [`UNDO_WINDOW_SECS`].
    pub fn delete_transaction(
        &self,
        id: TransactionId,
        now: DateTime<Utc>,
    ) -> FintrackResult<Transaction> {
        let (index, txn) = self
            .storage
            .transactions
            .remove(id)?
            .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;

        if let Some(goal_id) = txn.linked_goal_id {
            if let Some(mut goal) = self.storage.goals.get(goal_id)? {
                goal.apply(-txn.amount);
                self.storage.goals.update(goal)?;
                self.storage.goals.save()?;
            }
        }

        {
            let mut slot = self.undo_lock()?;
            *slot = Some(UndoEntry {
                txn: txn.clone(),
                index,
                expires_at: now + Duration::seconds(UNDO_WINDOW_SECS),
            });
        }

        self.storage.transactions.save()?;

        Ok(txn)
    }

    /// Restore the most recently deleted transaction
    ///
    /// No-op returning `None` when the slot is empty or its deadline has
    /// passed. Otherwise re-inserts the record at its original position,
    /// reapplies the goal contribution (skipped silently if the goal has
    /// since been deleted), and clears the slot.
    pub fn undo_delete(&self, now: DateTime<Utc>) -> FintrackResult<Option<Transaction>> {
        let entry = {
            let mut slot = self.undo_lock()?;
            slot.take()
        };

        let Some(entry) = entry else {
            return Ok(None);
        };
        if now > entry.expires_at {
            return Ok(None);
        }

        self.storage
            .transactions
            .insert_at(entry.index, entry.txn.clone())?;

        if let Some(goal_id) = entry.txn.linked_goal_id {
            if let Some(mut goal) = self.storage.goals.get(goal_id)? {
                goal.apply(entry.txn.amount);
                self.storage.goals.update(goal)?;
                self.storage.goals.save()?;
            }
        }

        self.storage.transactions.save()?;

        Ok(Some(entry.txn))
    }

    /// Update a transaction
    ///
    /// When the amount or the linked goal changes, the old contribution is
    /// reversed and the new one applied: a goal switch debits the old goal
    /// and credits the new one; an amount change on the same goal applies
    /// the delta.
    pub fn update_transaction(
        &self,
        id: TransactionId,
        patch: TransactionPatch,
    ) -> FintrackResult<Transaction> {
        let old = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;

        let mut new = old.clone();
        if let Some(kind) = patch.kind {
            new.kind = kind;
        }
        if let Some(amount) = patch.amount {
            new.amount = amount;
        }
        if let Some(description) = patch.description {
            new.description = description;
        }
        if let Some(category) = patch.category {
            new.category = category;
        }
        if let Some(date) = patch.date {
            new.date = date;
        }
        if let Some(linked) = patch.linked_goal_id {
            new.linked_goal_id = linked;
        }

        new.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        // Verify the new link before touching any goal
        if let Some(goal_id) = new.linked_goal_id {
            if self.storage.goals.get(goal_id)?.is_none() {
                return Err(FintrackError::goal_not_found(goal_id.to_string()));
            }
        }

        let link_changed = old.linked_goal_id != new.linked_goal_id;
        let amount_changed = old.amount != new.amount;

        if link_changed || amount_changed {
            if !link_changed {
                // Same goal, new amount: apply the delta
                if let Some(goal_id) = new.linked_goal_id {
                    if let Some(mut goal) = self.storage.goals.get(goal_id)? {
                        goal.apply(new.amount - old.amount);
                        self.storage.goals.update(goal)?;
                    }
                }
            } else {
                if let Some(goal_id) = old.linked_goal_id {
                    if let Some(mut goal) = self.storage.goals.get(goal_id)? {
                        goal.apply(-old.amount);
                        self.storage.goals.update(goal)?;
                    }
                }
                if let Some(goal_id) = new.linked_goal_id {
                    if let Some(mut goal) = self.storage.goals.get(goal_id)? {
                        goal.apply(new.amount);
                        self.storage.goals.update(goal)?;
                    }
                }
            }
            self.storage.goals.save()?;
        }

        self.storage.transactions.update(new.clone())?;
        self.storage.transactions.save()?;

        Ok(new)
    }

    /// List all transactions in insertion order
    pub fn transactions(&self) -> FintrackResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// Create a new savings goal
    pub fn add_goal(&self, input: NewGoal) -> FintrackResult<SavingsGoal> {
        let mut goal = SavingsGoal::new(input.name, input.target_amount);
        goal.category = input.category;
        goal.description = input.description;
        goal.icon = input.icon;
        goal.deadline = input.deadline;

        goal.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.goals.append(goal.clone())?;
        self.storage.goals.save()?;

        Ok(goal)
    }

    /// Update a savings goal's metadata or target
    ///
    /// Shrinking the target re-clamps the accumulated progress.
    pub fn update_goal(&self, id: GoalId, patch: GoalPatch) -> FintrackResult<SavingsGoal> {
        let mut goal = self
            .storage
            .goals
            .get(id)?
            .ok_or_else(|| FintrackError::goal_not_found(id.to_string()))?;

        if let Some(name) = patch.name {
            goal.name = name;
        }
        if let Some(category) = patch.category {
            goal.category = category;
        }
        if let Some(description) = patch.description {
            goal.description = description;
        }
        if let Some(icon) = patch.icon {
            goal.icon = icon;
        }
        if let Some(target) = patch.target_amount {
            goal.target_amount = target;
            goal.set_progress(goal.current_amount);
        }
        if let Some(deadline) = patch.deadline {
            goal.deadline = deadline;
        }

        goal.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.goals.update(goal.clone())?;
        self.storage.goals.save()?;

        Ok(goal)
    }

    /// Delete a savings goal, unlinking any transactions that reference it
    pub fn delete_goal(&self, id: GoalId) -> FintrackResult<SavingsGoal> {
        let goal = self
            .storage
            .goals
            .remove(id)?
            .ok_or_else(|| FintrackError::goal_not_found(id.to_string()))?;

        let mut unlinked = false;
        for mut txn in self.storage.transactions.get_all()? {
            if txn.linked_goal_id == Some(id) {
                txn.linked_goal_id = None;
                self.storage.transactions.update(txn)?;
                unlinked = true;
            }
        }

        self.storage.goals.save()?;
        if unlinked {
            self.storage.transactions.save()?;
        }

        Ok(goal)
    }

    /// Overwrite a goal's progress directly, clamped to `[0, target]`
    pub fn set_goal_progress(&self, id: GoalId, amount: Money) -> FintrackResult<SavingsGoal> {
        let mut goal = self
            .storage
            .goals
            .get(id)?
            .ok_or_else(|| FintrackError::goal_not_found(id.to_string()))?;

        goal.set_progress(amount);
        self.storage.goals.update(goal.clone())?;
        self.storage.goals.save()?;

        Ok(goal)
    }

    /// List all savings goals in insertion order
    pub fn goals(&self) -> FintrackResult<Vec<SavingsGoal>> {
        self.storage.goals.get_all()
    }

    /// Set the monthly budget for an expense category
    pub fn set_budget(&self, category: &str, amount: Money) -> FintrackResult<()> {
        if category.trim().is_empty() {
            return Err(FintrackError::Validation("Category is required".into()));
        }
        if !amount.is_positive() {
            return Err(FintrackError::Validation(
                "Budget amount must be greater than 0".into(),
            ));
        }

        self.storage.budgets.set(category, amount)?;
        self.storage.budgets.save()?;
        Ok(())
    }

    /// Remove the budget for a category; returns false when none was set
    pub fn remove_budget(&self, category: &str) -> FintrackResult<bool> {
        let removed = self.storage.budgets.remove(category)?;
        if removed {
            self.storage.budgets.save()?;
        }
        Ok(removed)
    }

    fn undo_lock(
        &self,
    ) -> FintrackResult<std::sync::RwLockWriteGuard<'_, Option<UndoEntry>>> {
        self.undo
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire undo lock: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn test_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
    }

    fn income(amount_cents: i64) -> NewTransaction {
        NewTransaction {
            kind: TransactionKind::Income,
            amount: Money::from_cents(amount_cents),
            description: "Paycheck".to_string(),
            category: "Salary".to_string(),
            linked_goal_id: None,
        }
    }

    fn expense(amount_cents: i64, category: &str) -> NewTransaction {
        NewTransaction {
            kind: TransactionKind::Expense,
            amount: Money::from_cents(amount_cents),
            description: "Purchase".to_string(),
            category: category.to_string(),
            linked_goal_id: None,
        }
    }

    fn test_goal(service: &LedgerService, target_cents: i64) -> SavingsGoal {
        service
            .add_goal(NewGoal {
                name: "Vacation".to_string(),
                category: "Travel".to_string(),
                description: String::new(),
                icon: "✈️".to_string(),
                target_amount: Money::from_cents(target_cents),
                deadline: None,
            })
            .unwrap()
    }

    #[test]
    fn test_add_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let txn = service.add_transaction(income(100_000), test_now()).unwrap();

        assert_eq!(storage.transactions.count().unwrap(), 1);
        assert_eq!(txn.amount, Money::from_cents(100_000));
        assert_eq!(txn.date, test_now());
    }

    #[test]
    fn test_add_rejects_invalid_input_without_mutating() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let mut bad = income(100);
        bad.amount = Money::zero();
        let err = service.add_transaction(bad, test_now()).unwrap_err();
        assert!(err.is_validation());

        let mut blank = income(100);
        blank.description = "   ".to_string();
        assert!(service
            .add_transaction(blank, test_now())
            .unwrap_err()
            .is_validation());

        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_add_rejects_dangling_goal_link() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let mut input = income(100_000);
        input.linked_goal_id = Some(GoalId::new());
        let err = service.add_transaction(input, test_now()).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_linked_add_and_delete_round_trip_goal_progress() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        // Goal with target 1200, income 1000 linked to it
        let goal = test_goal(&service, 120_000);
        let mut input = income(100_000);
        input.linked_goal_id = Some(goal.id);
        let txn = service.add_transaction(input, test_now()).unwrap();

        assert_eq!(
            storage.goals.get(goal.id).unwrap().unwrap().current_amount,
            Money::from_cents(100_000)
        );

        // Deleting reverses the contribution exactly
        service.delete_transaction(txn.id, test_now()).unwrap();
        assert_eq!(
            storage.goals.get(goal.id).unwrap().unwrap().current_amount,
            Money::zero()
        );
    }

    #[test]
    fn test_linked_add_clamps_at_target() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let goal = test_goal(&service, 50_000);
        let mut input = income(100_000);
        input.linked_goal_id = Some(goal.id);
        service.add_transaction(input, test_now()).unwrap();

        assert_eq!(
            storage.goals.get(goal.id).unwrap().unwrap().current_amount,
            Money::from_cents(50_000)
        );
    }

    #[test]
    fn test_delete_then_undo_restores_exact_state() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let goal = test_goal(&service, 120_000);
        service.add_transaction(expense(2_000, "Food"), test_now()).unwrap();
        let mut linked = income(100_000);
        linked.linked_goal_id = Some(goal.id);
        let txn = service.add_transaction(linked, test_now()).unwrap();
        service.add_transaction(expense(3_000, "Shopping"), test_now()).unwrap();

        let before_txns = storage.transactions.get_all().unwrap();
        let before_goal = storage.goals.get(goal.id).unwrap().unwrap();

        service.delete_transaction(txn.id, test_now()).unwrap();
        assert_eq!(storage.transactions.count().unwrap(), 2);

        let restored = service.undo_delete(test_now()).unwrap();
        assert_eq!(restored.unwrap().id, txn.id);

        assert_eq!(storage.transactions.get_all().unwrap(), before_txns);
        assert_eq!(storage.goals.get(goal.id).unwrap().unwrap(), before_goal);
    }

    #[test]
    fn test_undo_with_empty_slot_is_noop() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        assert!(service.undo_delete(test_now()).unwrap().is_none());
    }

    #[test]
    fn test_undo_after_expiry_is_noop() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let txn = service.add_transaction(income(100), test_now()).unwrap();
        service.delete_transaction(txn.id, test_now()).unwrap();

        let too_late = test_now() + Duration::seconds(UNDO_WINDOW_SECS + 1);
        assert!(service.undo_delete(too_late).unwrap().is_none());
        assert_eq!(storage.transactions.count().unwrap(), 0);

        // The slot was consumed; a second undo inside the window is
        // still a no-op
        assert!(service.undo_delete(test_now()).unwrap().is_none());
    }

    #[test]
    fn test_second_delete_replaces_undo_slot() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let first = service.add_transaction(income(100), test_now()).unwrap();
        let second = service.add_transaction(income(200), test_now()).unwrap();

        service.delete_transaction(first.id, test_now()).unwrap();
        service.delete_transaction(second.id, test_now()).unwrap();

        let restored = service.undo_delete(test_now()).unwrap().unwrap();
        assert_eq!(restored.id, second.id);
        assert_eq!(storage.transactions.count().unwrap(), 1);

        // Only one restoration: the first deletion is gone for good
        assert!(service.undo_delete(test_now()).unwrap().is_none());
    }

    #[test]
    fn test_undo_skips_deleted_goal() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let goal = test_goal(&service, 120_000);
        let mut linked = income(100_000);
        linked.linked_goal_id = Some(goal.id);
        let txn = service.add_transaction(linked, test_now()).unwrap();

        service.delete_transaction(txn.id, test_now()).unwrap();
        service.delete_goal(goal.id).unwrap();

        // Undo restores the record but cannot resurrect the goal
        let restored = service.undo_delete(test_now()).unwrap().unwrap();
        assert_eq!(restored.id, txn.id);
        assert_eq!(storage.goals.count().unwrap(), 0);
    }

    #[test]
    fn test_annotate_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let txn = service.add_transaction(expense(500, "Food"), test_now()).unwrap();

        let advice = Advice {
            classification: "Necessary".to_string(),
            reason: "Food is essential.".to_string(),
            recommendation: "Keep it up.".to_string(),
            context: String::new(),
        };
        assert!(service.annotate_transaction(txn.id, advice.clone()).unwrap());

        let stored = storage.transactions.get(txn.id).unwrap().unwrap();
        assert_eq!(stored.advice, Some(advice));
    }

    #[test]
    fn test_annotation_discarded_after_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let txn = service.add_transaction(expense(500, "Food"), test_now()).unwrap();
        service.delete_transaction(txn.id, test_now()).unwrap();

        // The record is gone; the late annotation is dropped, not an error
        let attached = service
            .annotate_transaction(txn.id, Advice::unknown(""))
            .unwrap();
        assert!(!attached);
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_update_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let err = service
            .update_transaction(TransactionId::new(), TransactionPatch::default())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_update_amount_applies_delta_to_same_goal() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let goal = test_goal(&service, 120_000);
        let mut linked = income(40_000);
        linked.linked_goal_id = Some(goal.id);
        let txn = service.add_transaction(linked, test_now()).unwrap();

        service
            .update_transaction(
                txn.id,
                TransactionPatch {
                    amount: Some(Money::from_cents(60_000)),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(
            storage.goals.get(goal.id).unwrap().unwrap().current_amount,
            Money::from_cents(60_000)
        );
    }

    #[test]
    fn test_update_switches_goals() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let old_goal = test_goal(&service, 120_000);
        let new_goal = service
            .add_goal(NewGoal {
                name: "Emergency".to_string(),
                category: "Savings".to_string(),
                description: String::new(),
                icon: String::new(),
                target_amount: Money::from_cents(200_000),
                deadline: None,
            })
            .unwrap();

        let mut linked = income(50_000);
        linked.linked_goal_id = Some(old_goal.id);
        let txn = service.add_transaction(linked, test_now()).unwrap();

        service
            .update_transaction(
                txn.id,
                TransactionPatch {
                    linked_goal_id: Some(Some(new_goal.id)),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(
            storage.goals.get(old_goal.id).unwrap().unwrap().current_amount,
            Money::zero()
        );
        assert_eq!(
            storage.goals.get(new_goal.id).unwrap().unwrap().current_amount,
            Money::from_cents(50_000)
        );
    }

    #[test]
    fn test_update_unlink_reverses_contribution() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let goal = test_goal(&service, 120_000);
        let mut linked = income(50_000);
        linked.linked_goal_id = Some(goal.id);
        let txn = service.add_transaction(linked, test_now()).unwrap();

        service
            .update_transaction(
                txn.id,
                TransactionPatch {
                    linked_goal_id: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(
            storage.goals.get(goal.id).unwrap().unwrap().current_amount,
            Money::zero()
        );
        assert!(storage
            .transactions
            .get(txn.id)
            .unwrap()
            .unwrap()
            .linked_goal_id
            .is_none());
    }

    #[test]
    fn test_update_rejects_dangling_goal_without_mutating() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let goal = test_goal(&service, 120_000);
        let mut linked = income(50_000);
        linked.linked_goal_id = Some(goal.id);
        let txn = service.add_transaction(linked, test_now()).unwrap();

        let err = service
            .update_transaction(
                txn.id,
                TransactionPatch {
                    linked_goal_id: Some(Some(GoalId::new())),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_not_found());

        // Old contribution untouched
        assert_eq!(
            storage.goals.get(goal.id).unwrap().unwrap().current_amount,
            Money::from_cents(50_000)
        );
    }

    #[test]
    fn test_delete_goal_unlinks_transactions() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let goal = test_goal(&service, 120_000);
        let mut linked = income(50_000);
        linked.linked_goal_id = Some(goal.id);
        let txn = service.add_transaction(linked, test_now()).unwrap();

        service.delete_goal(goal.id).unwrap();

        let stored = storage.transactions.get(txn.id).unwrap().unwrap();
        assert!(stored.linked_goal_id.is_none());
        assert_eq!(storage.goals.count().unwrap(), 0);
    }

    #[test]
    fn test_set_goal_progress_clamps() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let goal = test_goal(&service, 100_000);
        let updated = service
            .set_goal_progress(goal.id, Money::from_cents(250_000))
            .unwrap();
        assert_eq!(updated.current_amount, Money::from_cents(100_000));
    }

    #[test]
    fn test_update_goal_target_reclamps_progress() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let goal = test_goal(&service, 100_000);
        service
            .set_goal_progress(goal.id, Money::from_cents(80_000))
            .unwrap();

        let updated = service
            .update_goal(
                goal.id,
                GoalPatch {
                    target_amount: Some(Money::from_cents(50_000)),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.current_amount, Money::from_cents(50_000));
    }

    #[test]
    fn test_budget_operations() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        service.set_budget("Food", Money::from_cents(50_000)).unwrap();
        assert_eq!(
            storage.budgets.get("Food").unwrap(),
            Some(Money::from_cents(50_000))
        );

        assert!(service
            .set_budget("Food", Money::zero())
            .unwrap_err()
            .is_validation());
        assert!(service
            .set_budget("  ", Money::from_cents(100))
            .unwrap_err()
            .is_validation());

        assert!(service.remove_budget("Food").unwrap());
        assert!(!service.remove_budget("Food").unwrap());
    }
}
