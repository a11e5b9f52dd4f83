//! In-memory transaction store
//!
//! Owns the authoritative transaction collection for the lifetime of the
//! process. Insertion order is preserved; it has no meaning beyond acting
//! as the tie-break for consumers that sort by date.

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{NewTransaction, Transaction};

#[derive(Debug, Default, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new transaction with a freshly generated id.
    pub fn add(&mut self, new: NewTransaction) -> Transaction {
        let tx = Transaction {
            id: Uuid::new_v4().to_string(),
            amount: new.amount,
            category: new.category,
            description: new.description,
            date: new.date,
            kind: new.kind,
        };
        self.transactions.push(tx.clone());
        tx
    }

    /// Replace every mutable field of the transaction with `id`.
    ///
    /// All fields land atomically; there is no partial-write state an
    /// observer could see.
    pub fn update(&mut self, id: &str, fields: NewTransaction) -> Result<Transaction> {
        let tx = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(format!("transaction {}", id)))?;

        tx.amount = fields.amount;
        tx.category = fields.category;
        tx.description = fields.description;
        tx.date = fields.date;
        tx.kind = fields.kind;

        Ok(tx.clone())
    }

    /// Remove the transaction with `id`. Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: &str) {
        self.transactions.retain(|t| t.id != id);
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Independent snapshot of the collection in insertion order.
    pub fn list(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn groceries() -> NewTransaction {
        NewTransaction {
            amount: dec!(42.17),
            category: "Food & Dining".to_string(),
            description: "Weekly groceries".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            kind: TransactionKind::Expense,
        }
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut store = TransactionStore::new();
        let a = store.add(groceries());
        let b = store.add(groceries());

        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&a.id).unwrap().description, "Weekly groceries");
    }

    #[test]
    fn test_add_then_remove_restores_snapshot() {
        let mut store = TransactionStore::new();
        store.add(groceries());
        let before = store.list();

        let created = store.add(groceries());
        store.remove(&created.id);

        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = TransactionStore::new();
        store.add(groceries());

        store.remove("no-such-id");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_replaces_all_fields() {
        let mut store = TransactionStore::new();
        let created = store.add(groceries());

        let updated = store
            .update(
                &created.id,
                NewTransaction {
                    amount: dec!(1250),
                    category: "Salary".to_string(),
                    description: "March paycheck".to_string(),
                    date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
                    kind: TransactionKind::Income,
                },
            )
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.amount, dec!(1250));
        assert_eq!(updated.kind, TransactionKind::Income);
        assert_eq!(store.get(&created.id).unwrap().category, "Salary");
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut store = TransactionStore::new();
        store.add(groceries());
        let before = store.list();

        let err = store.update("no-such-id", groceries()).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        // Failed update must not disturb existing state.
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_list_is_an_independent_snapshot() {
        let mut store = TransactionStore::new();
        store.add(groceries());

        let mut snapshot = store.list();
        snapshot.clear();

        assert_eq!(store.len(), 1);
    }
}
