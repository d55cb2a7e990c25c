//! Running balance
//!
//! The balance is income minus expenses. It is maintained incrementally, one
//! `apply` per stored transaction in store order, so that it always matches
//! [`recompute`] over the same sequence.

use crate::models::Transaction;

/// Incrementally maintained income-minus-expense total
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BalanceAccumulator {
    total: f64,
}

impl BalanceAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one transaction into the running total
    pub fn apply(&mut self, txn: &Transaction) {
        self.total += txn.signed_amount();
    }

    /// Current running total
    pub fn current(&self) -> f64 {
        self.total
    }
}

/// Recompute the balance from scratch over `transactions`
///
/// Folds in sequence order, the same order `apply` sees them.
pub fn recompute(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .fold(0.0, |total, txn| total + txn.signed_amount())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    fn txn(income: bool, value: &str) -> Transaction {
        let amount = Amount::parse(value).unwrap();
        if income {
            Transaction::income(amount, "", "").unwrap()
        } else {
            Transaction::expense(amount, "", "").unwrap()
        }
    }

    #[test]
    fn test_apply() {
        let mut balance = BalanceAccumulator::new();
        assert_eq!(balance.current(), 0.0);

        balance.apply(&txn(true, "100"));
        balance.apply(&txn(false, "30"));
        assert_eq!(balance.current(), 70.0);
    }

    #[test]
    fn test_balance_can_go_negative() {
        let mut balance = BalanceAccumulator::new();
        balance.apply(&txn(false, "10"));
        assert_eq!(balance.current(), -10.0);
    }

    #[test]
    fn test_matches_recompute() {
        let txns = vec![
            txn(true, "0.1"),
            txn(false, "0.2"),
            txn(true, "1000.75"),
            txn(false, "333.33"),
        ];
        let mut balance = BalanceAccumulator::new();
        for t in &txns {
            balance.apply(t);
        }
        assert_eq!(balance.current(), recompute(&txns));
    }
}
