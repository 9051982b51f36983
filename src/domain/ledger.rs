use super::{Cents, Statement};

/// Compute the balance from a user's statement history.
/// Balance = sum of deposits - sum of withdrawals
///
/// The result is derived on demand and never persisted, so it cannot drift
/// from the history it is computed over. A negative result is possible here
/// as a pure computation; the create-statement service guarantees it never
/// occurs after any successful operation sequence.
pub fn compute_balance(statements: &[Statement]) -> Cents {
    statements
        .iter()
        .fold(0, |balance, statement| balance + statement.signed_amount())
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{OperationType, UserId};

    fn make_statement(user: UserId, operation: OperationType, amount: Cents) -> Statement {
        Statement::new(user, operation, amount, "test")
    }

    #[test]
    fn test_compute_balance_empty() {
        assert_eq!(compute_balance(&[]), 0);
    }

    #[test]
    fn test_compute_balance_deposits_only() {
        let user = Uuid::new_v4();
        let statements = vec![
            make_statement(user, OperationType::Deposit, 5000),
            make_statement(user, OperationType::Deposit, 2500),
        ];

        assert_eq!(compute_balance(&statements), 7500);
    }

    #[test]
    fn test_compute_balance_mixed() {
        let user = Uuid::new_v4();
        let statements = vec![
            make_statement(user, OperationType::Deposit, 5000),
            make_statement(user, OperationType::Withdraw, 1500),
            make_statement(user, OperationType::Withdraw, 500),
        ];

        assert_eq!(compute_balance(&statements), 3000);
    }

    #[test]
    fn test_compute_balance_can_go_negative_as_pure_arithmetic() {
        // The calculator itself does not enforce solvency; that is the
        // create-statement service's job.
        let user = Uuid::new_v4();
        let statements = vec![make_statement(user, OperationType::Withdraw, 1000)];

        assert_eq!(compute_balance(&statements), -1000);
    }

    #[test]
    fn test_compute_balance_zero_amounts() {
        let user = Uuid::new_v4();
        let statements = vec![
            make_statement(user, OperationType::Deposit, 0),
            make_statement(user, OperationType::Withdraw, 0),
        ];

        assert_eq!(compute_balance(&statements), 0);
    }
}
