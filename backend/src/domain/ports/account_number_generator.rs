//! Port for issuing new account numbers.

use rand::Rng;

use crate::domain::{ACCOUNT_NUMBER_MAX, ACCOUNT_NUMBER_MIN, AccountNumber};

/// Source of account numbers for newly opened accounts.
#[cfg_attr(test, mockall::automock)]
pub trait AccountNumberGenerator: Send + Sync {
    fn next_account_number(&self) -> AccountNumber;
}

/// Draws uniformly from `ACCOUNT_NUMBER_MIN..=ACCOUNT_NUMBER_MAX`.
///
/// Collisions are not retried; the repository rejects a number that is
/// already held by another customer.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomAccountNumberGenerator;

impl AccountNumberGenerator for RandomAccountNumberGenerator {
    fn next_account_number(&self) -> AccountNumber {
        AccountNumber::new(rand::thread_rng().gen_range(ACCOUNT_NUMBER_MIN..=ACCOUNT_NUMBER_MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_numbers_stay_in_ten_digit_range() {
        let generator = RandomAccountNumberGenerator;
        for _ in 0..256 {
            let number = generator.next_account_number().get();
            assert!((ACCOUNT_NUMBER_MIN..=ACCOUNT_NUMBER_MAX).contains(&number));
            assert_eq!(number.to_string().len(), 10);
        }
    }
}
