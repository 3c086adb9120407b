//! Conversions between stored entities and their wire views.
//!
//! `*_to_view` functions copy every mapped field. `*_from_view` functions
//! merge a view into an existing entity: fields absent from the view leave
//! the target untouched, which is what makes partial updates work. Nothing
//! here validates input; callers do that first.

use super::account::Account;
use super::customer::Customer;
use super::views::{AccountView, CustomerView};

/// Customer fields as a view, without an embedded account.
pub fn customer_to_view(customer: &Customer) -> CustomerView {
    CustomerView {
        name: Some(customer.name.clone()),
        email: Some(customer.email.clone()),
        mobile_number: Some(customer.mobile_number.clone()),
        account: None,
    }
}

/// Merge the customer fields of `view` into `target`.
///
/// The embedded account view is ignored; see [`account_from_view`].
pub fn customer_from_view(view: &CustomerView, mut target: Customer) -> Customer {
    if let Some(name) = &view.name {
        target.name.clone_from(name);
    }
    if let Some(email) = &view.email {
        target.email.clone_from(email);
    }
    if let Some(mobile_number) = &view.mobile_number {
        target.mobile_number.clone_from(mobile_number);
    }
    target
}

/// Account fields as a view.
pub fn account_to_view(account: &Account) -> AccountView {
    AccountView {
        account_number: account.account_number,
        account_type: Some(account.account_type),
        branch_address: Some(account.branch_address.clone()),
    }
}

/// Merge `view` into `target`.
pub fn account_from_view(view: &AccountView, mut target: Account) -> Account {
    if let Some(number) = view.account_number {
        target.account_number = Some(number);
    }
    if let Some(kind) = view.account_type {
        target.account_type = kind;
    }
    if let Some(branch_address) = &view.branch_address {
        target.branch_address.clone_from(branch_address);
    }
    target
}

/// Combined view of a customer and the account they own.
pub fn to_customer_view(customer: &Customer, account: &Account) -> CustomerView {
    CustomerView {
        account: Some(account_to_view(account)),
        ..customer_to_view(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountNumber, AccountType, CustomerId};
    use rstest::{fixture, rstest};

    #[fixture]
    fn customer() -> Customer {
        Customer {
            customer_id: Some(CustomerId::new(7)),
            name: "John Hans".to_owned(),
            email: "test@gmail.com".to_owned(),
            mobile_number: "5717778989".to_owned(),
            ..Customer::default()
        }
    }

    #[fixture]
    fn account() -> Account {
        Account {
            account_number: Some(AccountNumber::new(1_122_334_455)),
            customer_id: Some(CustomerId::new(7)),
            account_type: AccountType::Checking,
            branch_address: "123 ABC".to_owned(),
            ..Account::default()
        }
    }

    #[rstest]
    fn customer_round_trips_through_view(customer: Customer) {
        let restored = customer_from_view(&customer_to_view(&customer), Customer::default());

        assert_eq!(restored.name, customer.name);
        assert_eq!(restored.email, customer.email);
        assert_eq!(restored.mobile_number, customer.mobile_number);
    }

    #[rstest]
    fn account_round_trips_through_view(account: Account) {
        let restored = account_from_view(&account_to_view(&account), Account::default());

        assert_eq!(restored.account_number, account.account_number);
        assert_eq!(restored.account_type, account.account_type);
        assert_eq!(restored.branch_address, account.branch_address);
    }

    #[rstest]
    fn partial_customer_view_leaves_other_fields(customer: Customer) {
        let view = CustomerView {
            email: Some("new@example.com".to_owned()),
            ..CustomerView::default()
        };

        let merged = customer_from_view(&view, customer.clone());

        assert_eq!(merged.email, "new@example.com");
        assert_eq!(merged.name, customer.name);
        assert_eq!(merged.mobile_number, customer.mobile_number);
        assert_eq!(merged.customer_id, customer.customer_id);
    }

    #[rstest]
    fn partial_account_view_leaves_other_fields(account: Account) {
        let view = AccountView {
            branch_address: Some("1 Elm Road".to_owned()),
            ..AccountView::default()
        };

        let merged = account_from_view(&view, account.clone());

        assert_eq!(merged.branch_address, "1 Elm Road");
        assert_eq!(merged.account_number, account.account_number);
        assert_eq!(merged.account_type, account.account_type);
        assert_eq!(merged.customer_id, account.customer_id);
    }

    #[rstest]
    fn combined_view_embeds_account(customer: Customer, account: Account) {
        let view = to_customer_view(&customer, &account);

        assert_eq!(view.mobile_number.as_deref(), Some("5717778989"));
        let embedded = view.account.expect("account view");
        assert_eq!(embedded.account_number, Some(AccountNumber::new(1_122_334_455)));
    }
}
