//! Wire-transfer shapes for customers and accounts.
//!
//! Every field is optional so the same shape carries full records (fetch,
//! create) and partial updates. Absent fields are omitted when serialised.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::account::{AccountNumber, AccountType};

/// Account as exchanged with clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>, example = 1122334455)]
    pub account_number: Option<AccountNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "123 Main Street, New York")]
    pub branch_address: Option<String>,
}

/// Customer with their embedded account, as exchanged with clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "John Hans")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "test@gmail.com")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "5717778989")]
    pub mobile_number: Option<String>,
    #[serde(rename = "accountsDto", default, skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn customer_view_uses_wire_field_names() {
        let view = CustomerView {
            name: Some("John Hans".to_owned()),
            email: Some("test@gmail.com".to_owned()),
            mobile_number: Some("5717778989".to_owned()),
            account: Some(AccountView {
                account_number: Some(AccountNumber::new(1_122_334_455)),
                account_type: Some(AccountType::Checking),
                branch_address: Some("123 ABC".to_owned()),
            }),
        };

        let value = serde_json::to_value(&view).expect("serialise");
        assert_eq!(
            value,
            json!({
                "name": "John Hans",
                "email": "test@gmail.com",
                "mobileNumber": "5717778989",
                "accountsDto": {
                    "accountNumber": 1122334455_i64,
                    "accountType": "Checking",
                    "branchAddress": "123 ABC",
                },
            })
        );
    }

    #[rstest]
    fn absent_fields_are_omitted() {
        let value = serde_json::to_value(CustomerView::default()).expect("serialise");
        assert_eq!(value, json!({}));
    }
}
