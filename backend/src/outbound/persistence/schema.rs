//! Diesel table definitions for the accounts schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Registered customers. `mobile_number` carries a unique index.
    customer (customer_id) {
        customer_id -> Int8,
        name -> Varchar,
        email -> Varchar,
        mobile_number -> Varchar,
        created_at -> Timestamptz,
        created_by -> Varchar,
        updated_at -> Nullable<Timestamptz>,
        updated_by -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Bank accounts keyed by their ten-digit number.
    accounts (account_number) {
        account_number -> Int8,
        customer_id -> Int8,
        account_type -> Varchar,
        branch_address -> Varchar,
        created_at -> Timestamptz,
        created_by -> Varchar,
        updated_at -> Nullable<Timestamptz>,
        updated_by -> Nullable<Varchar>,
    }
}

diesel::joinable!(accounts -> customer (customer_id));
diesel::allow_tables_to_appear_in_same_query!(accounts, customer);
