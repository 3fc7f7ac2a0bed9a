//! Account administration (admin only on the backend).

use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::{ApiError, Call};
use crate::models::{AccountGroups, NewAccount};

#[derive(Deserialize)]
struct AccountsEnvelope {
    #[serde(default)]
    accounts: AccountGroups,
}

pub async fn list_accounts(client: &ApiClient) -> Result<AccountGroups, ApiError> {
    let envelope: AccountsEnvelope = client
        .get("/accounts", &[], Call::Other("Failed to load accounts"))
        .await?;
    Ok(envelope.accounts)
}

pub async fn add_account(client: &ApiClient, account: &NewAccount) -> Result<(), ApiError> {
    if let Err(message) = account.validate() {
        return Err(ApiError::Failed {
            status: 400,
            message: message.to_string(),
        });
    }
    client
        .submit("/addAccount", account, Call::Other("Failed to add the account"))
        .await
}

pub async fn delete_account(client: &ApiClient, user_id: &str) -> Result<(), ApiError> {
    client
        .delete(
            "/accounts",
            &[("userID", user_id.to_string())],
            Call::Other("Failed to delete the account"),
        )
        .await
}
