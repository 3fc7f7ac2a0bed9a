use serde::{Deserialize, Serialize};
use store::Role;

use super::id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    pub fn label(self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Inactive => "Inactive",
        }
    }
}

/// A user account as seen by administrators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "userID", with = "id::text")]
    pub user_id: String,
    #[serde(rename = "userName")]
    pub name: String,
    #[serde(rename = "userType", deserialize_with = "id::role::deserialize")]
    pub role: Role,
    #[serde(default)]
    pub email: String,
    pub status: AccountStatus,
}

impl Account {
    /// Case-insensitive match on name, email or id.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.email.to_lowercase().contains(&query)
            || self.user_id.to_lowercase().contains(&query)
    }
}

/// Accounts grouped by role, as `GET /accounts` returns them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccountGroups {
    #[serde(default)]
    pub student: Vec<Account>,
    #[serde(default)]
    pub professor: Vec<Account>,
    #[serde(default)]
    pub admin: Vec<Account>,
}

impl AccountGroups {
    /// Every account, students first, then professors, then admins.
    pub fn all(&self) -> impl Iterator<Item = &Account> {
        self.student
            .iter()
            .chain(self.professor.iter())
            .chain(self.admin.iter())
    }

    pub fn len(&self) -> usize {
        self.student.len() + self.professor.len() + self.admin.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Body of `POST /addAccount`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAccount {
    #[serde(rename = "userid")]
    pub user_id: String,
    pub name: String,
    #[serde(rename = "passwd")]
    pub password: String,
    pub email: String,
    /// Backend role code, see [`Role::code`].
    #[serde(rename = "type")]
    pub user_type: u8,
    pub status: AccountStatus,
}

impl NewAccount {
    pub fn new(
        user_id: &str,
        name: &str,
        password: &str,
        email: &str,
        role: Role,
        status: AccountStatus,
    ) -> Self {
        Self {
            user_id: user_id.trim().to_string(),
            name: name.trim().to_string(),
            password: password.to_string(),
            email: email.trim().to_string(),
            user_type: role.code(),
            status,
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.user_id.is_empty() {
            return Err("User ID is required");
        }
        if self.name.is_empty() {
            return Err("Name is required");
        }
        if self.email.is_empty() || !self.email.contains('@') {
            return Err("Please enter a valid email");
        }
        if self.password.is_empty() {
            return Err("Password is required");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNTS: &str = r#"{
        "student": [{"userID": 2019203001, "userName": "Hong", "userType": "student", "email": "hong@example.com", "status": "active"}],
        "professor": [{"userID": "12000001", "userName": "Kim", "userType": "professor", "email": "kim@example.com", "status": "active"}],
        "admin": []
    }"#;

    #[test]
    fn test_groups_parse_and_flatten() {
        let groups: AccountGroups = serde_json::from_str(ACCOUNTS).unwrap();
        assert_eq!(groups.len(), 2);
        let ids: Vec<&str> = groups.all().map(|a| a.user_id.as_str()).collect();
        assert_eq!(ids, vec!["2019203001", "12000001"]);
        assert_eq!(groups.professor[0].role, Role::Professor);
    }

    #[test]
    fn test_account_search() {
        let groups: AccountGroups = serde_json::from_str(ACCOUNTS).unwrap();
        let hong = &groups.student[0];
        assert!(hong.matches(""));
        assert!(hong.matches("HONG"));
        assert!(hong.matches("example.com"));
        assert!(!hong.matches("kim"));
    }

    #[test]
    fn test_new_account_wire_format() {
        let account = NewAccount::new(" lee ", "Lee", "pw", "lee@example.com", Role::Professor, AccountStatus::Active);
        assert!(account.validate().is_ok());
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["userid"], "lee");
        assert_eq!(json["passwd"], "pw");
        assert_eq!(json["type"], 2);
        assert_eq!(json["status"], "active");

        let bad = NewAccount::new("lee", "Lee", "pw", "not-an-email", Role::Student, AccountStatus::Active);
        assert_eq!(bad.validate(), Err("Please enter a valid email"));
    }
}
