use std::sync::{Arc, RwLock};

use time::OffsetDateTime;
use uuid::Uuid;

/// A locally-managed account. The reset token, when present, is only
/// honored while `reset_token_expires` lies in the future.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub created_at: OffsetDateTime,
    pub reset_token: Option<String>,
    pub reset_token_expires: Option<OffsetDateTime>,
}

/// Process-wide account store. Emails are unique and compared exactly as
/// stored. All mutation happens under the write lock, so the uniqueness
/// check and the insert are a single step.
#[derive(Clone, Default)]
pub struct UserStore {
    accounts: Arc<RwLock<Vec<UserAccount>>>,
}

impl UserStore {
    pub fn find_by_email(&self, email: &str) -> Option<UserAccount> {
        self.accounts
            .read()
            .expect("account store lock poisoned")
            .iter()
            .find(|account| account.email == email)
            .cloned()
    }

    /// Inserts a new account. Returns `None` when the email is already
    /// registered.
    pub fn insert(&self, email: &str, password_hash: &str, name: &str) -> Option<UserAccount> {
        let mut accounts = self.accounts.write().expect("account store lock poisoned");
        if accounts.iter().any(|account| account.email == email) {
            return None;
        }
        let account = UserAccount {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            name: name.to_string(),
            created_at: OffsetDateTime::now_utc(),
            reset_token: None,
            reset_token_expires: None,
        };
        accounts.push(account.clone());
        Some(account)
    }

    /// Attaches a reset token to the account owning `email`. Returns
    /// `false` when no such account exists.
    pub fn set_reset_token(
        &self,
        email: &str,
        token: &str,
        expires_at: OffsetDateTime,
    ) -> bool {
        let mut accounts = self.accounts.write().expect("account store lock poisoned");
        match accounts.iter_mut().find(|account| account.email == email) {
            Some(account) => {
                account.reset_token = Some(token.to_string());
                account.reset_token_expires = Some(expires_at);
                true
            }
            None => false,
        }
    }

    /// Redeems a reset token: stores the new password hash and clears the
    /// token fields so it cannot be used twice. Returns `false` when no
    /// account holds a matching, unexpired token.
    pub fn redeem_reset_token(&self, token: &str, new_password_hash: &str) -> bool {
        let now = OffsetDateTime::now_utc();
        let mut accounts = self.accounts.write().expect("account store lock poisoned");
        let account = accounts.iter_mut().find(|account| {
            account.reset_token.as_deref() == Some(token)
                && account
                    .reset_token_expires
                    .map_or(false, |expires| expires > now)
        });
        match account {
            Some(account) => {
                account.password_hash = new_password_hash.to_string();
                account.reset_token = None;
                account.reset_token_expires = None;
                true
            }
            None => false,
        }
    }
}
