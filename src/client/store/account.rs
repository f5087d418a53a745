use dioxus::prelude::*;

use crate::model::auth::AccountDto;

/// Signed-in account shared with every component under the router.
///
/// `fetched` stays false until the first session check completes so pages can
/// tell "not signed in" apart from "still checking".
#[derive(Clone, Copy)]
pub struct AccountStore {
    pub account: Signal<Option<AccountDto>>,
    pub fetched: Signal<bool>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self {
            account: Signal::new(None),
            fetched: Signal::new(false),
        }
    }

    pub fn account(&self) -> Option<AccountDto> {
        self.account.read().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.account.read().is_some()
    }

    pub fn is_fetched(&self) -> bool {
        *self.fetched.read()
    }

    /// Record the result of a session check or a sign-in/sign-out.
    pub fn set_account(&self, account: Option<AccountDto>) {
        let mut account_signal = self.account;
        account_signal.set(account);
        let mut fetched_signal = self.fetched;
        fetched_signal.set(true);
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_account_store() -> AccountStore {
    use_context::<AccountStore>()
}
