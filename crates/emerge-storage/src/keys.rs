//! Storage key constants.

/// Storage keys used by the record store
pub struct StorageKeys;

impl StorageKeys {
    /// Serialized user record (JSON object)
    pub const USER_DATA: &'static str = "emerge_user_data";

    /// Session flag, literal `"true"` while logged in
    pub const AUTH: &'static str = "emerge_auth";

    /// Every key the store owns, in the order `clear` removes them.
    pub const ALL: [&'static str; 2] = [Self::USER_DATA, Self::AUTH];
}
