use serde::{Deserialize, Serialize};

/// A member record as returned by the third-party directory service.
///
/// The directory owns these records; `id` is assigned remotely and is stable
/// for the lifetime of the record. Everything the frontend holds is a cache
/// of what the service last returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// URL of the member's avatar image.
    pub avatar: String,
}

impl User {
    /// Full display name, `"First Last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
