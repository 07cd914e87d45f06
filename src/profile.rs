pub mod load;

/// The account/role pair an SSO profile points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsoProfile {
    pub name: String,
    pub account_id: String,
    pub role_name: String,
}

impl SsoProfile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn role_name(&self) -> &str {
        &self.role_name
    }
}
