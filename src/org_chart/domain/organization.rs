/// Organization as resolved by the directory service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    id: i64,
    login: String,
}

impl Organization {
    pub fn new(id: i64, login: String) -> Self {
        Self { id, login }
    }

    /// Opaque numeric identifier used for team member lookups
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn login(&self) -> &str {
        &self.login
    }
}
