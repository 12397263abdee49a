/// Capabilities every authenticatable record provides to the login and permission checks.
pub trait Account {
    /// Unique login identifier
    fn login_id(&self) -> &str;
    /// Stored password hash
    fn password_hash(&self) -> &str;
    fn is_active(&self) -> bool;
    fn is_staff(&self) -> bool;
    fn is_superuser(&self) -> bool;

    /// Whether the account may use the back-office
    fn can_access_admin(&self) -> bool {
        self.is_active() && (self.is_staff() || self.is_superuser())
    }
}

impl Account for entity::user::Model {
    fn login_id(&self) -> &str {
        &self.username
    }

    fn password_hash(&self) -> &str {
        &self.password
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn is_staff(&self) -> bool {
        self.is_staff
    }

    fn is_superuser(&self) -> bool {
        self.is_superuser
    }
}
