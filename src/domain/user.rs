//! User aggregate root and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ENTITY_USER;
use crate::domain::{Email, Name, Password, Telephone};
use crate::errors::{DomainError, DomainResult};

/// User lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Blocked,
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "Active"),
            UserStatus::Inactive => write!(f, "Inactive"),
            UserStatus::Blocked => write!(f, "Blocked"),
        }
    }
}

/// User aggregate root.
///
/// The sole unit of consistency: every mutation goes through one of the
/// transition methods below, each of which checks its guard before
/// touching any field and advances `updated_at` on success. Email
/// uniqueness is a cross-aggregate rule enforced by the use case, not
/// here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: Uuid,
    name: Name,
    email: Email,
    telephone: Telephone,
    /// Omitted from serialized output; deserialization reads full
    /// storage records, which always carry the hash
    #[serde(skip_serializing)]
    password: Password,
    status: UserStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a brand-new user: status starts Active, both timestamps now.
    ///
    /// `password` must already be the hash form; hashing happens in the
    /// use case before the aggregate is constructed.
    pub fn new(id: Uuid, name: Name, email: Email, telephone: Telephone, password: Password) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            telephone,
            password,
            status: UserStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a user from storage without re-running creation side effects.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstruct(
        id: Uuid,
        name: Name,
        email: Email,
        telephone: Telephone,
        password: Password,
        status: UserStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            telephone,
            password,
            status,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn telephone(&self) -> &Telephone {
        &self.telephone
    }

    /// Stored password hash.
    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Transition to Active. Rejected when already Active.
    pub fn activate(&mut self) -> DomainResult<()> {
        self.transition("activate", UserStatus::Active)
    }

    /// Transition to Inactive. Rejected when already Inactive.
    pub fn deactivate(&mut self) -> DomainResult<()> {
        self.transition("deactivate", UserStatus::Inactive)
    }

    /// Transition to Blocked. Rejected when already Blocked.
    pub fn block(&mut self) -> DomainResult<()> {
        self.transition("block", UserStatus::Blocked)
    }

    fn transition(&mut self, action: &str, target: UserStatus) -> DomainResult<()> {
        if self.status == target {
            return Err(DomainError::invalid_state(
                ENTITY_USER,
                &self.status.to_string(),
                action,
                Some(self.id),
            ));
        }
        self.status = target;
        self.touch();
        Ok(())
    }

    /// Replace name, email, and telephone. Allowed in any status.
    pub fn update(&mut self, name: Name, email: Email, telephone: Telephone) {
        self.name = name;
        self.email = email;
        self.telephone = telephone;
        self.touch();
    }

    /// Replace the stored password with an already-hashed value.
    /// Allowed in any status.
    pub fn change_password(&mut self, password_hash: Password) {
        self.password = password_hash;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    /// User display name
    pub name: String,
    /// User email address
    pub email: String,
    /// User telephone in `(DD) DDDDD-DDDD` format
    pub telephone: String,
    /// Raw user password
    pub password: String,
}

/// User update data transfer object
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    /// New display name
    pub name: String,
    /// New email address
    pub email: String,
    /// New telephone number
    pub telephone: String,
}

/// Password change data transfer object
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePassword {
    /// Current raw password, verified against the stored hash
    pub current_password: String,
    /// New raw password
    pub new_password: String,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    /// Unique user identifier
    pub id: Uuid,
    /// User display name
    pub name: String,
    /// User email address
    pub email: String,
    /// User telephone number
    pub telephone: String,
    /// Lifecycle status
    pub status: UserStatus,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            telephone: user.telephone.as_str().to_string(),
            status: user.status,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse::from(&user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new(
            Uuid::new_v4(),
            Name::of("Alice Example").unwrap(),
            Email::of("alice@example.com").unwrap(),
            Telephone::of("(11) 91234-5678").unwrap(),
            Password::of_hash("hashed").unwrap(),
        )
    }

    #[test]
    fn test_new_user_starts_active_with_equal_timestamps() {
        let user = test_user();
        assert_eq!(user.status(), UserStatus::Active);
        assert_eq!(user.created_at(), user.updated_at());
    }

    #[test]
    fn test_block_activate_deactivate_advances_updated_at() {
        let mut user = test_user();
        let t0 = user.updated_at();

        user.block().unwrap();
        let t1 = user.updated_at();
        assert_eq!(user.status(), UserStatus::Blocked);
        assert!(t1 > t0);

        user.activate().unwrap();
        let t2 = user.updated_at();
        assert_eq!(user.status(), UserStatus::Active);
        assert!(t2 > t1);

        user.deactivate().unwrap();
        let t3 = user.updated_at();
        assert_eq!(user.status(), UserStatus::Inactive);
        assert!(t3 > t2);

        // created_at never moves
        assert_eq!(user.created_at(), t0);
    }

    #[test]
    fn test_activate_on_active_user_is_rejected_without_changes() {
        let mut user = test_user();
        let before = user.updated_at();

        let err = user.activate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "It is not possible to execute 'activate' on User in the 'Active' state"
        );
        assert_eq!(user.status(), UserStatus::Active);
        assert_eq!(user.updated_at(), before);
    }

    #[test]
    fn test_deactivate_and_block_guards() {
        let mut user = test_user();
        user.deactivate().unwrap();
        assert!(user.deactivate().is_err());

        user.block().unwrap();
        assert!(user.block().is_err());

        // Blocked users may go either way
        user.deactivate().unwrap();
        assert_eq!(user.status(), UserStatus::Inactive);
    }

    #[test]
    fn test_update_replaces_all_contact_fields() {
        let mut user = test_user();
        let before = user.updated_at();

        user.update(
            Name::of("Bob Example").unwrap(),
            Email::of("bob@example.com").unwrap(),
            Telephone::of("(21) 1234-5678").unwrap(),
        );

        assert_eq!(user.name().as_str(), "Bob Example");
        assert_eq!(user.email().as_str(), "bob@example.com");
        assert_eq!(user.telephone().as_str(), "(21) 1234-5678");
        assert!(user.updated_at() > before);
    }

    #[test]
    fn test_change_password_allowed_in_any_status() {
        let mut user = test_user();
        user.block().unwrap();

        user.change_password(Password::of_hash("rehashed").unwrap());
        assert_eq!(user.password().as_str(), "rehashed");
        assert_eq!(user.status(), UserStatus::Blocked);
    }

    #[test]
    fn test_serialize_omits_hash_deserialize_reads_storage_record() {
        let user = test_user();

        let rendered = serde_json::to_value(&user).unwrap();
        assert!(rendered.get("password").is_none());
        assert_eq!(rendered["email"], serde_json::json!("alice@example.com"));

        // Storage records carry the hash and deserialize in full
        let record = serde_json::json!({
            "id": user.id(),
            "name": "Alice Example",
            "email": "alice@example.com",
            "telephone": "(11) 91234-5678",
            "password": "hashed",
            "status": "active",
            "created_at": user.created_at(),
            "updated_at": user.updated_at(),
        });
        let restored: User = serde_json::from_value(record).unwrap();
        assert_eq!(restored.id(), user.id());
        assert_eq!(restored.password().as_str(), "hashed");
        assert_eq!(restored.status(), UserStatus::Active);
    }

    #[test]
    fn test_user_response_projection_has_no_hash() {
        let user = test_user();
        let response = UserResponse::from(&user);

        assert_eq!(response.id, user.id());
        assert_eq!(response.name, "Alice Example");
        assert_eq!(response.email, "alice@example.com");
        assert_eq!(response.telephone, "(11) 91234-5678");
        assert_eq!(response.status, UserStatus::Active);
        assert_eq!(response.created_at, user.created_at());

        let rendered = serde_json::to_value(&response).unwrap();
        assert!(rendered.get("password").is_none());
        assert!(!rendered.to_string().contains("hashed"));
    }

    #[test]
    fn test_reconstruct_keeps_historical_timestamps() {
        let created = Utc::now() - chrono::Duration::days(30);
        let updated = Utc::now() - chrono::Duration::days(1);
        let user = User::reconstruct(
            Uuid::new_v4(),
            Name::of("Alice Example").unwrap(),
            Email::of("alice@example.com").unwrap(),
            Telephone::of("(11) 91234-5678").unwrap(),
            Password::of_hash("hashed").unwrap(),
            UserStatus::Blocked,
            created,
            updated,
        );
        assert_eq!(user.status(), UserStatus::Blocked);
        assert_eq!(user.created_at(), created);
        assert_eq!(user.updated_at(), updated);
    }
}
