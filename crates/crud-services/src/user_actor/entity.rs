//! Entity trait implementation for the User domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`User`] to be managed by the generic [`crud_framework::ResourceActor`].

use crate::model::{same_category, User, UserCreate, UserFilter, UserUpdate};
use chrono::Utc;
use crud_framework::{ActorEntity, EntityId};

impl ActorEntity for User {
    const RESOURCE: &'static str = "usuarios";
    type Create = UserCreate;
    type Update = UserUpdate;
    type Filter = UserFilter;

    fn id(&self) -> EntityId {
        self.id
    }

    /// Creates a new, active User stamped with the current time.
    fn from_create_params(id: EntityId, params: UserCreate) -> Self {
        Self {
            id,
            name: params.name,
            email: params.email,
            phone: params.phone,
            role: params.role,
            registered_at: Utc::now(),
            active: true,
        }
    }

    /// Handles updates to the User entity.
    ///
    /// # Fields Updated
    /// - `name`, `email`, `phone`, `role`: contact and access details
    /// - `active`: account switch
    fn on_update(&mut self, update: UserUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
    }

    fn matches(&self, filter: &UserFilter) -> bool {
        match filter {
            UserFilter::Role(role) => same_category(&self.role, role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create() -> UserCreate {
        UserCreate {
            name: "Ana".into(),
            email: "ana@x.com".into(),
            phone: String::new(),
            role: "admin".into(),
        }
    }

    #[test]
    fn test_new_users_are_active() {
        let user = User::from_create_params(3, create());
        assert_eq!(user.id, 3);
        assert!(user.active);
    }

    #[test]
    fn test_empty_update_changes_nothing() {
        let mut user = User::from_create_params(3, create());
        let before = user.clone();
        user.on_update(UserUpdate::default());
        assert_eq!(user, before);
    }

    #[test]
    fn test_update_merges_present_fields() {
        let mut user = User::from_create_params(3, create());
        user.on_update(UserUpdate {
            phone: Some("+57 1".into()),
            active: Some(false),
            ..Default::default()
        });
        assert_eq!(user.phone, "+57 1");
        assert!(!user.active);
        assert_eq!(user.name, "Ana");
    }

    #[test]
    fn test_role_filter_ignores_case() {
        let user = User::from_create_params(3, create());
        assert!(user.matches(&UserFilter::Role("ADMIN".into())));
        assert!(!user.matches(&UserFilter::Role("usuario".into())));
    }
}
