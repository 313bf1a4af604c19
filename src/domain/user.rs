//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Display name
    #[schema(example = "Kenneth")]
    pub user_name: String,
    /// Time the record was created
    pub join_date: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(id: i32, user_name: impl Into<String>, join_date: DateTime<Utc>) -> Self {
        Self {
            id,
            user_name: user_name.into(),
            join_date,
        }
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    /// Explicit identifier; assigned by the store when omitted
    pub id: Option<i32>,
    /// Display name (minimum 2 characters)
    #[validate(length(min = 2, message = "userName must be at least 2 characters"))]
    #[schema(example = "Zed", min_length = 2)]
    pub user_name: String,
    /// Join date; defaults to the creation time
    #[validate(custom(function = "not_in_future"))]
    pub join_date: Option<DateTime<Utc>>,
}

impl CreateUser {
    /// Creation request with a store-assigned id and the current time
    pub fn named(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            ..Self::default()
        }
    }

    /// Set an explicit id
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }
}

fn not_in_future(date: &DateTime<Utc>) -> Result<(), ValidationError> {
    if *date > Utc::now() {
        let mut err = ValidationError::new("past");
        err.message = Some("joinDate must be in the past".into());
        return Err(err);
    }
    Ok(())
}

/// Admin projection of a user (identifier and name only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Kenneth")]
    pub user_name: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
        }
    }
}

/// Hypermedia link
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Link {
    #[schema(example = "/user")]
    pub href: String,
}

/// Links attached to a single user representation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserLinks {
    #[serde(rename = "all-users")]
    pub all_users: Link,
}

/// User representation with a link back to the collection
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserModel {
    #[serde(flatten)]
    pub user: User,
    #[serde(rename = "_links")]
    pub links: UserLinks,
}

impl UserModel {
    /// Wrap a user with its `all-users` link
    pub fn new(user: User, collection_href: impl Into<String>) -> Self {
        Self {
            user,
            links: UserLinks {
                all_users: Link {
                    href: collection_href.into(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User::new(1, "Kenneth", Utc::now());
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["userName"], "Kenneth");
        assert!(json["joinDate"].is_string());
    }

    #[test]
    fn test_create_user_accepts_missing_id_and_date() {
        let payload: CreateUser = serde_json::from_str(r#"{"userName":"Zed"}"#).unwrap();

        assert_eq!(payload.id, None);
        assert_eq!(payload.user_name, "Zed");
        assert!(payload.join_date.is_none());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_create_user_rejects_short_name() {
        let payload = CreateUser::named("Z");
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("user_name"));
    }

    #[test]
    fn test_create_user_rejects_future_join_date() {
        let payload = CreateUser {
            join_date: Some(Utc::now() + Duration::days(1)),
            ..CreateUser::named("Zed")
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("join_date"));
    }

    #[test]
    fn test_summary_drops_join_date() {
        let summary = UserSummary::from(User::new(2, "Alice", Utc::now()));
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["userName"], "Alice");
        assert!(json.get("joinDate").is_none());
    }

    #[test]
    fn test_user_model_links_to_collection() {
        let model = UserModel::new(User::new(1, "Kenneth", Utc::now()), "/user");
        let json = serde_json::to_value(&model).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["_links"]["all-users"]["href"], "/user");
    }
}
