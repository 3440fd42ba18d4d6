use super::{DateTime, NodeId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum UserType {
    Bot,
    Organization,
    User,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravatar_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repos_url: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_admin: Option<bool>,

    // Only populated when fetching a single user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_repos: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub following: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,

    // Only populated by the collaborators endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
}

/// Repository permissions a collaborator holds
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Permissions {
    #[serde(default)]
    pub pull: bool,
    #[serde(default)]
    pub push: bool,
    #[serde(default)]
    pub admin: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Team {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repositories_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Team>>,
}

#[cfg(test)]
mod test {
    use super::{Team, User, UserType};

    #[test]
    fn user() {
        const USER_JSON: &str = r#"
            {
                "login": "Codertocat",
                "id": 21031067,
                "node_id": "MDQ6VXNlcjIxMDMxMDY3",
                "avatar_url": "https://avatars1.githubusercontent.com/u/21031067?v=4",
                "gravatar_id": "",
                "url": "https://api.github.com/users/Codertocat",
                "html_url": "https://github.com/Codertocat",
                "followers_url": "https://api.github.com/users/Codertocat/followers",
                "repos_url": "https://api.github.com/users/Codertocat/repos",
                "type": "User",
                "site_admin": false
            }
        "#;

        let user: User = serde_json::from_str(USER_JSON).unwrap();
        assert_eq!(user.user_type, Some(UserType::User));
        assert_eq!(user.login.as_deref(), Some("Codertocat"));
        assert_eq!(user.site_admin, Some(false));
        assert_eq!(user.gravatar_id.as_deref(), Some(""));
        assert!(user.permissions.is_none());
    }

    #[test]
    fn unknown_user_type() {
        let user: User =
            serde_json::from_str(r#"{"login": "ghost-import", "type": "Mannequin"}"#).unwrap();
        assert_eq!(user.user_type, Some(UserType::Unknown));
        assert_eq!(user.login.as_deref(), Some("ghost-import"));
    }

    #[test]
    fn collaborator_permissions() {
        const COLLABORATOR_JSON: &str = r#"
            {
                "login": "octocat",
                "id": 1,
                "type": "User",
                "site_admin": false,
                "permissions": { "pull": true, "push": true, "admin": false }
            }
        "#;

        let user: User = serde_json::from_str(COLLABORATOR_JSON).unwrap();
        let permissions = user.permissions.unwrap();
        assert!(permissions.pull);
        assert!(permissions.push);
        assert!(!permissions.admin);
    }

    #[test]
    fn nested_team() {
        const TEAM_JSON: &str = r#"
            {
                "id": 1,
                "name": "Justice League",
                "slug": "justice-league",
                "description": null,
                "permission": "admin",
                "parent": { "id": 2, "slug": "heroes" }
            }
        "#;

        let team: Team = serde_json::from_str(TEAM_JSON).unwrap();
        assert_eq!(team.slug.as_deref(), Some("justice-league"));
        assert!(team.description.is_none());
        assert_eq!(team.parent.and_then(|p| p.slug).as_deref(), Some("heroes"));
    }
}
