use super::RepositoryClient;
use crate::{
    client::{add_options, PaginationOptions, Response, Result},
    User,
};
use serde::Serialize;

#[derive(Clone, Debug, Default, Serialize)]
pub struct ListCollaboratorsOptions {
    /// Filter collaborators by how they are affiliated with the repository. Default: all
    pub affiliation: Option<CollaboratorAffiliation>,

    #[serde(flatten)]
    pub pagination_options: PaginationOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollaboratorAffiliation {
    /// Outside collaborators of an organization-owned repository
    Outside,
    /// Collaborators with permissions to the repository, regardless of organization membership
    Direct,
    All,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollaboratorPermission {
    Pull,
    Triage,
    Push,
    Maintain,
    Admin,
}

// Implementation for the collaborators endpoint
// https://developer.github.com/v3/repos/collaborators/
impl RepositoryClient<'_> {
    /// List Collaborators
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/collaborators/#list-collaborators
    pub async fn list_collaborators(
        &self,
        owner: &str,
        repo: &str,
        options: Option<ListCollaboratorsOptions>,
    ) -> Result<Response<Vec<User>>> {
        let url = format!("repos/{}/{}/collaborators", owner, repo);
        let url = add_options(&url, options.as_ref())?;
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// Check if a user is a collaborator
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/collaborators/#check-if-a-user-is-a-collaborator
    pub async fn is_collaborator(
        &self,
        owner: &str,
        repo: &str,
        user: &str,
    ) -> Result<Response<bool>> {
        let url = format!("repos/{}/{}/collaborators/{}", owner, repo, user);
        let response = self.inner.get(&url).send().await?;

        self.inner.boolean(response).await
    }

    /// Add a user as a collaborator. Without a permission Github grants `push`.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/collaborators/#add-user-as-a-collaborator
    pub async fn add_collaborator(
        &self,
        owner: &str,
        repo: &str,
        user: &str,
        permission: Option<CollaboratorPermission>,
    ) -> Result<Response<()>> {
        #[derive(Debug, Serialize)]
        struct AddCollaboratorRequest {
            #[serde(skip_serializing_if = "Option::is_none")]
            permission: Option<CollaboratorPermission>,
        }

        let request = AddCollaboratorRequest { permission };
        let url = format!("repos/{}/{}/collaborators/{}", owner, repo, user);
        let response = self.inner.put(&url).json(&request).send().await?;

        self.inner.empty(response).await
    }

    /// Remove a collaborator
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/collaborators/#remove-user-as-a-collaborator
    pub async fn remove_collaborator(
        &self,
        owner: &str,
        repo: &str,
        user: &str,
    ) -> Result<Response<()>> {
        let url = format!("repos/{}/{}/collaborators/{}", owner, repo, user);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }
}
