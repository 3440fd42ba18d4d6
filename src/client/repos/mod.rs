use crate::{
    client::{add_options, Client, PaginationOptions, Response, Result, SortDirection},
    Branch, Contributor, Repository, RepositoryTag, Team,
};
use serde::Serialize;
use std::collections::HashMap;

mod collaborators;

pub use collaborators::{
    CollaboratorAffiliation, CollaboratorPermission, ListCollaboratorsOptions,
};

#[derive(Clone, Debug, Default, Serialize)]
pub struct ListRepositoriesOptions {
    /// Type of repositories to list. Default: all
    #[serde(rename = "type")]
    pub repo_type: Option<RepositoryType>,

    /// What to sort results by. Default: full_name
    pub sort: Option<RepositorySort>,

    /// The direction of the sort. Default: asc when sorting by full_name, otherwise desc
    pub direction: Option<SortDirection>,

    #[serde(flatten)]
    pub pagination_options: PaginationOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepositoryType {
    All,
    Owner,
    Public,
    Private,
    Member,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepositorySort {
    Created,
    Updated,
    Pushed,
    FullName,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ListOrgRepositoriesOptions {
    /// Type of repositories to list. Default: all
    #[serde(rename = "type")]
    pub repo_type: Option<OrgRepositoryType>,

    #[serde(flatten)]
    pub pagination_options: PaginationOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrgRepositoryType {
    All,
    Public,
    Private,
    Forks,
    Sources,
    Member,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ListAllRepositoriesOptions {
    /// Only return repositories with an id greater than this one, the id of the last repository
    /// seen
    pub since: Option<u64>,

    #[serde(flatten)]
    pub pagination_options: PaginationOptions,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ListContributorsOptions {
    /// Include anonymous contributors in results
    pub anon: bool,

    #[serde(flatten)]
    pub pagination_options: PaginationOptions,
}

/// `RepositoryClient` handles communication with the Repository related methods of the GitHub API.
///
/// GitHub API docs: https://developer.github.com/v3/repos/
pub struct RepositoryClient<'a> {
    inner: &'a Client,
}

impl<'a> RepositoryClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    async fn list_repositories<O: Serialize>(
        &self,
        path: &str,
        options: Option<O>,
    ) -> Result<Response<Vec<Repository>>> {
        let url = add_options(path, options.as_ref())?;
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// List the repositories for a user. Passing the empty string lists the repositories of the
    /// authenticated user.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#list-user-repositories
    pub async fn list(
        &self,
        user: &str,
        options: Option<ListRepositoriesOptions>,
    ) -> Result<Response<Vec<Repository>>> {
        let url = if user.is_empty() {
            "user/repos".to_owned()
        } else {
            format!("users/{}/repos", user)
        };

        self.list_repositories(&url, options).await
    }

    /// List the repositories for an organization
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#list-organization-repositories
    pub async fn list_by_org(
        &self,
        org: &str,
        options: Option<ListOrgRepositoriesOptions>,
    ) -> Result<Response<Vec<Repository>>> {
        let url = format!("orgs/{}/repos", org);
        self.list_repositories(&url, options).await
    }

    /// List all public repositories in the order that they were created
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#list-all-public-repositories
    pub async fn list_all(
        &self,
        options: Option<ListAllRepositoriesOptions>,
    ) -> Result<Response<Vec<Repository>>> {
        self.list_repositories("repositories", options).await
    }

    /// Create a new repository. If an organization is given the repository is created under that
    /// org, the empty string creates it for the authenticated user.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#create
    pub async fn create(&self, org: &str, repo: &Repository) -> Result<Response<Repository>> {
        let url = if org.is_empty() {
            "user/repos".to_owned()
        } else {
            format!("orgs/{}/repos", org)
        };
        let response = self.inner.post(&url).json(repo).send().await?;

        self.inner.json(response).await
    }

    /// Get a repository
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#get
    pub async fn get(&self, owner: &str, repo: &str) -> Result<Response<Repository>> {
        let url = format!("repos/{}/{}", owner, repo);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// Update a repository. Only the fields set on `repository` are changed.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#edit
    pub async fn edit(
        &self,
        owner: &str,
        repo: &str,
        repository: &Repository,
    ) -> Result<Response<Repository>> {
        let url = format!("repos/{}/{}", owner, repo);
        let response = self.inner.patch(&url).json(repository).send().await?;

        self.inner.json(response).await
    }

    /// Delete a repository
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#delete-a-repository
    pub async fn delete(&self, owner: &str, repo: &str) -> Result<Response<()>> {
        let url = format!("repos/{}/{}", owner, repo);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// List contributors to a repository, sorted by number of commits
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#list-contributors
    pub async fn list_contributors(
        &self,
        owner: &str,
        repo: &str,
        options: Option<ListContributorsOptions>,
    ) -> Result<Response<Vec<Contributor>>> {
        let url = format!("repos/{}/{}/contributors", owner, repo);
        let url = add_options(&url, options.as_ref())?;
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// List the languages of a repository, mapped to the number of bytes of code written in each
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#list-languages
    pub async fn list_languages(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Response<HashMap<String, u64>>> {
        let url = format!("repos/{}/{}/languages", owner, repo);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// List the teams with access to a repository
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#list-teams
    pub async fn list_teams(&self, owner: &str, repo: &str) -> Result<Response<Vec<Team>>> {
        let url = format!("repos/{}/{}/teams", owner, repo);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// List tags
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#list-tags
    pub async fn list_tags(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Response<Vec<RepositoryTag>>> {
        let url = format!("repos/{}/{}/tags", owner, repo);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// List branches
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/branches/#list-branches
    pub async fn list_branches(&self, owner: &str, repo: &str) -> Result<Response<Vec<Branch>>> {
        let url = format!("repos/{}/{}/branches", owner, repo);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// Get a branch
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/branches/#get-branch
    pub async fn get_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<Response<Branch>> {
        let url = format!("repos/{}/{}/branches/{}", owner, repo, branch);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }
}

#[cfg(test)]
mod test {
    use super::{
        ListAllRepositoriesOptions, ListContributorsOptions, ListOrgRepositoriesOptions,
        ListRepositoriesOptions, OrgRepositoryType, RepositorySort, RepositoryType,
    };
    use crate::client::{add_options, PaginationOptions, SortDirection};

    #[test]
    fn list_options() {
        let options = ListRepositoriesOptions {
            repo_type: Some(RepositoryType::Owner),
            sort: Some(RepositorySort::FullName),
            direction: Some(SortDirection::Ascending),
            pagination_options: PaginationOptions {
                page: Some(2),
                per_page: Some(50),
            },
        };

        assert_eq!(
            add_options("user/repos", Some(&options)).unwrap(),
            "user/repos?type=owner&sort=full_name&direction=asc&page=2&per_page=50"
        );
        assert_eq!(
            add_options("user/repos", Some(&ListRepositoriesOptions::default())).unwrap(),
            "user/repos"
        );
    }

    #[test]
    fn list_by_org_options() {
        let options = ListOrgRepositoriesOptions {
            repo_type: Some(OrgRepositoryType::Sources),
            ..Default::default()
        };

        assert_eq!(
            add_options("orgs/acme/repos", Some(&options)).unwrap(),
            "orgs/acme/repos?type=sources"
        );
    }

    #[test]
    fn list_all_options() {
        let options = ListAllRepositoriesOptions {
            since: Some(364),
            ..Default::default()
        };

        assert_eq!(
            add_options("repositories", Some(&options)).unwrap(),
            "repositories?since=364"
        );
    }

    #[test]
    fn list_contributors_options() {
        let anonymous = ListContributorsOptions {
            anon: true,
            ..Default::default()
        };

        assert_eq!(
            add_options("repos/o/r/contributors", Some(&anonymous)).unwrap(),
            "repos/o/r/contributors?anon=true"
        );
        assert_eq!(
            add_options("repos/o/r/contributors", Some(&ListContributorsOptions::default()))
                .unwrap(),
            "repos/o/r/contributors"
        );
    }
}
