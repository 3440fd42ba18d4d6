use super::{DateTime, NodeId, Oid};
use serde::{Deserialize, Serialize};

/// A git commit as returned by the REST API.
///
/// Tags and branches only carry the abbreviated form (`sha` and `url`); the remaining fields are
/// populated when the commit itself is fetched.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Commit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<Oid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Signature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committer: Option<Signature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<Commit>>,
}

/// Author or committer of a commit
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Signature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime>,
}
