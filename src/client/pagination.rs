use crate::client::HEADER_LINK;
use serde::Serialize;
use url::Url;

/// Represents `Pagination` information from a Github API request
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub next_page: Option<usize>,
    pub prev_page: Option<usize>,
    pub first_page: Option<usize>,
    pub last_page: Option<usize>,

    /// Set instead of `next_page` by endpoints which paginate with an opaque cursor
    pub next_page_token: Option<String>,
}

impl Pagination {
    pub(super) fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        let mut pagination = Self::default();

        let links = match headers.get(HEADER_LINK).and_then(|h| h.to_str().ok()) {
            Some(links) => links,
            None => return pagination,
        };

        for link in links.split(',') {
            let (page, rels) = match parse_link(link) {
                Some(parsed) => parsed,
                None => continue,
            };

            for rel in rels {
                match rel {
                    "rel=\"next\"" => match page.parse() {
                        Ok(n) => pagination.next_page = Some(n),
                        Err(_) => pagination.next_page_token = Some(page.clone()),
                    },
                    "rel=\"prev\"" => pagination.prev_page = page.parse().ok(),
                    "rel=\"first\"" => pagination.first_page = page.parse().ok(),
                    "rel=\"last\"" => pagination.last_page = page.parse().ok(),
                    _ => {}
                }
            }
        }

        pagination
    }
}

// Split a single `<url>; rel="..."` entry into the `page` query value of the url and its rel
// segments. Entries without a well formed url or a page are skipped.
fn parse_link(link: &str) -> Option<(String, Vec<&str>)> {
    let mut segments = link.split(';').map(str::trim);

    let href = segments.next()?;
    if !(href.starts_with('<') && href.ends_with('>')) {
        return None;
    }

    let url = Url::parse(&href[1..href.len() - 1]).ok()?;
    let page = url
        .query_pairs()
        .find_map(|(k, v)| if k == "page" { Some(v.into_owned()) } else { None })?;

    let rels: Vec<&str> = segments.collect();
    if rels.is_empty() {
        None
    } else {
        Some((page, rels))
    }
}

/// Page based pagination parameters shared by all list endpoints.
///
/// GitHub API docs: https://developer.github.com/v3/#pagination
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PaginationOptions {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}
