//! Encoding of option structs into url query strings

use super::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use url::{Position, Url};

// Only used to resolve relative paths, never requested
const PATH_BASE: &str = "http://localhost/";

/// Append `options` to `path` as a query string.
///
/// Fields are emitted in declaration order, with `#[serde(flatten)]`ed structs (such as
/// `PaginationOptions`) expanded in place. Fields holding the zero value of their type (`None`,
/// `""`, `0`, `false` or an empty list) are skipped, and when nothing is left `path` is returned
/// untouched. Lists are joined with `,`.
pub fn add_options<O: Serialize>(path: &str, options: Option<&O>) -> Result<String> {
    let options = match options {
        Some(options) => options,
        None => return Ok(path.to_owned()),
    };

    let mut url = Url::parse(PATH_BASE)?.join(path)?;

    let pairs = query_pairs(options)?;
    if pairs.is_empty() {
        return Ok(path.to_owned());
    }

    url.query_pairs_mut().extend_pairs(pairs);

    Ok(url[Position::BeforePath..]
        .trim_start_matches('/')
        .to_owned())
}

fn query_pairs<O: Serialize>(options: &O) -> Result<Vec<(String, String)>> {
    let fields = match serde_json::to_value(options)? {
        Value::Object(fields) => fields,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(Error::Options(
                format!("expected a struct, found `{}`", other).into(),
            ))
        }
    };

    let mut pairs = Vec::with_capacity(fields.len());
    for (name, value) in fields {
        if let Some(value) = query_value(&name, value)? {
            pairs.push((name, value));
        }
    }

    Ok(pairs)
}

// `None` when the value is the zero value for its type
fn query_value(name: &str, value: Value) -> Result<Option<String>> {
    let value = match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()).filter(|_| b),
        Value::Number(n) => Some(n.to_string()).filter(|_| n.as_f64() != Some(0.0)),
        Value::String(s) => Some(s).filter(|s| !s.is_empty()),
        Value::Array(values) => {
            let values = values
                .into_iter()
                .map(|value| list_item(name, value))
                .collect::<Result<Vec<_>>>()?;

            Some(values.join(",")).filter(|_| !values.is_empty())
        }
        Value::Object(_) => return Err(nested(name)),
    };

    Ok(value)
}

fn list_item(name: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Bool(_) | Value::Number(_) => Ok(value.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(nested(name)),
    }
}

fn nested(name: &str) -> Error {
    Error::Options(format!("field `{}` is not a scalar or a list of scalars", name).into())
}

#[cfg(test)]
mod test {
    use super::add_options;
    use crate::client::{Error, PaginationOptions};
    use serde::Serialize;

    #[derive(Debug, Default, Serialize)]
    struct TestOptions {
        name: String,
        count: u64,
        flag: bool,
        state: Option<TestState>,
        labels: Vec<String>,

        #[serde(flatten)]
        pagination_options: PaginationOptions,
    }

    #[derive(Debug, Serialize)]
    #[serde(rename_all = "snake_case")]
    enum TestState {
        AllOpen,
    }

    #[test]
    fn no_options() {
        let path = add_options::<TestOptions>("repos/o/r/contributors", None).unwrap();
        assert_eq!(path, "repos/o/r/contributors");
    }

    #[test]
    fn zero_values_are_skipped() {
        let options = TestOptions::default();

        let path = add_options("user/repos", Some(&options)).unwrap();
        assert_eq!(path, "user/repos");
    }

    #[test]
    fn one_field_per_non_zero_value() {
        let cases = vec![
            (
                TestOptions {
                    name: "octocat".to_owned(),
                    ..Default::default()
                },
                "user/repos?name=octocat",
            ),
            (
                TestOptions {
                    count: 7,
                    ..Default::default()
                },
                "user/repos?count=7",
            ),
            (
                TestOptions {
                    flag: true,
                    ..Default::default()
                },
                "user/repos?flag=true",
            ),
            (
                TestOptions {
                    state: Some(TestState::AllOpen),
                    ..Default::default()
                },
                "user/repos?state=all_open",
            ),
            (
                TestOptions {
                    labels: vec!["bug".to_owned(), "ui".to_owned()],
                    ..Default::default()
                },
                "user/repos?labels=bug%2Cui",
            ),
            (
                TestOptions {
                    pagination_options: PaginationOptions {
                        page: Some(2),
                        per_page: None,
                    },
                    ..Default::default()
                },
                "user/repos?page=2",
            ),
        ];

        for (options, expected) in cases {
            assert_eq!(add_options("user/repos", Some(&options)).unwrap(), expected);
        }
    }

    #[test]
    fn declaration_order_with_flattened_pagination() {
        let options = TestOptions {
            name: "a b&c".to_owned(),
            count: 3,
            flag: true,
            state: None,
            labels: Vec::new(),
            pagination_options: PaginationOptions {
                page: Some(4),
                per_page: Some(100),
            },
        };

        let path = add_options("users/octocat/repos", Some(&options)).unwrap();
        assert_eq!(
            path,
            "users/octocat/repos?name=a+b%26c&count=3&flag=true&page=4&per_page=100"
        );
    }

    #[test]
    fn existing_query_is_kept() {
        let options = PaginationOptions {
            page: None,
            per_page: Some(10),
        };

        let path = add_options("repositories?since=364", Some(&options)).unwrap();
        assert_eq!(path, "repositories?since=364&per_page=10");
    }

    #[test]
    fn nested_values_are_rejected() {
        #[derive(Serialize)]
        struct Nested {
            inner: PaginationOptions,
        }

        let options = Nested {
            inner: PaginationOptions {
                page: Some(1),
                per_page: None,
            },
        };

        match add_options("user/repos", Some(&options)) {
            Err(Error::Options(_)) => {}
            other => panic!("unexpected result {:?}", other),
        }
        match add_options("user/repos", Some(&42)) {
            Err(Error::Options(_)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn malformed_path() {
        let options = PaginationOptions {
            page: Some(1),
            per_page: None,
        };

        match add_options("http://[::1/repos", Some(&options)) {
            Err(Error::Url(_)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }
}
