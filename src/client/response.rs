use super::{Pagination, Rate};
use reqwest::StatusCode;

/// A value returned by the Github API along with the metadata of the response that carried it
#[derive(Debug)]
pub struct Response<T> {
    status: StatusCode,
    pagination: Pagination,
    rate: Rate,
    inner: T,
}

impl<T> Response<T> {
    pub(crate) fn new(status: StatusCode, pagination: Pagination, rate: Rate, inner: T) -> Self {
        Self {
            status,
            pagination,
            rate,
            inner,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn rate(&self) -> &Rate {
        &self.rate
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    pub fn into_parts(self) -> (Pagination, Rate, T) {
        (self.pagination, self.rate, self.inner)
    }

    /// Replace the carried value while keeping the response metadata
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Response<U> {
        Response {
            status: self.status,
            pagination: self.pagination,
            rate: self.rate,
            inner: f(self.inner),
        }
    }
}
