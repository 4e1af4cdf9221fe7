use log::trace;
use url::Url;

use crate::{Query, QueryStore, StoreError};

/// Store backed by the query string of a [`Url`]
///
/// Keys and values are form-urlencoded. When a key repeats in the incoming
/// URL the last value wins, since the store is flat.
#[derive(Debug, Clone)]
pub struct UrlQueryStore {
    url: Url,
    query: Query,
    revision: u64,
}

impl UrlQueryStore {
    pub fn parse(input: &str) -> Result<Self, StoreError> {
        Ok(Self::from_url(Url::parse(input)?))
    }

    pub fn from_url(url: Url) -> Self {
        let query = decode_query(&url);
        Self {
            url,
            query,
            revision: 0,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The shareable URL, including the synced query string
    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    /// Follows a link, relative to the current URL. Counts as an external
    /// change of the store.
    pub fn navigate(&mut self, input: &str) -> Result<(), StoreError> {
        let url = self.url.join(input)?;
        self.query = decode_query(&url);
        self.url = url;
        self.revision += 1;
        trace!("UrlQueryStore::navigate({})", self.url);
        Ok(())
    }
}

impl QueryStore for UrlQueryStore {
    fn current(&self) -> &Query {
        &self.query
    }

    fn replace(&mut self, query: Query) -> Result<(), StoreError> {
        if query == self.query {
            return Ok(());
        }

        if query.is_empty() {
            self.url.set_query(None);
        } else {
            self.url
                .query_pairs_mut()
                .clear()
                .extend_pairs(query.iter());
        }

        self.query = query;
        self.revision += 1;
        trace!("UrlQueryStore::replace({})", self.url);
        Ok(())
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}

fn decode_query(url: &Url) -> Query {
    url.query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}
