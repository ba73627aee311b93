use std::pin::pin;

use biolink_api_protocol::{
    Link,
    Profile,
    API_PREFIX,
    LINKS_PATH,
    PROFILE_PATH,
};
use biolink_util::cancel::Canceled;
use futures_util::future::{
    self,
    Either,
};
use serde::Deserialize;
use url::Url;

use crate::{
    util::ResponseExt,
    Error,
};

/// Everything the bio page shows, fetched in one go.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub profile: Profile,
    pub links: Vec<Link>,
}

/// Read-only client for the bio-link API.
///
/// The client holds no state besides the connection pool, so it is cheap to
/// clone and [`Client::load`] may be called any number of times.
#[derive(Clone, Debug)]
pub struct Client {
    client: reqwest::Client,
    api_url: UrlBuilder,
}

impl Client {
    pub fn new(base_url: Url) -> Result<Self, Error> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: Url) -> Result<Self, Error> {
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl { url: base_url });
        }

        Ok(Self {
            client,
            api_url: UrlBuilder { url: base_url }.push(API_PREFIX),
        })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url.url
    }

    async fn get<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, Error> {
        let url = self.api_url.clone().push(path).finish();
        tracing::debug!(%url, "GET");
        self.client.get(url).send().await?.decode_json().await
    }

    /// `GET /api/profile`
    pub async fn profile(&self) -> Result<Profile, Error> {
        self.get(PROFILE_PATH).await
    }

    /// `GET /api/links`
    pub async fn links(&self) -> Result<Vec<Link>, Error> {
        self.get(LINKS_PATH).await
    }

    /// Fetches profile and links concurrently.
    ///
    /// Both requests have to succeed. If either fails, the other one is
    /// dropped and the first error is returned.
    pub async fn load(&self) -> Result<Snapshot, Error> {
        let (profile, links) = future::try_join(self.profile(), self.links()).await?;
        tracing::debug!(links = links.len(), "loaded");
        Ok(Snapshot { profile, links })
    }

    /// Like [`Client::load`], but gives up as soon as `canceled` fires.
    ///
    /// Returns `None` if the load was canceled.
    pub async fn load_until(&self, mut canceled: Canceled) -> Option<Result<Snapshot, Error>> {
        if canceled.is_canceled() {
            return None;
        }

        let load = pin!(self.load());
        let cancel = pin!(canceled.wait());

        match future::select(load, cancel).await {
            Either::Left((result, _)) => Some(result),
            Either::Right(((), _)) => {
                tracing::debug!("load canceled");
                None
            }
        }
    }
}

#[derive(Clone, Debug)]
struct UrlBuilder {
    url: Url,
}

impl UrlBuilder {
    fn push(mut self, segment: &str) -> Self {
        // `Client::with_client` rejects URLs that can't be a base, so this
        // always succeeds.
        if let Ok(mut segments) = self.url.path_segments_mut() {
            segments.pop_if_empty().push(segment);
        }
        self
    }

    fn finish(self) -> Url {
        self.url
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::Client;
    use crate::Error;

    fn api_url(base_url: &str) -> String {
        Client::new(base_url.parse().unwrap())
            .unwrap()
            .api_url()
            .to_string()
    }

    #[test]
    fn it_appends_the_api_prefix() {
        assert_eq!(api_url("https://bio.example.com"), "https://bio.example.com/api");
        assert_eq!(api_url("https://bio.example.com/"), "https://bio.example.com/api");
    }

    #[test]
    fn it_keeps_the_base_path() {
        assert_eq!(
            api_url("https://example.com/jane/"),
            "https://example.com/jane/api"
        );
        assert_eq!(
            api_url("http://localhost:8001/jane"),
            "http://localhost:8001/jane/api"
        );
    }

    #[test]
    fn it_rejects_urls_without_a_path() {
        let url: Url = "mailto:jane@example.com".parse().unwrap();
        assert!(matches!(
            Client::new(url),
            Err(Error::InvalidBaseUrl { .. })
        ));
    }
}
