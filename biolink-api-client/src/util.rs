use reqwest::Response;
use serde::Deserialize;

use crate::Error;

pub(crate) trait ResponseExt {
    /// Checks the status code and decodes the body as JSON.
    async fn decode_json<T: for<'de> Deserialize<'de>>(self) -> Result<T, Error>;
}

impl ResponseExt for Response {
    async fn decode_json<T: for<'de> Deserialize<'de>>(self) -> Result<T, Error> {
        let status_code = self.status();
        let url = self.url().clone();

        if !status_code.is_success() {
            return Err(Error::Status { url, status_code });
        }

        let body = self.bytes().await?;
        serde_json::from_slice(&body).map_err(|error| Error::Decode { url, error })
    }
}
