// OAuth 1.0 request signing.
//
// Two-legged flow: the request is signed with the consumer credentials
// only, no access token. The HMAC-SHA1 signature covers the method, the
// URL, and the normalized request parameters, so a signed request cannot
// be replayed against a different endpoint or body.

use std::collections::BTreeMap;

use oauth1_request::{HMAC_SHA1, ParameterList};
use reqwest::Method;
use secrecy::ExposeSecret;
use url::Url;

use crate::client::Credentials;

/// Produce the `Authorization` header value for a request.
pub(crate) fn authorization_header(
    method: &Method,
    url: &Url,
    params: &BTreeMap<String, String>,
    credentials: &Credentials,
) -> String {
    let consumer = oauth1_request::Credentials::new(
        credentials.key(),
        credentials.secret().expose_secret(),
    );
    let request = ParameterList::new(
        params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect::<Vec<_>>(),
    );

    let mut builder = oauth1_request::Builder::<_, _, &str>::new(consumer, HMAC_SHA1);
    if *method == Method::POST {
        builder.post(url, &request)
    } else {
        builder.get(url, &request)
    }
}
