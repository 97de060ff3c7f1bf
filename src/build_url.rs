use crate::error::Error;
use url::Url;

/// How a request url is derived from the configured base url.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BuildUrlOptions {
    /// Clear any query string carried by the base url.
    pub clear_query: bool,
    /// Clear any fragment (`#...`) carried by the base url.
    pub clear_fragment: bool,
    /// Drop a trailing empty path segment (`https://host/`) before appending.
    pub pop_if_empty: bool,
}

impl BuildUrlOptions {
    /// Used for every admin and OIDC request url.
    pub const REQUEST: Self = Self {
        clear_query: true,
        clear_fragment: true,
        pop_if_empty: true,
    };
}

/// Appends percent-encoded path segments to `base_url`.
pub(crate) fn build_url(
    base_url: &Url,
    segments: &[&str],
    options: BuildUrlOptions,
) -> Result<Url, Error> {
    let mut url = base_url.clone();
    if options.clear_query {
        url.set_query(None);
    }
    if options.clear_fragment {
        url.set_fragment(None);
    }
    {
        let mut path_segments = url
            .path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl(base_url.to_string()))?;
        if options.pop_if_empty {
            path_segments.pop_if_empty();
        }
        for segment in segments {
            path_segments.push(segment);
        }
    }
    Ok(url)
}
