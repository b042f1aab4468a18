// Pure navigation logic - no host or webview imports allowed.
// Turns whatever the user typed into the address bar into a URL to load.

use url::Url;

use crate::settings::SearchEngine;

/// Resolve address-bar input into a navigable URL.
///
/// 1. Input that already parses as an absolute URL is returned as-is.
/// 2. Input containing a `.` that parses once `http://` is prepended is
///    treated as a bare domain (`example.com` -> `http://example.com/`).
/// 3. Everything else becomes a search with `engine`.
///
/// Never fails. Anything with whitespace in the would-be host is rejected by
/// the URL parser in step 2 and therefore lands in search, so `1.5 kg to lb`
/// is a query and not a domain.
///
/// This is purely local string work: no DNS lookups, no reachability checks,
/// nothing leaves the process until the webview loads the result.
pub fn resolve(input: &str, engine: &SearchEngine) -> Url {
    if let Ok(url) = Url::parse(input) {
        return url;
    }

    if input.contains('.') {
        if let Ok(url) = Url::parse(&format!("http://{}", input)) {
            return url;
        }
    }

    search_url(input, engine)
}

/// Build the search URL for `query`. Falls back to DuckDuckGo when the
/// engine's `href` is not itself a valid URL.
pub fn search_url(query: &str, engine: &SearchEngine) -> Url {
    let (mut url, param) = match Url::parse(&engine.href) {
        Ok(url) => (url, engine.query.as_str()),
        Err(e) => {
            log::warn!(
                "[Navigation] Search engine '{}' has invalid href {:?}: {}",
                engine.name,
                engine.href,
                e
            );
            let fallback = SearchEngine::duckduckgo();
            let url = Url::parse(&fallback.href).expect("built-in search engine href is valid");
            (url, "q")
        }
    };

    set_query_param(&mut url, param, query);
    url
}

/// Set `name=value` in the query string: the first existing `name` pair is
/// replaced in place and later duplicates dropped, otherwise the pair is
/// appended. Serialized as `application/x-www-form-urlencoded`.
fn set_query_param(url: &mut Url, name: &str, value: &str) {
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

    let mut replaced = false;
    pairs.retain_mut(|(k, v)| {
        if k.as_str() != name {
            return true;
        }
        if replaced {
            return false;
        }
        *v = value.to_string();
        replaced = true;
        true
    });
    if !replaced {
        pairs.push((name.to_string(), value.to_string()));
    }

    url.query_pairs_mut().clear().extend_pairs(pairs);
}
