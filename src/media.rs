//! Media-embedding collaborator: turns "watch" style video URLs into
//! embeddable references. The rest of the crate only stores and forwards
//! whatever this returns.

use url::Url;

/// Convert a `.../watch?v=ID` URL into its `/embed/ID` form.
///
/// Any input that does not parse as a URL, or that carries no `v` query
/// parameter, is returned unchanged. This never fails.
pub fn embed_from_watch(raw: &str) -> String {
    let Ok(parsed) = Url::parse(raw) else {
        return raw.to_string();
    };

    let video_id = parsed
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned());

    match video_id {
        Some(id) if !id.is_empty() => {
            let host = parsed.host_str().unwrap_or("www.youtube.com");
            format!("{}://{}/embed/{}", parsed.scheme(), host, id)
        }
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url_converts_to_embed() {
        assert_eq!(
            embed_from_watch("https://www.youtube.com/watch?v=z82mretFcss"),
            "https://www.youtube.com/embed/z82mretFcss"
        );
    }

    #[test]
    fn test_extra_query_params_ignored() {
        assert_eq!(
            embed_from_watch("https://www.youtube.com/watch?t=42&v=abc123"),
            "https://www.youtube.com/embed/abc123"
        );
    }

    #[test]
    fn test_missing_v_param_falls_back_to_input() {
        let raw = "https://www.youtube.com/watch?list=PLx";
        assert_eq!(embed_from_watch(raw), raw);
    }

    #[test]
    fn test_unparsable_input_falls_back_to_input() {
        assert_eq!(embed_from_watch("not a url"), "not a url");
        assert_eq!(embed_from_watch(""), "");
    }

    #[test]
    fn test_already_embedded_url_passes_through() {
        let embed = "https://www.youtube.com/embed/z82mretFcss";
        assert_eq!(embed_from_watch(embed), embed);
    }
}
