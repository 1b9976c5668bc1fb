use crate::api::nato_code::NatoCode;

/// Map services a decoded location can be opened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapProvider {
    Google,
    Apple,
    Waze,
}

/// Link that opens a point in the given map service.
pub fn map_url(provider: MapProvider, latitude: f64, longitude: f64) -> String {
    match provider {
        MapProvider::Google => format!("https://maps.google.com/?q={},{}", latitude, longitude),
        MapProvider::Apple => format!("https://maps.apple.com/?q={},{}", latitude, longitude),
        MapProvider::Waze => format!("https://waze.com/ul?ll={},{}", latitude, longitude),
    }
}

impl NatoCode {
    /// Link to the centre of this code's cell in a map service.
    pub fn map_url(&self, provider: MapProvider) -> String {
        let center = self.center();
        map_url(provider, center.y(), center.x())
    }

    /// Shareable link carrying the short code as the `c` query parameter.
    ///
    /// ```
    /// use nato_grid::{NatoCode, NatoConfig};
    ///
    /// let code = NatoCode::from_lat_lon(52.1677, 22.2903, &NatoConfig::default());
    /// assert_eq!(
    ///     code.share_url("https://example.org/grid/"),
    ///     "https://example.org/grid/?c=NVSOXLGAMVLD"
    /// );
    /// ```
    pub fn share_url(&self, base_url: &str) -> String {
        format!("{}?c={}", base_url, self.short_code())
    }
}

/// Pulls the short code out of a share link produced by [`NatoCode::share_url`].
pub fn short_code_from_share_url(url: &str) -> Option<&str> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "c")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::NatoConfig;
    use crate::util::error::NatoGridError;

    #[test]
    fn test_map_urls() {
        assert_eq!(
            map_url(MapProvider::Google, 52.5, 19.25),
            "https://maps.google.com/?q=52.5,19.25"
        );
        assert_eq!(
            map_url(MapProvider::Apple, 52.5, 19.25),
            "https://maps.apple.com/?q=52.5,19.25"
        );
        assert_eq!(
            map_url(MapProvider::Waze, 52.5, 19.25),
            "https://waze.com/ul?ll=52.5,19.25"
        );
    }

    #[test]
    fn test_code_map_url_uses_cell_center() {
        let code = NatoCode::from_lat_lon(52.1677, 22.2903, &NatoConfig::default());
        let url = code.map_url(MapProvider::Google);
        let center = code.center();
        assert_eq!(
            url,
            format!("https://maps.google.com/?q={},{}", center.y(), center.x())
        );
        assert!((center.y() - 52.1677).abs() < 1e-6);
    }

    #[test]
    fn test_share_url_roundtrip() -> Result<(), NatoGridError> {
        let config = NatoConfig::default();
        let code = NatoCode::from_lat_lon(50.0647, 19.9450, &config);
        let url = code.share_url("https://example.org/");

        let short = short_code_from_share_url(&url).ok_or_else(|| {
            NatoGridError::InvalidConfiguration("no code in share url".to_string())
        })?;
        assert_eq!(NatoCode::parse(short, &config)?, code);
        Ok(())
    }

    #[test]
    fn test_short_code_from_share_url_edge_cases() {
        assert_eq!(
            short_code_from_share_url("https://x.org/?lang=pl&c=ABCD#map"),
            Some("ABCD")
        );
        assert_eq!(short_code_from_share_url("https://x.org/"), None);
        assert_eq!(short_code_from_share_url("https://x.org/?c="), None);
    }
}
