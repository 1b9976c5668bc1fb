use crate::core::constants::POLAND_EXTENTS;
use crate::util::error::NatoGridError;
use geo_types::{Point, Rect, coord};
use serde::{Deserialize, Serialize};

/// Geographic rectangle that codes are laid out over.
///
/// Latitude and longitude are in decimal degrees. Construction guarantees finite values
/// with `min < max` on both axes, so normalisation never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct BoundingBox {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

/// Unvalidated extents as they appear in configuration files.
#[derive(Serialize, Deserialize)]
pub(crate) struct RawBounds {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl BoundingBox {
    /// Bounding box of Poland, the default deployment region.
    pub const POLAND: BoundingBox = BoundingBox {
        min_lat: POLAND_EXTENTS[0],
        max_lat: POLAND_EXTENTS[1],
        min_lon: POLAND_EXTENTS[2],
        max_lon: POLAND_EXTENTS[3],
    };

    /// Creates a validated bounding box.
    ///
    /// # Example
    /// ```
    /// use nato_grid::BoundingBox;
    ///
    /// # fn main() -> Result<(), nato_grid::NatoGridError> {
    /// let uk = BoundingBox::new(49.8, 60.9, -8.7, 1.8)?;
    /// assert!(uk.contains(51.5, -0.1));
    /// assert!(BoundingBox::new(55.0, 49.0, 14.0, 24.0).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    ) -> Result<Self, NatoGridError> {
        if ![min_lat, max_lat, min_lon, max_lon]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(NatoGridError::InvalidConfiguration(
                "Bounding box values must be finite".to_string(),
            ));
        }
        if min_lat >= max_lat {
            return Err(NatoGridError::InvalidConfiguration(format!(
                "min_lat ({}) must be less than max_lat ({})",
                min_lat, max_lat
            )));
        }
        if min_lon >= max_lon {
            return Err(NatoGridError::InvalidConfiguration(format!(
                "min_lon ({}) must be less than max_lon ({})",
                min_lon, max_lon
            )));
        }

        Ok(Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        })
    }

    /// Creates a bounding box from a `geo_types::Rect` (x = longitude, y = latitude).
    pub fn from_rect(rect: &Rect<f64>) -> Result<Self, NatoGridError> {
        Self::new(rect.min().y, rect.max().y, rect.min().x, rect.max().x)
    }

    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    pub fn min_lon(&self) -> f64 {
        self.min_lon
    }

    pub fn max_lon(&self) -> f64 {
        self.max_lon
    }

    /// Extent of the box in degrees of latitude.
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Extent of the box in degrees of longitude.
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Returns true if the point lies inside the box, edges included.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.min_lat
            && latitude <= self.max_lat
            && longitude >= self.min_lon
            && longitude <= self.max_lon
    }

    /// Rescales a coordinate to fractions of the box, `[0, 1]` for points inside it.
    ///
    /// Points outside the box give fractions outside `[0, 1]`; no clamping happens here.
    pub fn normalize(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        (
            (latitude - self.min_lat) / self.lat_span(),
            (longitude - self.min_lon) / self.lon_span(),
        )
    }

    /// Inverse of [`BoundingBox::normalize`].
    pub fn denormalize(&self, norm_lat: f64, norm_lon: f64) -> (f64, f64) {
        (
            self.min_lat + norm_lat * self.lat_span(),
            self.min_lon + norm_lon * self.lon_span(),
        )
    }

    /// Centre of the box as a point (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        self.to_rect().center().into()
    }

    /// Converts to a `geo_types::Rect` (x = longitude, y = latitude).
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min_lon, y: self.min_lat },
            coord! { x: self.max_lon, y: self.max_lat },
        )
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::POLAND
    }
}

impl TryFrom<RawBounds> for BoundingBox {
    type Error = NatoGridError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Self::new(raw.min_lat, raw.max_lat, raw.min_lon, raw.max_lon)
    }
}

impl From<BoundingBox> for RawBounds {
    fn from(bounds: BoundingBox) -> Self {
        Self {
            min_lat: bounds.min_lat,
            max_lat: bounds.max_lat,
            min_lon: bounds.min_lon,
            max_lon: bounds.max_lon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poland_bounds() {
        let bounds = BoundingBox::default();
        assert_eq!(bounds.min_lat(), 49.0);
        assert_eq!(bounds.max_lat(), 55.0);
        assert_eq!(bounds.min_lon(), 14.0);
        assert_eq!(bounds.max_lon(), 24.0);
        assert_eq!(bounds.lat_span(), 6.0);
        assert_eq!(bounds.lon_span(), 10.0);
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(matches!(
            BoundingBox::new(55.0, 49.0, 14.0, 24.0),
            Err(NatoGridError::InvalidConfiguration(_))
        ));
        assert!(BoundingBox::new(49.0, 49.0, 14.0, 24.0).is_err());
        assert!(BoundingBox::new(49.0, 55.0, 24.0, 14.0).is_err());
        assert!(BoundingBox::new(f64::NAN, 55.0, 14.0, 24.0).is_err());
        assert!(BoundingBox::new(49.0, f64::INFINITY, 14.0, 24.0).is_err());
    }

    #[test]
    fn test_contains_edges() {
        let bounds = BoundingBox::POLAND;
        assert!(bounds.contains(49.0, 14.0));
        assert!(bounds.contains(55.0, 24.0));
        assert!(bounds.contains(52.1677, 22.2903));
        assert!(!bounds.contains(48.99, 20.0));
        assert!(!bounds.contains(52.0, 24.01));
    }

    #[test]
    fn test_normalize_and_back() {
        let bounds = BoundingBox::POLAND;
        let (nlat, nlon) = bounds.normalize(52.0, 19.0);
        assert!((nlat - 0.5).abs() < 1e-12);
        assert!((nlon - 0.5).abs() < 1e-12);

        let (lat, lon) = bounds.denormalize(nlat, nlon);
        assert!((lat - 52.0).abs() < 1e-12);
        assert!((lon - 19.0).abs() < 1e-12);
    }

    #[test]
    fn test_rect_conversion() -> Result<(), NatoGridError> {
        let rect = BoundingBox::POLAND.to_rect();
        assert_eq!(rect.min().x, 14.0);
        assert_eq!(rect.min().y, 49.0);

        let back = BoundingBox::from_rect(&rect)?;
        assert_eq!(back, BoundingBox::POLAND);

        let center = back.center();
        assert_eq!(center.x(), 19.0);
        assert_eq!(center.y(), 52.0);
        Ok(())
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Result<BoundingBox, _> = serde_json::from_str(
            r#"{"min_lat":49.0,"max_lat":55.0,"min_lon":14.0,"max_lon":24.0}"#,
        );
        assert_eq!(ok.ok(), Some(BoundingBox::POLAND));

        let bad: Result<BoundingBox, _> = serde_json::from_str(
            r#"{"min_lat":55.0,"max_lat":49.0,"min_lon":14.0,"max_lon":24.0}"#,
        );
        assert!(bad.is_err());
    }
}
