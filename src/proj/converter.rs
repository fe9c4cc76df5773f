use ahash::AHashMap;
use proj4rs::{proj::Proj as Proj4, transform::transform};

use super::cache::{CacheKey, ConversionCache};
use super::{Crs, ProjError};

/// Default bound on cached conversions.
pub const DEFAULT_CACHE_CAPACITY: usize = 5000;

/// Converts coordinate pairs between registered systems, caching results.
///
/// The converter owns its cache; callers share one instance by passing
/// `&mut Converter` down. It is not meant to be shared across threads.
pub struct Converter {
    projections: AHashMap<Crs, Proj4>,
    cache: ConversionCache,
}

impl Converter {
    /// Build every registered projection with the default cache bound.
    pub fn new() -> Result<Self, ProjError> {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Build every registered projection, caching at most `capacity` conversions.
    pub fn with_capacity(capacity: usize) -> Result<Self, ProjError> {
        let projections = Crs::registered()
            .map(|crs| {
                let proj = Proj4::from_proj_string(&crs.proj4())
                    .map_err(|e| ProjError::InvalidDefinition { code: crs.to_string(), reason: e.to_string() })?;
                Ok((crs, proj))
            })
            .collect::<Result<_, ProjError>>()?;

        Ok(Self { projections, cache: ConversionCache::new(capacity) })
    }

    /// Convert `point` from `from` to `to`.
    ///
    /// Identical codes return the input untouched. Unknown codes and failed
    /// transforms are logged and also return the input untouched, so a bad
    /// projection never aborts a render. Use [`Converter::try_convert`] to
    /// see the error instead.
    pub fn convert(&mut self, point: [f64; 2], from: &str, to: &str) -> [f64; 2] {
        self.try_convert(point, from, to).unwrap_or_else(|e| {
            log::error!("[proj::convert] {e}");
            point
        })
    }

    /// Convert `point` from `from` to `to`, reporting unknown codes and
    /// transform failures.
    pub fn try_convert(&mut self, point: [f64; 2], from: &str, to: &str) -> Result<[f64; 2], ProjError> {
        if from == to { return Ok(point) }

        let source = Crs::from_code(from).ok_or_else(|| ProjError::UnknownProjection(from.to_string()))?;
        let target = Crs::from_code(to).ok_or_else(|| ProjError::UnknownProjection(to.to_string()))?;
        self.convert_crs(point, source, target)
    }

    /// Convert between already resolved systems.
    pub fn convert_crs(&mut self, point: [f64; 2], source: Crs, target: Crs) -> Result<[f64; 2], ProjError> {
        if source == target { return Ok(point) }

        let key = CacheKey::new(source, target, point);
        if let Some(hit) = self.cache.get(&key) { return Ok(hit) }

        let converted = self.transform(point, source, target)?;
        self.cache.insert(key, converted);
        Ok(converted)
    }

    /// Convert every point, element-wise, with the fail-soft semantics of [`Converter::convert`].
    pub fn convert_many(&mut self, points: &[[f64; 2]], from: &str, to: &str) -> Vec<[f64; 2]> {
        points.iter().map(|&point| self.convert(point, from, to)).collect()
    }

    /// Shorthand for converting into WGS84 `[lng, lat]`.
    #[inline]
    pub fn to_wgs84(&mut self, point: [f64; 2], from: &str) -> [f64; 2] {
        self.convert(point, from, super::WGS84)
    }

    /// Number of cached conversions.
    #[inline] pub fn cache_len(&self) -> usize { self.cache.len() }

    /// Drop every cached conversion.
    pub fn clear_cache(&mut self) { self.cache.clear() }

    /// Run the projection math. Geographic systems take and give degrees;
    /// proj4rs works in radians for them.
    fn transform(&self, point: [f64; 2], source: Crs, target: Crs) -> Result<[f64; 2], ProjError> {
        let failure = |reason: String| ProjError::Transform {
            from: source.to_string(), to: target.to_string(), x: point[0], y: point[1], reason,
        };

        let (from, to) = match (self.projections.get(&source), self.projections.get(&target)) {
            (Some(from), Some(to)) => (from, to),
            _ => return Err(failure("projection not built".to_string())),
        };

        let mut coords = if source.is_geographic() {
            (point[0].to_radians(), point[1].to_radians(), 0.0)
        } else {
            (point[0], point[1], 0.0)
        };
        transform(from, to, &mut coords).map_err(|e| failure(e.to_string()))?;

        let out = if target.is_geographic() {
            [coords.0.to_degrees(), coords.1.to_degrees()]
        } else {
            [coords.0, coords.1]
        };

        if out[0].is_finite() && out[1].is_finite() { Ok(out) }
        else { Err(failure("non-finite result".to_string())) }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::proj::WGS84;

    #[test]
    fn identity_for_same_code() {
        let mut converter = Converter::new().unwrap();
        let p = [129.123456789, -9.87654321];
        assert_eq!(converter.convert(p, WGS84, WGS84), p);
        assert_eq!(converter.convert(p, "EPSG:32652", "EPSG:32652"), p);
        assert_eq!(converter.cache_len(), 0);
    }

    #[test]
    fn unknown_code_is_fail_soft() {
        let mut converter = Converter::new().unwrap();
        let p = [500000.0, 9000000.0];
        assert_eq!(converter.convert(p, "EPSG:9999", WGS84), p);
        assert_eq!(
            converter.try_convert(p, "EPSG:9999", WGS84),
            Err(ProjError::UnknownProjection("EPSG:9999".to_string()))
        );
    }

    #[test]
    fn central_meridian_on_equator() {
        let mut converter = Converter::new().unwrap();
        // Zone 52 central meridian is 129E.
        let north = converter.convert([500000.0, 0.0], "EPSG:32652", WGS84);
        assert_abs_diff_eq!(north[0], 129.0, epsilon = 1e-7);
        assert_abs_diff_eq!(north[1], 0.0, epsilon = 1e-7);

        // Southern zones use a 10,000 km false northing.
        let south = converter.convert([500000.0, 10_000_000.0], "EPSG:32752", WGS84);
        assert_abs_diff_eq!(south[0], 129.0, epsilon = 1e-7);
        assert_abs_diff_eq!(south[1], 0.0, epsilon = 1e-7);
    }

    #[test]
    fn utm_round_trip() {
        let mut converter = Converter::new().unwrap();
        let utm = [512345.67, 9123456.78];
        let geo = converter.convert(utm, "EPSG:32752", WGS84);
        let back = converter.convert(geo, WGS84, "EPSG:32752");
        assert_abs_diff_eq!(back[0], utm[0], epsilon = 1e-3);
        assert_abs_diff_eq!(back[1], utm[1], epsilon = 1e-3);
    }

    #[test]
    fn cache_hit_equals_miss() {
        let mut converter = Converter::new().unwrap();
        let p = [500123.456, 9001234.567];
        let first = converter.convert(p, "EPSG:32652", WGS84);
        assert_eq!(converter.cache_len(), 1);
        let second = converter.convert(p, "EPSG:32652", WGS84);
        assert_eq!(converter.cache_len(), 1);
        assert_eq!(first[0].to_bits(), second[0].to_bits());
        assert_eq!(first[1].to_bits(), second[1].to_bits());
    }

    #[test]
    fn cache_is_bounded() {
        let mut converter = Converter::with_capacity(10).unwrap();
        for i in 0..25 {
            converter.convert([500000.0 + i as f64, 9000000.0], "EPSG:32652", WGS84);
        }
        assert!(converter.cache_len() <= 10);
        converter.clear_cache();
        assert_eq!(converter.cache_len(), 0);
    }

    #[test]
    fn batch_is_element_wise() {
        let mut converter = Converter::new().unwrap();
        let points = [[500000.0, 0.0], [500000.0, 100.0]];
        let batch = converter.convert_many(&points, "EPSG:32652", WGS84);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0], converter.convert(points[0], "EPSG:32652", WGS84));
        assert_eq!(batch[1], converter.convert(points[1], "EPSG:32652", WGS84));
    }
}
