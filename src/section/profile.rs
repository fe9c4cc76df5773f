use sectgeom::{geodesic_distance_meters, interpolate};
use serde::Serialize;

use super::{SectionError, SectionLine};
use crate::elevation::ElevationIndex;

/// Sampling and interpolation settings for the terrain profile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileOptions {
    /// Number of equally spaced samples, endpoints included.
    pub samples: usize,
    /// Search radius around each sample, in degrees.
    pub search_radius: f64,
    /// IDW exponent.
    pub power: f64,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self { samples: 100, search_radius: 0.001, power: 2.0 }
    }
}

/// One terrain sample along the line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileSample {
    pub point: [f64; 2],
    /// Position along the line in `[0, 1]`.
    pub fraction: f64,
    /// Geodesic metres from the line start.
    pub distance: f64,
    /// `None` where no survey point is within the search radius.
    pub elevation: Option<f64>,
}

/// Sample the terrain along `line` by inverse-distance weighting over `index`.
pub fn elevation_profile(
    index: &ElevationIndex,
    line: &SectionLine,
    options: &ProfileOptions,
) -> Result<Vec<ProfileSample>, SectionError> {
    if options.samples < 2 { return Err(SectionError::InvalidSampleCount(options.samples)) }

    let last = (options.samples - 1) as f64;
    let profile = (0..options.samples)
        .map(|i| {
            let fraction = i as f64 / last;
            let point = interpolate(line.start, line.end, fraction);
            ProfileSample {
                point: point.into(),
                fraction,
                distance: geodesic_distance_meters(line.start, point),
                elevation: index.interpolate(point.into(), options.search_radius, options.power),
            }
        })
        .collect();

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elevation::ElevationPoint;

    #[test]
    fn samples_include_both_endpoints() {
        let index = ElevationIndex::new(&[
            ElevationPoint::new(0.0, 0.0, 10.0),
            ElevationPoint::new(0.01, 0.0, 20.0),
        ]);
        let line = SectionLine::new([0.0, 0.0], [0.01, 0.0]).unwrap();
        let options = ProfileOptions { samples: 5, ..Default::default() };

        let profile = elevation_profile(&index, &line, &options).unwrap();
        assert_eq!(profile.len(), 5);
        assert_eq!(profile[0].point, [0.0, 0.0]);
        assert_eq!(profile[4].point, [0.01, 0.0]);
        assert_eq!(profile[0].elevation, Some(10.0));
        assert_eq!(profile[4].elevation, Some(20.0));
        // the middle sample is 0.005 from both survey points
        assert_eq!(profile[2].elevation, None);
        assert_eq!(profile[2].fraction, 0.5);
        assert!(profile.windows(2).all(|w| w[0].distance < w[1].distance));
    }

    #[test]
    fn rejects_single_sample() {
        let index = ElevationIndex::new(&[]);
        let line = SectionLine::new([0.0, 0.0], [1.0, 0.0]).unwrap();
        let options = ProfileOptions { samples: 1, ..Default::default() };
        assert_eq!(elevation_profile(&index, &line, &options), Err(SectionError::InvalidSampleCount(1)));
    }
}
