use std::fmt;

/// Code of the geographic WGS84 system every rendered geometry is expressed in.
pub const WGS84: &str = "EPSG:4326";

const UTM_ZONES: std::ops::RangeInclusive<u8> = 46..=57;

/// A registered coordinate reference system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Crs {
    /// Geographic WGS84, `[lng, lat]` in degrees.
    Wgs84,
    /// WGS84 / UTM, `[easting, northing]` in metres. EPSG 326zz (north) / 327zz (south).
    Utm { zone: u8, north: bool },
}

impl Crs {
    /// Resolve an `EPSG:XXXXX` code. Only registered systems resolve.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        let (prefix, number) = code.split_once(':')?;
        if !prefix.eq_ignore_ascii_case("EPSG") { return None }
        Self::from_epsg(number.parse().ok()?)
    }

    /// Resolve a numeric EPSG identifier.
    pub fn from_epsg(epsg: u32) -> Option<Self> {
        let crs = match epsg {
            4326 => Crs::Wgs84,
            32601..=32660 => Crs::Utm { zone: (epsg - 32600) as u8, north: true },
            32701..=32760 => Crs::Utm { zone: (epsg - 32700) as u8, north: false },
            _ => return None,
        };
        crs.is_registered().then_some(crs)
    }

    /// Every system the registry knows about.
    pub fn registered() -> impl Iterator<Item = Crs> {
        std::iter::once(Crs::Wgs84)
            .chain(UTM_ZONES.map(|zone| Crs::Utm { zone, north: true }))
            .chain(UTM_ZONES.map(|zone| Crs::Utm { zone, north: false }))
    }

    #[inline]
    pub fn is_registered(&self) -> bool {
        match self {
            Crs::Wgs84 => true,
            Crs::Utm { zone, .. } => UTM_ZONES.contains(zone),
        }
    }

    #[inline]
    pub fn is_geographic(&self) -> bool { matches!(self, Crs::Wgs84) }

    pub fn epsg(&self) -> u32 {
        match *self {
            Crs::Wgs84 => 4326,
            Crs::Utm { zone, north: true } => 32600 + zone as u32,
            Crs::Utm { zone, north: false } => 32700 + zone as u32,
        }
    }

    /// PROJ.4 definition string used to build the projection.
    pub fn proj4(&self) -> String {
        match *self {
            Crs::Wgs84 => "+proj=longlat +datum=WGS84 +no_defs".to_string(),
            Crs::Utm { zone, north } => {
                let south = if north { "" } else { " +south" };
                format!("+proj=utm +zone={zone}{south} +datum=WGS84 +units=m +no_defs")
            }
        }
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.epsg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_registered_codes() {
        assert_eq!(Crs::from_code("EPSG:4326"), Some(Crs::Wgs84));
        assert_eq!(Crs::from_code("EPSG:32652"), Some(Crs::Utm { zone: 52, north: true }));
        assert_eq!(Crs::from_code("epsg:32750"), Some(Crs::Utm { zone: 50, north: false }));
    }

    #[test]
    fn rejects_unregistered_codes() {
        assert_eq!(Crs::from_code("EPSG:32633"), None); // zone 33 is outside 46-57
        assert_eq!(Crs::from_code("EPSG:3857"), None);
        assert_eq!(Crs::from_code("32652"), None);
        assert_eq!(Crs::from_code("EPSG:abc"), None);
    }

    #[test]
    fn registry_covers_both_hemispheres() {
        let all: Vec<Crs> = Crs::registered().collect();
        assert_eq!(all.len(), 1 + 12 * 2);
        assert!(all.iter().all(|crs| Crs::from_code(&crs.to_string()) == Some(*crs)));
    }

    #[test]
    fn proj4_strings() {
        assert_eq!(
            Crs::Utm { zone: 52, north: false }.proj4(),
            "+proj=utm +zone=52 +south +datum=WGS84 +units=m +no_defs"
        );
        assert!(Crs::Wgs84.proj4().starts_with("+proj=longlat"));
    }
}
