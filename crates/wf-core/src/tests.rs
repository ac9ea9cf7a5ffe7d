//! Unit tests for wf-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, LocationId};

    #[test]
    fn index_roundtrip() {
        let id = LocationId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(LocationId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(LocationId(0) < LocationId(1));
        assert!(EdgeId(100) > EdgeId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(LocationId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(LocationId(7).to_string(), "LocationId(7)");
    }
}

#[cfg(test)]
mod point {
    use crate::MapPoint;

    #[test]
    fn zero_distance() {
        let p = MapPoint::new(2070, 2995);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_triple() {
        let a = MapPoint::new(0, 0);
        let b = MapPoint::new(3, 4);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn negative_coordinates() {
        let a = MapPoint::new(-10, -10);
        let b = MapPoint::new(-10, 90);
        assert_eq!(a.distance(b), 100.0);
    }

    #[test]
    fn display() {
        assert_eq!(MapPoint::new(370, 2180).to_string(), "(370, 2180)");
    }
}
