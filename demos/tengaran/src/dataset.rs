//! Static dataset: 20 points of interest around Tengaran, Central Java,
//! digitized in raw map units (1 unit = 1 m).

use wf_spatial::{Location, LocationSet};

pub fn location_set() -> LocationSet {
    LocationSet::from_locations(vec![
        Location::new(2070, 2995, "Pesantren Islam Al Irsyad"),
        Location::new(1810, 3400, "Penginapan Ummu Yasmin"),
        Location::new(575, 2525, "Raff Kos"),
        Location::new(370, 2180, "GCC Makmur Indonesia Project"),
        Location::new(1625, 1755, "Pesantren Islam Al Irsyad Putri"),
        Location::new(3095, 1720, "Penginapan Walisantri AMMA"),
        Location::new(2515, 685, "Lapangan Desa Butuh"),
        Location::new(3915, 390, "Geral Samsat Tengaran"),
        Location::new(3860, 730, "SPBU PERTAMINA Butuh"),
        Location::new(4470, 575, "Joglo Kebon Ndhelik"),
        Location::new(5780, 1285, "Lapangan Karang Duren"),
        Location::new(6650, 1775, "Kezia Grosir Ikan Hias Murah"),
        Location::new(4505, 1665, "Ponpes Nurul Islam Tengaran"),
        Location::new(4620, 2170, "PT Japfa Comfeed Indonesia"),
        Location::new(5080, 2450, "Amelia House"),
        Location::new(5790, 3325, "Musholla Arrahman"),
        Location::new(5400, 3565, "Iguana Kos"),
        Location::new(3630, 3555, "Rocket Chicken Tengaran"),
        Location::new(3825, 2385, "SPBU PERTAMINA Klero"),
        Location::new(2910, 2745, "Masjid Sabilul Khairat"),
    ])
}
