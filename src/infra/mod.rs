pub mod nominatim;
pub mod stormglass;
