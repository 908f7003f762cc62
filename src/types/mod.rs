pub mod district;
pub mod lat_lon;
pub mod station_reading;
pub mod temperature_band;
