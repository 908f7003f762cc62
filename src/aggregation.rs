//! Per-district temperature statistics.

use crate::filtering::filter_complete;
use crate::types::district::{District, Selection};
use crate::types::station_reading::StationReading;
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::collections::BTreeMap;

/// Minimum, maximum and mean temperature of one district's complete readings.
///
/// All three temperatures are `None` when the district has no complete reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistrictStats {
    pub district: District,
    /// Number of complete readings the statistics were computed from.
    pub station_count: usize,
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
    /// Arithmetic mean rounded to one decimal, halves away from zero.
    pub avg_temp: Option<f64>,
}

impl DistrictStats {
    pub fn empty(district: District) -> Self {
        Self {
            district,
            station_count: 0,
            min_temp: None,
            max_temp: None,
            avg_temp: None,
        }
    }

    pub fn has_data(&self) -> bool {
        self.station_count > 0
    }

    /// The average with "no data" reported as `0.0`.
    pub fn avg_temp_or_zero(&self) -> f64 {
        self.avg_temp.unwrap_or(0.0)
    }
}

/// Rounds to one decimal place, ties away from zero (`0.25 -> 0.3`, `-0.25 -> -0.3`).
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Computes the statistics of `district` from that district's readings.
///
/// Incomplete readings are skipped. Never fails; an empty or fully
/// incomplete input yields [`DistrictStats::empty`].
///
/// # Examples
///
/// ```
/// use wien_wetter::{aggregate, District};
///
/// let stats = aggregate(District::new(4).unwrap(), &[]);
/// assert_eq!(stats.avg_temp, None);
/// assert_eq!(stats.avg_temp_or_zero(), 0.0);
/// ```
pub fn aggregate(district: District, readings: &[StationReading]) -> DistrictStats {
    let temps: Vec<f64> = filter_complete(Selection::District(district), readings)
        .into_iter()
        .filter_map(|reading| reading.temperature)
        .collect();

    if temps.is_empty() {
        return DistrictStats::empty(district);
    }

    let min = temps.iter().copied().map(OrderedFloat).min();
    let max = temps.iter().copied().map(OrderedFloat).max();
    let mean = temps.iter().sum::<f64>() / temps.len() as f64;

    DistrictStats {
        district,
        station_count: temps.len(),
        min_temp: min.map(OrderedFloat::into_inner),
        max_temp: max.map(OrderedFloat::into_inner),
        avg_temp: Some(round_one_decimal(mean)),
    }
}

/// Runs [`aggregate`] for every district in `readings_by_district`.
pub fn aggregate_all(
    readings_by_district: &BTreeMap<District, Vec<StationReading>>,
) -> BTreeMap<District, DistrictStats> {
    readings_by_district
        .iter()
        .map(|(district, readings)| (*district, aggregate(*district, readings)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::tests::complete_reading;

    fn district(index: u8) -> District {
        District::new(index).unwrap()
    }

    #[test]
    fn test_empty_input() {
        for d in District::all() {
            let stats = aggregate(d, &[]);
            assert_eq!(stats, DistrictStats::empty(d));
            assert_eq!(stats.avg_temp_or_zero(), 0.0);
            assert!(!stats.has_data());
        }
    }

    #[test]
    fn test_incomplete_only_is_empty() {
        let readings = vec![StationReading {
            humidity: None,
            ..complete_reading("A", 12.0)
        }];
        assert_eq!(aggregate(district(2), &readings), DistrictStats::empty(district(2)));
    }

    #[test]
    fn test_min_max_avg() {
        let readings = vec![complete_reading("A", 10.0), complete_reading("B", 20.0)];
        let stats = aggregate(district(1), &readings);
        assert_eq!(stats.min_temp, Some(10.0));
        assert_eq!(stats.max_temp, Some(20.0));
        assert_eq!(stats.avg_temp, Some(15.0));
        assert_eq!(stats.station_count, 2);
    }

    #[test]
    fn test_ignores_incomplete_readings() {
        let readings = vec![
            complete_reading("A", 10.0),
            StationReading {
                observed_at: None,
                ..complete_reading("B", 40.0)
            },
            complete_reading("C", 14.0),
        ];
        let stats = aggregate(district(3), &readings);
        assert_eq!(stats.max_temp, Some(14.0));
        assert_eq!(stats.avg_temp, Some(12.0));
        assert_eq!(stats.station_count, 2);
    }

    #[test]
    fn test_negative_temperatures() {
        let readings = vec![
            complete_reading("A", -4.5),
            complete_reading("B", -0.5),
            complete_reading("C", 2.0),
        ];
        let stats = aggregate(district(22), &readings);
        assert_eq!(stats.min_temp, Some(-4.5));
        assert_eq!(stats.max_temp, Some(2.0));
        assert_eq!(stats.avg_temp, Some(-1.0));
    }

    #[test]
    fn test_rounding_rule() {
        let readings = vec![complete_reading("A", 10.05), complete_reading("B", 10.15)];
        assert_eq!(aggregate(district(1), &readings).avg_temp, Some(10.1));

        assert_eq!(round_one_decimal(0.25), 0.3);
        assert_eq!(round_one_decimal(-0.25), -0.3);
        assert_eq!(round_one_decimal(21.44), 21.4);
        assert_eq!(round_one_decimal(21.46), 21.5);
    }

    #[test]
    fn test_idempotent() {
        let readings = vec![
            complete_reading("A", 17.3),
            complete_reading("B", 18.9),
            complete_reading("C", 16.2),
        ];
        let first = aggregate(district(9), &readings);
        let second = aggregate(district(9), &readings);
        assert_eq!(first, second);
        assert_eq!(
            first.avg_temp.map(f64::to_bits),
            second.avg_temp.map(f64::to_bits)
        );
    }

    #[test]
    fn test_aggregate_all_independent() {
        let mut by_district = BTreeMap::new();
        by_district.insert(district(1), vec![complete_reading("A", 5.0)]);
        by_district.insert(district(2), vec![]);
        by_district.insert(district(3), vec![complete_reading("B", 30.0)]);

        let stats = aggregate_all(&by_district);
        assert_eq!(stats.len(), 3);
        assert_eq!(stats[&district(1)].avg_temp, Some(5.0));
        assert_eq!(stats[&district(2)].avg_temp, None);
        assert_eq!(stats[&district(3)].avg_temp, Some(30.0));
    }
}
