//! Observed relative sea-level trend at a tide station.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use slr_core::{LengthUnit, SlrResult, convert};
use slr_model::{ScenarioCollection, Series};
use tracing::{debug, warn};

use crate::provider::SlrProvider;
use crate::text::camel_label;
use crate::types::{TrendRecord, trend_url};
use crate::{ProviderError, ProviderResult};

/// Year at which the linear trend is anchored to zero.
pub const TREND_ZERO_YEAR: i32 = 2000;

/// Linear trend with its 95% confidence half-width, both per year.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalTrend {
    station_id: String,
    trend: f64,
    trend_error: f64,
    unit: LengthUnit,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl HistoricalTrend {
    pub fn from_record(station_id: impl Into<String>, record: &TrendRecord) -> ProviderResult<Self> {
        let symbol = record.units.split('/').next().unwrap_or_default();
        let unit = LengthUnit::parse(symbol.trim())?;
        Ok(Self {
            station_id: station_id.into(),
            trend: record.trend,
            trend_error: record.trend_error,
            unit,
            start_date: parse_date(&record.start_date)?,
            end_date: parse_date(&record.end_date)?,
        })
    }

    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    pub fn trend(&self) -> f64 {
        self.trend
    }

    pub fn trend_error(&self) -> f64 {
        self.trend_error
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Trend and error move to `to` together.
    pub fn convert(&mut self, to: LengthUnit) {
        self.trend = convert(self.trend, self.unit, to);
        self.trend_error = convert(self.trend_error, self.unit, to);
        self.unit = to;
    }

    /// Annual values from the start year to the end year, zero at 2000.
    pub fn timeseries(&self) -> SlrResult<Series> {
        let (x, y): (Vec<f64>, Vec<f64>) = (self.start_date.year()..=self.end_date.year())
            .map(|year| {
                (
                    f64::from(year),
                    self.trend * f64::from(year - TREND_ZERO_YEAR),
                )
            })
            .unzip();
        Series::new(x, y, self.unit)
    }

    /// Labelled properties in display order.
    pub fn properties(&self) -> Vec<(String, String)> {
        [
            ("stationId", self.station_id.clone()),
            ("trend", self.trend.to_string()),
            ("trendError", self.trend_error.to_string()),
            ("units", format!("{}/yr", self.unit)),
            ("startDate", self.start_date.to_string()),
            ("endDate", self.end_date.to_string()),
        ]
        .into_iter()
        .map(|(key, value)| (camel_label(key), value))
        .collect()
    }
}

fn parse_date(value: &str) -> ProviderResult<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(value, "%m/%d/%Y"))
        .map_err(|_| ProviderError::InvalidDate {
            value: value.to_string(),
        })
}

/// Station and unit to request a trend for, taken from a projection collection.
pub fn station_for(collection: &ScenarioCollection) -> SlrResult<(String, LengthUnit)> {
    let unit = collection.single_unit()?;
    Ok((collection.station_id().to_string(), unit))
}

/// Fetch the first trend record for `station`, expressed in `unit`.
/// Provider or parse failures degrade to `None`.
pub fn fetch_trend<P: SlrProvider>(
    provider: &P,
    station: &str,
    unit: LengthUnit,
) -> Option<HistoricalTrend> {
    debug!(url = %trend_url(station), "requesting NOAA trend");
    let result = provider.trends(station).and_then(|rows| {
        let record = rows.first().ok_or_else(|| ProviderError::MissingPayload {
            what: "SeaLvlTrends[0]".to_string(),
        })?;
        HistoricalTrend::from_record(station, record)
    });
    match result {
        Ok(mut trend) => {
            trend.convert(unit);
            Some(trend)
        }
        Err(err) => {
            warn!(station, error = %err, "trend fetch failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TrendRecord {
        TrendRecord {
            trend: 1.94,
            trend_error: 0.18,
            units: "mm/yr".to_string(),
            start_date: "1/1/1897".to_string(),
            end_date: "2022-12-31 00:00:00".to_string(),
        }
    }

    #[test]
    fn parses_all_date_formats() {
        assert_eq!(parse_date("2020-05-01").unwrap(), NaiveDate::from_ymd_opt(2020, 5, 1).unwrap());
        assert_eq!(
            parse_date("2020-05-01 12:30:00").unwrap(),
            NaiveDate::from_ymd_opt(2020, 5, 1).unwrap()
        );
        assert_eq!(parse_date("05/01/2020").unwrap(), NaiveDate::from_ymd_opt(2020, 5, 1).unwrap());
        assert!(matches!(parse_date("May 2020"), Err(ProviderError::InvalidDate { .. })));
    }

    #[test]
    fn record_fields_are_decoded() {
        let trend = HistoricalTrend::from_record("9414290", &record()).unwrap();
        assert_eq!(trend.unit(), LengthUnit::Millimeter);
        assert_eq!(trend.start_date().year(), 1897);
        assert_eq!(trend.end_date().year(), 2022);
    }

    #[test]
    fn rate_units_must_be_lengths() {
        let mut bad = record();
        bad.units = "furlongs/yr".to_string();
        assert!(matches!(
            HistoricalTrend::from_record("1", &bad),
            Err(ProviderError::Record(_))
        ));
    }

    #[test]
    fn timeseries_is_zero_at_2000() {
        let trend = HistoricalTrend::from_record("9414290", &record()).unwrap();
        let series = trend.timeseries().unwrap();
        assert_eq!(series.len(), 2022 - 1897 + 1);
        assert_eq!(series.interpolate_at(2000.0).unwrap(), 0.0);
        assert!((series.interpolate_at(2010.0).unwrap() - 19.4).abs() < 1e-9);
        assert!(series.interpolate_at(1990.0).unwrap() < 0.0);
    }

    #[test]
    fn convert_moves_trend_and_error() {
        let mut trend = HistoricalTrend::from_record("9414290", &record()).unwrap();
        trend.convert(LengthUnit::Centimeter);
        assert_eq!(trend.unit(), LengthUnit::Centimeter);
        assert!((trend.trend() - 0.194).abs() < 1e-12);
        assert!((trend.trend_error() - 0.018).abs() < 1e-12);
    }

    #[test]
    fn properties_are_title_cased() {
        let trend = HistoricalTrend::from_record("9414290", &record()).unwrap();
        let labels: Vec<String> = trend.properties().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            labels,
            vec!["Station Id", "Trend", "Trend Error", "Units", "Start Date", "End Date"]
        );
    }
}
