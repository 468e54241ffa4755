use serde_json::Value;

use crate::{
    data_types::nutrition::{NutritionSeries, SeriesPoint, WaterLog, WaterResponse},
    error::{ApiError, Result},
    fitbit::params::Resource,
};

use super::parse_response;

pub struct WaterConverter;

impl WaterConverter {
    /// Milliliters in one US fluid ounce.
    pub const ML_PER_FL_OZ: f64 = 29.57344;

    pub fn ml_to_oz(milliliters: f64) -> f64 {
        milliliters / WaterConverter::ML_PER_FL_OZ
    }

    /// Summary total and every entry amount in ounces.
    pub fn water_log(raw: &Value) -> Result<WaterLog> {
        let resp: WaterResponse = parse_response(raw, "water log")?;

        let water = resp
            .water
            .into_iter()
            .map(|mut entry| {
                entry.amount = WaterConverter::ml_to_oz(entry.amount);
                entry
            })
            .collect();

        Ok(WaterLog {
            total: WaterConverter::ml_to_oz(resp.summary.water),
            water,
        })
    }

    /// Reads `foods-log-{resource}`; water values are converted to ounces.
    pub fn nutrition_series(resource: Resource, raw: &Value) -> Result<NutritionSeries> {
        let key = format!("foods-log-{}", resource);
        let items = raw
            .get(&key)
            .ok_or_else(|| ApiError::MalformedResponse(format!("missing '{}'", key)))?;

        let points: Vec<SeriesPoint> = parse_response(items, &key)?;
        let points = points
            .into_iter()
            .map(|mut point| {
                if resource == Resource::Water {
                    point.value = WaterConverter::ml_to_oz(point.value);
                }
                point
            })
            .collect();

        Ok(NutritionSeries { resource, points })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn conversion_divides_by_ml_per_ounce() {
        for v in [0.0, 1.0, 29.57344, 250.0, 1893.0, -4.5] {
            assert_eq!(WaterConverter::ml_to_oz(v), v / 29.57344);
        }
        assert_eq!(WaterConverter::ml_to_oz(29.57344), 1.0);
    }

    #[test]
    fn water_log_converts_total_and_entries() {
        let raw = json!({
            "summary": {"water": 500.0},
            "water": [
                {"amount": 250.0, "logId": 1},
                {"amount": 250.0, "logId": 2}
            ]
        });

        let log = WaterConverter::water_log(&raw).unwrap();

        assert_eq!(log.total, 500.0 / 29.57344);
        assert_eq!(log.water.len(), 2);
        assert_eq!(log.water[0].amount, 250.0 / 29.57344);
        assert_eq!(log.water[1].extra["logId"], json!(2));
    }

    #[test]
    fn water_log_without_summary_is_malformed() {
        let raw = json!({"water": []});

        assert!(matches!(
            WaterConverter::water_log(&raw),
            Err(ApiError::MalformedResponse(_))
        ));
    }

    #[test]
    fn series_values_parse_from_strings() {
        let raw = json!({
            "foods-log-water": [
                {"dateTime": "2022-01-04", "value": "591.4688"},
                {"dateTime": "2022-01-05", "value": "0"}
            ]
        });

        let series = WaterConverter::nutrition_series(Resource::Water, &raw).unwrap();

        assert_eq!(series.points[0].date_time, "2022-01-04");
        assert_eq!(series.points[0].value, 591.4688 / 29.57344);
        assert_eq!(series.points[1].value, 0.0);
    }

    #[test]
    fn calories_are_not_converted() {
        let raw = json!({"foods-log-caloriesIn": [{"dateTime": "2022-01-04", "value": "2100"}]});

        let series = WaterConverter::nutrition_series(Resource::CaloriesIn, &raw).unwrap();

        assert_eq!(series.points[0].value, 2100.0);
    }

    #[test]
    fn numeric_series_values_are_accepted() {
        let raw = json!({"foods-log-caloriesIn": [{"dateTime": "2022-01-04", "value": 2100}]});

        let series = WaterConverter::nutrition_series(Resource::CaloriesIn, &raw).unwrap();

        assert_eq!(series.points[0].value, 2100.0);
    }

    #[test]
    fn non_numeric_series_value_is_malformed() {
        let raw = json!({"foods-log-water": [{"dateTime": "2022-01-04", "value": "lots"}]});

        assert!(matches!(
            WaterConverter::nutrition_series(Resource::Water, &raw),
            Err(ApiError::MalformedResponse(_))
        ));
    }

    #[test]
    fn series_item_without_date_is_malformed() {
        let raw = json!({"foods-log-water": [{"value": "250"}]});

        assert!(matches!(
            WaterConverter::nutrition_series(Resource::Water, &raw),
            Err(ApiError::MalformedResponse(_))
        ));
    }

    #[test]
    fn series_under_another_resource_key_is_malformed() {
        let raw = json!({"foods-log-water": []});

        assert!(matches!(
            WaterConverter::nutrition_series(Resource::CaloriesIn, &raw),
            Err(ApiError::MalformedResponse(_))
        ));
    }
}
