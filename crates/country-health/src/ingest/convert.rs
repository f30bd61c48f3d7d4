use crate::records::{FieldValue, IndicatorRecord, PopulationRecord};
use crate::scoring::Domain;
use serde_json::{Map, Value};

/// One upstream row keyed by column name.
pub type Row = Map<String, Value>;

const AGE_GROUP: &str = "AgeGrp";
const POP_MALE: &str = "PopMale";
const POP_FEMALE: &str = "PopFemale";
const POPULATION_YEAR: &str = "Time";

/// Convert one upstream row into an indicator record. Rows without a usable
/// year cannot be placed in the series and yield `None`.
pub(crate) fn indicator_record(row: &Row, domain: Domain) -> Option<IndicatorRecord> {
    let year_field = domain.year_field();
    let year = row.get(year_field).and_then(year_from_value)?;

    let values = row
        .iter()
        .filter(|(key, _)| key.as_str() != year_field)
        .filter_map(|(key, value)| field_value(value).map(|value| (key.clone(), value)))
        .collect();

    Some(IndicatorRecord { year, values })
}

pub(crate) fn population_record(row: &Row) -> Option<PopulationRecord> {
    let age_group = match row.get(AGE_GROUP)? {
        Value::String(label) if !label.trim().is_empty() => label.trim().to_string(),
        _ => return None,
    };
    let male = row.get(POP_MALE).and_then(number_from_value)?;
    let female = row.get(POP_FEMALE).and_then(number_from_value)?;
    let year = row.get(POPULATION_YEAR).and_then(year_from_value);

    Some(PopulationRecord {
        year,
        age_group,
        male,
        female,
    })
}

fn field_value(value: &Value) -> Option<FieldValue> {
    match value {
        Value::Number(number) => number.as_f64().map(FieldValue::Number),
        Value::String(text) if !text.trim().is_empty() => Some(FieldValue::Text(text.clone())),
        _ => None,
    }
}

fn number_from_value(value: &Value) -> Option<f64> {
    field_value(value).and_then(|value| value.as_number())
}

fn year_from_value(value: &Value) -> Option<i32> {
    match value {
        Value::Number(number) => match number.as_i64() {
            Some(year) => i32::try_from(year).ok(),
            None => number
                .as_f64()
                .filter(|year| year.fract() == 0.0)
                .and_then(|year| i32::try_from(year as i64).ok()),
        },
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn economic_rows_keep_numbers_and_numeric_text() {
        let record = indicator_record(
            &row(json!({
                "country_name": "Chile",
                "year": 2022,
                "GDP Growth (% Annual)": 2.4,
                "Public Debt (% of GDP)": "38.0",
                "Inflation (CPI %)": null,
                "Tax Revenue (% of GDP)": ""
            })),
            Domain::Economic,
        )
        .expect("row converts");

        assert_eq!(record.year, 2022);
        assert_eq!(record.number("GDP Growth (% Annual)"), Some(2.4));
        assert_eq!(record.number("Public Debt (% of GDP)"), Some(38.0));
        assert!(record.get("Inflation (CPI %)").is_none());
        assert!(record.get("Tax Revenue (% of GDP)").is_none());
        assert!(record.get("year").is_none());
    }

    #[test]
    fn demographic_rows_use_time_column() {
        let record = indicator_record(
            &row(json!({ "Time": "2025", "LEx": 81.2 })),
            Domain::Demographic,
        )
        .expect("row converts");

        assert_eq!(record.year, 2025);
        assert_eq!(record.number("LEx"), Some(81.2));
    }

    #[test]
    fn rows_without_year_are_rejected() {
        assert!(indicator_record(&row(json!({ "LEx": 70.0 })), Domain::Demographic).is_none());
        assert!(
            indicator_record(&row(json!({ "year": "recent" })), Domain::Economic).is_none()
        );
        assert!(indicator_record(&row(json!({ "year": 2020.5 })), Domain::Economic).is_none());
    }

    #[test]
    fn population_rows_need_bucket_and_both_sexes() {
        let record = population_record(&row(json!({
            "Location": "Chile",
            "Time": 2026,
            "AgeGrp": "20-24",
            "PopMale": 640.5,
            "PopFemale": "621.0"
        })))
        .expect("row converts");

        assert_eq!(record.year, Some(2026));
        assert_eq!(record.age_group, "20-24");
        assert_eq!(record.total(), 1_261.5);

        assert!(population_record(&row(json!({ "AgeGrp": "20-24", "PopMale": 1.0 }))).is_none());
        assert!(population_record(&row(json!({ "PopMale": 1.0, "PopFemale": 1.0 }))).is_none());
    }
}
