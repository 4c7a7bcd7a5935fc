use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::contract::model::{NewContact, NewQuoteLead};

/// Form-style field reading: `null`, `""`, `0` and `false` count as not supplied;
/// other numbers and `true` are kept as text.
fn form_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Bool(true)) => Some("true".to_owned()),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(other @ (Value::Array(_) | Value::Object(_))) => {
            return Err(serde::de::Error::custom(format!(
                "expected a scalar form value, got {other}"
            )))
        }
    })
}

/// Contact form body
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "form_value")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub engine_type: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub message: Option<String>,
}

impl From<ContactSubmission> for NewContact {
    fn from(req: ContactSubmission) -> Self {
        Self {
            name: req.name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            phone: req.phone,
            engine_type: req.engine_type,
            message: req.message.unwrap_or_default(),
        }
    }
}

/// Quote form body
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSubmission {
    #[serde(default, deserialize_with = "form_value")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub engine_type: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub power_range: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub usage: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub engine_count: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub vessel_type: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub vessel_length: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub vessel_year: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub current_engine: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub timeline: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub budget: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub additional_requirements: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub preferred_contact: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub previous_experience: Option<String>,
}

impl From<QuoteSubmission> for NewQuoteLead {
    fn from(req: QuoteSubmission) -> Self {
        Self {
            full_name: req.full_name.unwrap_or_default(),
            phone: req.phone.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            city: req.city.unwrap_or_default(),
            engine_type: req.engine_type.unwrap_or_default(),
            power_range: req.power_range.unwrap_or_default(),
            usage: req.usage.unwrap_or_default(),
            engine_count: req.engine_count.unwrap_or_default(),
            vessel_type: req.vessel_type.unwrap_or_default(),
            vessel_length: req.vessel_length,
            vessel_year: req.vessel_year,
            current_engine: req.current_engine,
            timeline: req.timeline.unwrap_or_default(),
            budget: req.budget,
            priority: req.priority.unwrap_or_default(),
            additional_requirements: req.additional_requirements,
            preferred_contact: req.preferred_contact.unwrap_or_default(),
            previous_experience: req.previous_experience,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactCreated {
    pub success: bool,
    pub contact_id: Uuid,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteCreated {
    pub success: bool,
    pub lead_id: Uuid,
}

/// Error body shared by both intake endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_values_are_absent() {
        let req: ContactSubmission = serde_json::from_value(json!({
            "name": "",
            "email": null,
            "phone": 0,
            "engineType": false
        }))
        .unwrap();
        assert_eq!(req.name, None);
        assert_eq!(req.email, None);
        assert_eq!(req.phone, None);
        assert_eq!(req.engine_type, None);
        assert_eq!(req.message, None);
    }

    #[test]
    fn numbers_and_true_become_text() {
        let req: QuoteSubmission = serde_json::from_value(json!({
            "engineCount": 2,
            "vesselLength": 7.5,
            "previousExperience": true
        }))
        .unwrap();
        assert_eq!(req.engine_count.as_deref(), Some("2"));
        assert_eq!(req.vessel_length.as_deref(), Some("7.5"));
        assert_eq!(req.previous_experience.as_deref(), Some("true"));
    }

    #[test]
    fn nested_values_are_rejected() {
        let res: Result<ContactSubmission, _> =
            serde_json::from_value(json!({ "name": { "first": "A" } }));
        assert!(res.is_err());
    }

    #[test]
    fn whitespace_counts_as_supplied() {
        let req: ContactSubmission = serde_json::from_value(json!({ "name": " " })).unwrap();
        assert_eq!(req.name.as_deref(), Some(" "));
    }
}
