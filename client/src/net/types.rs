//! Wire DTOs for the marketplace REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly. Optional display fields use
//! `#[serde(default)]` so partial records from older rows still decode, and
//! closed enums carry an `Unrecognized` catch-all instead of failing the
//! whole payload on a value the client does not know yet.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The one role an identity holds for the whole session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Consumer,
    Technician,
    Admin,
    /// Any role string outside the closed set.
    #[serde(other)]
    Unrecognized,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Consumer => "consumer",
            Self::Technician => "technician",
            Self::Admin => "admin",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// The authenticated user as returned by `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque stable user identifier.
    pub id: String,
    pub role: Role,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar URL from the login provider.
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Equipment owned by a consumer, in insertion order.
    #[serde(default)]
    pub equipment: Vec<Equipment>,
}

impl Identity {
    /// Name shown in the navbar; falls back to a neutral label.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.trim().is_empty()).unwrap_or("Member")
    }

    /// First word of the display name, used in greetings.
    pub fn first_name(&self) -> &str {
        self.display_name().split_whitespace().next().unwrap_or("Member")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentCondition {
    Excellent,
    #[default]
    Good,
    Fair,
    Poor,
}

impl EquipmentCondition {
    pub const ALL: [Self; 4] = [Self::Excellent, Self::Good, Self::Fair, Self::Poor];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

/// A piece of fitness equipment owned by a consumer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub name: String,
    pub brand: String,
    pub model: String,
    #[serde(default)]
    pub condition: EquipmentCondition,
    #[serde(default, deserialize_with = "deserialize_blank_as_none", skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
}

/// Partial profile update for `PUT /users/me`; absent fields are untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<Equipment>>,
}

/// Response body of `GET /auth/session`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionExchange {
    pub session_token: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Accepted,
    InProgress,
    Completed,
    #[serde(other)]
    Unrecognized,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Unrecognized => "unknown",
        }
    }

    /// Jobs a technician is currently working.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Accepted | Self::InProgress)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    #[default]
    Repair,
    Installation,
    Inspection,
    Maintenance,
}

impl ServiceType {
    pub const ALL: [Self; 4] = [Self::Repair, Self::Installation, Self::Inspection, Self::Maintenance];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Repair => "repair",
            Self::Installation => "installation",
            Self::Inspection => "inspection",
            Self::Maintenance => "maintenance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Repair => "Repair",
            Self::Installation => "Installation",
            Self::Inspection => "Inspection",
            Self::Maintenance => "Maintenance",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub issue_description: String,
}

/// A service booking between a consumer and a technician.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub service_type: String,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub equipment_details: EquipmentDetails,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub preferred_date: Option<String>,
    #[serde(default)]
    pub estimated_cost: Option<f64>,
    #[serde(default)]
    pub actual_cost: Option<f64>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub technician_id: Option<String>,
}

/// Body of `POST /bookings`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewBooking {
    pub service_type: ServiceType,
    pub equipment_details: EquipmentDetails,
    pub location: String,
    pub preferred_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technician_id: Option<String>,
}

/// Body of `PUT /bookings/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BookingUpdate {
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl BookingUpdate {
    pub fn accept() -> Self {
        Self { status: BookingStatus::Accepted, completed_at: None }
    }

    pub fn complete(completed_at: String) -> Self {
        Self { status: BookingStatus::Completed, completed_at: Some(completed_at) }
    }
}

/// A bookable technician profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Technician {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub total_reviews: Option<i64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub services_offered: Vec<String>,
    #[serde(default)]
    pub qualifications: Option<String>,
}

/// Body of `POST /ai/match-technician`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TechnicianMatchRequest {
    pub service_type: ServiceType,
    pub equipment: String,
    pub location: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TechnicianMatch {
    #[serde(default)]
    pub technicians: Vec<Technician>,
    #[serde(default)]
    pub ai_recommendation: String,
}

/// A replacement part listed in the marketplace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub compatible_models: Vec<String>,
}

/// Body of `POST /parts/ai-recommend`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PartRecommendRequest {
    pub name: String,
    pub model: String,
    pub brand: String,
    pub issue: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PartRecommendation {
    #[serde(default)]
    pub recommendations: String,
}

/// Body of `POST /ai/predictive-maintenance`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MaintenanceRequest {
    pub name: String,
    pub model: String,
    pub brand: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    pub usage_frequency: String,
}

impl From<&Equipment> for MaintenanceRequest {
    fn from(item: &Equipment) -> Self {
        Self {
            name: item.name.clone(),
            model: item.model.clone(),
            brand: item.brand.clone(),
            purchase_date: item.purchase_date.clone(),
            usage_frequency: "regular".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MaintenancePlan {
    #[serde(default)]
    pub maintenance_plan: String,
}

/// Body of `POST /payments/checkout`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CheckoutRequest {
    pub part_ids: Vec<String>,
    pub amount: f64,
    pub currency: String,
    /// Origin the hosted checkout returns to.
    pub origin_url: String,
}

impl CheckoutRequest {
    pub fn for_part(part: &Part, origin_url: String) -> Self {
        Self {
            part_ids: vec![part.id.clone()],
            amount: part.price,
            currency: "usd".to_owned(),
            origin_url,
        }
    }
}

/// Response of `POST /payments/checkout`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CheckoutSession {
    /// Hosted checkout page to send the browser to.
    pub url: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Response of `GET /payments/status/{session_id}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PaymentStatus {
    #[serde(default)]
    pub payment_status: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub amount: f64,
}

impl PaymentStatus {
    pub fn is_paid(&self) -> bool {
        self.payment_status == "paid"
    }

    pub fn is_expired(&self) -> bool {
        self.status == "expired"
    }
}

/// Aggregate platform numbers from `GET /admin/dashboard`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PlatformStats {
    #[serde(default)]
    pub platform_revenue: f64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub total_users: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub total_technicians: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub total_bookings: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub total_parts: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AdminDashboard {
    #[serde(default)]
    pub stats: PlatformStats,
}

/// A user row in the admin user table.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AdminUser {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(default)]
    pub transaction_type: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub platform_commission: Option<f64>,
    #[serde(default)]
    pub payment_status: String,
    /// ISO-8601 creation timestamp.
    #[serde(default)]
    pub created_at: String,
}

/// Revenue split between service bookings and part sales.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RevenueStats {
    #[serde(default)]
    pub service_revenue: f64,
    #[serde(default)]
    pub service_commission: f64,
    #[serde(default, deserialize_with = "deserialize_rate")]
    pub service_commission_rate: String,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub service_transactions: i64,
    #[serde(default)]
    pub parts_revenue: f64,
    #[serde(default)]
    pub parts_commission: f64,
    #[serde(default, deserialize_with = "deserialize_rate")]
    pub parts_commission_rate: String,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub parts_transactions: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Review {
    pub id: String,
    #[serde(default)]
    pub reviewer_name: String,
    #[serde(default)]
    pub target_type: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub comment: String,
}

fn deserialize_blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Commission rates arrive either as a label (`"10%"`) or a bare number.
fn deserialize_rate<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}

fn deserialize_opt_i64_from_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    integer_from_value(&value).map(Some).map_err(D::Error::custom)
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    integer_from_value(&value).map_err(D::Error::custom)
}

fn integer_from_value(value: &serde_json::Value) -> Result<i64, &'static str> {
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err("expected integer-compatible number")
        }
        _ => Err("expected number"),
    }
}
