use chrono::NaiveDate;
use sea_orm::FromQueryResult;
use serde::Serialize;

use crate::entities::services;
use crate::shaping::{Normalize, Normalizer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceRecord {
    pub service_id: String,
    pub service_name: String,
}

impl Normalize for services::Model {
    type Output = ServiceRecord;

    fn normalize(self, _: &Normalizer) -> ServiceRecord {
        ServiceRecord {
            service_id: self.service_id,
            service_name: self.service_name,
        }
    }
}

/// A status joined with the name of the service it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct StatusWithService {
    pub status_name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub service_id: String,
    pub service_name: String,
}

// Calendar dates carry no time of day, so there is nothing to shift.
impl Normalize for StatusWithService {
    type Output = Self;

    fn normalize(self, _: &Normalizer) -> Self {
        self
    }
}

/// One enrolment of a user, with its status and service when they exist.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct RegistrationWithStatus {
    pub registration_id: String,
    pub user_id: String,
    pub service_id: String,
    pub status_level: Option<i32>,
    pub status_id: Option<String>,
    pub status_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub service_name: Option<String>,
}

impl Normalize for RegistrationWithStatus {
    type Output = Self;

    fn normalize(self, _: &Normalizer) -> Self {
        self
    }
}
