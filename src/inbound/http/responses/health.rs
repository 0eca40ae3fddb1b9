use crate::inbound::http::responses::shared::{DataResponse, ResponseType};
use serde::Serialize;

////////////////////////////////////////////////////////////////////////////////////////////////////
// Health
////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Serialize)]
pub struct HealthData {
    status: String,
}

pub fn health_response() -> DataResponse<HealthData> {
    DataResponse::new(
        HealthData {
            status: "OK".to_string(),
        },
        ResponseType::Health,
    )
}
