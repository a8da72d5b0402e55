use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Where the user is expected to work on a given day.
///
/// "No work expected" is not a variant; it is `Option::<WorkLocation>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WorkLocation {
    Home,
    Office,
    Holiday,
    Leave,
}

impl WorkLocation {
    /// Badge text shown in a calendar cell
    pub fn label(&self) -> &'static str {
        match self {
            WorkLocation::Office => "Office",
            WorkLocation::Home => "WFH",
            WorkLocation::Holiday => "Holiday",
            WorkLocation::Leave => "Leave",
        }
    }
}
