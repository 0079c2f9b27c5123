use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::TimeTick;

pub const TIME_TICKS_JSON_SCHEMA_V1: u32 = 1;

/// Tick output captured for diagnostics and regression fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeTickSnapshot {
    pub interval: String,
    pub ticks: Vec<TimeTick>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeTicksJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: TimeTickSnapshot,
}

impl TimeTickSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = TimeTicksJsonContractV1 {
            schema_version: TIME_TICKS_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize tick contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    ///
    /// Tick coordinates must be finite and ordered left to right.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let snapshot = match serde_json::from_str::<TimeTickSnapshot>(input) {
            Ok(snapshot) => snapshot,
            Err(_) => {
                let payload: TimeTicksJsonContractV1 =
                    serde_json::from_str(input).map_err(|e| {
                        ChartError::InvalidData(format!(
                            "failed to parse tick snapshot json payload: {e}"
                        ))
                    })?;
                if payload.schema_version != TIME_TICKS_JSON_SCHEMA_V1 {
                    return Err(ChartError::InvalidData(format!(
                        "unsupported tick snapshot schema version: {}",
                        payload.schema_version
                    )));
                }
                payload.snapshot
            }
        };
        snapshot.validate_tick_order()?;
        Ok(snapshot)
    }

    fn validate_tick_order(&self) -> ChartResult<()> {
        if let Some(index) = self.ticks.iter().position(|tick| !tick.coord.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "tick {index} has a non-finite coordinate"
            )));
        }
        if let Some(index) = self
            .ticks
            .windows(2)
            .position(|pair| pair[1].coord < pair[0].coord)
        {
            return Err(ChartError::InvalidData(format!(
                "tick coordinates must be ordered left to right (index {})",
                index + 1
            )));
        }
        Ok(())
    }
}
