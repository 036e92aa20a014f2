use super::TollError;
use crate::util::fs_utils;
use kdam::tqdm;
use roadpricing_core::model::{AgentId, LinkId, VehicleId};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// a vehicle entering a link. time is in seconds since simulation midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkTraversal {
    pub agent_id: AgentId,
    pub vehicle_id: VehicleId,
    pub link_id: LinkId,
    pub time: f64,
}

impl LinkTraversal {
    /// reads link traversal events in file order.
    pub fn read_csv(filepath: &Path) -> Result<Vec<LinkTraversal>, TollError> {
        let name = filepath.to_string_lossy().to_string();
        let reader =
            fs_utils::create_reader(filepath).map_err(|e| TollError::ReadError(name.clone(), e))?;
        let rows = tqdm!(
            reader.into_deserialize::<LinkTraversal>(),
            desc = "read link traversals"
        );
        let traversals = rows
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| TollError::CsvReadError(name.clone(), e))?;
        eprintln!();
        log::info!("read {} link traversals from {name}", traversals.len());
        Ok(traversals)
    }
}

/// a priced link traversal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TollChargeRecord {
    pub agent_id: AgentId,
    pub vehicle_id: VehicleId,
    pub link_id: LinkId,
    pub time: f64,
    pub amount: f64,
}

impl TollChargeRecord {
    pub fn new(traversal: LinkTraversal, amount: f64) -> TollChargeRecord {
        TollChargeRecord {
            agent_id: traversal.agent_id,
            vehicle_id: traversal.vehicle_id,
            link_id: traversal.link_id,
            time: traversal.time,
            amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TolledLinkRecord {
    pub link_id: LinkId,
}
