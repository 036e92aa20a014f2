use super::{Link, LinkRecord, NetworkError};
use crate::util::fs_utils;
use kdam::tqdm;
use roadpricing_core::model::LinkId;
use std::{collections::HashMap, path::Path};

/// the road network: links plus an index by id.
#[derive(Debug, Default, Clone)]
pub struct Network {
    links: Vec<Link>,
    index: HashMap<LinkId, usize>,
}

impl Network {
    pub fn try_new(links: Vec<Link>) -> Result<Network, NetworkError> {
        let mut index = HashMap::with_capacity(links.len());
        for (idx, link) in links.iter().enumerate() {
            if index.insert(link.id.clone(), idx).is_some() {
                return Err(NetworkError::DuplicateLink(link.id.clone()));
            }
        }
        Ok(Network { links, index })
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// mutable access to link attributes. link ids must not be changed.
    pub fn links_mut(&mut self) -> &mut [Link] {
        &mut self.links
    }

    pub fn get(&self, link_id: &LinkId) -> Option<&Link> {
        self.index.get(link_id).and_then(|idx| self.links.get(*idx))
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn read_csv(filepath: &Path) -> Result<Network, NetworkError> {
        let name = filepath.to_string_lossy().to_string();
        let reader = fs_utils::create_reader(filepath)
            .map_err(|e| NetworkError::ReadError(name.clone(), e))?;
        let rows = tqdm!(reader.into_deserialize::<LinkRecord>(), desc = "read links");
        let mut links = vec![];
        for row in rows {
            let record = row.map_err(|e| NetworkError::CsvReadError(name.clone(), e))?;
            links.push(Link::try_from(record)?);
        }
        eprintln!();
        let network = Network::try_new(links)?;
        log::info!("read network with {} links from {name}", network.len());
        Ok(network)
    }

    pub fn write_csv(&self, filepath: &Path, overwrite: bool) -> Result<usize, NetworkError> {
        fs_utils::write_csv(filepath, overwrite, self.links.iter().map(LinkRecord::from))
            .map_err(|e| NetworkError::CsvWriteError(filepath.to_string_lossy().to_string(), e))
    }
}
