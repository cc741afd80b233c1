use crate::error::{AdvisorError, Result};
use crate::gateway::GatewayRecord;
use std::collections::HashSet;
use std::io::Read;

/// The built-in gateway dataset, embedded at compile time.
const BUILTIN_CATALOG: &str = include_str!("../data/gateways.json");

/// An ordered, read-only collection of gateway records.
///
/// Entry order matters: it is the tie-break order during ranking. Several
/// catalog variants exist in the wild, so the catalog is treated as pluggable
/// configuration; the engine works against any catalog that passes validation.
#[derive(Debug, Clone)]
pub struct Catalog {
    gateways: Vec<GatewayRecord>,
}

impl Catalog {
    /// Loads the embedded default catalog.
    pub fn builtin() -> Result<Self> {
        let gateways = serde_json::from_str(BUILTIN_CATALOG)?;
        Self::new(gateways)
    }

    /// Loads a catalog variant from a JSON source.
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        let gateways = serde_json::from_reader(source)?;
        Self::new(gateways)
    }

    pub fn new(gateways: Vec<GatewayRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for gateway in &gateways {
            if !seen.insert(gateway.id.as_str()) {
                return Err(AdvisorError::CatalogError(format!(
                    "duplicate gateway id: {}",
                    gateway.id
                )));
            }
        }
        Ok(Self { gateways })
    }

    pub fn gateways(&self) -> &[GatewayRecord] {
        &self.gateways
    }

    pub fn get(&self, id: &str) -> Option<&GatewayRecord> {
        self.gateways.iter().find(|g| g.id == id)
    }

    pub fn len(&self) -> usize {
        self.gateways.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gateways.is_empty()
    }
}
