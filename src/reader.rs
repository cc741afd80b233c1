use crate::error::Result;
use crate::profile::BusinessProfile;
use std::io::Read;

/// Reads a `BusinessProfile` from a JSON source.
///
/// This is the normalization boundary: composite currency selections are
/// reduced to bare codes here, once, so the engine never sees display labels.
pub struct ProfileReader<R: Read> {
    source: R,
}

impl<R: Read> ProfileReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn read(self) -> Result<BusinessProfile> {
        let mut profile: BusinessProfile = serde_json::from_reader(self.source)?;
        profile.normalize_currencies();
        Ok(profile)
    }
}
