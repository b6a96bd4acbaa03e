//! Optional TOML override file for [`Params`] (§6 supplemental,
//! `--params`).
//!
//! Grounded on `braid-config-data`'s `toml::from_str` + `serde(default)`
//! pattern: any subset of fields may be present, the rest keep their
//! documented defaults.

use std::path::Path;

use pvrec_core::Params;

use crate::error::Result;

pub fn load(path: &Path) -> Result<Params> {
    let text = std::fs::read_to_string(path)?;
    let params: Params = toml::from_str(&text)?;
    params.validate()?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_overrides_keep_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.toml");
        std::fs::write(&path, "npt_min = 10\ndxy_max = 3.5\n").unwrap();
        let params = load(&path).unwrap();
        assert_eq!(params.npt_min, 10);
        assert_eq!(params.dxy_max, 3.5);
        assert_eq!(params.step_min, Params::default().step_min);
    }
}
