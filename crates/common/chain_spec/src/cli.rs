use std::{fs, sync::Arc};

use crate::spec::{ChainSpec, DEV, MAINNET};

/// Resolve a preset name or read a YAML config from ``spec_string`` as a path.
pub fn chain_spec_parser(spec_string: &str) -> Result<Arc<ChainSpec>, String> {
    let spec = match spec_string {
        "mainnet" => MAINNET.clone(),
        "dev" => DEV.clone(),
        path => read_chain_spec(path)?,
    };
    spec.validate().map_err(|err| format!("Invalid chain spec: {err}"))?;
    Ok(spec)
}

fn read_chain_spec(path: &str) -> Result<Arc<ChainSpec>, String> {
    let contents = fs::read_to_string(path).map_err(|err| format!("Failed to read file: {err}"))?;
    Ok(Arc::new(serde_yaml::from_str(&contents).map_err(
        |err| format!("Failed to parse YAML from: {err}"),
    )?))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use alloy_primitives::fixed_bytes;

    use super::*;
    use crate::spec::Network;

    const CUSTOM_CONFIG: &str = r#"
CONFIG_NAME: devnet-7
EFFECTIVE_BALANCE_INCREMENT: 1000000000
MAX_EFFECTIVE_BALANCE: "32000000000"
MAX_DEPOSITS_PER_BLOCK: 16
MAX_BLOB_COMMITMENTS_PER_BLOCK: 16
GENESIS_FORK_VERSION: "0x10000038"
DENEB_FORK_EPOCH: 4
"#;

    #[test]
    fn test_presets() {
        assert_eq!(chain_spec_parser("mainnet").unwrap().network, Network::Mainnet);
        assert_eq!(chain_spec_parser("dev").unwrap().network, Network::Dev);
    }

    #[test]
    fn test_custom_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CUSTOM_CONFIG.as_bytes()).unwrap();

        let spec = chain_spec_parser(file.path().to_str().unwrap()).unwrap();
        assert_eq!(spec.network, Network::Custom("devnet-7".to_string()));
        assert_eq!(spec.max_effective_balance, 32_000_000_000);
        assert_eq!(spec.genesis_fork_version, fixed_bytes!("0x10000038"));
        assert_eq!(spec.deneb_fork_epoch, 4);
    }

    #[test]
    fn test_custom_file_with_wrong_capacity_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            CUSTOM_CONFIG
                .replace("MAX_DEPOSITS_PER_BLOCK: 16", "MAX_DEPOSITS_PER_BLOCK: 8")
                .as_bytes(),
        )
        .unwrap();

        let err = chain_spec_parser(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.starts_with("Invalid chain spec"), "{err}");
    }

    #[test]
    fn test_missing_file() {
        assert!(chain_spec_parser("/nonexistent/chain_spec.yaml").is_err());
    }
}
