//! Provider and contract configuration.
//!
//! The active provider is resolved once, at startup, and the resulting
//! [`ContractConfig`] is handed to the components that need it.

use crate::error::{Result, SdkError};
use crate::infrastructure::artifacts::{load_base64, try_load_tvc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Wallet providers the application knows how to target.
///
/// In config files providers are named the way wallets present themselves,
/// e.g. `"EVER Wallet"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, clap::ValueEnum)]
#[serde(try_from = "String")]
pub enum ProviderKey {
    EverWallet,
    VenomWallet,
}

impl ProviderKey {
    pub const DEFAULT: Self = ProviderKey::EverWallet;

    pub fn name(&self) -> &'static str {
        match self {
            ProviderKey::EverWallet => "EVER Wallet",
            ProviderKey::VenomWallet => "VENOM Wallet",
        }
    }
}

impl FromStr for ProviderKey {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "EVER Wallet" => Ok(ProviderKey::EverWallet),
            "VENOM Wallet" => Ok(ProviderKey::VenomWallet),
            other => Err(SdkError::Config(format!("unknown provider '{other}'"))),
        }
    }
}

impl TryFrom<String> for ProviderKey {
    type Error = SdkError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl Serialize for ProviderKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The test contract deployed for one provider.
///
/// `abi` is the contract ABI as JSON text. `tvc` and `boc` are base64
/// artifacts; each can be given inline or through `tvc_path`/`boc_path`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContractConfig {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub duplicate_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvc_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boc_path: Option<PathBuf>,
}

impl ContractConfig {
    pub fn new(address: impl Into<String>, duplicate_address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            duplicate_address: duplicate_address.into(),
            ..Self::default()
        }
    }

    /// Fills `tvc` and `boc` from their paths when they are not set inline.
    ///
    /// An artifact that cannot be read is left unset.
    pub async fn load_artifacts(&mut self) {
        if self.tvc.is_none()
            && let Some(path) = &self.tvc_path
        {
            self.tvc = try_load_tvc(path).await;
        }
        if self.boc.is_none()
            && let Some(path) = &self.boc_path
        {
            self.boc = load_base64(path).await;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: Option<ProviderKey>,
    #[serde(default)]
    pub contracts: BTreeMap<ProviderKey, ContractConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut contracts = BTreeMap::new();
        contracts.insert(ProviderKey::EverWallet, ContractConfig::default());
        contracts.insert(
            ProviderKey::VenomWallet,
            ContractConfig::new(
                "0:8978c67c7bb707773e91b4f3a0c33b24346910dd0a906ea6806501fd4a8fec61",
                "0:a494e9f70a4b641ae4c19b91371a60dacf2ecfc1bb5ab46d7ac3dbb257ebd553",
            ),
        );
        Self {
            provider: None,
            contracts,
        }
    }
}

impl AppConfig {
    /// Reads a TOML config file. Contracts it names replace the built-in
    /// entries for the same provider; the others are kept.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            tracing::warn!("Failed to read config at {:?}: {}", path, e);
            SdkError::from(e)
        })?;
        Self::from_toml_str(&content).inspect_err(|e| {
            tracing::warn!("Failed to parse config at {:?}: {}", path, e);
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let parsed: AppConfig = toml::from_str(content)?;
        let mut contracts = AppConfig::default().contracts;
        contracts.extend(parsed.contracts);
        Ok(AppConfig {
            provider: parsed.provider,
            contracts,
        })
    }

    /// Resolves the contract to target.
    ///
    /// `preferred` wins over the configured provider, which wins over
    /// [`ProviderKey::DEFAULT`].
    pub fn select(&self, preferred: Option<ProviderKey>) -> Result<(ProviderKey, &ContractConfig)> {
        let key = preferred.or(self.provider).unwrap_or(ProviderKey::DEFAULT);
        self.contracts
            .get(&key)
            .map(|contract| (key, contract))
            .ok_or_else(|| SdkError::Config(format!("no contract configured for provider '{key}'")))
    }
}
