//!
//! Human-readable tags that bind serialized keys, addresses and WIF strings to a network.
//!

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Bech32 prefixes of one network.
///
/// Every tag is a valid bech32 prefix and the two extended key tags differ,
/// so a key built with these prefixes can always be serialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Prefixes {
    extended_private: &'static str,
    extended_public: &'static str,
    address: &'static str,
    wif: &'static str,
}

static MAINNET: Prefixes = Prefixes { extended_private: "xprv", extended_public: "xpub", address: "bc", wif: "wif" };
static TESTNET: Prefixes = Prefixes { extended_private: "tprv", extended_public: "tpub", address: "tb", wif: "twif" };

impl Prefixes {
    /// Custom prefixes, e.g. for a private test network.
    pub fn new(extended_private: &'static str, extended_public: &'static str, address: &'static str, wif: &'static str) -> Result<Self> {
        for tag in [extended_private, extended_public, address, wif] {
            olympus_bech32::validate_prefix(tag)?;
        }
        if extended_private == extended_public {
            return Err(olympus_bech32::Error::InvalidPrefix(extended_public.to_string()).into());
        }
        Ok(Prefixes { extended_private, extended_public, address, wif })
    }

    /// Tag of serialized extended private keys.
    pub fn extended_private(&self) -> &'static str {
        self.extended_private
    }

    /// Tag of serialized extended public keys.
    pub fn extended_public(&self) -> &'static str {
        self.extended_public
    }

    /// Tag of public key hash addresses.
    pub fn address(&self) -> &'static str {
        self.address
    }

    /// Tag of wallet import format private keys.
    pub fn wif(&self) -> &'static str {
        self.wif
    }

    /// Prefixes of every known network.
    pub fn registered() -> impl Iterator<Item = &'static Prefixes> {
        Network::ALL.into_iter().map(Network::prefixes)
    }

    /// The registered network these prefixes belong to, if any.
    pub fn network(&self) -> Option<Network> {
        Network::ALL.into_iter().find(|network| network.prefixes() == self)
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Mainnet, Network::Testnet];

    pub fn prefixes(self) -> &'static Prefixes {
        match self {
            Network::Mainnet => &MAINNET,
            Network::Testnet => &TESTNET,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(network: &str) -> Result<Self> {
        match network.to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            _ => Err(Error::UnknownNetwork(network.to_string())),
        }
    }
}

impl From<Network> for &'static Prefixes {
    fn from(network: Network) -> Self {
        network.prefixes()
    }
}
