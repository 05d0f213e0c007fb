//! Network parameters and their registry.
//!
//! A [`Network`] is a map of the version constants (address prefixes,
//! WIF and extended key version bytes) plus the peer-to-peer constants
//! (magic, port, DNS seeds) of one deployment of the chain. Every other
//! component resolves its version bytes through a network.
//!
//! The registry is an explicit value: construct one (usually via
//! [`NetworkRegistry::default`], which knows the two built-in networks)
//! and pass it to whatever needs to resolve networks, rather than
//! relying on ambient process state. Tests get isolated registries for
//! free this way.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;
use std::{fmt, result};

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// a network must at least carry a name
    MissingName,
    /// the key is already bound to a different network
    DuplicateKey(NetworkKey),
    /// `add_alias_key` referenced a network that is not registered
    UnknownNetwork(String),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Error::MissingName => write!(f, "network is missing a name"),
            &Error::DuplicateKey(ref k) => {
                write!(f, "key {:?} is already bound to another network", k)
            }
            &Error::UnknownNetwork(ref name) => write!(f, "no network named \"{}\"", name),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// One network's constants. Immutable once registered; shared through
/// `Arc` wherever a key or codec needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    pub name: String,
    pub alias: Option<String>,
    /// version byte of pay-to-pubkey-hash addresses
    pub pubkeyhash: u8,
    /// version byte of WIF encoded private keys
    pub privatekey: u8,
    /// version byte of pay-to-script-hash addresses
    pub scripthash: Option<u8>,
    /// 4 byte version of serialized extended public keys
    pub xpubkey: u32,
    /// 4 byte version of serialized extended private keys
    pub xprivkey: u32,
    pub network_magic: Option<u32>,
    pub port: Option<u16>,
    pub dns_seeds: Vec<String>,
}

impl Network {
    /// the production network.
    pub fn livenet() -> Self {
        Network {
            name: "livenet".to_string(),
            alias: Some("mainnet".to_string()),
            pubkeyhash: 25,
            privatekey: 0x80,
            scripthash: None,
            xpubkey: 0x0488b21e,
            xprivkey: 0x0488ade4,
            network_magic: None,
            port: None,
            dns_seeds: Vec::new(),
        }
    }

    /// the test network (the same entry also answers for regtest).
    pub fn testnet() -> Self {
        Network {
            name: "testnet".to_string(),
            alias: Some("regtest".to_string()),
            pubkeyhash: 64,
            privatekey: 0xef,
            scripthash: None,
            xpubkey: 0x043587cf,
            xprivkey: 0x04358394,
            network_magic: Some(0x0b110907),
            port: Some(18434),
            dns_seeds: Vec::new(),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

static LIVENET: Lazy<Arc<Network>> = Lazy::new(|| Arc::new(Network::livenet()));
static TESTNET: Lazy<Arc<Network>> = Lazy::new(|| Arc::new(Network::testnet()));

/// the shared livenet instance.
pub fn livenet() -> Arc<Network> {
    LIVENET.clone()
}

/// the shared testnet instance.
pub fn testnet() -> Arc<Network> {
    TESTNET.clone()
}

/// the network assumed when a caller does not specify one.
pub fn default_network() -> Arc<Network> {
    livenet()
}

/// A reverse lookup key: networks are found by name or alias as well as
/// by any of their numeric version constants.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum NetworkKey {
    Str(String),
    Num(u32),
}
impl<'a> From<&'a str> for NetworkKey {
    fn from(s: &'a str) -> Self {
        NetworkKey::Str(s.to_string())
    }
}
impl From<String> for NetworkKey {
    fn from(s: String) -> Self {
        NetworkKey::Str(s)
    }
}
impl From<u8> for NetworkKey {
    fn from(v: u8) -> Self {
        NetworkKey::Num(v as u32)
    }
}
impl From<u16> for NetworkKey {
    fn from(v: u16) -> Self {
        NetworkKey::Num(v as u32)
    }
}
impl From<u32> for NetworkKey {
    fn from(v: u32) -> Self {
        NetworkKey::Num(v)
    }
}

/// Names one scalar field of a [`Network`], for field-restricted lookup.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NetworkField {
    Name,
    Alias,
    PubkeyHash,
    PrivateKey,
    ScriptHash,
    XPubKey,
    XPrivKey,
    NetworkMagic,
    Port,
}

fn field_key(network: &Network, field: NetworkField) -> Option<NetworkKey> {
    match field {
        NetworkField::Name => Some(NetworkKey::Str(network.name.clone())),
        NetworkField::Alias => network.alias.clone().map(NetworkKey::Str),
        NetworkField::PubkeyHash => Some(NetworkKey::from(network.pubkeyhash)),
        NetworkField::PrivateKey => Some(NetworkKey::from(network.privatekey)),
        NetworkField::ScriptHash => network.scripthash.map(NetworkKey::from),
        NetworkField::XPubKey => Some(NetworkKey::from(network.xpubkey)),
        NetworkField::XPrivKey => Some(NetworkKey::from(network.xprivkey)),
        NetworkField::NetworkMagic => network.network_magic.map(NetworkKey::from),
        NetworkField::Port => network.port.map(NetworkKey::from),
    }
}

const ALL_FIELDS: [NetworkField; 9] = [
    NetworkField::Name,
    NetworkField::Alias,
    NetworkField::PubkeyHash,
    NetworkField::PrivateKey,
    NetworkField::ScriptHash,
    NetworkField::XPubKey,
    NetworkField::XPrivKey,
    NetworkField::NetworkMagic,
    NetworkField::Port,
];

/// The set of known networks plus a reverse lookup table over all of
/// their scalar field values.
///
/// Invariant: a key resolves to at most one network; [`NetworkRegistry::add`]
/// rejects a network whose keys collide with an existing entry and
/// leaves the registry untouched.
///
/// ```
/// use baccore::networks::{NetworkKey, NetworkRegistry};
///
/// let registry = NetworkRegistry::default();
/// let livenet = registry.get(&NetworkKey::from("livenet")).unwrap();
/// assert_eq!(registry.get(&NetworkKey::from(0x0488ade4u32)), Some(livenet));
/// ```
pub struct NetworkRegistry {
    networks: Vec<Arc<Network>>,
    index: HashMap<NetworkKey, Arc<Network>>,
}

impl NetworkRegistry {
    /// an empty registry, without even the built-in networks.
    pub fn new() -> Self {
        NetworkRegistry {
            networks: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// register a network, indexing every scalar field value for
    /// reverse lookup.
    pub fn add(&mut self, network: Network) -> Result<Arc<Network>> {
        self.insert(Arc::new(network))
    }

    fn insert(&mut self, network: Arc<Network>) -> Result<Arc<Network>> {
        if network.name.is_empty() {
            return Err(Error::MissingName);
        }
        let keys: Vec<NetworkKey> = ALL_FIELDS
            .iter()
            .filter_map(|f| field_key(&network, *f))
            .collect();
        for key in keys.iter() {
            if self.index.contains_key(key) {
                return Err(Error::DuplicateKey(key.clone()));
            }
        }
        for key in keys {
            self.index.insert(key, network.clone());
        }
        self.networks.push(network.clone());
        debug!("registered network {}", network);
        Ok(network)
    }

    /// bind an extra reverse lookup key to an already registered
    /// network (e.g. an alternate port answering for the same entry).
    pub fn add_alias_key<K: Into<NetworkKey>>(&mut self, key: K, name: &str) -> Result<()> {
        let network = match self.get(&NetworkKey::from(name)) {
            None => return Err(Error::UnknownNetwork(name.to_string())),
            Some(n) => n,
        };
        let key = key.into();
        if self.index.contains_key(&key) {
            return Err(Error::DuplicateKey(key));
        }
        self.index.insert(key, network);
        Ok(())
    }

    /// direct reverse lookup table hit.
    pub fn get(&self, key: &NetworkKey) -> Option<Arc<Network>> {
        self.index.get(key).cloned()
    }

    /// scan the registered networks, in registration order, for the
    /// first whose named field(s) equal the key.
    pub fn get_by(&self, key: &NetworkKey, fields: &[NetworkField]) -> Option<Arc<Network>> {
        for network in self.networks.iter() {
            for field in fields.iter() {
                if field_key(network, *field).as_ref() == Some(key) {
                    return Some(network.clone());
                }
            }
        }
        None
    }

    /// unregister a network, purging every reverse lookup key that
    /// pointed to it. No effect if it was not registered.
    pub fn remove(&mut self, network: &Network) {
        self.networks.retain(|n| n.name != network.name);
        self.index.retain(|_, n| n.name != network.name);
        debug!("removed network {}", network);
    }

    /// the registered networks, in registration order.
    pub fn networks(&self) -> &[Arc<Network>] {
        &self.networks
    }
}

impl Default for NetworkRegistry {
    /// a registry populated with livenet and testnet, with the regtest
    /// port and magic answering for the testnet entry as well.
    fn default() -> Self {
        let mut registry = NetworkRegistry::new();
        registry
            .insert(livenet())
            .expect("empty registry accepts livenet");
        registry
            .insert(testnet())
            .expect("livenet and testnet keys are disjoint");
        registry
            .add_alias_key(18525u16, "testnet")
            .expect("regtest port is not indexed yet");
        registry
            .add_alias_key(0xfabfb5dau32, "testnet")
            .expect("regtest magic is not indexed yet");
        registry
    }
}
