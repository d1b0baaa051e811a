//! Network interface inventory and alias-resolved interface detail.

use serde::{Deserialize, Serialize};

/// Role alias for the interface that receives the multicast source.
pub const SOURCE_IFACE_ALIAS: &str = "source_iface";

/// Role alias for the interface serving the local network.
pub const LOCAL_IFACE_ALIAS: &str = "local_iface";

/// Link state reported for an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceStatus {
    Up,
    Down,
    #[serde(other)]
    Unknown,
}

/// Physical adapter kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceKind {
    Ethernet,
    Wireless,
}

/// One entry of the interface inventory.
///
/// The physical-NIC attributes are only present when the backend
/// positively identified the interface as a hardware adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInterface {
    pub name: String,
    #[serde(default)]
    pub status: Option<InterfaceStatus>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub has_ip: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pic_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<InterfaceKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplex: Option<String>,
}

impl NetworkInterface {
    /// Whether the backend identified this as a physical adapter.
    pub fn is_physical(&self) -> bool {
        self.pic_id.is_some()
    }
}

/// Interface inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInterfacesResponse {
    pub interfaces: Vec<NetworkInterface>,
    /// Echoes the `physical` filter the backend applied.
    #[serde(default)]
    pub physical_only: bool,
}

/// Addressing detail for one resolved interface.
///
/// `has_ip == ip.is_some()` holds for everything the backend returns; the
/// client does not check it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInterfaceDetail {
    pub name: String,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(default)]
    pub has_ip: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<InterfaceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<InterfaceKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pic_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplex: Option<String>,
}

impl NetworkInterfaceDetail {
    /// The placeholder returned by the legacy single-interface view when the
    /// backend resolved nothing: `{name:"", ip:null, gateway:null, has_ip:false}`.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            ip: None,
            gateway: None,
            has_ip: false,
            status: None,
            mac_address: None,
            kind: None,
            pic_id: None,
            driver: None,
            speed: None,
            duplex: None,
        }
    }
}

/// Alias-resolved interface detail, in the order the backend resolved it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInterfacesDetailResponse {
    pub interfaces: Vec<NetworkInterfaceDetail>,
}

/// Narrow a multi-interface response to the legacy single-interface shape.
///
/// Returns the first resolved interface, or [`NetworkInterfaceDetail::empty`]
/// when the sequence is empty. Never fails.
pub fn first_interface_or_empty(
    response: NetworkInterfacesDetailResponse,
) -> NetworkInterfaceDetail {
    response
        .interfaces
        .into_iter()
        .next()
        .unwrap_or_else(NetworkInterfaceDetail::empty)
}

/// Composes interface tokens for the resolution endpoints.
///
/// Purely a convenience for building the string; the client forwards
/// whatever string it is handed and never parses one.
///
/// ```
/// use iptv_relay_client::InterfaceRef;
///
/// let token = InterfaceRef::join([InterfaceRef::source(), InterfaceRef::name("ens192")]);
/// assert_eq!(token, "source_iface,ens192");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceRef {
    /// Whatever interface holds the `source_iface` role.
    Source,
    /// Whatever interface holds the `local_iface` role.
    Local,
    /// A literal interface name.
    Name(String),
}

impl InterfaceRef {
    pub fn source() -> Self {
        Self::Source
    }

    pub fn local() -> Self {
        Self::Local
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// The token text for this single reference.
    pub fn as_token(&self) -> &str {
        match self {
            Self::Source => SOURCE_IFACE_ALIAS,
            Self::Local => LOCAL_IFACE_ALIAS,
            Self::Name(name) => name,
        }
    }

    /// Comma-join references in order. Duplicates are kept.
    pub fn join<I>(refs: I) -> String
    where
        I: IntoIterator<Item = InterfaceRef>,
    {
        refs.into_iter()
            .map(|r| r.as_token().to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl std::fmt::Display for InterfaceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_token())
    }
}
