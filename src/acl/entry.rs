//! ACL entries built from configuration document values

use super::netmask::CidrRule;
use crate::auth;
use serde_json::Value;
use std::net::Ipv4Addr;

/// One entry of the gateway's access-control chain.
#[derive(Debug, Clone, Default)]
pub struct AclEntry {
    /// Source-address restriction; unrestricted when the entry carries no
    /// `ip` field.
    pub cidr: CidrRule,
    /// Pre-encoded `Authorization: Basic` value. Stored for the HTTP layer
    /// to compare against the request header; never consulted by
    /// [`matches`](Self::matches).
    pub basic_auth: Option<String>,
    /// Commands this entry allows.
    pub enabled_commands: Vec<String>,
    /// Commands this entry forbids.
    pub disabled_commands: Vec<String>,
}

impl AclEntry {
    /// Build one entry from an element of the `acl` array.
    ///
    /// All four fields are optional and a field of the wrong kind is
    /// treated as absent. Anything other than an object yields the default
    /// entry, which matches every address and names no commands.
    pub fn from_value(value: &Value) -> Self {
        let mut entry = Self::default();

        if let Some(Value::String(expression)) = value.get("ip") {
            entry.cidr = CidrRule::parse(expression);
        }

        if let Some(Value::String(plain)) = value.get("http_basic_auth") {
            entry.basic_auth = Some(auth::encode_basic_credential(plain));
        }

        if let Some(Value::Array(items)) = value.get("enabled") {
            entry.enabled_commands = command_names(items);
        }

        if let Some(Value::Array(items)) = value.get("disabled") {
            entry.disabled_commands = command_names(items);
        }

        entry
    }

    /// Check whether a client at `address` falls under this entry.
    pub fn matches(&self, address: Ipv4Addr) -> bool {
        self.cidr.matches(address)
    }
}

/// Build the ordered ACL chain from the `acl` array of a configuration
/// document. The first declared entry is the first element of the result.
pub fn parse_entries(values: &[Value]) -> Vec<AclEntry> {
    values.iter().map(AclEntry::from_value).collect()
}

/// Copy the text of every string element of a command list, in order,
/// skipping elements of any other kind.
fn command_names(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_entry() {
        let value = json!({
            "ip": "10.0.0.0/24",
            "http_basic_auth": "user:pass",
            "enabled": ["GET", "SET"],
            "disabled": ["FLUSHALL"]
        });

        let entry = AclEntry::from_value(&value);
        assert!(entry.cidr.restricted);
        assert_eq!(entry.basic_auth.as_deref(), Some("dXNlcjpwYXNz"));
        assert_eq!(entry.enabled_commands, vec!["GET", "SET"]);
        assert_eq!(entry.disabled_commands, vec!["FLUSHALL"]);
        assert!(entry.matches(Ipv4Addr::new(10, 0, 0, 5)));
        assert!(!entry.matches(Ipv4Addr::new(10, 0, 1, 5)));
    }

    #[test]
    fn test_empty_object_matches_everything() {
        let entry = AclEntry::from_value(&json!({}));
        assert!(!entry.cidr.restricted);
        assert!(entry.basic_auth.is_none());
        assert!(entry.enabled_commands.is_empty());
        assert!(entry.disabled_commands.is_empty());
        assert!(entry.matches(Ipv4Addr::new(192, 0, 2, 1)));
    }

    #[test]
    fn test_wrong_kind_fields_are_ignored() {
        let value = json!({
            "ip": 42,
            "http_basic_auth": ["not", "a", "string"],
            "enabled": "GET",
            "disabled": {"FLUSHALL": true}
        });

        let entry = AclEntry::from_value(&value);
        assert!(!entry.cidr.restricted);
        assert!(entry.basic_auth.is_none());
        assert!(entry.enabled_commands.is_empty());
        assert!(entry.disabled_commands.is_empty());
    }

    #[test]
    fn test_command_list_skips_non_strings() {
        let value = json!({"enabled": ["GET", 3, "SET", null, "DEL"]});
        let entry = AclEntry::from_value(&value);
        assert_eq!(entry.enabled_commands, vec!["GET", "SET", "DEL"]);
    }

    #[test]
    fn test_chain_preserves_declaration_order() {
        let values = vec![
            json!({"ip": "10.0.0.0/8"}),
            json!({"ip": "172.16.0.0/12"}),
            json!({"ip": "192.168.0.0/16"}),
        ];

        let entries = parse_entries(&values);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].cidr.subnet, u32::from(Ipv4Addr::new(10, 0, 0, 0)));
        assert_eq!(entries[1].cidr.subnet, u32::from(Ipv4Addr::new(172, 16, 0, 0)));
        assert_eq!(entries[2].cidr.subnet, u32::from(Ipv4Addr::new(192, 168, 0, 0)));
    }

    #[test]
    fn test_non_object_element_builds_default_entry() {
        let entries = parse_entries(&[json!("junk"), json!({"ip": "127.0.0.1/32"})]);
        assert_eq!(entries.len(), 2);
        assert!(!entries[0].cidr.restricted);
        assert!(entries[1].cidr.restricted);
    }

    #[test]
    fn test_empty_array_builds_empty_chain() {
        assert!(parse_entries(&[]).is_empty());
    }
}
