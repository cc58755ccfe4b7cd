//! Health response parsing and host classification.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for malformed health responses.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed health response: {0}")]
    Malformed(#[from] serde_json::Error),
}

// Not all fields included, only the ones we need.
#[derive(Debug, Deserialize)]
struct HealthEntry {
    #[serde(rename = "Node")]
    node: NodeInfo,
    #[serde(rename = "Service")]
    service: ServiceInfo,
    #[serde(rename = "Checks")]
    checks: Vec<CheckInfo>,
}

#[derive(Debug, Deserialize)]
struct NodeInfo {
    #[serde(rename = "Node")]
    name: String,
    #[serde(rename = "Address")]
    address: String,
}

#[derive(Debug, Deserialize)]
struct ServiceInfo {
    #[serde(rename = "Port")]
    port: u16,
}

#[derive(Debug, Deserialize)]
struct CheckInfo {
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "ServiceName")]
    service_name: String,
}

/// One instance of a watched service, rebuilt fresh on every poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Host {
    pub name: String,
    pub address: String,
    pub port: u16,
}

/// Partition of hosts by health-check status, in response order.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct HostSet {
    pub passing: Vec<Host>,
    pub failing: Vec<Host>,
}

/// Partition the nodes of a health response into passing and failing hosts.
///
/// A node fails iff at least one of its checks belongs to `service` and is
/// not `"passing"`. Checks for other services (including the node-level serf
/// check, whose service name is empty) never affect the verdict, so a node
/// with no matching checks passes by default.
pub fn classify(body: &[u8], service: &str) -> Result<HostSet, ParseError> {
    let entries: Vec<HealthEntry> = serde_json::from_slice(body)?;

    let mut hosts = HostSet::default();
    for entry in entries {
        let passing = entry
            .checks
            .iter()
            .all(|check| check.service_name != service || check.status == "passing");

        let host = Host {
            name: entry.node.name,
            address: entry.node.address,
            port: entry.service.port,
        };

        if passing {
            hosts.passing.push(host);
        } else {
            hosts.failing.push(host);
        }
    }

    Ok(hosts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, address: &str, port: u16, checks: &[(&str, &str)]) -> serde_json::Value {
        let checks: Vec<_> = checks
            .iter()
            .map(|(status, service)| {
                serde_json::json!({ "Status": status, "ServiceName": service })
            })
            .collect();

        serde_json::json!({
            "Node": { "Node": name, "Address": address },
            "Service": { "Port": port },
            "Checks": checks,
        })
    }

    fn classify_entries(entries: &[serde_json::Value], service: &str) -> HostSet {
        let body = serde_json::to_vec(entries).unwrap();
        classify(&body, service).unwrap()
    }

    #[test]
    fn all_matching_checks_passing_is_passing() {
        let hosts = classify_entries(
            &[entry("a", "10.0.0.1", 80, &[("passing", "web"), ("passing", "web")])],
            "web",
        );

        assert_eq!(hosts.passing.len(), 1);
        assert!(hosts.failing.is_empty());
    }

    #[test]
    fn one_failing_matching_check_is_failing() {
        let hosts = classify_entries(
            &[entry("a", "10.0.0.1", 80, &[("passing", "web"), ("critical", "web")])],
            "web",
        );

        assert!(hosts.passing.is_empty());
        assert_eq!(
            hosts.failing,
            vec![Host {
                name: "a".to_string(),
                address: "10.0.0.1".to_string(),
                port: 80,
            }]
        );
    }

    #[test]
    fn no_matching_checks_is_passing_by_default() {
        let hosts = classify_entries(
            &[entry("a", "10.0.0.1", 80, &[("critical", "db"), ("passing", "")])],
            "web",
        );

        assert_eq!(hosts.passing.len(), 1);
        assert!(hosts.failing.is_empty());
    }

    #[test]
    fn node_with_no_checks_is_passing() {
        let hosts = classify_entries(&[entry("a", "10.0.0.1", 80, &[])], "web");

        assert_eq!(hosts.passing.len(), 1);
    }

    #[test]
    fn response_order_is_preserved() {
        let hosts = classify_entries(
            &[
                entry("c", "10.0.0.3", 80, &[("passing", "web")]),
                entry("a", "10.0.0.1", 80, &[("critical", "web")]),
                entry("b", "10.0.0.2", 80, &[("passing", "web")]),
                entry("d", "10.0.0.4", 80, &[("warning", "web")]),
            ],
            "web",
        );

        let passing: Vec<_> = hosts.passing.iter().map(|h| h.name.as_str()).collect();
        let failing: Vec<_> = hosts.failing.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(passing, ["c", "b"]);
        assert_eq!(failing, ["a", "d"]);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let body = br#"[{
            "Node": { "Node": "a", "Address": "10.0.0.1", "Datacenter": "dc1", "TaggedAddresses": {} },
            "Service": { "ID": "web-1", "Service": "web", "Tags": [], "Port": 8080 },
            "Checks": [
                { "CheckID": "service:web-1", "Status": "passing", "ServiceName": "web", "Output": "HTTP 200" }
            ]
        }]"#;

        let hosts = classify(body, "web").unwrap();
        assert_eq!(hosts.passing[0].port, 8080);
    }

    #[test]
    fn missing_required_fields_are_a_parse_error() {
        let body = br#"[{ "Node": { "Node": "a" }, "Service": {}, "Checks": [] }]"#;

        assert!(classify(body, "web").is_err());
    }

    #[test]
    fn non_array_body_is_a_parse_error() {
        assert!(classify(b"{}", "web").is_err());
        assert!(classify(b"not json", "web").is_err());
    }
}
