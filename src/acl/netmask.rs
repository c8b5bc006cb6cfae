//! CIDR rules in bitmask form

use std::net::Ipv4Addr;

/// A source-address restriction parsed from `address[/prefix-length]`
/// notation.
///
/// The subnet and mask are kept as host-order `u32` values so a candidate
/// address is checked with a single mask-and-compare. A missing or zero
/// prefix length produces an empty mask, so a rule written as a bare IP
/// (or with an explicit `/0`) matches every address, not just the one
/// written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CidrRule {
    /// Whether the rule restricts by address at all. An unrestricted rule
    /// matches every candidate.
    pub restricted: bool,
    /// Network part of the rule, already masked.
    pub subnet: u32,
    /// Contiguous high-bit mask derived from the prefix length.
    pub mask: u32,
}

impl CidrRule {
    /// A rule with no address restriction.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Parse an `address[/prefix-length]` expression.
    ///
    /// The prefix length defaults to 0 when absent, non-numeric text after
    /// the `/` also parses to 0, and lengths of 32 or more saturate to a
    /// full mask. An address that is not a dotted quad leaves the rule
    /// unrestricted.
    pub fn parse(expression: &str) -> Self {
        let (address, bits) = match expression.split_once('/') {
            Some((address, tail)) => (address, tail.parse::<u32>().unwrap_or(0)),
            None => (expression, 0),
        };

        let mask = match bits {
            0 => 0,
            1..=31 => u32::MAX << (32 - bits),
            _ => u32::MAX,
        };

        match address.parse::<Ipv4Addr>() {
            Ok(ip) => Self {
                restricted: true,
                subnet: u32::from(ip) & mask,
                mask,
            },
            Err(_) => Self::unrestricted(),
        }
    }

    /// Check whether a candidate source address satisfies the rule.
    pub fn matches(&self, address: Ipv4Addr) -> bool {
        if !self.restricted {
            return true;
        }
        (u32::from(address) & self.mask) == (self.subnet & self.mask)
    }
}
