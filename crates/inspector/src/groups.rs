//! Well-known multicast groups of the election and routing protocol suite.
//!
//! These are the destination groups the distributed protocols running on the
//! simulated modules actually use, provided here so hosts can assemble the
//! standard classification sets without hard-coding byte strings.

use modnet_types::Addr;
use std::net::Ipv6Addr;

/// Group the leader-election helper protocol announces on (`ff02::ee:da`).
pub fn election_helper_group() -> Addr {
    Addr::from(Ipv6Addr::new(0xff02, 0, 0, 0, 0, 0, 0x00ee, 0x00da))
}

/// Group the echo-based election protocols broadcast on (`ff02::ea:ea`).
pub fn echo_election_group() -> Addr {
    Addr::from(Ipv6Addr::new(0xff02, 0, 0, 0, 0, 0, 0x00ea, 0x00ea))
}

/// Per-module election address (`fc07:0:0:<module>::1`).
pub fn module_election_group(module: u16) -> Addr {
    Addr::from(Ipv6Addr::new(0xfc07, 0, 0, module, 0, 0, 0, 1))
}

/// Group the routing protocol exchanges updates on (`ff02::a:b:b:ae`).
pub fn routing_protocol_group() -> Addr {
    Addr::from(Ipv6Addr::new(0xff02, 0, 0, 0, 0x000a, 0x000b, 0x000b, 0x00ae))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textual_forms() {
        assert_eq!(election_helper_group().to_string(), "ff02::ee:da");
        assert_eq!(echo_election_group().to_string(), "ff02::ea:ea");
        assert_eq!(module_election_group(4).to_string(), "fc07:0:0:4::1");
        assert_eq!(routing_protocol_group().to_string(), "ff02::a:b:b:ae");
    }

    #[test]
    fn test_module_groups_distinct() {
        assert_ne!(module_election_group(1), module_election_group(2));
    }
}
