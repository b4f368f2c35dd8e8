use std::net::Ipv4Addr;

/// IPv4 addresses of the root servers, in the order they are tried.
pub const ROOT_HINTS: [Ipv4Addr; 13] = [
    Ipv4Addr::new(199, 9, 14, 201),
    Ipv4Addr::new(198, 41, 0, 4),
    Ipv4Addr::new(192, 33, 4, 12),
    Ipv4Addr::new(199, 7, 91, 13),
    Ipv4Addr::new(192, 203, 230, 10),
    Ipv4Addr::new(192, 5, 5, 241),
    Ipv4Addr::new(192, 112, 36, 4),
    Ipv4Addr::new(198, 97, 190, 53),
    Ipv4Addr::new(192, 36, 148, 17),
    Ipv4Addr::new(192, 58, 128, 30),
    Ipv4Addr::new(193, 0, 14, 129),
    Ipv4Addr::new(199, 7, 83, 42),
    Ipv4Addr::new(202, 12, 27, 33),
];

/// Built-in hints unless `overrides` names at least one address.
pub fn effective_root_hints(overrides: &[Ipv4Addr]) -> Vec<Ipv4Addr> {
    if overrides.is_empty() {
        ROOT_HINTS.to_vec()
    } else {
        overrides.to_vec()
    }
}
