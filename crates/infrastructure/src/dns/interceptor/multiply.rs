use ferrous_recursor_application::ports::QueryInterceptor;
use ferrous_recursor_domain::config::MultiplyConfig;
use ferrous_recursor_domain::{DnsQuery, DnsRecord};
use std::net::Ipv4Addr;

/// Answers any name containing the keyword with `127.0.0.<p>`, where `p` is
/// the product of the numeric labels in front of the keyword, modulo 256.
///
/// `2.3.7.multiply.example.` answers `127.0.0.42`. A name with no numeric
/// label answers `127.0.0.0`.
#[derive(Debug, Clone)]
pub struct MultiplyInterceptor {
    keyword: String,
    ttl: u32,
}

impl MultiplyInterceptor {
    pub fn new(keyword: impl Into<String>, ttl: u32) -> Self {
        Self {
            keyword: keyword.into().to_ascii_lowercase(),
            ttl,
        }
    }

    pub fn from_config(config: &MultiplyConfig) -> Self {
        Self::new(config.keyword.clone(), config.ttl)
    }

    pub fn matches(&self, domain: &str) -> bool {
        !self.keyword.is_empty() && domain.contains(&self.keyword)
    }

    /// Product of the all-digit labels before the first keyword occurrence.
    pub fn product_octet(&self, domain: &str) -> u8 {
        let prefix = domain
            .find(&self.keyword)
            .map_or(domain, |index| &domain[..index]);

        let mut product: Option<u32> = None;
        for label in prefix.split('.') {
            if let Some(value) = label_mod_256(label) {
                product = Some(product.map_or(value, |p| p * value % 256));
            }
        }

        product.unwrap_or(0) as u8
    }
}

/// Value of an all-digit label modulo 256, folding digit by digit so labels
/// longer than any integer type still work.
fn label_mod_256(label: &str) -> Option<u32> {
    if label.is_empty() || !label.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(
        label
            .bytes()
            .fold(0u32, |acc, digit| (acc * 10 + u32::from(digit - b'0')) % 256),
    )
}

impl QueryInterceptor for MultiplyInterceptor {
    fn name(&self) -> &'static str {
        "multiply"
    }

    fn intercept(&self, query: &DnsQuery) -> Option<Vec<DnsRecord>> {
        if !self.matches(&query.domain) {
            return None;
        }

        let octet = self.product_octet(&query.domain);
        Some(vec![DnsRecord::new(
            query.domain.to_string(),
            Ipv4Addr::new(127, 0, 0, octet),
            self.ttl,
        )])
    }
}
