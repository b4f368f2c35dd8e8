mod record;
mod record_type;

pub use record::DnsRecord;
pub use record_type::RecordType;
