use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::VidcatError;
use crate::lister::DirectoryEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKey {
    Name,
    ModifiedTime,
}

impl FromStr for OrderKey {
    type Err = VidcatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "date_modified" => Ok(Self::ModifiedTime),
            other => Err(VidcatError::UnknownOrderKey(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Ascending,
    Descending,
}

impl OrderDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for OrderDirection {
    type Err = VidcatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(VidcatError::UnknownOrderDirection(other.to_string())),
        }
    }
}

/// Sort key plus direction used to order a directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderingSpec {
    pub key: OrderKey,
    pub direction: OrderDirection,
}

impl OrderingSpec {
    pub fn new(key: OrderKey, direction: OrderDirection) -> Self {
        Self { key, direction }
    }

    /// Parses the raw `--order-by` / `--order` values. The key is checked first.
    pub fn parse(order_by: &str, order: &str) -> Result<Self, VidcatError> {
        let key: OrderKey = order_by.parse()?;
        let direction: OrderDirection = order.parse()?;
        Ok(Self::new(key, direction))
    }

    pub fn compare(&self, a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
        let ordering = match self.key {
            OrderKey::Name => a.name.cmp(&b.name),
            OrderKey::ModifiedTime => a.modified_at.cmp(&b.modified_at),
        };
        self.direction.apply(ordering)
    }
}

impl Default for OrderingSpec {
    fn default() -> Self {
        Self::new(OrderKey::Name, OrderDirection::Ascending)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime};

    use super::{OrderDirection, OrderKey, OrderingSpec};
    use crate::error::VidcatError;
    use crate::lister::DirectoryEntry;

    fn entry(name: &str, secs: u64) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            path: PathBuf::from(name),
            modified_at: SystemTime::UNIX_EPOCH + Duration::from_secs(secs),
            is_directory: false,
        }
    }

    #[test]
    fn parses_known_values() {
        let spec = OrderingSpec::parse("date_modified", "desc").unwrap();
        assert_eq!(spec.key, OrderKey::ModifiedTime);
        assert_eq!(spec.direction, OrderDirection::Descending);
        assert_eq!(OrderingSpec::parse("name", "asc").unwrap(), OrderingSpec::default());
    }

    #[test]
    fn rejects_unknown_key() {
        let err = OrderingSpec::parse("size", "asc").unwrap_err();
        assert!(matches!(err, VidcatError::UnknownOrderKey(k) if k == "size"));
    }

    #[test]
    fn rejects_unknown_direction() {
        let err = OrderingSpec::parse("name", "up").unwrap_err();
        assert!(matches!(err, VidcatError::UnknownOrderDirection(d) if d == "up"));
    }

    #[test]
    fn descending_inverts_comparison() {
        let a = entry("a.mp4", 20);
        let b = entry("b.mp4", 10);

        let by_name = OrderingSpec::new(OrderKey::Name, OrderDirection::Descending);
        assert_eq!(by_name.compare(&a, &b), Ordering::Greater);

        let by_time = OrderingSpec::new(OrderKey::ModifiedTime, OrderDirection::Ascending);
        assert_eq!(by_time.compare(&a, &b), Ordering::Greater);
    }
}
