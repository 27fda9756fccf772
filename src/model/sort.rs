use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Error;
use crate::model::election::Election;

/// The field a listing of elections is ordered by.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SortBy {
    Name,
    #[default]
    CommencedAt,
    ElectionId,
    OrganizerUserId,
}

impl SortBy {
    /// Compare two elections on this field alone.
    pub fn compare(self, a: &Election, b: &Election) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::CommencedAt => a.commenced_at.cmp(&b.commenced_at),
            Self::ElectionId => a.election_id.cmp(&b.election_id),
            Self::OrganizerUserId => a.organizer_user_id.cmp(&b.organizer_user_id),
        }
    }
}

impl FromStr for SortBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Name" => Ok(Self::Name),
            "CommencedAt" => Ok(Self::CommencedAt),
            "ElectionId" | "ElectionID" => Ok(Self::ElectionId),
            "OrganizerUserId" | "OrganizerUserID" => Ok(Self::OrganizerUserId),
            _ => Err(Error::invalid_argument(format!("unknown sort_by '{s}'"))),
        }
    }
}

impl Display for SortBy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Name => "Name",
            Self::CommencedAt => "CommencedAt",
            Self::ElectionId => "ElectionId",
            Self::OrganizerUserId => "OrganizerUserId",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Orient an ascending comparison in this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(Self::Ascending),
            "descending" => Ok(Self::Descending),
            _ => Err(Error::invalid_argument(format!(
                "unknown sort_direction '{s}'"
            ))),
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sort_keys() {
        assert_eq!("Name".parse::<SortBy>(), Ok(SortBy::Name));
        assert_eq!("CommencedAt".parse::<SortBy>(), Ok(SortBy::CommencedAt));
        assert_eq!("ElectionID".parse::<SortBy>(), Ok(SortBy::ElectionId));
        assert_eq!("OrganizerUserId".parse::<SortBy>(), Ok(SortBy::OrganizerUserId));
        for bad in ["", "name", "Description", "IsClosed"] {
            assert!(matches!(
                bad.parse::<SortBy>(),
                Err(Error::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn parse_directions() {
        assert_eq!("ascending".parse::<SortDirection>(), Ok(SortDirection::Ascending));
        assert_eq!("descending".parse::<SortDirection>(), Ok(SortDirection::Descending));
        assert!(matches!(
            "asc".parse::<SortDirection>(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn descending_reverses() {
        assert_eq!(SortDirection::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Descending.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(SortDirection::Ascending.apply(Ordering::Less), Ordering::Less);
    }
}
